//! Spinner widget.

use aerodom::Element;

use super::Passthrough;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerVariant {
    #[default]
    Spinner,
    Loader,
    LoaderAnimate,
}

impl SpinnerVariant {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Spinner => "spinner",
            Self::Loader => "loader",
            Self::LoaderAnimate => "loader animate",
        }
    }
}

/// A busy indicator: `<span>` labelled for assistive technology.
#[derive(Clone, Debug)]
pub struct Spinner {
    variant: SpinnerVariant,
    aria_label: String,
    passthrough: Passthrough,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            variant: SpinnerVariant::default(),
            aria_label: "Loading".to_string(),
            passthrough: Passthrough::default(),
        }
    }

    pub fn variant(mut self, variant: SpinnerVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = label.into();
        self
    }

    passthrough_methods!();

    pub fn build(self) -> Element {
        let spinner = Element::span()
            .class_list(self.variant.classes())
            .aria("label", self.aria_label);
        self.passthrough.apply(spinner)
    }
}
