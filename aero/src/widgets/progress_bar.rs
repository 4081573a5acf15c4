//! Progress bar widget.

use aerodom::Element;

use super::Passthrough;

/// Color of the progress fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressVariant {
    #[default]
    Default,
    Paused,
    Error,
}

impl ProgressVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Paused => "paused",
            Self::Error => "error",
        }
    }
}

/// A progress bar, either determinate (`value` percent) or a marquee.
#[derive(Clone, Debug)]
pub struct ProgressBar {
    value: Option<f64>,
    marquee: bool,
    animate: bool,
    variant: ProgressVariant,
    passthrough: Passthrough,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            value: None,
            marquee: false,
            animate: true,
            variant: ProgressVariant::default(),
            passthrough: Passthrough::default(),
        }
    }

    /// Percent complete, clamped to 0..=100.
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value.clamp(0.0, 100.0));
        self
    }

    /// Indeterminate progress. Hides the value.
    pub fn marquee(mut self, marquee: bool) -> Self {
        self.marquee = marquee;
        self
    }

    /// Shimmer animation (on by default).
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn variant(mut self, variant: ProgressVariant) -> Self {
        self.variant = variant;
        self
    }

    passthrough_methods!();

    pub fn build(self) -> Element {
        let bar = Element::div()
            .role("progressbar")
            .class_if(self.marquee, "marquee")
            .class_if(self.animate, "animate")
            .class(self.variant.as_str());

        let bar = if self.marquee {
            bar
        } else {
            let width = self.value.unwrap_or(0.0);
            bar.attr_opt("aria-valuenow", self.value.map(|v| v.to_string()))
                .child(Element::div().style("width", format!("{}%", width)))
        };

        self.passthrough.apply(bar)
    }
}
