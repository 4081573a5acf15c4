//! Slider widget - a range input with optional labels.

use aerodom::Element;

use super::{Passthrough, derive_id};
use crate::handler_context::events;
use crate::{HandlerRegistry, WidgetHandlers};

/// A range slider.
///
/// The id is `slider-<label>` unless set explicitly. Input events are
/// forwarded to `on_change`. Pass-through classes and attributes land on the
/// `<input>`; the wrapper is a flex row (a column when vertical).
#[derive(Clone, Debug)]
pub struct Slider {
    id: Option<String>,
    label: Option<String>,
    low_label: Option<String>,
    high_label: Option<String>,
    box_indicator: bool,
    vertical: bool,
    gap: f64,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
    value: Option<f64>,
    disabled: bool,
    passthrough: Passthrough,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Slider {
    pub fn new() -> Self {
        Self {
            id: None,
            label: None,
            low_label: None,
            high_label: None,
            box_indicator: false,
            vertical: false,
            gap: 0.5,
            min: None,
            max: None,
            step: None,
            value: None,
            disabled: false,
            passthrough: Passthrough::default(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Text at the low end.
    pub fn low_label(mut self, label: impl Into<String>) -> Self {
        self.low_label = Some(label.into());
        self
    }

    /// Text at the high end.
    pub fn high_label(mut self, label: impl Into<String>) -> Self {
        self.high_label = Some(label.into());
        self
    }

    /// Square thumb instead of the pointed one.
    pub fn box_indicator(mut self, on: bool) -> Self {
        self.box_indicator = on;
        self
    }

    pub fn vertical(mut self, on: bool) -> Self {
        self.vertical = on;
        self
    }

    /// Space between labels and track, in rem.
    pub fn gap(mut self, rem: f64) -> Self {
        self.gap = rem;
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    passthrough_methods!();

    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let id = self
            .id
            .unwrap_or_else(|| derive_id("slider", self.label.as_deref()));

        if !self.disabled
            && let Some(handler) = handlers.get("on_change")
        {
            registry.register(&id, events::INPUT, handler.clone());
        }

        let input = Element::input("range")
            .id(&id)
            .class_if(self.box_indicator, "has-box-indicator")
            .class_if(self.vertical, "is-vertical")
            .attr_opt("min", self.min.map(|v| v.to_string()))
            .attr_opt("max", self.max.map(|v| v.to_string()))
            .attr_opt("step", self.step.map(|v| v.to_string()))
            .attr_opt("value", self.value.map(|v| v.to_string()))
            .flag("disabled", self.disabled);
        let input = self.passthrough.apply(input);

        let plain_label = |text: Option<String>| text.map(|t| Element::label().inner_text(t));

        let mut container = Element::div()
            .style("display", "flex")
            .style("align-items", "center")
            .style("gap", format!("{}rem", self.gap));
        if self.vertical {
            container = container.style("flex-direction", "column");
        }

        container
            .child_opt(
                self.label
                    .map(|l| Element::label().attr("for", id.as_str()).inner_text(l)),
            )
            .child_opt(plain_label(self.low_label))
            .child(input)
            .child_opt(plain_label(self.high_label))
    }
}
