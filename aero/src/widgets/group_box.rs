//! Group box widget.

use aerodom::Element;

use super::Passthrough;

/// A titled frame around related controls: `<fieldset>` with a `<legend>`.
#[derive(Clone, Debug, Default)]
pub struct GroupBox {
    title: String,
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl GroupBox {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    passthrough_methods!();

    pub fn build(self) -> Element {
        let fieldset = Element::fieldset()
            .child(Element::legend().inner_text(self.title))
            .children(self.children);
        self.passthrough.apply(fieldset)
    }
}
