//! Balloon widget - a tooltip bubble.

use aerodom::Element;

use super::Passthrough;

/// Corner the balloon's tail points from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BalloonPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl BalloonPosition {
    pub fn classes(self) -> [&'static str; 2] {
        match self {
            Self::TopLeft => ["is-top", "is-left"],
            Self::TopRight => ["is-top", "is-right"],
            Self::BottomLeft => ["is-bottom", "is-left"],
            Self::BottomRight => ["is-bottom", "is-right"],
        }
    }
}

/// `<div role="tooltip">` with position classes.
#[derive(Clone, Debug)]
pub struct Balloon {
    position: BalloonPosition,
    visible: bool,
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl Default for Balloon {
    fn default() -> Self {
        Self::new()
    }
}

impl Balloon {
    pub fn new() -> Self {
        Self {
            position: BalloonPosition::default(),
            visible: true,
            children: Vec::new(),
            passthrough: Passthrough::default(),
        }
    }

    pub fn position(mut self, position: BalloonPosition) -> Self {
        self.position = position;
        self
    }

    /// Hidden balloons keep their markup and get the `hidden` class.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Element::text(text));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    passthrough_methods!();

    pub fn build(self) -> Element {
        let [vertical, horizontal] = self.position.classes();
        let balloon = Element::div()
            .role("tooltip")
            .class_if(!self.visible, "hidden")
            .class(vertical)
            .class(horizontal)
            .children(self.children);
        self.passthrough.apply(balloon)
    }
}
