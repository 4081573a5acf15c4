use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{AttrValue, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Generate a process-unique element id with the given prefix.
pub fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tag used for bare text nodes.
pub const TEXT_NODE: &str = "";

/// A node in the markup tree.
///
/// An element with an empty tag ([`TEXT_NODE`]) is a bare text node: the
/// serializer writes its escaped text and nothing else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    // Identity
    pub tag: &'static str,
    pub id: Option<String>,

    // Presentation hooks for the external stylesheet
    pub classes: Vec<String>,
    pub style: Style,

    // Attributes in insertion order (ARIA, native, pass-through)
    pub attributes: Vec<(String, AttrValue)>,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    /// Create a bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: TEXT_NODE,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn p() -> Self {
        Self::new("p")
    }

    pub fn ul() -> Self {
        Self::new("ul")
    }

    pub fn li() -> Self {
        Self::new("li")
    }

    pub fn a() -> Self {
        Self::new("a")
    }

    pub fn img() -> Self {
        Self::new("img")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn label() -> Self {
        Self::new("label")
    }

    /// Create an `<input type="...">` element.
    pub fn input(input_type: &str) -> Self {
        Self::new("input").attr("type", input_type)
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    pub fn option() -> Self {
        Self::new("option")
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn details() -> Self {
        Self::new("details")
    }

    pub fn summary() -> Self {
        Self::new("summary")
    }

    pub fn fieldset() -> Self {
        Self::new("fieldset")
    }

    pub fn legend() -> Self {
        Self::new("legend")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn is_text_node(&self) -> bool {
        self.tag == TEXT_NODE
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add the class only when `condition` holds.
    pub fn class_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    /// Add a whitespace separated list of classes (e.g. a caller's `className`).
    pub fn class_list(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self = self.class(class);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The class attribute value as it will be serialized.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    // Attributes

    /// Set an attribute, replacing any previous value with the same name.
    ///
    /// `id` is stored as the element id.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if name == "id" {
            self.id = Some(value.into());
        } else {
            self.set_attr(name, AttrValue::Text(value.into()));
        }
        self
    }

    /// Set an attribute only when a value is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a boolean attribute (`disabled`, `open`, `checked`, ...).
    ///
    /// `false` removes the attribute, matching how HTML treats boolean
    /// attributes.
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        let name = name.into();
        if on {
            self.set_attr(name, AttrValue::Flag);
        } else {
            self.attributes.retain(|(n, _)| *n != name);
        }
        self
    }

    /// Set an `aria-*` attribute.
    pub fn aria(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("aria-{name}"), value)
    }

    /// Set an `aria-*` attribute to `"true"` or `"false"`.
    pub fn aria_bool(self, name: &str, value: bool) -> Self {
        self.aria(name, if value { "true" } else { "false" })
    }

    /// Set the `role` attribute.
    pub fn role(self, role: &str) -> Self {
        self.attr("role", role)
    }

    /// Merge pass-through attributes. `class` and `style` entries are merged
    /// into the class list and inline style instead of replacing them.
    pub fn attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attrs {
            let name = name.into();
            let value = value.into();
            match name.as_str() {
                "class" | "className" => self = self.class_list(&value),
                "style" => self.style.merge_inline(&value),
                "id" => self.id = Some(value),
                _ => self.set_attr(name, AttrValue::Text(value)),
            }
        }
        self
    }

    fn set_attr(&mut self, name: String, value: AttrValue) {
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find_map(|(n, v)| match v {
            AttrValue::Text(text) if n == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|(n, v)| n == name && matches!(v, AttrValue::Flag))
    }

    // Inline style

    /// Set one inline style declaration (`width`, `text-align`, `--w7-w-bg`, ...).
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    pub fn style_opt(self, property: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.style(property, value),
            None => self,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style.extend(style);
        self
    }

    // Content

    /// Replace the content with escaped text.
    pub fn inner_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(text) => {
                // Keep existing text as the first text node
                let text = Element::text(std::mem::take(text));
                self.content = Content::Children(vec![text, child]);
            }
        }
        self
    }

    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self = self.child(child);
        }
        self
    }

    /// Child elements (empty for text content).
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
