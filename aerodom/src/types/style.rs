/// Inline style declarations, kept in insertion order.
///
/// All visual presentation lives in the external stylesheet; inline style is
/// only used for per-instance values such as column widths, text alignment or
/// CSS custom property overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a declaration, replacing an earlier value for the same property.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        if let Some(slot) = self.declarations.iter_mut().find(|(p, _)| *p == property) {
            slot.1 = value;
        } else {
            self.declarations.push((property, value));
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, property: &str) {
        self.declarations.retain(|(p, _)| p != property);
    }

    /// Append every declaration of `other`, later values win.
    pub fn extend(&mut self, other: Style) {
        for (property, value) in other.declarations {
            self.set(property, value);
        }
    }

    /// Merge a raw `prop: value; prop: value` string.
    pub fn merge_inline(&mut self, inline: &str) {
        for declaration in inline.split(';') {
            if let Some((property, value)) = declaration.split_once(':') {
                let property = property.trim();
                let value = value.trim();
                if !property.is_empty() && !value.is_empty() {
                    self.set(property, value);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Serialize as the value of a `style` attribute.
    pub fn to_inline(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
