//! Page rendering configuration.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How [`Document`](crate::document::Document) writes a component tree out.
///
/// # Example
///
/// ```ignore
/// let config = RenderConfig::new("Settings").stylesheet("/static/7.css").pretty(2);
///
/// let config = RenderConfig::from_json(r#"{ "title": "Settings", "indent": 2 }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Stylesheet href written into the page head.
    pub stylesheet: String,

    /// Page title.
    pub title: String,

    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,

    /// Emit a full document (doctype, head, body). When false only the
    /// component markup is written.
    pub full_document: bool,

    /// Spaces per nesting level. None writes compact markup.
    pub indent: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            stylesheet: "7.css".into(),
            title: String::new(),
            lang: "en".into(),
            full_document: true,
            indent: None,
        }
    }
}

impl RenderConfig {
    /// Create a new config with the given page title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Serialize the config to JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the stylesheet href.
    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = href.into();
        self
    }

    /// Set the `lang` attribute.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Write only the component markup, without a page around it.
    pub fn fragment(mut self) -> Self {
        self.full_document = false;
        self
    }

    /// Pretty-print with `indent` spaces per level.
    pub fn pretty(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }
}
