//! Wrap component markup into a page.

use std::io;

use aerodom::Element;

use crate::config::RenderConfig;
use crate::error::{Error, check_ids};

const DOCTYPE: &str = "<!DOCTYPE html>";

/// A page made of component trees.
#[derive(Debug, Clone, Default)]
pub struct Document {
    config: RenderConfig,
    body: Vec<Element>,
}

impl Document {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            body: Vec::new(),
        }
    }

    /// Append a component tree to the body.
    pub fn child(mut self, element: Element) -> Self {
        self.body.push(element);
        self
    }

    pub fn children(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.body.extend(elements);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The `<html>` element, or a `<div>` holding the body for fragments.
    pub fn to_element(&self) -> Element {
        if !self.config.full_document {
            return Element::div().children(self.body.iter().cloned());
        }

        let mut head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", self.config.stylesheet.as_str()),
            );
        if !self.config.title.is_empty() {
            head = head.child(Element::new("title").inner_text(self.config.title.as_str()));
        }

        Element::new("html")
            .attr("lang", self.config.lang.as_str())
            .child(head)
            .child(Element::new("body").children(self.body.iter().cloned()))
    }

    /// Render the page to a string.
    pub fn render(&self) -> Result<String, Error> {
        let mut out = String::new();
        if self.config.full_document {
            out.push_str(DOCTYPE);
            out.push('\n');
            aerodom::write_html(&self.to_element(), &mut out, self.config.indent)?;
        } else {
            for element in &self.body {
                aerodom::write_html(element, &mut out, self.config.indent)?;
                if self.config.indent.is_some() {
                    out.push('\n');
                }
            }
        }
        log::debug!("[Document::render] {} bytes", out.len());
        Ok(out)
    }

    /// Render after checking that every id in the page is unique.
    pub fn render_checked(&self) -> Result<String, Error> {
        check_ids(&Element::div().children(self.body.iter().cloned()))?;
        self.render()
    }

    /// Render the page into any `io::Write`.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> Result<(), Error> {
        let html = self.render()?;
        out.write_all(html.as_bytes())?;
        Ok(())
    }
}
