use std::fmt::{self, Write};

use super::escape::{escape_attr, escape_text};
use crate::element::{Content, Element};
use crate::types::AttrValue;

/// Elements that never have content or a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub(super) fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Streams an element tree as HTML into any `fmt::Write`.
pub(super) struct HtmlWriter<'w, W: Write> {
    out: &'w mut W,
    indent: Option<usize>,
}

impl<'w, W: Write> HtmlWriter<'w, W> {
    pub(super) fn new(out: &'w mut W, indent: Option<usize>) -> Self {
        Self { out, indent }
    }

    pub(super) fn element(&mut self, element: &Element, depth: usize) -> fmt::Result {
        if element.is_text_node() {
            if let Content::Text(text) = &element.content {
                self.out.write_str(&escape_text(text))?;
            }
            return Ok(());
        }

        self.open_tag(element)?;
        if is_void(element.tag) {
            return Ok(());
        }

        match &element.content {
            Content::None => {}
            Content::Text(text) => self.out.write_str(&escape_text(text))?,
            Content::Children(children) => {
                // Pretty output only breaks lines between element children; text
                // next to elements stays inline so whitespace is not invented.
                let block = self.indent.is_some() && children.iter().all(|c| !c.is_text_node());
                for child in children {
                    if block {
                        self.newline(depth + 1)?;
                    }
                    self.element(child, depth + 1)?;
                }
                if block && !children.is_empty() {
                    self.newline(depth)?;
                }
            }
        }

        write!(self.out, "</{}>", element.tag)
    }

    fn open_tag(&mut self, element: &Element) -> fmt::Result {
        write!(self.out, "<{}", element.tag)?;
        if let Some(id) = &element.id {
            write!(self.out, " id=\"{}\"", escape_attr(id))?;
        }
        if !element.classes.is_empty() {
            write!(self.out, " class=\"{}\"", escape_attr(&element.class_name()))?;
        }
        for (name, value) in &element.attributes {
            match value {
                AttrValue::Text(text) => write!(self.out, " {}=\"{}\"", name, escape_attr(text))?,
                AttrValue::Flag => write!(self.out, " {}", name)?,
            }
        }
        if !element.style.is_empty() {
            write!(self.out, " style=\"{}\"", escape_attr(&element.style.to_inline()))?;
        }
        self.out.write_char('>')
    }

    fn newline(&mut self, depth: usize) -> fmt::Result {
        if let Some(width) = self.indent {
            self.out.write_char('\n')?;
            for _ in 0..depth * width {
                self.out.write_char(' ')?;
            }
        }
        Ok(())
    }
}
