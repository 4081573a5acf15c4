//! HTML serialization of element trees.

mod escape;
mod render;

use std::io;

pub use escape::{escape_attr, escape_text};
use render::HtmlWriter;

use crate::element::Element;
use crate::error::RenderError;

/// Serialize an element tree to compact HTML.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = HtmlWriter::new(&mut out, None).element(root, 0);
    out
}

/// Serialize an element tree with one element per line, indented by
/// `indent` spaces per level.
pub fn to_html_pretty(root: &Element, indent: usize) -> String {
    let mut out = String::new();
    let _ = HtmlWriter::new(&mut out, Some(indent)).element(root, 0);
    out
}

/// Serialize into any `fmt::Write` sink.
pub fn write_html<W: std::fmt::Write>(
    root: &Element,
    out: &mut W,
    indent: Option<usize>,
) -> Result<(), RenderError> {
    HtmlWriter::new(out, indent).element(root, 0)?;
    Ok(())
}

/// Serialize into an `io::Write` sink (file, socket, stdout).
pub fn write_io<W: io::Write>(
    root: &Element,
    out: &mut W,
    indent: Option<usize>,
) -> Result<(), RenderError> {
    let mut buf = String::new();
    write_html(root, &mut buf, indent)?;
    out.write_all(buf.as_bytes())?;
    log::debug!("[render] wrote {} bytes of html", buf.len());
    Ok(())
}

/// Whether `tag` is a void element (no content, no closing tag).
pub fn is_void_tag(tag: &str) -> bool {
    render::is_void(tag)
}

/// Serialize only the children of `root`, concatenated.
pub fn inner_html(root: &Element) -> String {
    let mut out = String::new();
    for child in root.child_elements() {
        out.push_str(&to_html(child));
    }
    out
}
