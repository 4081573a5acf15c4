use std::fs::File;
use std::io;

use aerodom::{find_duplicate_id, to_html_pretty, write_io, Element, RenderError};
use simplelog::{Config, LevelFilter, WriteLogger};

fn page() -> Element {
    Element::div()
        .class("window")
        .id("notepad")
        .style("width", "320px")
        .child(
            Element::div()
                .class("title-bar")
                .child(Element::div().class("title-bar-text").inner_text("Untitled - Notepad"))
                .child(
                    Element::div()
                        .class("title-bar-controls")
                        .child(Element::button().aria("label", "Close")),
                ),
        )
        .child(
            Element::div()
                .class("window-body")
                .class("has-space")
                .child(Element::label().attr("for", "wrap").inner_text("Word wrap"))
                .child(Element::input("checkbox").id("wrap").flag("checked", true))
                .child(Element::p().inner_text("Fish & chips <cheap>")),
        )
}

fn main() -> Result<(), RenderError> {
    // Set up file logging
    let log_file = File::create("markup.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let root = page();
    if let Some(id) = find_duplicate_id(&root) {
        log::warn!("duplicate id {id}");
    }

    println!("{}", to_html_pretty(&root, 2));
    write_io(&root, &mut io::stdout(), None)?;
    println!();
    Ok(())
}
