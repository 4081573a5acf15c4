//! Renders a page of components to `gallery.html` and replays events typed
//! on stdin, one per line:
//!
//! ```text
//! click sites-option-1 ctrl
//! input fruits-input ap
//! key props-menu-item-1 ArrowRight
//! enter props-menu-item-1
//! ```

use std::fs::File;
use std::io::{self, BufRead};
use std::sync::Arc;

use aero::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Default)]
struct Gallery {
    sites: State<ListBoxState>,
    fruits: State<ComboBoxState>,
    wrap: State<Controlled<bool>>,
    tabs: State<Controlled<String>>,
    folders: State<Disclosure<String>>,
    menu: State<MenuState>,
    files: State<ListViewState>,
}

impl Gallery {
    fn page(&self, registry: &HandlerRegistry) -> Element {
        let mut handlers = WidgetHandlers::new();
        handlers.insert(
            "on_change",
            Arc::new(|hx: &HandlerContext| log::info!("change on {}: {:?}", hx.target(), hx.event())),
        );
        handlers.insert(
            "on_selection_change",
            Arc::new(|hx: &HandlerContext| log::info!("rows: {:?}", hx.event().selection())),
        );
        handlers.insert(
            "on_sort",
            Arc::new(|hx: &HandlerContext| log::info!("sort: {:?}", hx.event().sort())),
        );

        let sites = ListBox::new()
            .id("sites")
            .items(["Facebook", "Amazon", "Apple"])
            .multiple(true)
            .default_value(["Apple"])
            .state(&self.sites)
            .build(registry, &handlers);

        let fruits = ComboBox::new("fruits")
            .options(["Apple", "Apricot", "Banana", "Cherry"])
            .placeholder("Pick a fruit")
            .state(&self.fruits)
            .build(registry, &handlers);

        let wrap = Checkbox::new()
            .label("Word wrap")
            .default_checked(true)
            .state(&self.wrap)
            .build(registry, &handlers);

        let tree = TreeView::new()
            .id("folders")
            .items(vec![
                TreeNode::new("Documents")
                    .expanded()
                    .child(TreeNode::new("Work").child(TreeNode::new("report.doc")))
                    .child(TreeNode::new("notes.txt")),
                TreeNode::new("Pictures").child(TreeNode::new("cat.png")),
            ])
            .connectors(true)
            .state(&self.folders)
            .build(registry, &handlers);

        let files = ListView::new()
            .id("files")
            .rows(vec![
                Record::new().field("id", "a").field("name", "notes.txt").field("size", 4i64),
                Record::new().field("id", "b").field("name", "cat.png").field("size", 812i64),
                Record::new().field("id", "c").field("name", "report.doc").field("size", 96i64),
            ])
            .column(Column::new("name", "Name").sortable().width_px(160))
            .column(Column::new("size", "Size (KB)").sortable().align(ColumnAlign::Right))
            .multi_select(true)
            .state(&self.files)
            .build(registry, &handlers);

        let menu = Menu::new()
            .id("props-menu")
            .can_hover(true)
            .items(vec![
                MenuItem::link("Open").href("#open"),
                MenuItem::submenu(
                    "View",
                    vec![
                        MenuItem::radio("view", "list", "List"),
                        MenuItem::radio("view", "details", "Details"),
                    ],
                ),
                MenuItem::checkbox("Status bar").default_checked(true),
            ])
            .state(&self.menu)
            .build(registry, &handlers);

        let tabs = Tabs::new()
            .tabs(vec![
                Tab::new("general", "General", Element::div().children([sites, fruits, wrap])),
                Tab::new("folders", "Folders", Element::div().children([tree, files])),
                Tab::new("menu", "Menu", menu),
            ])
            .state(&self.tabs)
            .build(registry, &handlers);

        Window::new("Gallery")
            .id("gallery")
            .show_help(true)
            .status_bar(["Ready"])
            .child(GroupBox::new("Components").child(tabs).build())
            .child(ProgressBar::new().value(60.0).build())
            .build(registry, &handlers)
    }
}

fn parse_event(line: &str) -> Option<Event> {
    let mut parts = line.split_whitespace();
    let kind = parts.next()?;
    let target = parts.next()?;
    let rest: Vec<&str> = parts.collect();

    let event = match kind {
        "click" => {
            let modifiers = match rest.first().copied() {
                Some("ctrl") => Modifiers::ctrl(),
                Some("shift") => Modifiers::shift(),
                _ => Modifiers::new(),
            };
            Event::click_with(target, modifiers)
        }
        "input" => Event::input(target, rest.join(" ")),
        "key" => Event::key(target, Key::from_dom(rest.first()?)?),
        "enter" => Event::PointerEnter {
            target: target.to_string(),
        },
        "leave" => Event::PointerLeave {
            target: target.to_string(),
        },
        _ => return None,
    };
    Some(event)
}

fn render(gallery: &Gallery, registry: &HandlerRegistry) -> Result<(), Error> {
    registry.clear();
    let page = gallery.page(registry);
    let document = Document::new(RenderConfig::new("Gallery").pretty(2)).child(page);
    document.write_to(&mut File::create("gallery.html")?)?;
    log::debug!("rendered gallery.html with {} handlers", registry.len());
    Ok(())
}

fn main() -> Result<(), Error> {
    // Set up file logging
    let log_file = File::create("gallery.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let gallery = Gallery::default();
    let registry = HandlerRegistry::new();
    render(&gallery, &registry)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(event) = parse_event(&line) else {
            eprintln!("unrecognized: {line}");
            continue;
        };
        if !registry.dispatch(&event) {
            eprintln!("no handler for {line}");
            continue;
        }
        render(&gallery, &registry)?;
    }
    Ok(())
}
