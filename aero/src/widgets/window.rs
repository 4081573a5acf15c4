//! Window widget - a framed window or dialog with title bar controls.

use aerodom::Element;

use super::Passthrough;
use crate::handler_context::events;
use crate::{HandlerRegistry, WidgetHandlers};

/// `background-attachment` of the title bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackgroundAttachment {
    #[default]
    Fixed,
    Local,
    Scroll,
}

impl BackgroundAttachment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Local => "local",
            Self::Scroll => "scroll",
        }
    }
}

/// Title bar control: aria label, id suffix, handler name.
const CONTROLS: [(&str, &str, &str); 4] = [
    ("Help", "help", "on_help"),
    ("Minimize", "minimize", "on_minimize"),
    ("Maximize", "maximize", "on_maximize"),
    ("Close", "close", "on_close"),
];

/// A window builder.
///
/// Control buttons are `<id>-help`, `<id>-minimize`, `<id>-maximize` and
/// `<id>-close`, wired to `on_help`, `on_minimize`, `on_maximize` and
/// `on_close`. Only Close is shown by default.
///
/// # Example
///
/// ```ignore
/// Window::new("Properties")
///     .id("props")
///     .dialog("props-title")
///     .show_help(true)
///     .status_bar(["Ready"])
///     .child(body)
///     .build(&registry, &handlers);
/// ```
#[derive(Clone, Debug)]
pub struct Window {
    title: String,
    id: Option<String>,
    glass: bool,
    active: bool,
    background_color: Option<String>,
    show_help: bool,
    show_minimize: bool,
    show_maximize: bool,
    show_close: bool,
    status_bar: Option<Vec<String>>,
    has_space: bool,
    background_attachment: BackgroundAttachment,
    dialog_title_id: Option<String>,
    is_dialog: bool,
    is_bright: bool,
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl Window {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: None,
            glass: false,
            active: true,
            background_color: None,
            show_help: false,
            show_minimize: false,
            show_maximize: false,
            show_close: true,
            status_bar: None,
            has_space: true,
            background_attachment: BackgroundAttachment::default(),
            dialog_title_id: None,
            is_dialog: false,
            is_bright: false,
            children: Vec::new(),
            passthrough: Passthrough::default(),
        }
    }

    /// Window id. Rendered on the root only for dialogs, but always used to
    /// derive the control button ids.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Translucent Aero frame.
    pub fn glass(mut self, glass: bool) -> Self {
        self.glass = glass;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Body color, set through the `--w7-w-bg` custom property.
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn show_minimize(mut self, show: bool) -> Self {
        self.show_minimize = show;
        self
    }

    pub fn show_maximize(mut self, show: bool) -> Self {
        self.show_maximize = show;
        self
    }

    pub fn show_close(mut self, show: bool) -> Self {
        self.show_close = show;
        self
    }

    /// Status bar with one field per entry.
    pub fn status_bar<I, T>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.status_bar = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Padding inside the window body (on by default).
    pub fn has_space(mut self, has_space: bool) -> Self {
        self.has_space = has_space;
        self
    }

    pub fn background_attachment(mut self, attachment: BackgroundAttachment) -> Self {
        self.background_attachment = attachment;
        self
    }

    /// Render as a dialog labelled by its title, which gets `title_id`.
    pub fn dialog(mut self, title_id: impl Into<String>) -> Self {
        self.is_dialog = true;
        self.dialog_title_id = Some(title_id.into());
        self
    }

    /// Bright dialog frame. Has no effect on plain windows.
    pub fn bright(mut self, bright: bool) -> Self {
        self.is_bright = bright;
        self
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

    /// Build the window element.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let control_prefix = self
            .id
            .clone()
            .unwrap_or_else(|| super::derive_id("window", Some(&self.title)));
        log::debug!(
            "[Window::build] title={:?} dialog={}",
            self.title,
            self.is_dialog
        );

        let shown = [
            self.show_help,
            self.show_minimize,
            self.show_maximize,
            self.show_close,
        ];
        let controls = CONTROLS
            .iter()
            .zip(shown)
            .filter(|(_, show)| *show)
            .map(|(&(label, suffix, handler_name), _)| {
                let button_id = format!("{}-{}", control_prefix, suffix);
                if let Some(handler) = handlers.get(handler_name) {
                    registry.register(&button_id, events::CLICK, handler.clone());
                }
                Element::button().id(button_id).aria("label", label)
            })
            .collect::<Vec<_>>();

        let title_bar = Element::div()
            .class("title-bar")
            .style("background-attachment", self.background_attachment.as_str())
            .child(
                Element::div()
                    .class("title-bar-text")
                    .attr_opt("id", self.dialog_title_id.clone())
                    .inner_text(self.title),
            )
            .child_opt(
                (!controls.is_empty())
                    .then(|| Element::div().class("title-bar-controls").children(controls)),
            );

        let body = Element::div()
            .class("window-body")
            .class_if(self.has_space, "has-space")
            .children(self.children);

        let status_bar = self.status_bar.map(|fields| {
            Element::div().class("status-bar").children(
                fields
                    .into_iter()
                    .map(|field| Element::p().class("status-bar-field").inner_text(field)),
            )
        });

        let mut window = Element::div()
            .class("window")
            .class_if(self.glass, "glass")
            .class_if(self.active, "active")
            .class_if(self.is_dialog && self.is_bright, "is-bright")
            .style_opt("--w7-w-bg", self.background_color);
        if self.is_dialog {
            window = window
                .role("dialog")
                .attr_opt("id", self.id)
                .aria("labelledby", self.dialog_title_id.unwrap_or_default());
        }

        let window = window.child(title_bar).child(body).child_opt(status_bar);
        self.passthrough.apply(window)
    }
}
