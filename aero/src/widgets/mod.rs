//! Built-in components.
//!
//! Each component is a builder that produces an `aerodom::Element` carrying
//! the class names and ARIA attributes the 7.css stylesheet expects. Stateful
//! components take a `&State<..>` and register handlers for their elements
//! in the `HandlerRegistry` while building:
//!
//! ```ignore
//! let registry = HandlerRegistry::new();
//! let mut handlers = WidgetHandlers::new();
//! handlers.insert("on_change", Arc::new(|hx: &HandlerContext| {
//!     log::info!("selected {:?}", hx.event().selection());
//! }));
//!
//! let list = ListBox::new()
//!     .items(["Facebook", "Amazon", "Apple"])
//!     .multiple(true)
//!     .state(&state)
//!     .build(&registry, &handlers);
//!
//! registry.dispatch(&Event::click("listbox-0-option-1"));
//! ```

use std::sync::LazyLock;

use aerodom::{Element, Style, generate_id};
use regex::Regex;

/// Builder methods writing onto the wrapped native element.
///
/// Expects a `passthrough: Passthrough` field.
macro_rules! passthrough_methods {
    () => {
        /// Add classes after the component's own.
        pub fn class(mut self, class: impl Into<String>) -> Self {
            self.passthrough.classes.push(class.into());
            self
        }

        /// Write an attribute onto the native element unchanged.
        ///
        /// `class` and `style` are merged with the component's own.
        pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
            self.passthrough.attrs.push((name.into(), value.into()));
            self
        }

        /// Add an inline style declaration.
        pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
            self.passthrough.style.set(property, value);
            self
        }
    };
}

pub mod balloon;
pub mod button;
pub mod checkbox;
pub mod collapse;
pub mod combo_box;
pub mod disclosure;
pub mod dropdown;
pub mod group_box;
pub mod list_box;
pub mod list_view;
pub mod menu;
pub mod menu_bar;
pub mod option_button;
pub mod progress_bar;
pub mod search_box;
pub mod selection;
pub mod slider;
pub mod sort;
pub mod spinner;
pub mod tabs;
pub mod text_box;
pub mod tree_view;
pub mod window;

pub use balloon::{Balloon, BalloonPosition};
pub use button::Button;
pub use checkbox::Checkbox;
pub use collapse::Collapse;
pub use combo_box::{ComboBox, ComboBoxState};
pub use disclosure::{Disclosure, DisclosureIntent};
pub use dropdown::{Dropdown, DropdownOption};
pub use group_box::GroupBox;
pub use list_box::{ListBox, ListBoxItem, ListBoxState};
pub use list_view::{Column, ColumnAlign, ListView, ListViewRow, ListViewState, Record};
pub use menu::{Menu, MenuItem, MenuState};
pub use menu_bar::{MenuBar, MenuBarItem, Shortcut};
pub use option_button::OptionButton;
pub use progress_bar::{ProgressBar, ProgressVariant};
pub use search_box::{SearchBox, SearchKind};
pub use selection::{SelectModifier, Selection, SelectionChange, SelectionMode};
pub use slider::Slider;
pub use sort::{CellValue, SortDescriptor, SortDirection, Sorting};
pub use spinner::{Spinner, SpinnerVariant};
pub use tabs::{Tab, Tabs};
pub use text_box::TextBox;
pub use tree_view::{TreeNode, TreeView};
pub use window::{BackgroundAttachment, Window};

/// Typestate marker: component needs a state reference.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeedsState;

/// Typestate marker: component has a state reference.
pub struct HasState<'a, T>(&'a crate::State<T>);

impl<T> Clone for HasState<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HasState<'_, T> {}

impl<T> std::fmt::Debug for HasState<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HasState")
    }
}

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex pattern"));

/// Lowercase `label` and replace every whitespace run with `-`.
pub fn slug(label: &str) -> String {
    WHITESPACE.replace_all(&label.to_lowercase(), "-").into_owned()
}

/// Element id derived from a label: `<prefix>-<slug>`.
///
/// Without a label a process-unique id with the same prefix is generated.
pub fn derive_id(prefix: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{}-{}", prefix, slug(label)),
        None => generate_id(prefix),
    }
}

/// Caller-supplied classes, attributes and inline style for the native
/// element a component wraps.
#[derive(Debug, Clone, Default)]
pub(crate) struct Passthrough {
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    style: Style,
}

impl Passthrough {
    pub(crate) fn apply(self, element: Element) -> Element {
        let mut element = element;
        for class in &self.classes {
            element = element.class_list(class);
        }
        element.with_style(self.style).attrs(self.attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_collapses_whitespace() {
        assert_eq!(slug("Enable  Notifications"), "enable-notifications");
        assert_eq!(slug("Tab\tOne"), "tab-one");
    }

    #[test]
    fn test_derive_id_with_label() {
        assert_eq!(
            derive_id("checkbox", Some("Enable notifications")),
            "checkbox-enable-notifications"
        );
    }

    #[test]
    fn test_derive_id_without_label_is_unique() {
        let a = derive_id("slider", None);
        let b = derive_id("slider", None);
        assert!(a.starts_with("slider-"));
        assert_ne!(a, b);
    }
}
