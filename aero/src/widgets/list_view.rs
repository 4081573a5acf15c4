//! List view widget - a sortable, selectable table.

use std::sync::Arc;

use aerodom::{Element, generate_id};

use super::selection::{SelectModifier, Selection, SelectionMode};
use super::sort::{CellValue, SortDirection, Sorting};
use super::{HasState, NeedsState, Passthrough};
use crate::controlled::Controlled;
use crate::handler_context::{EventData, events, notify};
use crate::state::State;
use crate::{HandlerRegistry, WidgetHandlers};

// =============================================================================
// Column
// =============================================================================

/// Horizontal alignment of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// A list view column definition.
#[derive(Clone, Debug)]
pub struct Column {
    /// Field read from each row.
    pub key: String,
    /// Header text.
    pub header: String,
    /// CSS width (`120px`, `30%`, ...).
    pub width: Option<String>,
    pub align: Option<ColumnAlign>,
    pub sortable: bool,
    /// Highlight the header even when not sorted by this column.
    pub highlighted: bool,
}

impl Column {
    /// Create a new column reading `key` with the given header.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: None,
            align: None,
            sortable: false,
            highlighted: false,
        }
    }

    /// Set the CSS width of this column.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set a pixel width for this column.
    pub fn width_px(self, px: u32) -> Self {
        self.width(format!("{px}px"))
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }
}

// =============================================================================
// ListViewRow Trait
// =============================================================================

/// Trait for rows that can be displayed in a ListView.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone)]
/// struct User {
///     id: u32,
///     name: String,
///     age: u32,
/// }
///
/// impl ListViewRow for User {
///     fn cell(&self, key: &str) -> CellValue {
///         match key {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             "age" => self.age.into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
/// ```
pub trait ListViewRow: Clone + Send + Sync + 'static {
    /// Value of the field named `key`. Unknown fields are empty.
    fn cell(&self, key: &str) -> CellValue;

    /// Custom cell markup. Defaults to the cell value as text.
    fn render(&self, key: &str) -> Option<Element> {
        let _ = key;
        None
    }
}

/// A row of named fields, for tables built from plain data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing an earlier value with the same name.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

impl ListViewRow for Record {
    fn cell(&self, key: &str) -> CellValue {
        self.get(key).cloned().unwrap_or_default()
    }
}

// =============================================================================
// ListViewState
// =============================================================================

/// State for a ListView: selected row keys and the sort column.
#[derive(Clone, Debug, Default)]
pub struct ListViewState {
    pub selection: Controlled<Vec<String>>,
    /// None until the first build applies the default sort.
    pub sorting: Option<Sorting<String>>,
}

// =============================================================================
// ListView
// =============================================================================

/// A list view builder.
///
/// Rows are identified by the text of their `row_key` field (`id` by
/// default). Clicking a sortable header sorts ascending, clicking it again
/// flips the direction; `on_sort` receives `EventData::Sort`. Row clicks
/// follow the same modifier rules as [`ListBox`](super::ListBox) and call
/// `on_selection_change` with `EventData::Selection`.
#[derive(Clone, Debug)]
pub struct ListView<T: ListViewRow, S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    rows: Vec<T>,
    columns: Vec<Column>,
    row_key: String,
    multi_select: bool,
    selected_keys: Option<Vec<String>>,
    default_selected_keys: Vec<String>,
    default_sort: Option<(String, SortDirection)>,
    passthrough: Passthrough,
}

impl<T: ListViewRow> Default for ListView<T, NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListViewRow> ListView<T, NeedsState> {
    /// Create a new list view builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            rows: Vec::new(),
            columns: Vec::new(),
            row_key: "id".into(),
            multi_select: false,
            selected_keys: None,
            default_selected_keys: Vec::new(),
            default_sort: None,
            passthrough: Passthrough::default(),
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<ListViewState>) -> ListView<T, HasState<'_, ListViewState>> {
        ListView {
            state_marker: HasState(s),
            id: self.id,
            rows: self.rows,
            columns: self.columns,
            row_key: self.row_key,
            multi_select: self.multi_select,
            selected_keys: self.selected_keys,
            default_selected_keys: self.default_selected_keys,
            default_sort: self.default_sort,
            passthrough: self.passthrough,
        }
    }
}

impl<T: ListViewRow, S> ListView<T, S> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn rows(mut self, rows: Vec<T>) -> Self {
        self.rows = rows;
        self
    }

    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Field used as the row identity.
    pub fn row_key(mut self, key: impl Into<String>) -> Self {
        self.row_key = key.into();
        self
    }

    pub fn multi_select(mut self, multi: bool) -> Self {
        self.multi_select = multi;
        self
    }

    /// Caller-owned selection.
    pub fn selected_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.selected_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Initial selection when the caller doesn't own it.
    pub fn default_selected_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.default_selected_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Initial sort, applied on the first build.
    pub fn default_sort(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.default_sort = Some((key.into(), direction));
        self
    }

    passthrough_methods!();
}

impl<'a, T: ListViewRow> ListView<T, HasState<'a, ListViewState>> {
    /// Build the table element.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let external = self.selected_keys.as_ref();
        let needs_init = state.with(|s| s.selection.needs_sync(external) || s.sorting.is_none());
        if needs_init {
            state.update_quiet(|s| {
                s.selection.seed(external, self.default_selected_keys.clone());
                s.selection.sync(external);
                if s.sorting.is_none() {
                    let mut sorting = Sorting::new();
                    if let Some((key, direction)) = self.default_sort.clone() {
                        sorting = sorting.with_sort(key, direction);
                    }
                    s.sorting = Some(sorting);
                }
            });
        }
        let (selected, sorting) = state.with(|s| {
            (
                s.selection.value(external).clone(),
                s.sorting.clone().unwrap_or_default(),
            )
        });

        let id = self.id.clone().unwrap_or_else(|| generate_id("listview"));
        log::debug!(
            "[ListView::build] id={} rows={} sort={:?}",
            id,
            self.rows.len(),
            sorting.descriptor()
        );

        let header = self.build_header(&id, &sorting, state, registry, handlers);
        let body = self.build_body(&id, &selected, &sorting, state, registry, handlers);

        self.passthrough.apply(
            Element::table()
                .id(&id)
                .class("has-shadow")
                .child(header)
                .child(body),
        )
    }

    fn build_header(
        &self,
        list_id: &str,
        sorting: &Sorting<String>,
        state: &State<ListViewState>,
        registry: &HandlerRegistry,
        handlers: &WidgetHandlers,
    ) -> Element {
        let on_sort = handlers.get("on_sort").cloned();
        let mut row = Element::new("tr");

        for (index, column) in self.columns.iter().enumerate() {
            let th_id = format!("{}-header-{}", list_id, index);
            let sorted_here = sorting.is_sorted_by(&column.key);

            let mut th = Element::new("th")
                .id(&th_id)
                .class_if(column.highlighted || sorted_here, "highlighted")
                .style_opt("width", column.width.clone())
                .style_opt("text-align", column.align.map(ColumnAlign::as_css))
                .inner_text(column.header.as_str());
            if column.sortable {
                th = th.style("cursor", "pointer");
                if sorted_here {
                    th = th
                        .class("indicator")
                        .class(sorting.direction().indicator_class());
                }

                let state_clone = state.clone();
                let key = column.key.clone();
                let on_sort = on_sort.clone();
                registry.register(
                    &th_id,
                    events::CLICK,
                    Arc::new(move |hx| {
                        let mut result = None;
                        state_clone.update(|s| {
                            result = s
                                .sorting
                                .get_or_insert_with(Sorting::new)
                                .sort_by(key.clone(), true);
                        });
                        if let Some(descriptor) = result {
                            log::debug!(
                                "[ListView::on_sort] {} {}",
                                descriptor.key,
                                descriptor.direction.as_str()
                            );
                            notify(
                                on_sort.as_ref(),
                                hx,
                                EventData::Sort {
                                    key: descriptor.key,
                                    direction: descriptor.direction,
                                },
                            );
                        }
                    }),
                );
            }
            row = row.child(th);
        }

        Element::new("thead").child(row)
    }

    fn build_body(
        &self,
        list_id: &str,
        selected: &[String],
        sorting: &Sorting<String>,
        state: &State<ListViewState>,
        registry: &HandlerRegistry,
        handlers: &WidgetHandlers,
    ) -> Element {
        let mode = if self.multi_select {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        };
        // Ranges run in input order, not display order
        let order: Arc<Vec<String>> = Arc::new(
            self.rows
                .iter()
                .map(|row| row.cell(&self.row_key).to_string())
                .collect(),
        );
        let on_selection_change = handlers.get("on_selection_change").cloned();

        let view = sorting.sorted(&self.rows, |row, key| row.cell(key));
        log::trace!("[ListView::build] {} rows in view", view.len());

        let mut body = Element::new("tbody");
        for row in view {
            let key = row.cell(&self.row_key).to_string();
            let row_id = format!("{}-row-{}", list_id, key);

            let mut tr = Element::new("tr")
                .id(&row_id)
                .class_if(selected.contains(&key), "selected")
                .style("cursor", "pointer");
            for column in &self.columns {
                let content = row
                    .render(&column.key)
                    .unwrap_or_else(|| Element::text(row.cell(&column.key).to_string()));
                tr = tr.child(
                    Element::new("td")
                        .style_opt("text-align", column.align.map(ColumnAlign::as_css))
                        .child(content),
                );
            }

            let state_clone = state.clone();
            let external = self.selected_keys.clone();
            let order = Arc::clone(&order);
            let on_selection_change = on_selection_change.clone();
            registry.register(
                &row_id,
                events::CLICK,
                Arc::new(move |hx| {
                    let modifier = SelectModifier::from_modifiers(hx.event().modifiers());
                    let current =
                        state_clone.with(|s| s.selection.value(external.as_ref()).clone());
                    let mut selection = Selection::new(mode).with_selected(current);
                    let Some(change) = selection.select(key.clone(), modifier, &order, |_| false)
                    else {
                        return;
                    };
                    log::debug!("[ListView::on_row_click] {:?} -> {:?}", modifier, change);
                    state_clone.update(|s| s.selection.change(selection.selected().to_vec()));
                    notify(on_selection_change.as_ref(), hx, EventData::Selection(change));
                }),
            );

            body = body.child(tr);
        }
        body
    }
}
