//! Column descriptors.
//!
//! A [`Column`] describes one table column for rows of type `T`: its header, how a value
//! is read from a row, how that value sorts, filters and renders. Values are read through
//! accessor closures supplied by the screen, so a sort key always names a real field of
//! `T` at compile time.
//!
//! ```rust,ignore
//! let columns = vec![
//!     Column::field("#", "ban_id", |ban: &SteamBanDto| ban.ban_id.into())
//!         .tooltip("Ban ID")
//!         .sort_type(SortType::Number)
//!         .sortable()
//!         .align(Align::Left),
//!     Column::field("Target", "target_personaname", |ban: &SteamBanDto| {
//!         ban.target_personaname.as_str().into()
//!     })
//!     .sortable()
//!     .query_value(|ban| ban.target_personaname.clone()),
//! ];
//! ```

use std::rc::Rc;

use dioxus::prelude::*;

use super::{
    render::{default_cell_text, Cell, SortType},
    value::SortValue,
};

pub type Accessor<T> = Rc<dyn Fn(&T) -> SortValue>;
pub type CellRenderer<T> = Rc<dyn Fn(&T, &SortValue, SortType) -> Element>;
pub type QueryValue<T> = Rc<dyn Fn(&T) -> String>;
pub type CellClass<T> = Rc<dyn Fn(&T) -> Option<String>>;
pub type CellClick<T> = Rc<dyn Fn(&T)>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    Inherit,
    Left,
    Center,
    #[default]
    Right,
    Justify,
}

impl Align {
    pub fn class(self) -> &'static str {
        match self {
            Align::Inherit => "",
            Align::Left => "text-left",
            Align::Center => "text-center",
            Align::Right => "text-right",
            Align::Justify => "text-justify",
        }
    }
}

#[derive(Clone)]
pub enum Tooltip {
    Text(String),
    Computed(Rc<dyn Fn() -> String>),
}

impl Tooltip {
    pub fn text(&self) -> String {
        match self {
            Tooltip::Text(text) => text.clone(),
            Tooltip::Computed(compute) => compute(),
        }
    }
}

impl PartialEq for Tooltip {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Tooltip::Text(a), Tooltip::Text(b)) => a == b,
            (Tooltip::Computed(a), Tooltip::Computed(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// What a column's key refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKey {
    /// Display-only column, e.g. row actions.
    None,
    /// A field of the row; the key doubles as the server-side `order_by` name.
    Field(&'static str),
    /// A value computed from the row. Never sortable.
    Virtual(&'static str),
}

pub struct Column<T> {
    pub label: String,
    pub key: ColumnKey,
    pub sort_type: SortType,
    pub sortable: bool,
    pub align: Align,
    pub width: Option<String>,
    tooltip: Tooltip,
    value: Option<Accessor<T>>,
    renderer: Option<CellRenderer<T>>,
    query_value: Option<QueryValue<T>>,
    cell_class: Option<CellClass<T>>,
    on_click: Option<CellClick<T>>,
}

impl<T> Column<T> {
    /// Display-only column with no value, typically paired with a renderer.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_key(label, ColumnKey::None, None)
    }

    /// Column reading the field `key` through `accessor`.
    pub fn field(
        label: impl Into<String>,
        key: &'static str,
        accessor: impl Fn(&T) -> SortValue + 'static,
    ) -> Self {
        Self::with_key(label, ColumnKey::Field(key), Some(Rc::new(accessor)))
    }

    /// Virtual column whose value is computed from the row.
    pub fn computed(
        label: impl Into<String>,
        key: &'static str,
        accessor: impl Fn(&T) -> SortValue + 'static,
    ) -> Self {
        Self::with_key(label, ColumnKey::Virtual(key), Some(Rc::new(accessor)))
    }

    fn with_key(label: impl Into<String>, key: ColumnKey, value: Option<Accessor<T>>) -> Self {
        let label = label.into();
        Self {
            tooltip: Tooltip::Text(label.clone()),
            label,
            key,
            value,
            sort_type: SortType::default(),
            sortable: false,
            align: Align::default(),
            width: None,
            renderer: None,
            query_value: None,
            cell_class: None,
            on_click: None,
        }
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Tooltip::Text(tooltip.into());
        self
    }

    /// Tooltip computed each time the header renders.
    pub fn tooltip_with(mut self, tooltip: impl Fn() -> String + 'static) -> Self {
        self.tooltip = Tooltip::Computed(Rc::new(tooltip));
        self
    }

    pub fn sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = sort_type;
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn renderer(
        mut self,
        renderer: impl Fn(&T, &SortValue, SortType) -> Element + 'static,
    ) -> Self {
        self.renderer = Some(Rc::new(renderer));
        self
    }

    /// Text matched against the filter query in local mode.
    pub fn query_value(mut self, query_value: impl Fn(&T) -> String + 'static) -> Self {
        self.query_value = Some(Rc::new(query_value));
        self
    }

    /// Extra classes for this column's cell in a given row.
    pub fn cell_class(mut self, cell_class: impl Fn(&T) -> Option<String> + 'static) -> Self {
        self.cell_class = Some(Rc::new(cell_class));
        self
    }

    pub fn on_click(mut self, on_click: impl Fn(&T) + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    pub fn tooltip_text(&self) -> String {
        self.tooltip.text()
    }

    /// Field name this column sorts by, `None` for display-only and virtual columns.
    pub fn sort_key(&self) -> Option<&'static str> {
        match self.key {
            ColumnKey::Field(key) => Some(key),
            ColumnKey::Virtual(_) | ColumnKey::None => None,
        }
    }

    /// Whether clicking the header changes the sort.
    pub fn is_sortable(&self) -> bool {
        self.sortable && self.sort_key().is_some()
    }

    /// Value of this column for `row`; `Missing` when the column has no accessor.
    pub fn value(&self, row: &T) -> SortValue {
        self.value
            .as_ref()
            .map(|accessor| accessor(row))
            .unwrap_or_default()
    }

    /// Renders the cell for `row`. A custom renderer always wins over the default.
    pub fn render(&self, row: &T) -> Cell {
        let value = self.value(row);
        match &self.renderer {
            Some(renderer) => Cell::Node(renderer(row, &value, self.sort_type)),
            None => Cell::Text(default_cell_text(&value, self.sort_type)),
        }
    }

    /// Whether the lowercased `needle` occurs in this column's query text for `row`.
    ///
    /// Columns without a query extractor never match.
    pub fn matches_query(&self, row: &T, needle: &str) -> bool {
        self.query_value
            .as_ref()
            .is_some_and(|query_value| query_value(row).to_lowercase().contains(needle))
    }

    pub fn class_for(&self, row: &T) -> Option<String> {
        self.cell_class.as_ref().and_then(|cell_class| cell_class(row))
    }

    pub fn click_handler(&self) -> Option<CellClick<T>> {
        self.on_click.clone()
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            tooltip: self.tooltip.clone(),
            key: self.key,
            value: self.value.clone(),
            sort_type: self.sort_type,
            sortable: self.sortable,
            align: self.align,
            width: self.width.clone(),
            renderer: self.renderer.clone(),
            query_value: self.query_value.clone(),
            cell_class: self.cell_class.clone(),
            on_click: self.on_click.clone(),
        }
    }
}

fn same_fn<F: ?Sized>(a: &Option<Rc<F>>, b: &Option<Rc<F>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.tooltip == other.tooltip
            && self.key == other.key
            && self.sort_type == other.sort_type
            && self.sortable == other.sortable
            && self.align == other.align
            && self.width == other.width
            && same_fn(&self.value, &other.value)
            && same_fn(&self.renderer, &other.renderer)
            && same_fn(&self.query_value, &other.query_value)
            && same_fn(&self.cell_class, &other.cell_class)
            && same_fn(&self.on_click, &other.on_click)
    }
}
