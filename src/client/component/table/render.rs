use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use super::value::SortValue;

/// How a column's value is rendered when the column has no custom renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortType {
    Number,
    #[default]
    String,
    Date,
    Float,
    Boolean,
}

/// Rendered content of a single cell.
pub enum Cell {
    Text(String),
    Node(Element),
}

impl Cell {
    pub fn text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            Cell::Node(_) => None,
        }
    }

    pub fn into_element(self) -> Element {
        match self {
            Cell::Text(text) => rsx!("{text}"),
            Cell::Node(element) => element,
        }
    }
}

const DATE_FORMAT: &str = "%a %b %d %Y";

/// Default cell text for a value, keyed on the column's sort type.
///
/// - `Date`: calendar date, e.g. `Tue Mar 05 2024`; RFC3339 text is parsed first
/// - `Float`: two decimals, missing values render as `0.00`
/// - `Boolean`: `Yes` / `No` by truthiness
/// - `Number` / `String`: the raw value, missing values render empty
pub fn default_cell_text(value: &SortValue, sort_type: SortType) -> String {
    match sort_type {
        SortType::Date => match value {
            SortValue::Date(date) => date.format(DATE_FORMAT).to_string(),
            SortValue::Text(text) => DateTime::parse_from_rfc3339(text)
                .map(|date| date.with_timezone(&Utc).format(DATE_FORMAT).to_string())
                .unwrap_or_else(|_| text.clone()),
            other => other.to_string(),
        },
        SortType::Float => match value {
            SortValue::Float(float) => format!("{:.2}", float),
            SortValue::Int(int) => format!("{:.2}", *int as f64),
            SortValue::Missing => "0.00".to_string(),
            other => other.to_string(),
        },
        SortType::Boolean => {
            if value.is_truthy() {
                "Yes".to_string()
            } else {
                "No".to_string()
            }
        }
        SortType::Number | SortType::String => value.to_string(),
    }
}
