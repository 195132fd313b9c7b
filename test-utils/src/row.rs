use chrono::{DateTime, Utc};

/// Row type used by table tests.
///
/// Carries one field for each kind of value the table can sort on, plus an optional
/// field for exercising missing-value ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct TestRow {
    pub id: i64,
    pub name: String,
    pub score: f64,
    pub created_on: DateTime<Utc>,
    pub active: bool,
    pub note: Option<String>,
}
