mod compare;
mod config;
mod fetch_page;
mod header_clicked;
mod page_changed;
mod reconcile;
mod rows_per_page_changed;
mod stable_sort;

use super::*;
use test_utils::{factory, fixture, TestRow};

fn id_column() -> Column<TestRow> {
    Column::field("#", "id", |row: &TestRow| row.id.into())
        .sort_type(SortType::Number)
        .sortable()
}

fn name_column() -> Column<TestRow> {
    Column::field("Name", "name", |row: &TestRow| row.name.as_str().into())
        .sortable()
        .query_value(|row: &TestRow| row.name.clone())
}

fn score_column() -> Column<TestRow> {
    Column::field("Score", "score", |row: &TestRow| row.score.into())
        .sort_type(SortType::Float)
        .sortable()
}

fn note_column() -> Column<TestRow> {
    Column::field("Note", "note", |row: &TestRow| row.note.clone().into())
        .sortable()
        .query_value(|row: &TestRow| row.note.clone().unwrap_or_default())
}

fn ids(rows: &[TestRow]) -> Vec<i64> {
    rows.iter().map(|row| row.id).collect()
}
