use std::{borrow::Cow, rc::Rc};

use super::{
    column::Column,
    compare::compare,
    sort::sorted_indices,
    state::{page_count, page_range, TableState},
};

/// Custom replacement for the per-column query match in local mode.
///
/// Receives the query as typed and the full row set, returns the rows to keep.
pub struct RowFilter<T>(pub Rc<dyn Fn(&str, &[T]) -> Vec<T>>);

impl<T> RowFilter<T> {
    pub fn new(filter: impl Fn(&str, &[T]) -> Vec<T> + 'static) -> Self {
        Self(Rc::new(filter))
    }

    pub fn apply(&self, query: &str, rows: &[T]) -> Vec<T> {
        (self.0)(query, rows)
    }
}

impl<T> Clone for RowFilter<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for RowFilter<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Rows to display for one table state, plus the totals the pager needs.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView<T> {
    pub rows: Vec<T>,
    pub total: u64,
    pub page_count: u64,
}

impl<T: Clone> TableView<T> {
    /// Filters, sorts and pages the full row set on the client.
    ///
    /// A page past the end yields no rows rather than being clamped; callers decide
    /// whether to move the state back with [`TableState::reconcile`].
    pub fn local(
        columns: &[Column<T>],
        rows: &[T],
        state: &TableState,
        query: &str,
        filter: Option<&RowFilter<T>>,
    ) -> Self {
        let filtered: Cow<[T]> = if query.trim().is_empty() {
            Cow::Borrowed(rows)
        } else {
            Cow::Owned(filter_rows(columns, rows, query, filter))
        };

        let order = match columns
            .iter()
            .find(|column| column.sort_key() == Some(state.sort_column.as_str()))
        {
            Some(column) => sorted_indices(&filtered[..], compare(state.order, column)),
            None => (0..filtered.len()).collect(),
        };

        let range = page_range(state.page, state.rows_per_page, order.len());
        let page = order[range]
            .iter()
            .map(|&index| filtered[index].clone())
            .collect();

        let total = filtered.len() as u64;
        Self {
            rows: page,
            total,
            page_count: page_count(total, state.rows_per_page),
        }
    }

    /// Wraps one page already sorted and sliced by the server.
    pub fn remote(rows: Vec<T>, count: u64, state: &TableState) -> Self {
        Self {
            rows,
            total: count,
            page_count: page_count(count, state.rows_per_page),
        }
    }
}

/// Rows matching `query`. An empty query keeps every row.
///
/// Without a custom filter a row matches when any column's query text contains the
/// query, ignoring case.
pub fn filter_rows<T: Clone>(
    columns: &[Column<T>],
    rows: &[T],
    query: &str,
    filter: Option<&RowFilter<T>>,
) -> Vec<T> {
    let query = query.trim();
    if query.is_empty() {
        return rows.to_vec();
    }

    if let Some(filter) = filter {
        return filter.apply(query, rows);
    }

    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| columns.iter().any(|column| column.matches_query(row, &needle)))
        .cloned()
        .collect()
}
