//! Sort and paging state, and the transitions the table emits.
//!
//! The caller owns a [`TableState`]; the table never mutates it. User interaction produces
//! a [`TableChange`] carrying the events that happened and the complete new state, so a
//! caller can re-fetch from the new state alone.

use std::ops::Range;

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use super::{column::Column, order::Order};

/// Page sizes offered when a screen doesn't choose its own.
pub const DEFAULT_PAGE_SIZES: [u64; 4] = [10, 25, 50, 100];

/// Page size used when a screen doesn't choose its own.
pub const DEFAULT_ROWS_PER_PAGE: u64 = 25;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub sort_column: String,
    pub order: Order,
    pub page: u64,
    pub rows_per_page: u64,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort_column: String::new(),
            order: Order::default(),
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent {
    SortColumnChanged(String),
    SortOrderChanged(Order),
    PageChanged(u64),
    RowsPerPageChanged(u64),
}

/// Result of a user interaction: what changed, and the full state afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableChange {
    pub events: Vec<TableEvent>,
    pub state: TableState,
}

impl TableState {
    pub fn new(sort_column: impl Into<String>, order: Order, rows_per_page: u64) -> Self {
        Self {
            sort_column: sort_column.into(),
            order,
            page: 0,
            rows_per_page,
        }
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    /// Index of the first row on the current page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.rows_per_page)
    }

    /// Transition for a click on `column`'s header.
    ///
    /// - Unsortable or virtual column: no change
    /// - Active sort column: order toggles
    /// - Any other sortable column: becomes the sort column, order resets to descending
    ///
    /// Any sort change also returns to the first page.
    pub fn header_clicked<T>(&self, column: &Column<T>) -> Option<TableChange> {
        if !column.is_sortable() {
            return None;
        }
        let key = column.sort_key()?;

        let mut next = self.clone();
        let mut events = Vec::new();

        if key == self.sort_column {
            next.order = self.order.toggled();
            events.push(TableEvent::SortOrderChanged(next.order));
        } else {
            next.sort_column = key.to_string();
            next.order = Order::Descending;
            events.push(TableEvent::SortColumnChanged(next.sort_column.clone()));
            if self.order != next.order {
                events.push(TableEvent::SortOrderChanged(next.order));
            }
        }

        if self.page != 0 {
            next.page = 0;
            events.push(TableEvent::PageChanged(0));
        }

        tracing::debug!(
            "Sort changed to {} {}",
            next.sort_column,
            next.order.as_str()
        );

        Some(TableChange {
            events,
            state: next,
        })
    }

    /// Transition to `page`, clamped to the last of `page_count` pages.
    ///
    /// Returns `None` when the clamped page is the current one.
    pub fn page_changed(&self, page: u64, page_count: u64) -> Option<TableChange> {
        let page = page.min(page_count.saturating_sub(1));
        if page == self.page {
            return None;
        }

        let mut next = self.clone();
        next.page = page;

        Some(TableChange {
            events: vec![TableEvent::PageChanged(page)],
            state: next,
        })
    }

    /// Transition to a new page size. Always returns to the first page.
    ///
    /// Returns `None` for a zero size or the current size.
    pub fn rows_per_page_changed(&self, rows_per_page: u64) -> Option<TableChange> {
        if rows_per_page == 0 || rows_per_page == self.rows_per_page {
            return None;
        }

        let mut next = self.clone();
        next.rows_per_page = rows_per_page;
        next.page = 0;

        Some(TableChange {
            events: vec![
                TableEvent::RowsPerPageChanged(rows_per_page),
                TableEvent::PageChanged(0),
            ],
            state: next,
        })
    }

    /// State with the page pulled back inside `total` rows.
    pub fn clamped(&self, total: u64) -> TableState {
        let last_page = page_count(total, self.rows_per_page).saturating_sub(1);
        let mut next = self.clone();
        next.page = self.page.min(last_page);
        next
    }

    /// Transition that pulls an out-of-range page back inside `total` rows.
    ///
    /// Used after a fetch reports fewer rows than the current page assumes, e.g. after
    /// rows were deleted or a filter narrowed the result.
    pub fn reconcile(&self, total: u64) -> Option<TableChange> {
        let next = self.clamped(total);
        if next.page == self.page {
            return None;
        }

        tracing::debug!(
            "Page {} is past the end of {} rows, moving to page {}",
            self.page,
            total,
            next.page
        );

        Some(TableChange {
            events: vec![TableEvent::PageChanged(next.page)],
            state: next,
        })
    }
}

/// Number of pages needed for `total` rows; zero when there are no rows.
pub fn page_count(total: u64, rows_per_page: u64) -> u64 {
    if rows_per_page == 0 {
        return 0;
    }
    total.div_ceil(rows_per_page)
}

/// Index range of `page` within `len` rows. Empty when the page lies past the end.
pub fn page_range(page: u64, rows_per_page: u64, len: usize) -> Range<usize> {
    let start = usize::try_from(page.saturating_mul(rows_per_page))
        .unwrap_or(usize::MAX)
        .min(len);
    let end = usize::try_from(rows_per_page)
        .unwrap_or(usize::MAX)
        .saturating_add(start)
        .min(len);
    start..end
}

/// Page containing the row at `index`.
pub fn page_for_index(index: u64, rows_per_page: u64) -> u64 {
    if rows_per_page == 0 {
        return 0;
    }
    index / rows_per_page
}
