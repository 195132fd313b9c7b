//! Sortable, paginated data table.
//!
//! Two ways to drive it:
//! - [`LazyTable`]: the server sorts and pages; the parent owns the [`TableState`] and
//!   re-fetches on every [`TableChange`]
//! - [`DataTable`]: the full row set is handed over and sorted, filtered and paged locally
//!
//! Sorting, paging and header-click transitions live in plain functions so they can be
//! tested without rendering anything.

pub mod body;
pub mod column;
pub mod compare;
pub mod config;
pub mod data_table;
pub mod error;
pub mod header;
pub mod lazy_table;
pub mod order;
pub mod render;
pub mod sort;
pub mod source;
pub mod state;
pub mod value;
pub mod view;

#[cfg(test)]
mod test;

pub use column::{Align, Column, ColumnKey};
pub use compare::{compare, descending_comparator};
pub use config::TableConfig;
pub use data_table::DataTable;
pub use error::TableError;
pub use lazy_table::LazyTable;
pub use order::Order;
pub use render::{default_cell_text, Cell, SortType};
pub use sort::{sorted_indices, stable_sort};
pub use source::fetch_page;
pub use state::{
    page_count, page_for_index, page_range, TableChange, TableEvent, TableState,
    DEFAULT_PAGE_SIZES, DEFAULT_ROWS_PER_PAGE,
};
pub use value::SortValue;
pub use view::{filter_rows, RowFilter, TableView};
