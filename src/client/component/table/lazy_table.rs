use dioxus::prelude::*;

use crate::client::component::{Pagination, PaginationData};

use super::{
    body::TableBody,
    column::Column,
    header::TableHeader,
    state::{page_count, TableChange, TableState, DEFAULT_PAGE_SIZES},
};

/// Table showing one page of rows that were sorted and paged elsewhere.
///
/// The parent owns `state` and receives every change through `on_change`; nothing is
/// applied until the parent passes the new state back in. `count` is the row count of
/// the whole result, not of `rows`.
#[component]
pub fn LazyTable<T: Clone + PartialEq + 'static>(
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    count: u64,
    state: TableState,
    on_change: EventHandler<TableChange>,
    #[props(default)] loading: bool,
    #[props(default = true)] show_pager: bool,
    #[props(default)] hide_header: bool,
    #[props(default = DEFAULT_PAGE_SIZES.to_vec())] page_sizes: Vec<u64>,
    on_row_click: Option<EventHandler<T>>,
) -> Element {
    let data = PaginationData::new(state.page, state.rows_per_page, count);
    let pages = page_count(count, state.rows_per_page);
    let page_state = state.clone();
    let size_state = state.clone();

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                if !hide_header {
                    TableHeader::<T> {
                        columns: columns.clone(),
                        state: state.clone(),
                        on_change,
                    }
                }
                TableBody::<T> {
                    columns,
                    rows,
                    loading,
                    on_row_click,
                }
            }
        }
        if show_pager {
            Pagination {
                data,
                page_sizes,
                on_page_change: move |page| {
                    if let Some(change) = page_state.page_changed(page, pages) {
                        on_change.call(change);
                    }
                },
                on_per_page_change: move |size| {
                    if let Some(change) = size_state.rows_per_page_changed(size) {
                        on_change.call(change);
                    }
                },
            }
        }
    }
}
