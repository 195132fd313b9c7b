use dioxus::prelude::*;

use super::{
    config::TableConfig,
    lazy_table::LazyTable,
    state::{page_for_index, TableChange, TableState},
    view::{RowFilter, TableView},
};

/// Table holding the complete row set and sorting, filtering and paging it itself.
///
/// `pre_select_index` opens the table on the page containing that row of the
/// default-sorted data.
#[component]
pub fn DataTable<T: Clone + PartialEq + 'static>(
    config: TableConfig<T>,
    rows: Vec<T>,
    #[props(default)] loading: bool,
    #[props(default = true)] show_filter: bool,
    pre_select_index: Option<u64>,
    filter: Option<RowFilter<T>>,
    on_row_click: Option<EventHandler<T>>,
) -> Element {
    let initial = config.default_state().clone();
    let mut state = use_signal(move || match pre_select_index {
        Some(index) => {
            let page = page_for_index(index, initial.rows_per_page);
            initial.with_page(page)
        }
        None => initial,
    });
    let mut query = use_signal(String::new);

    let current = state();
    let mut view = TableView::local(
        config.columns(),
        &rows,
        &current,
        &query(),
        filter.as_ref(),
    );

    // Rows may shrink underneath the current page; show the last page instead.
    let shown: TableState = current.clamped(view.total);
    if shown != current {
        view = TableView::local(config.columns(), &rows, &shown, &query(), filter.as_ref());
    }

    rsx! {
        div {
            class: "flex flex-col gap-4",
            if show_filter {
                div {
                    class: "flex justify-end",
                    input {
                        r#type: "search",
                        class: "input input-bordered input-sm w-full max-w-xs",
                        placeholder: "Filter",
                        value: "{query}",
                        oninput: move |evt| {
                            query.set(evt.value());
                            if state.peek().page != 0 {
                                state.write().page = 0;
                            }
                        },
                    }
                }
            }
            LazyTable::<T> {
                columns: config.columns().to_vec(),
                rows: view.rows,
                count: view.total,
                state: shown,
                loading,
                page_sizes: config.page_sizes().to_vec(),
                on_row_click,
                on_change: move |change: TableChange| state.set(change.state),
            }
        }
    }
}
