use dioxus::prelude::*;

use super::column::Column;

#[component]
pub fn TableBody<T: Clone + PartialEq + 'static>(
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    loading: bool,
    #[props(!optional)] on_row_click: Option<EventHandler<T>>,
) -> Element {
    let span = columns.len().max(1);

    rsx! {
        tbody {
            if loading {
                tr {
                    td {
                        colspan: "{span}",
                        div {
                            class: "flex justify-center py-8",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    }
                }
            } else if rows.is_empty() {
                tr {
                    td {
                        colspan: "{span}",
                        class: "text-center py-8 opacity-50",
                        "No results"
                    }
                }
            } else {
                for (index, row) in rows.iter().enumerate() {
                    {
                        let clicked_row = row.clone();
                        rsx! {
                            tr {
                                key: "{index}",
                                class: if on_row_click.is_some() { "hover cursor-pointer" },
                                onclick: move |_| {
                                    if let Some(handler) = on_row_click {
                                        handler.call(clicked_row.clone());
                                    }
                                },
                                for (column_index, column) in columns.iter().enumerate() {
                                    TableCell::<T> {
                                        key: "{column_index}",
                                        column: column.clone(),
                                        row: row.clone(),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TableCell<T: Clone + PartialEq + 'static>(column: Column<T>, row: T) -> Element {
    let align = column.align.class();
    let extra = column.class_for(&row).unwrap_or_default();
    let style = column
        .width
        .as_ref()
        .map(|width| format!("width: {width}"))
        .unwrap_or_default();
    let content = column.render(&row).into_element();

    let on_click = column.click_handler();
    let clickable = on_click.is_some();

    rsx! {
        td {
            class: "{align} {extra}",
            class: if clickable { "cursor-pointer" },
            style: "{style}",
            onclick: move |evt| {
                if let Some(handler) = &on_click {
                    evt.stop_propagation();
                    handler(&row);
                }
            },
            {content}
        }
    }
}
