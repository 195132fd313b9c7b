use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaSort, FaSortDown, FaSortUp},
    Icon,
};

use super::{
    column::Column,
    order::Order,
    state::{TableChange, TableState},
};

#[component]
pub fn TableHeader<T: Clone + PartialEq + 'static>(
    columns: Vec<Column<T>>,
    state: TableState,
    on_change: EventHandler<TableChange>,
) -> Element {
    rsx! {
        thead {
            tr {
                for (index, column) in columns.iter().enumerate() {
                    {
                        let change = state.header_clicked(column);
                        let is_active = column.sort_key() == Some(state.sort_column.as_str());
                        let tooltip = column.tooltip_text();
                        let align = column.align.class();
                        let style = column
                            .width
                            .as_ref()
                            .map(|width| format!("width: {width}"))
                            .unwrap_or_default();
                        let label = column.label.clone();

                        rsx! {
                            th {
                                key: "{index}",
                                class: "{align}",
                                style: "{style}",
                                div {
                                    class: "tooltip tooltip-bottom",
                                    "data-tip": "{tooltip}",
                                    if let Some(change) = change {
                                        button {
                                            class: "flex items-center gap-2 hover:opacity-70 transition-opacity",
                                            onclick: move |_| on_change.call(change.clone()),
                                            span {
                                                class: "whitespace-nowrap",
                                                "{label}"
                                            }
                                            SortIcon { active: is_active, order: state.order }
                                        }
                                    } else {
                                        span {
                                            class: "whitespace-nowrap",
                                            "{label}"
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
}

#[component]
fn SortIcon(active: bool, order: Order) -> Element {
    if !active {
        return rsx!(Icon {
            class: "opacity-30".to_string(),
            width: 12,
            height: 12,
            icon: FaSort
        });
    }

    match order {
        Order::Ascending => rsx!(Icon {
            width: 12,
            height: 12,
            icon: FaSortUp
        }),
        Order::Descending => rsx!(Icon {
            width: 12,
            height: 12,
            icon: FaSortDown
        }),
    }
}
