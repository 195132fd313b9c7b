use dioxus::prelude::*;

use super::Modal;
use crate::client::component::table::page_count;

#[derive(Clone, Debug, PartialEq)]
pub struct PaginationData {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationData {
    pub fn new(page: u64, per_page: u64, total: u64) -> Self {
        Self {
            page,
            per_page,
            total,
            total_pages: page_count(total, per_page),
        }
    }

    /// 1-based number of the first row shown, 0 when nothing is shown.
    pub fn first_row(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        (self.page.saturating_mul(self.per_page) + 1).min(self.total)
    }

    /// 1-based number of the last row shown.
    pub fn last_row(&self) -> u64 {
        (self.page + 1).saturating_mul(self.per_page).min(self.total)
    }

    pub fn last_page(&self) -> u64 {
        self.total_pages.saturating_sub(1)
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.last_page()
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {}",
            self.first_row(),
            self.last_row(),
            self.total
        )
    }
}

#[component]
pub fn Pagination(
    data: PaginationData,
    page_sizes: Vec<u64>,
    on_page_change: EventHandler<u64>,
    on_per_page_change: EventHandler<u64>,
) -> Element {
    let mut show_page_jump = use_signal(|| false);
    let mut jump_page_input = use_signal(String::new);

    let page = data.page;
    let last_page = data.last_page();
    let total_pages = data.total_pages.max(1);

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{data.per_page}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            on_per_page_change.call(value);
                        }
                    },
                    for size in page_sizes.iter() {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: *size == data.per_page,
                            "{size}"
                        }
                    }
                }
                span { "entries" }
            }

            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "{data.summary()}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.is_first(),
                        onclick: move |_| on_page_change.call(0),
                        "«"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.is_first(),
                        onclick: move |_| on_page_change.call(page.saturating_sub(1)),
                        "‹"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        onclick: move |_| {
                            jump_page_input.set((page + 1).to_string());
                            show_page_jump.set(true);
                        },
                        "Page {page + 1} of {total_pages}"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.is_last(),
                        onclick: move |_| on_page_change.call(page + 1),
                        "›"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.is_last(),
                        onclick: move |_| on_page_change.call(last_page),
                        "»"
                    }
                }
            }
        }

        Modal {
            show: show_page_jump,
            title: "Jump to Page".to_string(),
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Some(target) = parse_page_input(&jump_page_input(), total_pages) {
                        on_page_change.call(target);
                        show_page_jump.set(false);
                    }
                },
                div {
                    class: "form-control w-full flex flex-col gap-3",
                    label {
                        class: "label",
                        span {
                            class: "label-text",
                            "Page number (1-{total_pages})"
                        }
                    }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        min: "1",
                        max: "{total_pages}",
                        value: "{jump_page_input()}",
                        oninput: move |evt| jump_page_input.set(evt.value()),
                        autofocus: true,
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show_page_jump.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        "Jump"
                    }
                }
            }
        }
    )
}

/// Converts a 1-based page number typed by the user into a 0-based page.
///
/// Returns `None` for anything that isn't a page between 1 and `total_pages`.
fn parse_page_input(input: &str, total_pages: u64) -> Option<u64> {
    let target = input.trim().parse::<u64>().ok()?;
    if target == 0 || target > total_pages {
        return None;
    }
    Some(target - 1)
}
