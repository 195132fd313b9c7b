mod columns;
mod detail_modal;

pub use columns::ban_columns;
pub use detail_modal::BanDetailModal;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            table::{LazyTable, Order, TableChange, TableConfig, TableView},
            ErrorPage, Page,
        },
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::{api::LazyResultDto, ban::SteamBanDto},
};

#[cfg(feature = "web")]
use crate::{
    client::{api::get_steam_bans, component::table::fetch_page},
    model::query::QueryFilterDto,
};

/// Steam ban list. Sorting, paging and filtering happen on the server.
#[component]
pub fn SteamBans() -> Element {
    let config = use_hook(|| TableConfig::new(ban_columns(), "ban_id", Order::Descending));

    match config {
        Ok(config) => rsx!(SteamBanTable { config }),
        Err(err) => {
            tracing::error!("Invalid ban table configuration: {}", err);
            rsx!(ErrorPage { status: 500, message: err.to_string() })
        }
    }
}

#[component]
fn SteamBanTable(config: TableConfig<SteamBanDto>) -> Element {
    let initial = config.default_state().clone();
    let mut state = use_signal(move || initial);
    let mut query = use_signal(String::new);
    let mut show_deleted = use_signal(|| false);
    let mut loading = use_signal(|| true);
    let mut cache = use_signal(Cache::<LazyResultDto<SteamBanDto>>::default);
    let mut show_detail = use_signal(|| false);
    let mut selected = use_signal(|| None::<SteamBanDto>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let filter = QueryFilterDto {
            query: query(),
            deleted: show_deleted(),
            ..Default::default()
        };
        let current = state();
        loading.set(true);
        fetch_page(filter, &current, get_steam_bans).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(page) => {
                    let change = state.peek().reconcile(page.count);
                    if let Some(change) = change {
                        state.set(change.state);
                    }
                    cache.set(Cache::Fetched(page.clone()));
                }
                Err(err) => {
                    tracing::error!("Failed to fetch bans: {}", err);
                    cache.set(Cache::Error(err.clone()));
                }
            }
            loading.set(false);
        }
    });

    let page = cache.read().data().cloned().unwrap_or_default();
    let view = TableView::remote(page.data, page.count, &state());
    let error = cache.read().error().cloned();

    rsx! {
        Title { "Bans | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-7xl",
                div {
                    class: "flex flex-col sm:flex-row items-center justify-between gap-4 mb-6",
                    h1 {
                        class: "text-lg sm:text-2xl",
                        "Steam Bans"
                    }
                    div {
                        class: "flex items-center gap-4",
                        label {
                            class: "label cursor-pointer gap-2",
                            span { class: "label-text", "Show deleted" }
                            input {
                                r#type: "checkbox",
                                class: "toggle toggle-sm",
                                checked: show_deleted(),
                                onchange: move |evt| {
                                    show_deleted.set(evt.checked());
                                    if state.peek().page != 0 {
                                        state.write().page = 0;
                                    }
                                },
                            }
                        }
                        input {
                            r#type: "search",
                            class: "input input-bordered input-sm w-full max-w-xs",
                            placeholder: "Search",
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
                if let Some(err) = error {
                    div {
                        class: "alert alert-error mb-4",
                        span { "Failed to load bans: {err}" }
                    }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        LazyTable::<SteamBanDto> {
                            columns: config.columns().to_vec(),
                            rows: view.rows,
                            count: view.total,
                            state: state(),
                            loading: loading(),
                            page_sizes: config.page_sizes().to_vec(),
                            on_change: move |change: TableChange| state.set(change.state),
                            on_row_click: move |ban: SteamBanDto| {
                                selected.set(Some(ban));
                                show_detail.set(true);
                            },
                        }
                    }
                }
            }
        }
        BanDetailModal { show: show_detail, ban: selected() }
    }
}
