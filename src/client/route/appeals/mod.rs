mod columns;

pub use columns::appeal_columns;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            table::{compare, stable_sort, DataTable, Order, TableConfig},
            ErrorPage, LoadingPage, Page,
        },
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::ban::{AppealState, SteamBanDto},
};

#[cfg(feature = "web")]
use crate::client::api::get_appeals;

/// Appeal list. The whole list is fetched once and sorted, filtered and paged locally.
#[component]
pub fn Appeals() -> Element {
    let mut cache = use_signal(Cache::<Vec<SteamBanDto>>::default);
    let config = use_hook(|| TableConfig::new(appeal_columns(), "updated_on", Order::Descending));

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_appeals().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(appeals) => cache.set(Cache::Fetched(appeals.clone())),
                Err(err) => {
                    tracing::error!("Failed to fetch appeals: {}", err);
                    cache.set(Cache::Error(err.clone()));
                }
            }
        }
    });

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid appeal table configuration: {}", err);
            return rsx!(ErrorPage { status: 500, message: err.to_string() });
        }
    };

    let appeals = cache.read().data().cloned();
    let pre_select_index = appeals
        .as_deref()
        .and_then(|appeals| first_open_appeal(&config, appeals));
    let error = cache.read().error().cloned();

    rsx! {
        Title { "Appeals | {SITE_NAME}" }
        if let Some(appeals) = appeals {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-6xl",
                    h1 {
                        class: "text-lg sm:text-2xl mb-6",
                        "Appeals"
                    }
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            DataTable::<SteamBanDto> {
                                pre_select_index,
                                config,
                                rows: appeals,
                            }
                        }
                    }
                }
            }
        } else if let Some(err) = error {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

/// Position of the first open appeal in the table's default order.
fn first_open_appeal(config: &TableConfig<SteamBanDto>, appeals: &[SteamBanDto]) -> Option<u64> {
    let state = config.default_state();
    let column = config.sort_column(state)?;
    stable_sort(appeals, compare(state.order, column))
        .iter()
        .position(|ban| ban.appeal_state == AppealState::Open)
        .map(|index| index as u64)
}
