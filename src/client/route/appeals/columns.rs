use dioxus::prelude::*;

use crate::{
    client::component::table::{Align, Column, SortType},
    model::ban::{AppealState, SteamBanDto},
};

pub fn appeal_columns() -> Vec<Column<SteamBanDto>> {
    vec![
        Column::field("#", "ban_id", |ban: &SteamBanDto| ban.ban_id.into())
            .tooltip("Ban ID")
            .sort_type(SortType::Number)
            .sortable()
            .align(Align::Left),
        Column::field("Target", "target_personaname", |ban: &SteamBanDto| {
            ban.target_personaname.as_str().into()
        })
        .sortable()
        .align(Align::Left)
        .query_value(|ban| ban.target_personaname.clone()),
        Column::field("Reason", "reason_text", |ban: &SteamBanDto| {
            ban.reason_text.as_str().into()
        })
        .sortable()
        .align(Align::Left)
        .query_value(|ban| ban.reason_text.clone()),
        Column::field("Status", "appeal_state", |ban: &SteamBanDto| {
            i64::from(i8::from(ban.appeal_state)).into()
        })
        .sort_type(SortType::Number)
        .sortable()
        .align(Align::Center)
        .query_value(|ban| ban.appeal_state.label().to_string())
        .renderer(|ban, _, _| {
            let label = ban.appeal_state.label();
            let badge = appeal_badge(ban.appeal_state);
            rsx!(span { class: "badge badge-sm {badge} whitespace-nowrap", "{label}" })
        }),
        Column::field("Deleted", "deleted", |ban: &SteamBanDto| ban.deleted.into())
            .tooltip("Ban was lifted")
            .sort_type(SortType::Boolean)
            .sortable()
            .align(Align::Center),
        Column::field("Updated", "updated_on", |ban: &SteamBanDto| ban.updated_on.into())
            .tooltip("Last activity on the appeal")
            .sort_type(SortType::Date)
            .sortable(),
    ]
}

fn appeal_badge(state: AppealState) -> &'static str {
    match state {
        AppealState::Open => "badge-warning",
        AppealState::Denied => "badge-error",
        AppealState::Accepted => "badge-success",
        AppealState::Reduced => "badge-info",
        AppealState::NoAppeal => "badge-ghost",
    }
}
