//! Column set of the Steam ban list.

use chrono::Utc;
use dioxus::prelude::*;

use crate::{
    client::component::table::{Align, Column, SortType},
    model::ban::SteamBanDto,
};

const PROFILE_URL: &str = "https://steamcommunity.com/profiles";

pub fn ban_columns() -> Vec<Column<SteamBanDto>> {
    vec![
        Column::field("#", "ban_id", |ban: &SteamBanDto| ban.ban_id.into())
            .tooltip("Ban ID")
            .sort_type(SortType::Number)
            .sortable()
            .align(Align::Left)
            .width("4rem"),
        Column::field("Source", "source_personaname", |ban: &SteamBanDto| {
            ban.source_personaname.as_str().into()
        })
        .tooltip("Moderator who issued the ban")
        .sortable()
        .align(Align::Left)
        .query_value(|ban| ban.source_personaname.clone()),
        Column::field("Target", "target_personaname", |ban: &SteamBanDto| {
            ban.target_personaname.as_str().into()
        })
        .tooltip("Banned player")
        .sortable()
        .align(Align::Left)
        .query_value(|ban| format!("{} {}", ban.target_personaname, ban.target_id))
        .renderer(|ban, _, _| {
            let name = ban.target_personaname.clone();
            let href = format!("{}/{}", PROFILE_URL, ban.target_id);
            rsx!(a {
                class: "link link-hover",
                href: "{href}",
                target: "_blank",
                "{name}"
            })
        }),
        Column::field("Reason", "reason_text", |ban: &SteamBanDto| {
            ban.reason_text.as_str().into()
        })
        .sortable()
        .align(Align::Left)
        .query_value(|ban| ban.reason_text.clone()),
        Column::field("Appeal", "appeal_state", |ban: &SteamBanDto| {
            i64::from(i8::from(ban.appeal_state)).into()
        })
        .tooltip("Appeal status")
        .sort_type(SortType::Number)
        .sortable()
        .align(Align::Center)
        .renderer(|ban, _, _| {
            let label = ban.appeal_state.label();
            rsx!(span { class: "badge badge-sm badge-outline whitespace-nowrap", "{label}" })
        }),
        Column::field("Friends", "include_friends", |ban: &SteamBanDto| {
            ban.include_friends.into()
        })
        .tooltip("Ban also applies to friends")
        .sort_type(SortType::Boolean)
        .sortable()
        .align(Align::Center),
        Column::field("Evade OK", "evade_ok", |ban: &SteamBanDto| ban.evade_ok.into())
            .tooltip("Evasion is tolerated")
            .sort_type(SortType::Boolean)
            .sortable()
            .align(Align::Center),
        Column::field("Created", "created_on", |ban: &SteamBanDto| ban.created_on.into())
            .sort_type(SortType::Date)
            .sortable(),
        Column::field("Expires", "valid_until", |ban: &SteamBanDto| {
            ban.valid_until.into()
        })
        .tooltip_with(|| format!("Expiry date, today is {}", Utc::now().format("%Y-%m-%d")))
        .sort_type(SortType::Date)
        .sortable()
        .cell_class(|ban| (ban.valid_until < Utc::now()).then(|| "opacity-50".to_string())),
        Column::computed("Days", "duration", |ban: &SteamBanDto| {
            (ban.valid_until - ban.created_on).num_days().into()
        })
        .tooltip("Length of the ban in days")
        .sort_type(SortType::Number),
    ]
}
