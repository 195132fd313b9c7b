use dioxus::prelude::*;

use crate::{client::component::Modal, model::ban::SteamBanDto};

#[component]
pub fn BanDetailModal(show: Signal<bool>, ban: Option<SteamBanDto>) -> Element {
    let title = ban
        .as_ref()
        .map(|ban| format!("Ban #{}", ban.ban_id))
        .unwrap_or_default();

    rsx!(
        Modal {
            show,
            title,
            if let Some(ban) = ban {
                dl {
                    class: "grid grid-cols-3 gap-2 text-sm",
                    dt { class: "opacity-70", "Target" }
                    dd { class: "col-span-2", "{ban.target_personaname} ({ban.target_id})" }
                    dt { class: "opacity-70", "Issued by" }
                    dd { class: "col-span-2", "{ban.source_personaname}" }
                    dt { class: "opacity-70", "Reason" }
                    dd { class: "col-span-2", "{ban.reason_text}" }
                    dt { class: "opacity-70", "Appeal" }
                    dd { class: "col-span-2", "{ban.appeal_state.label()}" }
                    dt { class: "opacity-70", "Expires" }
                    dd { class: "col-span-2 font-mono", {ban.valid_until.format("%Y-%m-%d %H:%M").to_string()} }
                    if !ban.note.is_empty() {
                        dt { class: "opacity-70", "Note" }
                        dd { class: "col-span-2 whitespace-pre-wrap", "{ban.note}" }
                    }
                }
            }
        }
    )
}
