use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaGavel, Icon};

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        Link {
            to: Route::SteamBans {},
            class: "flex items-center gap-3",
            Icon {
                width: 28,
                height: 28,
                icon: FaGavel
            }
            p {
                class: "md:text-xl text-wrap",
                {SITE_NAME}
            }
        }
        nav {
            class: "flex items-center gap-2",
            Link {
                to: Route::SteamBans {},
                class: "btn btn-ghost",
                active_class: "btn-active",
                "Bans"
            }
            Link {
                to: Route::Appeals {},
                class: "btn btn-ghost",
                active_class: "btn-active",
                "Appeals"
            }
        }
    })
}
