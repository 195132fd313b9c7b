use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Moderation panel for Steam bans and appeals"
        }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/daisyui@4/dist/full.min.css" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
