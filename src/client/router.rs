use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Appeals, NotFound, SteamBans};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    SteamBans {},

    #[route("/appeals")]
    Appeals {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
