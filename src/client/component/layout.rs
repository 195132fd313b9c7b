use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

/// Shell shared by every screen: fixed header above the routed page.
#[component]
pub fn Layout() -> Element {
    rsx!(
        Header {}
        main {
            Outlet::<Route> {}
        }
    )
}
