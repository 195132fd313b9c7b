pub const SITE_NAME: &str = "Mod Panel";

/// Base path of the moderation API, overridable at build time with `MODPANEL_API_BASE`.
pub const API_BASE: &str = match option_env!("MODPANEL_API_BASE") {
    Some(base) => base,
    None => "/api",
};
