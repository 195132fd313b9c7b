pub mod ban;
pub mod helper;

pub use ban::{get_appeals, get_steam_bans};
