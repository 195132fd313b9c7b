pub mod appeals;
pub mod bans;
pub mod not_found;

pub use appeals::Appeals;
pub use bans::SteamBans;
pub use not_found::NotFound;
