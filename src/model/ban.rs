use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Appeal progress of a ban, sent by the API as a small integer.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[serde(try_from = "i8", into = "i8")]
pub enum AppealState {
    Open,
    Denied,
    Accepted,
    Reduced,
    #[default]
    NoAppeal,
}

impl AppealState {
    pub fn label(self) -> &'static str {
        match self {
            AppealState::Open => "Open",
            AppealState::Denied => "Denied",
            AppealState::Accepted => "Accepted",
            AppealState::Reduced => "Reduced",
            AppealState::NoAppeal => "No Appeal",
        }
    }
}

impl TryFrom<i8> for AppealState {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AppealState::Open),
            1 => Ok(AppealState::Denied),
            2 => Ok(AppealState::Accepted),
            3 => Ok(AppealState::Reduced),
            4 => Ok(AppealState::NoAppeal),
            other => Err(format!("invalid appeal state: {}", other)),
        }
    }
}

impl From<AppealState> for i8 {
    fn from(state: AppealState) -> Self {
        match state {
            AppealState::Open => 0,
            AppealState::Denied => 1,
            AppealState::Accepted => 2,
            AppealState::Reduced => 3,
            AppealState::NoAppeal => 4,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SteamBanDto {
    pub ban_id: i64,
    #[serde(default)]
    pub report_id: i64,
    pub source_id: String,
    pub source_personaname: String,
    pub target_id: String,
    pub target_personaname: String,
    pub reason_text: String,
    #[serde(default)]
    pub note: String,
    pub deleted: bool,
    pub include_friends: bool,
    pub evade_ok: bool,
    pub appeal_state: AppealState,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}
