use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    #[serde(default, deserialize_with = "string_or_number")]
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Player {
    pub id: u64, // ID from the player-data service.
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub height: Option<String>, // i.g., "6-9"
    #[serde(default, deserialize_with = "string_or_number")]
    pub weight: Option<String>, // pounds, without the unit.
    #[serde(default, deserialize_with = "string_or_number")]
    pub jersey_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub college: Option<String>,
    #[serde(default)]
    pub draft_year: Option<u32>,
    #[serde(default)]
    pub draft_round: Option<u32>,
    #[serde(default)]
    pub draft_number: Option<u32>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team.as_ref().and_then(|team| team.full_name.as_deref())
    }
}

// The normalized list driving the render layer, whatever the search mode was.
pub type ResultSet = Vec<Player>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SearchMode {
    #[default]
    #[serde(rename = "name", alias = "by_name")]
    ByName,
    #[serde(rename = "id", alias = "by_id")]
    ById,
}

impl FromStr for SearchMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SearchMode::ByName),
            "id" => Ok(SearchMode::ById),
            other => Err(AppError::ValidationError {
                msg: format!("unknown search mode '{}', expected 'name' or 'id'", other),
            }),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchMode::ByName => write!(f, "name"),
            SearchMode::ById => write!(f, "id"),
        }
    }
}

// Body of `GET /players?search=...`.
#[derive(Debug, Deserialize)]
pub struct PlayerListResponse {
    #[serde(default)]
    pub data: Option<Vec<Player>>,
}

// Body of `GET /players/{id}`.
#[derive(Debug, Deserialize)]
pub struct PlayerRecordResponse {
    #[serde(default, deserialize_with = "optional_record")]
    pub data: Option<Player>,
}

// The two shapes the service answers with, before normalization.
#[derive(Debug)]
pub enum PlayersResponse {
    List(PlayerListResponse),
    Single(PlayerRecordResponse),
}

impl PlayersResponse {
    pub fn into_result_set(self) -> ResultSet {
        match self {
            PlayersResponse::List(response) => response.data.unwrap_or_default(),
            PlayersResponse::Single(response) => response.data.into_iter().collect(),
        }
    }
}

// The service is not consistent about scalar types (weight can be "240" or 240)
// and uses empty strings for unknown values. Both collapse to an optional string.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// A missing, null or empty `data` object means the service has no record.
fn optional_record<'de, D>(deserializer: D) -> Result<Option<Player>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Deserialize::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => Player::deserialize(value).map(Some).map_err(D::Error::custom),
    }
}
