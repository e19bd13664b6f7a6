use super::ChampionTable;
use serde::Deserialize;
use std::collections::HashMap;

// Summoner V4 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub account_id: String,
}

// Match V4 matchlist response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchlistDto {
    #[serde(default)]
    pub matches: Vec<MatchReferenceDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReferenceDto {
    pub game_id: i64,
}

// Match V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub game_id: i64,
    #[serde(default)]
    pub queue_id: Option<i32>,
    pub participant_identities: Vec<ParticipantIdentityDto>,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantIdentityDto {
    pub participant_id: i32,
    pub player: PlayerDto,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub account_id: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub participant_id: i32,
    pub champion_id: i64,
    pub stats: ParticipantStatsDto,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ParticipantStatsDto {
    pub win: bool,
}

// Data Dragon realm response (versions.n.champion)
#[derive(Debug, Deserialize)]
pub struct RealmDto {
    pub n: HashMap<String, String>,
}

impl RealmDto {
    pub fn champion_version(&self) -> Option<&str> {
        self.n.get("champion").map(String::as_str)
    }
}

// Data Dragon Champion response
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub name: String,
    pub key: String,
}

impl DataDragonChampions {
    /// Numeric key to display name. Matches refer to champions by key.
    pub fn into_table(self) -> ChampionTable {
        self.data
            .into_values()
            .map(|champ| (champ.key, champ.name))
            .collect()
    }
}
