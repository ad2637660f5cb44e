use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::{deserialize_number_from_string, deserialize_string_from_number};
use std::collections::HashMap;

// Data Dragon champion list
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub name: String,
    pub key: String,
}

// ACS match document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcsGame {
    pub game_creation: i64,
    pub game_duration: u32,
    pub game_version: String,
    pub participants: Vec<AcsParticipant>,
    pub participant_identities: Vec<AcsParticipantIdentity>,
    pub teams: Vec<AcsTeam>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcsParticipant {
    pub champion_id: i64,
    pub stats: AcsParticipantStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcsParticipantStats {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub gold_earned: u64,
    pub total_damage_dealt_to_champions: u64,
}

#[derive(Debug, Deserialize)]
pub struct AcsParticipantIdentity {
    pub player: AcsPlayer,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcsPlayer {
    pub summoner_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcsTeam {
    pub win: String,
    #[serde(default)]
    pub bans: Vec<AcsBan>,
    pub tower_kills: u32,
    pub inhibitor_kills: u32,
    pub rift_herald_kills: u32,
    pub baron_kills: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcsBan {
    pub champion_id: i64,
}

// ACS timeline document
#[derive(Debug, Deserialize)]
pub struct AcsTimeline {
    pub frames: Vec<AcsFrame>,
}

#[derive(Debug, Deserialize)]
pub struct AcsFrame {
    #[serde(default)]
    pub events: Vec<AcsEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcsEvent {
    #[serde(default)]
    pub monster_type: Option<String>,
    #[serde(default)]
    pub monster_sub_type: Option<String>,
    #[serde(default)]
    pub killer_id: Option<i64>,
}

// LPL documents arrive as `var X = {"msg": ...};`
#[derive(Debug, Deserialize)]
pub struct LplEnvelope<T> {
    pub msg: T,
}

#[derive(Debug, Deserialize)]
pub struct LplMatchListEntry {
    #[serde(rename = "sMatchId", deserialize_with = "deserialize_string_from_number")]
    pub match_id: String,
}

#[derive(Debug, Deserialize)]
pub struct LplTeam {
    #[serde(rename = "TeamId", deserialize_with = "deserialize_string_from_number")]
    pub team_id: String,
    #[serde(rename = "TeamName")]
    pub team_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LplMatchInfoMsg {
    #[serde(rename = "battleInfo")]
    pub battle_info: LplBattleInfo,
    #[serde(rename = "sMatchInfo")]
    pub match_info: LplMatchInfo,
}

#[derive(Debug, Deserialize)]
pub struct LplBattleInfo {
    /// JSON encoded a second time as a string.
    #[serde(rename = "BattleData")]
    pub battle_data: String,
}

#[derive(Debug, Deserialize)]
pub struct LplMatchInfo {
    #[serde(rename = "BlueTeam", deserialize_with = "deserialize_string_from_number")]
    pub blue_team: String,
    #[serde(rename = "TeamA", deserialize_with = "deserialize_string_from_number")]
    pub team_a: String,
    #[serde(rename = "TeamB", deserialize_with = "deserialize_string_from_number")]
    pub team_b: String,
}

#[derive(Debug, Deserialize)]
pub struct LplBattleData {
    #[serde(rename = "game-period", deserialize_with = "deserialize_number_from_string")]
    pub game_period: u32,
    #[serde(rename = "game-date")]
    pub game_date: String,
    #[serde(rename = "game-win")]
    pub game_win: String,
    pub left: LplSide,
    pub right: LplSide,
}

#[derive(Debug, Deserialize)]
pub struct LplSide {
    pub players: Vec<LplPlayer>,
    #[serde(rename = "ban-hero-1", default, deserialize_with = "deserialize_number_from_string")]
    pub ban_1: i64,
    #[serde(rename = "ban-hero-2", default, deserialize_with = "deserialize_number_from_string")]
    pub ban_2: i64,
    #[serde(rename = "ban-hero-3", default, deserialize_with = "deserialize_number_from_string")]
    pub ban_3: i64,
    #[serde(rename = "ban-hero-4", default, deserialize_with = "deserialize_number_from_string")]
    pub ban_4: i64,
    #[serde(rename = "ban-hero-5", default, deserialize_with = "deserialize_number_from_string")]
    pub ban_5: i64,
    #[serde(rename = "s-dragon", default, deserialize_with = "deserialize_string_from_number")]
    pub small_dragons: String,
    #[serde(rename = "b-dragon", deserialize_with = "deserialize_number_from_string")]
    pub big_dragons: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub tower: u32,
}

impl LplSide {
    pub fn bans(&self) -> [i64; 5] {
        [self.ban_1, self.ban_2, self.ban_3, self.ban_4, self.ban_5]
    }
}

#[derive(Debug, Deserialize)]
pub struct LplPlayer {
    pub name: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub hero: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub kill: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub death: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub assist: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub lasthit: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub gold: u64,
    #[serde(rename = "totalDamageToChamp", deserialize_with = "deserialize_number_from_string")]
    pub total_damage_to_champ: u64,
}

// Bitly v4
#[derive(Debug, Serialize)]
pub struct ShortenRequest<'a> {
    pub long_url: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ShortenResponse {
    pub link: String,
}
