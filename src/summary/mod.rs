pub mod acs;
pub mod lpl;

use crate::champions::ChampionDirectory;
use crate::error::AppError;
use std::collections::HashMap;

/// Caller-supplied team aliases, e.g. `FW -> Flash Wolves`.
pub type TeamOverrides = HashMap<String, String>;

pub const BAN_SLOTS: usize = 5;
pub const PLAYERS_PER_SIDE: usize = 5;

/// Anything that can turn one upstream match into a [`MatchSummary`].
pub trait MatchAdapter {
    fn normalize(
        &self,
        champions: &ChampionDirectory,
        overrides: &TeamOverrides,
    ) -> Result<MatchSummary, AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Acs,
    Lpl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dragon {
    Fire,
    Water,
    Air,
    Earth,
    Elder,
}

impl Dragon {
    pub fn from_subtype(subtype: &str) -> Option<Self> {
        match subtype {
            "FIRE_DRAGON" => Some(Dragon::Fire),
            "WATER_DRAGON" => Some(Dragon::Water),
            "AIR_DRAGON" => Some(Dragon::Air),
            "EARTH_DRAGON" => Some(Dragon::Earth),
            "ELDER_DRAGON" => Some(Dragon::Elder),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragonSequence {
    /// Chronological kills read from a timeline.
    Timeline(Vec<Dragon>),
    /// Pre-aggregated text reported by the source as-is.
    Reported(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructureStats {
    pub towers: u32,
    pub inhibitors: u32,
    pub heralds: u32,
    pub barons: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub name: String,
    pub kills: u32,
    pub gold: u64,
    pub won: bool,
    pub bans: [String; BAN_SLOTS],
    pub structures: StructureStats,
    pub dragons: DragonSequence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRecord {
    pub name: String,
    #[allow(dead_code)]
    pub champion_id: i64,
    pub champion: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    /// Lane and neutral minions together.
    pub minions: u32,
    pub gold: u64,
    pub damage: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub source: SourceKind,
    pub patch: String,
    pub duration_secs: u32,
    pub date: String,
    pub blue: TeamSummary,
    pub red: TeamSummary,
    /// Always ten: blue at 0..5, red at 5..10.
    pub participants: Vec<ParticipantRecord>,
    pub max_damage: u64,
}

impl MatchSummary {
    pub fn blue_players(&self) -> &[ParticipantRecord] {
        &self.participants[..PLAYERS_PER_SIDE]
    }

    pub fn red_players(&self) -> &[ParticipantRecord] {
        &self.participants[PLAYERS_PER_SIDE..]
    }
}

/// Side-specific facts an adapter reads straight off its document.
#[derive(Debug)]
pub(crate) struct SideFacts {
    pub name: String,
    pub won: bool,
    pub bans: Vec<String>,
    pub structures: StructureStats,
    pub dragons: DragonSequence,
}

/// Game-level facts an adapter reads straight off its document.
#[derive(Debug)]
pub(crate) struct GameFacts {
    pub source: SourceKind,
    pub patch: String,
    pub duration_secs: u32,
    pub date: String,
}

/// Shared tail of both adapters: per-side sums, the damage maximum and
/// ban padding.
pub(crate) fn assemble(
    game: GameFacts,
    participants: Vec<ParticipantRecord>,
    blue: SideFacts,
    red: SideFacts,
) -> Result<MatchSummary, AppError> {
    if participants.len() != 2 * PLAYERS_PER_SIDE {
        return Err(AppError::MalformedDocument(format!(
            "expected 10 participants, found {}",
            participants.len()
        )));
    }

    let (blue_players, red_players) = participants.split_at(PLAYERS_PER_SIDE);
    let max_damage = participants.iter().map(|p| p.damage).max().unwrap_or(0);

    let team = |facts: SideFacts, players: &[ParticipantRecord]| TeamSummary {
        name: facts.name,
        kills: players.iter().map(|p| p.kills).sum(),
        gold: players.iter().map(|p| p.gold).sum(),
        won: facts.won,
        bans: pad_bans(facts.bans),
        structures: facts.structures,
        dragons: facts.dragons,
    };
    let blue = team(blue, blue_players);
    let red = team(red, red_players);

    Ok(MatchSummary {
        source: game.source,
        patch: game.patch,
        duration_secs: game.duration_secs,
        date: game.date,
        blue,
        red,
        participants,
        max_damage,
    })
}

/// Exactly five slots; missing ones are empty strings, extras are dropped.
pub fn pad_bans(bans: Vec<String>) -> [String; BAN_SLOTS] {
    let mut slots: [String; BAN_SLOTS] = Default::default();
    for (slot, ban) in slots.iter_mut().zip(bans) {
        *slot = ban;
    }
    slots
}

/// Gold bucketed to the nearest hundred and shown in thousands.
pub fn format_gold(gold: u64) -> String {
    let hundreds = (gold as f64 / 100.0).round();
    format!("{:.1}k", hundreds / 10.0)
}

pub fn format_duration(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
