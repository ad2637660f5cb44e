use super::*;
use crate::api::models::{AcsGame, AcsTeam, AcsTimeline};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

static PATCH_PREFIX: OnceLock<Regex> = OnceLock::new();

const WIN: &str = "Win";

/// A regional match-history game plus its timeline.
#[derive(Debug)]
pub struct AcsMatch {
    game: AcsGame,
    timeline: AcsTimeline,
}

impl AcsMatch {
    pub fn new(game: AcsGame, timeline: AcsTimeline) -> Self {
        AcsMatch { game, timeline }
    }
}

impl MatchAdapter for AcsMatch {
    fn normalize(
        &self,
        champions: &ChampionDirectory,
        overrides: &TeamOverrides,
    ) -> Result<MatchSummary, AppError> {
        let game = &self.game;
        let [blue_team, red_team] = game.teams.as_slice() else {
            return Err(AppError::MalformedDocument(format!(
                "expected 2 teams, found {}",
                game.teams.len()
            )));
        };
        if game.participant_identities.len() != game.participants.len() {
            return Err(AppError::MalformedDocument(format!(
                "{} participants but {} identities",
                game.participants.len(),
                game.participant_identities.len()
            )));
        }

        let participants = game
            .participants
            .iter()
            .zip(&game.participant_identities)
            .map(|(participant, identity)| {
                let stats = &participant.stats;
                Ok(ParticipantRecord {
                    name: identity.player.summoner_name.clone(),
                    champion_id: participant.champion_id,
                    champion: champions.resolve(participant.champion_id)?.to_string(),
                    kills: stats.kills,
                    deaths: stats.deaths,
                    assists: stats.assists,
                    minions: stats.total_minions_killed + stats.neutral_minions_killed,
                    gold: stats.gold_earned,
                    damage: stats.total_damage_dealt_to_champions,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let (blue_dragons, red_dragons) = dragon_kills(&self.timeline)?;

        let facts = GameFacts {
            source: SourceKind::Acs,
            patch: patch_version(&game.game_version)?,
            duration_secs: game.game_duration,
            date: game_date(game.game_creation)?,
        };
        let blue = side_facts(
            blue_team,
            team_name(&participants, 0, overrides),
            blue_dragons,
            champions,
        )?;
        let red = side_facts(
            red_team,
            team_name(&participants, PLAYERS_PER_SIDE, overrides),
            red_dragons,
            champions,
        )?;

        assemble(facts, participants, blue, red)
    }
}

fn side_facts(
    team: &AcsTeam,
    name: String,
    dragons: Vec<Dragon>,
    champions: &ChampionDirectory,
) -> Result<SideFacts, AppError> {
    let bans = team
        .bans
        .iter()
        .map(|ban| champions.resolve(ban.champion_id).map(str::to_string))
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(SideFacts {
        name,
        won: team.win == WIN,
        bans,
        structures: StructureStats {
            towers: team.tower_kills,
            inhibitors: team.inhibitor_kills,
            heralds: team.rift_herald_kills,
            barons: team.baron_kills,
        },
        dragons: DragonSequence::Timeline(dragons),
    })
}

/// Team tag is the first word of the side's first player name
/// (`"FW Maple"` -> `"FW"`). No override means no name.
fn team_name(participants: &[ParticipantRecord], first: usize, overrides: &TeamOverrides) -> String {
    participants
        .get(first)
        .and_then(|p| p.name.split(' ').next())
        .and_then(|tag| overrides.get(tag))
        .cloned()
        .unwrap_or_default()
}

pub fn patch_version(game_version: &str) -> Result<String, AppError> {
    let re = PATCH_PREFIX
        .get_or_init(|| Regex::new(r"^[0-9]+\.[0-9]+").expect("patch pattern is valid"));
    re.find(game_version)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            AppError::MalformedDocument(format!("gameVersion {:?} has no patch prefix", game_version))
        })
}

pub fn game_date(creation_ms: i64) -> Result<String, AppError> {
    DateTime::<Utc>::from_timestamp_millis(creation_ms)
        .map(|created| created.format("%Y-%m-%d").to_string())
        .ok_or_else(|| AppError::MalformedDocument(format!("gameCreation {} out of range", creation_ms)))
}

/// Dragon kills per side in timeline order. Killer ids below 5 are blue.
pub fn dragon_kills(timeline: &AcsTimeline) -> Result<(Vec<Dragon>, Vec<Dragon>), AppError> {
    let mut blue = Vec::new();
    let mut red = Vec::new();

    for event in timeline.frames.iter().flat_map(|frame| &frame.events) {
        if event.monster_type.as_deref() != Some("DRAGON") {
            continue;
        }
        let subtype = event.monster_sub_type.as_deref().unwrap_or_default();
        let dragon = Dragon::from_subtype(subtype).ok_or_else(|| {
            AppError::MalformedDocument(format!("unknown dragon type {:?}", subtype))
        })?;
        let killer = event
            .killer_id
            .ok_or_else(|| AppError::MalformedDocument("dragon kill without killerId".to_string()))?;

        if killer < 5 {
            blue.push(dragon);
        } else {
            red.push(dragon);
        }
    }

    Ok((blue, red))
}
