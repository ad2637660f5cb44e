use super::*;
use crate::api::client::LplMatch;
use crate::api::models::{LplPlayer, LplSide};

/// Ban id LPL reports for an empty ban slot.
const NO_BAN_ID: i64 = 0;

/// One LPL match together with the roster table used to name its teams.
#[derive(Debug)]
pub struct LplGame<'a> {
    game: LplMatch,
    rosters: &'a HashMap<String, String>,
}

impl<'a> LplGame<'a> {
    pub fn new(game: LplMatch, rosters: &'a HashMap<String, String>) -> Self {
        LplGame { game, rosters }
    }

    /// Roster names always resolve; the override table only renames them.
    fn team_name(&self, roster_id: &str, overrides: &TeamOverrides) -> Result<String, AppError> {
        let roster_name = self.rosters.get(roster_id).ok_or_else(|| {
            AppError::MalformedDocument(format!("roster id {} missing from team list", roster_id))
        })?;
        Ok(overrides
            .get(roster_name)
            .unwrap_or(roster_name)
            .to_string())
    }
}

impl MatchAdapter for LplGame<'_> {
    fn normalize(
        &self,
        champions: &ChampionDirectory,
        overrides: &TeamOverrides,
    ) -> Result<MatchSummary, AppError> {
        let battle = &self.game.battle;
        let info = &self.game.match_info;

        let red_roster = if info.blue_team == info.team_a {
            &info.team_b
        } else {
            &info.team_a
        };

        let mut participants = side_players(&battle.left, "left", champions)?;
        participants.extend(side_players(&battle.right, "right", champions)?);

        let facts = GameFacts {
            source: SourceKind::Lpl,
            patch: String::new(),
            duration_secs: battle.game_period,
            date: battle.game_date.chars().take(10).collect(),
        };
        let blue = side_facts(
            &battle.left,
            self.team_name(&info.blue_team, overrides)?,
            battle.game_win == "left",
            champions,
        )?;
        let red = side_facts(
            &battle.right,
            self.team_name(red_roster, overrides)?,
            battle.game_win == "right",
            champions,
        )?;

        assemble(facts, participants, blue, red)
    }
}

fn side_players(
    side: &LplSide,
    label: &str,
    champions: &ChampionDirectory,
) -> Result<Vec<ParticipantRecord>, AppError> {
    if side.players.len() != PLAYERS_PER_SIDE {
        return Err(AppError::MalformedDocument(format!(
            "{} side has {} players",
            label,
            side.players.len()
        )));
    }
    side.players
        .iter()
        .map(|player| participant(player, champions))
        .collect()
}

fn participant(player: &LplPlayer, champions: &ChampionDirectory) -> Result<ParticipantRecord, AppError> {
    Ok(ParticipantRecord {
        name: player.name.clone(),
        champion_id: player.hero,
        champion: champions.resolve(player.hero)?.to_string(),
        kills: player.kill,
        deaths: player.death,
        assists: player.assist,
        // Only last hits are reported; neutral minions count as zero.
        minions: player.lasthit,
        gold: player.gold,
        damage: player.total_damage_to_champ,
    })
}

fn side_facts(
    side: &LplSide,
    name: String,
    won: bool,
    champions: &ChampionDirectory,
) -> Result<SideFacts, AppError> {
    let bans = side
        .bans()
        .iter()
        .map(|&id| match id {
            NO_BAN_ID => Ok(String::new()),
            id => champions.resolve(id).map(str::to_string),
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(SideFacts {
        name,
        won,
        bans,
        structures: StructureStats {
            towers: side.tower,
            inhibitors: 0,
            heralds: 0,
            barons: side.big_dragons,
        },
        dragons: DragonSequence::Reported(side.small_dragons.clone()),
    })
}
