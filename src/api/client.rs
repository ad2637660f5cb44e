use crate::config::Config;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use super::endpoints;
use super::models::*;

/// A parsed LPL match: the envelope plus its doubly-encoded battle data.
#[derive(Debug)]
pub struct LplMatch {
    pub match_info: LplMatchInfo,
    pub battle: LplBattleData,
}

pub struct MatchDataClient {
    config: Config,
}

impl MatchDataClient {
    pub fn new(config: Config) -> Self {
        MatchDataClient { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // One attempt only: a failed fetch aborts the current match reference.
    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        ureq::get(url)
            .set("User-Agent", &self.config.user_agent)
            .call()
            .map_err(|e| AppError::HttpError(format!("{}: {}", url, e)))?
            .into_string()
            .map_err(|e| AppError::HttpError(format!("{}: {}", url, e)))
    }

    pub fn get_latest_version(&self) -> Result<String, AppError> {
        let url = endpoints::versions_url();
        let body = self
            .execute_request(&url)
            .map_err(|e| AppError::LookupFailure(e.to_string()))?;
        let versions: Vec<String> = serde_json::from_str(&body)
            .map_err(|e| AppError::LookupFailure(format!("versions.json: {}", e)))?;

        versions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::LookupFailure("versions.json is empty".to_string()))
    }

    pub fn get_champion_list(&self, version: &str) -> Result<DataDragonChampions, AppError> {
        let url = endpoints::champion_list_url(version, &self.config.locale);
        let body = self
            .execute_request(&url)
            .map_err(|e| AppError::LookupFailure(e.to_string()))?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::LookupFailure(format!("champion.json: {}", e)))
    }

    pub fn get_acs_game(&self, url: &str) -> Result<AcsGame, AppError> {
        let body = self.execute_request(url)?;
        parse_document(&body, "match document")
    }

    pub fn get_acs_timeline(&self, url: &str) -> Result<AcsTimeline, AppError> {
        let body = self.execute_request(url)?;
        parse_document(&body, "timeline document")
    }

    /// Every match id belonging to an LPL board, in upstream order.
    pub fn get_lpl_board_matches(&self, board_id: &str) -> Result<Vec<String>, AppError> {
        let body = self.execute_request(&endpoints::lpl_board_matches_url(board_id))?;
        let envelope: LplEnvelope<Vec<LplMatchListEntry>> = parse_jsonp(&body, "board match list")?;
        Ok(envelope.msg.into_iter().map(|m| m.match_id).collect())
    }

    pub fn get_lpl_match(&self, match_id: &str) -> Result<LplMatch, AppError> {
        let body = self.execute_request(&endpoints::lpl_match_info_url(match_id))?;
        parse_lpl_match(&body)
    }

    /// Roster id -> roster name.
    pub fn get_lpl_rosters(&self) -> Result<HashMap<String, String>, AppError> {
        let body = self.execute_request(endpoints::LPL_TEAM_LIST)?;
        parse_lpl_rosters(&body)
    }

    pub fn shorten(&self, token: &str, long_url: &str) -> Result<String, AppError> {
        let response = ureq::post(endpoints::BITLY_SHORTEN)
            .set("User-Agent", &self.config.user_agent)
            .set("Authorization", &format!("Bearer {}", token))
            .send_json(ShortenRequest { long_url })
            .map_err(|e| AppError::ShortenerError(e.to_string()))?;

        let shortened: ShortenResponse = response
            .into_json()
            .map_err(|e| AppError::ShortenerError(e.to_string()))?;
        Ok(shortened.link)
    }
}

pub fn parse_document<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::MalformedDocument(format!("{}: {}", what, e)))
}

/// Strip a `var name = {...};` wrapper and parse what is inside.
pub fn parse_jsonp<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, AppError> {
    let (_, payload) = body
        .split_once('=')
        .ok_or_else(|| AppError::MalformedDocument(format!("{}: not a JSONP assignment", what)))?;
    let payload = payload.trim();
    let payload = payload.strip_suffix(';').unwrap_or(payload);
    parse_document(payload, what)
}

pub fn parse_lpl_match(body: &str) -> Result<LplMatch, AppError> {
    let envelope: LplEnvelope<LplMatchInfoMsg> = parse_jsonp(body, "LPL match info")?;
    let battle = parse_document(&envelope.msg.battle_info.battle_data, "LPL battle data")?;
    Ok(LplMatch {
        match_info: envelope.msg.match_info,
        battle,
    })
}

pub fn parse_lpl_rosters(body: &str) -> Result<HashMap<String, String>, AppError> {
    let envelope: LplEnvelope<HashMap<String, LplTeam>> = parse_jsonp(body, "LPL team list")?;
    Ok(envelope
        .msg
        .into_values()
        .map(|team| (team.team_id, team.team_name))
        .collect())
}
