use crate::api::endpoints;
use crate::error::AppError;
use regex::Regex;
use std::sync::OnceLock;

static ACS_URL: OnceLock<Regex> = OnceLock::new();
static LPL_URL: OnceLock<Regex> = OnceLock::new();
static LPL_LEGACY_URL: OnceLock<Regex> = OnceLock::new();

// Sites served by the Garena-hosted ACS mirror.
const GARENA_PREFIXES: [&str; 6] = ["id", "ph", "sg", "tw", "th", "vn"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSuffix {
    /// `/123456` after the game id
    Id(String),
    /// `?gameHash=abc` after the game id
    Hash(String),
}

/// A match-history page on one of the regional `matchhistory.*` sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcsReference {
    pub site: String,
    pub lang: String,
    pub server: String,
    pub game_id: String,
    pub suffix: GameSuffix,
}

impl AcsReference {
    pub fn is_garena(&self) -> bool {
        GARENA_PREFIXES.iter().any(|p| self.site.starts_with(p))
    }

    fn game_hash(&self) -> Option<&str> {
        match &self.suffix {
            GameSuffix::Hash(hash) => Some(hash),
            GameSuffix::Id(_) => None,
        }
    }

    pub fn canonical_url(&self) -> String {
        let suffix = match &self.suffix {
            GameSuffix::Id(id) => format!("/{}", id),
            GameSuffix::Hash(hash) => format!("?gameHash={}", hash),
        };
        format!(
            "https://matchhistory.{}/{}/#match-details/{}/{}{}",
            self.site, self.lang, self.server, self.game_id, suffix
        )
    }

    pub fn game_url(&self) -> String {
        endpoints::acs_game_url(self.is_garena(), &self.server, &self.game_id, self.game_hash())
    }

    pub fn timeline_url(&self) -> String {
        endpoints::acs_timeline_url(self.is_garena(), &self.server, &self.game_id, self.game_hash())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReference {
    Acs(AcsReference),
    /// An LPL board; expands into every match played in it.
    Lpl { board_id: String, legacy: bool },
}

impl MatchReference {
    pub fn canonical_url(&self) -> String {
        match self {
            MatchReference::Acs(acs) => acs.canonical_url(),
            MatchReference::Lpl { board_id, .. } => endpoints::lpl_board_page_url(board_id),
        }
    }
}

pub fn classify(url: &str) -> Result<MatchReference, AppError> {
    let acs = ACS_URL.get_or_init(|| {
        Regex::new(
            r"^https?://matchhistory\.(?P<site>[a-z]+\.leagueoflegends\.com|leagueoflegends\.co\.kr)/(?P<lang>[a-z]+)/#match-details/(?P<server>[0-9A-Z]+)/(?P<id1>[0-9]+)(?:/(?P<id2>[0-9]+)|\?gameHash=(?P<hash>[0-9a-z]+))",
        )
        .expect("ACS URL pattern is valid")
    });
    if let Some(caps) = acs.captures(url) {
        let suffix = match (caps.name("id2"), caps.name("hash")) {
            (Some(id), _) => GameSuffix::Id(id.as_str().to_string()),
            (None, Some(hash)) => GameSuffix::Hash(hash.as_str().to_string()),
            (None, None) => return Err(AppError::UnrecognizedUrl(url.to_string())),
        };
        return Ok(MatchReference::Acs(AcsReference {
            site: caps["site"].to_string(),
            lang: caps["lang"].to_string(),
            server: caps["server"].to_string(),
            game_id: caps["id1"].to_string(),
            suffix,
        }));
    }

    let lpl = LPL_URL.get_or_init(|| {
        Regex::new(r"^http://lpl\.qq\.com/es/stats\.shtml\?bmid=(?P<id>[0-9]+)$")
            .expect("LPL URL pattern is valid")
    });
    if let Some(caps) = lpl.captures(url) {
        return Ok(MatchReference::Lpl {
            board_id: caps["id"].to_string(),
            legacy: false,
        });
    }

    let legacy = LPL_LEGACY_URL.get_or_init(|| {
        Regex::new(r"^http://lol\.qq\.com/match/match_data\.shtml\?bmid=(?P<id>[0-9]+)$")
            .expect("legacy LPL URL pattern is valid")
    });
    if let Some(caps) = legacy.captures(url) {
        return Ok(MatchReference::Lpl {
            board_id: caps["id"].to_string(),
            legacy: true,
        });
    }

    Err(AppError::UnrecognizedUrl(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_acs_with_game_hash() {
        let url = "https://matchhistory.euw.leagueoflegends.com/en/#match-details/TRLH1/1002440062?gameHash=a0b1c2d3e4f5&tab=overview";
        let reference = classify(url).unwrap();
        let MatchReference::Acs(acs) = reference else {
            panic!("expected an ACS reference");
        };
        assert_eq!(acs.site, "euw.leagueoflegends.com");
        assert_eq!(acs.lang, "en");
        assert_eq!(acs.server, "TRLH1");
        assert_eq!(acs.game_id, "1002440062");
        assert_eq!(acs.suffix, GameSuffix::Hash("a0b1c2d3e4f5".to_string()));
        assert!(!acs.is_garena());
        assert_eq!(
            acs.canonical_url(),
            "https://matchhistory.euw.leagueoflegends.com/en/#match-details/TRLH1/1002440062?gameHash=a0b1c2d3e4f5"
        );
        assert_eq!(
            acs.timeline_url(),
            "https://acs.leagueoflegends.com/v1/stats/game/TRLH1/1002440062/timeline?gameHash=a0b1c2d3e4f5"
        );
    }

    #[test]
    fn test_classify_garena_with_account_id() {
        let url = "http://matchhistory.tw.leagueoflegends.com/zh/#match-details/TW/123456/7890";
        let MatchReference::Acs(acs) = classify(url).unwrap() else {
            panic!("expected an ACS reference");
        };
        assert!(acs.is_garena());
        assert_eq!(acs.suffix, GameSuffix::Id("7890".to_string()));
        assert_eq!(
            acs.game_url(),
            "https://acs-garena.leagueoflegends.com/v1/stats/game/TW/123456"
        );
        assert_eq!(
            acs.canonical_url(),
            "https://matchhistory.tw.leagueoflegends.com/zh/#match-details/TW/123456/7890"
        );
    }

    #[test]
    fn test_classify_korean_site() {
        let url = "http://matchhistory.leagueoflegends.co.kr/ko/#match-details/KR/3000/4000";
        let MatchReference::Acs(acs) = classify(url).unwrap() else {
            panic!("expected an ACS reference");
        };
        assert_eq!(acs.site, "leagueoflegends.co.kr");
        assert!(!acs.is_garena());
    }

    #[test]
    fn test_classify_lpl_shapes() {
        assert_eq!(
            classify("http://lpl.qq.com/es/stats.shtml?bmid=2100").unwrap(),
            MatchReference::Lpl { board_id: "2100".to_string(), legacy: false }
        );
        let legacy = classify("http://lol.qq.com/match/match_data.shtml?bmid=1800").unwrap();
        assert_eq!(
            legacy,
            MatchReference::Lpl { board_id: "1800".to_string(), legacy: true }
        );
        assert_eq!(legacy.canonical_url(), "http://lpl.qq.com/es/stats.shtml?bmid=1800");
    }

    #[test]
    fn test_unrecognized_url() {
        for url in [
            "https://example.com/match/1",
            "http://lpl.qq.com/es/stats.shtml?bmid=12&x=1",
            "https://matchhistory.euw.leagueoflegends.com/en/#match-details/TRLH1/100",
        ] {
            assert!(matches!(classify(url), Err(AppError::UnrecognizedUrl(_))), "{}", url);
        }
    }
}
