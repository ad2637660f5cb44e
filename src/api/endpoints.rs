// Endpoint roots and URL builders for every upstream the scoreboard talks to.

pub const DATA_DRAGON_ROOT: &str = "https://ddragon.leagueoflegends.com";
pub const LPL_MATCH_API: &str = "http://apps.game.qq.com/lol/match/apis";
pub const LPL_TEAM_LIST: &str = "http://lpl.qq.com/web201612/data/LOL_MATCH2_TEAM_LIST.js";
pub const BITLY_SHORTEN: &str = "https://api-ssl.bitly.com/v4/shorten";

pub fn versions_url() -> String {
    format!("{}/api/versions.json", DATA_DRAGON_ROOT)
}

pub fn champion_list_url(version: &str, locale: &str) -> String {
    format!("{}/cdn/{}/data/{}/champion.json", DATA_DRAGON_ROOT, version, locale)
}

pub fn acs_game_url(garena: bool, server: &str, game_id: &str, game_hash: Option<&str>) -> String {
    format!(
        "{}/v1/stats/game/{}/{}{}",
        acs_root(garena),
        server,
        game_id,
        hash_query(game_hash)
    )
}

pub fn acs_timeline_url(garena: bool, server: &str, game_id: &str, game_hash: Option<&str>) -> String {
    format!(
        "{}/v1/stats/game/{}/{}/timeline{}",
        acs_root(garena),
        server,
        game_id,
        hash_query(game_hash)
    )
}

pub fn lpl_board_matches_url(board_id: &str) -> String {
    format!("{}/searchSMatchList.php?p0={}&r1=SMatchListArr", LPL_MATCH_API, board_id)
}

pub fn lpl_match_info_url(match_id: &str) -> String {
    format!("{}/searchMatchInfo_s.php?p0={}&r1=MatchInfo", LPL_MATCH_API, match_id)
}

pub fn lpl_board_page_url(board_id: &str) -> String {
    format!("http://lpl.qq.com/es/stats.shtml?bmid={}", board_id)
}

fn acs_root(garena: bool) -> &'static str {
    if garena {
        "https://acs-garena.leagueoflegends.com"
    } else {
        "https://acs.leagueoflegends.com"
    }
}

fn hash_query(game_hash: Option<&str>) -> String {
    game_hash
        .map(|hash| format!("?gameHash={}", hash))
        .unwrap_or_default()
}
