mod api;
mod champions;
mod clipboard;
mod config;
mod display;
mod error;
mod summary;
mod url;

use api::client::MatchDataClient;
use champions::ChampionDirectory;
use clap::{ArgAction, Parser};
use config::Config;
use display::output::{display_error, display_info, display_scoreboards, display_success, display_warning};
use display::palette::Palette;
use display::scoreboard::Scoreboard;
use error::AppError;
use summary::acs::AcsMatch;
use summary::lpl::LplGame;
use summary::{MatchAdapter, TeamOverrides};
use url::{classify, MatchReference};

#[derive(Parser, Debug)]
#[command(name = "Match Scoreboard")]
#[command(about = "Render League of Legends match results as a terminal scoreboard", long_about = None)]
struct Args {
    /// Game number of the first match (default: 1)
    #[arg(short, long, default_value = "1")]
    number: u32,

    /// Team name override, repeatable. Example: -t FW "Flash Wolves"
    #[arg(short, long, num_args = 2, value_names = ["TAG", "NAME"], action = ArgAction::Append)]
    teams: Vec<String>,

    /// Bitly access token for short URLs (default: BITLY_TOKEN from .env)
    #[arg(short, long)]
    bitly_token: Option<String>,

    /// Render without ANSI colors
    #[arg(long)]
    plain: bool,

    /// Print only, do not copy to the clipboard
    #[arg(long)]
    no_clipboard: bool,

    /// Match-history URLs (regional match history or LPL board pages)
    #[arg(required = true)]
    urls: Vec<String>,
}

fn main() {
    if clipboard::is_helper() {
        clipboard::serve();
        return;
    }

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?.with_bitly_token(args.bitly_token.clone());
    let overrides = team_overrides(&args.teams);
    let client = MatchDataClient::new(config);

    display_info("Getting champion data...");
    let champions = ChampionDirectory::load(&client)?;
    display_success(&format!("Loaded {} champions", champions.len() - 1));

    let palette = if args.plain { Palette::PLAIN } else { Palette::ANSI };
    let mut session = Session {
        client: &client,
        champions: &champions,
        overrides: &overrides,
        board: Scoreboard::new(palette),
        output: String::new(),
        next_game: args.number,
    };

    for url in &args.urls {
        if let Err(e) = session.process(url) {
            // Scoreboards finished before the failure are still printed.
            if !session.output.is_empty() {
                display_scoreboards(&session.output);
                display_warning("Only the scoreboards above were completed");
            }
            return Err(e.for_reference(url));
        }
    }

    display_scoreboards(&session.output);

    if !args.no_clipboard {
        clipboard::copy(&session.output)?;
        display_success("Copied to clipboard!");
    }

    Ok(())
}

/// `-t FW "Flash Wolves" -t SKT T1` arrives flattened as tag/name pairs.
fn team_overrides(pairs: &[String]) -> TeamOverrides {
    pairs
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}

/// Names one match expanded from an LPL board in error reports.
fn board_match_reference(board_url: &str, match_id: &str) -> String {
    format!("{} (match {})", board_url, match_id)
}

struct Session<'a> {
    client: &'a MatchDataClient,
    champions: &'a ChampionDirectory,
    overrides: &'a TeamOverrides,
    board: Scoreboard,
    output: String,
    next_game: u32,
}

impl Session<'_> {
    fn process(&mut self, url: &str) -> Result<(), AppError> {
        let reference = classify(url)?;
        let short_url = self.shorten(&reference)?;

        match reference {
            MatchReference::Acs(acs) => {
                display_info("Fetching match history...");
                let game = self.client.get_acs_game(&acs.game_url())?;
                display_info("Getting timeline data...");
                let timeline = self.client.get_acs_timeline(&acs.timeline_url())?;
                self.append(&AcsMatch::new(game, timeline), short_url.as_deref())?;
            }
            MatchReference::Lpl { board_id, legacy } => {
                if legacy {
                    display_warning("Legacy lol.qq.com board URL, reading it from lpl.qq.com");
                }
                display_info(&format!("Listing matches on LPL board {}...", board_id));
                let match_ids = self.client.get_lpl_board_matches(&board_id)?;
                if match_ids.is_empty() {
                    display_warning(&format!("LPL board {} has no matches yet", board_id));
                    return Ok(());
                }
                display_info("Getting LPL teams...");
                let rosters = self.client.get_lpl_rosters()?;
                for match_id in match_ids {
                    display_info(&format!("Getting LPL match {}...", match_id));
                    self.client
                        .get_lpl_match(&match_id)
                        .and_then(|game| self.append(&LplGame::new(game, &rosters), short_url.as_deref()))
                        .map_err(|e| e.for_reference(&board_match_reference(url, &match_id)))?;
                }
            }
        }

        Ok(())
    }

    fn shorten(&self, reference: &MatchReference) -> Result<Option<String>, AppError> {
        let Some(token) = self.client.config().bitly_token.as_deref() else {
            return Ok(None);
        };
        display_info("Shortening URL...");
        self.client
            .shorten(token, &reference.canonical_url())
            .map(Some)
    }

    fn append(&mut self, adapter: &dyn MatchAdapter, short_url: Option<&str>) -> Result<(), AppError> {
        display_info("Preparing output...");
        let summary = adapter.normalize(self.champions, self.overrides)?;
        let rendered = self.board.render(&summary, self.next_game, short_url);
        self.output.push_str(&rendered);
        self.next_game += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_overrides_from_pairs() {
        let args = Args::parse_from([
            "match_scoreboard",
            "-t", "FW", "Flash Wolves",
            "--teams", "SKT", "SK Telecom T1",
            "http://lpl.qq.com/es/stats.shtml?bmid=1",
        ]);
        let overrides = team_overrides(&args.teams);
        assert_eq!(overrides.get("FW").map(String::as_str), Some("Flash Wolves"));
        assert_eq!(overrides.get("SKT").map(String::as_str), Some("SK Telecom T1"));
        assert_eq!(args.number, 1);
        assert_eq!(args.urls.len(), 1);
    }

    #[test]
    fn test_board_failure_names_the_match() {
        let url = "http://lpl.qq.com/es/stats.shtml?bmid=2100";
        let err = AppError::MalformedDocument("left side has 4 players".into())
            .for_reference(&board_match_reference(url, "5123"))
            .for_reference(url);
        assert_eq!(
            err.to_string(),
            "http://lpl.qq.com/es/stats.shtml?bmid=2100 (match 5123) failed during parse: \
             Malformed document: left side has 4 players"
        );
    }

    #[test]
    fn test_cli_requires_a_url() {
        assert!(Args::try_parse_from(["match_scoreboard", "-n", "3"]).is_err());
    }

    #[test]
    fn test_cli_flags() {
        let args = Args::parse_from([
            "match_scoreboard",
            "-n", "4",
            "-b", "token",
            "--plain",
            "--no-clipboard",
            "https://a",
            "https://b",
        ]);
        assert_eq!(args.number, 4);
        assert_eq!(args.bitly_token.as_deref(), Some("token"));
        assert!(args.plain);
        assert!(args.no_clipboard);
        assert_eq!(args.urls, vec!["https://a", "https://b"]);
    }
}
