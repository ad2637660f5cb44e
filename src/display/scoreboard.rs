use super::bar_chart::damage_bar;
use super::palette::Palette;
use crate::summary::{
    format_duration, format_gold, Dragon, DragonSequence, MatchSummary, ParticipantRecord,
    SourceKind, StructureStats, TeamSummary,
};
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 16;
const BAN_WIDTH: usize = 10;
const HALF_WIDTH: usize = 19;
const BANNER_WIDTH: usize = 24;
const DRAGON_COLUMN_WIDTH: usize = 32;
const SHORT_URL_WIDTH: usize = 26;

const VICTORY_LABEL: &str = "  勝利  ";
const DEFEAT_LABEL: &str = "  戰敗  ";
const COLUMN_HEADER: &str = "K  D  A   CS  $/Dmg";
const BANS_LABEL: &str = "禁用";
const DRAGONS_LABEL: &str = "小龍";

/// Renders match summaries into the fixed-width text block that gets printed
/// and copied.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scoreboard {
    palette: Palette,
}

impl Scoreboard {
    pub fn new(palette: Palette) -> Self {
        Scoreboard { palette }
    }

    pub fn render(&self, summary: &MatchSummary, game_number: u32, short_url: Option<&str>) -> String {
        let p = &self.palette;
        let mut out = String::new();

        out.push_str(&format!(
            "{}Game {:>2}{} {}┬{} {}\n",
            p.game_badge,
            game_number,
            p.reset,
            "─".repeat(15),
            "─".repeat(13),
            summary.date
        ));
        out.push_str(&self.team_banner(&summary.blue, &summary.red));
        out.push_str(&self.result_banner(summary));
        out.push_str(&divider('┼'));

        let header = format!("{}{}{}{}", spaces(18), p.column_header, COLUMN_HEADER, p.reset);
        out.push_str(&format!("{} │ {}\n", header, header));

        for (blue, red) in summary.blue_players().iter().zip(summary.red_players()) {
            out.push_str(&format!(
                "{}{}{} │ {}{}{}\n",
                p.blue_text,
                stats_line(blue),
                p.reset,
                p.red_text,
                stats_line(red),
                p.reset
            ));
            out.push_str(&format!(
                "{} │ {}\n",
                champion_line(blue, summary.max_damage),
                champion_line(red, summary.max_damage)
            ));
        }

        out.push_str(&divider('┼'));
        out.push_str(&bans_block(&summary.blue.bans, &summary.red.bans));
        out.push_str(&format!(
            "{} {} │ {} {}\n",
            DRAGONS_LABEL,
            self.dragon_cell(&summary.blue.dragons, true),
            DRAGONS_LABEL,
            self.dragon_cell(&summary.red.dragons, false)
        ));
        out.push_str(&structures_line(summary.source, &summary.blue.structures, &summary.red.structures));
        out.push_str(&footer(short_url));

        out
    }

    fn team_banner(&self, blue: &TeamSummary, red: &TeamSummary) -> String {
        let p = &self.palette;
        let blue_width = blue.name.width();
        let blue_lead = centered_lead(blue_width);
        let blue_trail = BANNER_WIDTH.saturating_sub(blue_lead + blue_width);
        let red_lead = centered_lead(red.name.width());

        format!(
            "{}{}{}{}{}{:>6}    {}{:>2}{}  │  {}{:>2}{}    {:<6}{}{}{}{}\n",
            spaces(blue_lead),
            p.blue_banner,
            blue.name,
            p.reset,
            spaces(blue_trail),
            format_gold(blue.gold),
            p.blue_text,
            blue.kills,
            p.reset,
            p.red_text,
            red.kills,
            p.reset,
            format_gold(red.gold),
            spaces(red_lead),
            p.red_banner,
            red.name,
            p.reset
        )
    }

    fn result_banner(&self, summary: &MatchSummary) -> String {
        let middle = match summary.source {
            SourceKind::Acs => format!("PATCH{:>6}", summary.patch),
            SourceKind::Lpl => spaces(11),
        };
        format!(
            "{}{}{}{}  │  {}{}{}\n",
            spaces(8),
            self.result_badge(summary.blue.won),
            spaces(9),
            middle,
            format_duration(summary.duration_secs),
            spaces(15),
            self.result_badge(summary.red.won)
        )
    }

    fn result_badge(&self, won: bool) -> String {
        let p = &self.palette;
        if won {
            format!("{}{}{}", p.victory, VICTORY_LABEL, p.reset)
        } else {
            format!("{}{}{}", p.defeat, DEFEAT_LABEL, p.reset)
        }
    }

    /// The blue cell is padded so the divider lines up whatever the count.
    fn dragon_cell(&self, dragons: &DragonSequence, pad: bool) -> String {
        let (text, width) = match dragons {
            DragonSequence::Timeline(kills) => {
                let text: String = kills
                    .iter()
                    .map(|dragon| {
                        format!("{}{}{}", self.palette.dragon(*dragon), dragon_glyph(*dragon), self.palette.reset)
                    })
                    .collect();
                (text, kills.iter().map(|d| dragon_glyph(*d).width()).sum())
            }
            DragonSequence::Reported(text) => (text.clone(), text.width()),
        };
        if pad {
            format!("{}{}", text, spaces(DRAGON_COLUMN_WIDTH.saturating_sub(width)))
        } else {
            text
        }
    }
}

fn dragon_glyph(dragon: Dragon) -> &'static str {
    match dragon {
        Dragon::Fire => "火",
        Dragon::Water => "水",
        Dragon::Air => "風",
        Dragon::Earth => "地",
        Dragon::Elder => "古",
    }
}

fn stats_line(player: &ParticipantRecord) -> String {
    format!(
        "{} {:>2}/{:>2}/{:>2} {:>4} {:>6}",
        fill(&player.name, NAME_WIDTH),
        player.kills,
        player.deaths,
        player.assists,
        player.minions,
        format_gold(player.gold)
    )
}

fn champion_line(player: &ParticipantRecord, max_damage: u64) -> String {
    format!(
        "{} {}  {:>6}",
        fill(&player.champion, NAME_WIDTH),
        damage_bar(player.damage, max_damage),
        player.damage
    )
}

fn bans_block(blue: &[String; 5], red: &[String; 5]) -> String {
    let b: Vec<String> = blue.iter().map(|ban| fill(ban, BAN_WIDTH)).collect();
    let r: Vec<String> = red.iter().map(|ban| fill(ban, BAN_WIDTH)).collect();
    format!(
        "{label} {} {} {} │ {label} {} {} {}\n{pad} {} {} {} │ {pad} {} {}\n",
        b[0], b[1], b[2], r[0], r[1], r[2],
        b[3], b[4], spaces(BAN_WIDTH), r[3], r[4],
        label = BANS_LABEL,
        pad = spaces(4),
    )
}

fn structures_line(source: SourceKind, blue: &StructureStats, red: &StructureStats) -> String {
    match source {
        SourceKind::Acs => {
            let side = |s: &StructureStats| {
                format!(
                    "{:>2} 塔 / {} 兵營 / {} 預示者 / {:>2} 巴龍",
                    s.towers, s.inhibitors, s.heralds, s.barons
                )
            };
            format!("{}   │ {}\n", side(blue), side(red))
        }
        SourceKind::Lpl => {
            let side = |s: &StructureStats| format!("{:>2} 塔 / {:>2} 巴龍", s.towers, s.barons);
            format!("{}{} │ {}\n", side(blue), spaces(22), side(red))
        }
    }
}

fn footer(short_url: Option<&str>) -> String {
    match short_url.filter(|url| !url.is_empty()) {
        Some(url) => format!(
            "{}┴{}{:>width$}\n\n",
            "─".repeat(HALF_WIDTH),
            "─".repeat(6),
            url,
            width = SHORT_URL_WIDTH
        ),
        None => format!("{}┴{}\n\n", "─".repeat(HALF_WIDTH), "─".repeat(HALF_WIDTH)),
    }
}

fn divider(joint: char) -> String {
    format!("{}{}{}\n", "─".repeat(HALF_WIDTH), joint, "─".repeat(HALF_WIDTH))
}

fn centered_lead(width: usize) -> usize {
    (BANNER_WIDTH / 2).saturating_sub(width / 2)
}

fn spaces(count: usize) -> String {
    " ".repeat(count)
}

/// Left-align `text` in `width` terminal columns. Wide glyphs count double;
/// text already wider than `width` is left untouched.
fn fill(text: &str, width: usize) -> String {
    format!("{}{}", text, spaces(width.saturating_sub(text.width())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::parse_lpl_match;
    use crate::champions::{directory_from_pairs, ChampionDirectory};
    use crate::summary::acs::{fixtures as acs_fixtures, AcsMatch};
    use crate::summary::lpl::{fixtures as lpl_fixtures, LplGame};
    use crate::summary::{MatchAdapter, TeamOverrides};
    use std::collections::HashMap;

    fn directory() -> ChampionDirectory {
        directory_from_pairs(&[
            (1, "Annie"), (2, "Olaf"), (3, "Galio"), (4, "TwistedFate"), (5, "XinZhao"),
            (6, "Urgot"), (7, "LeBlanc"), (8, "Vladimir"), (9, "Fiddlesticks"), (10, "Kayle"),
        ])
    }

    fn acs_summary(dragons: &[(i64, &str)], overrides: &TeamOverrides) -> MatchSummary {
        AcsMatch::new(
            serde_json::from_value(acs_fixtures::game_json()).unwrap(),
            serde_json::from_value(acs_fixtures::timeline_json(dragons)).unwrap(),
        )
        .normalize(&directory(), overrides)
        .unwrap()
    }

    fn lpl_summary() -> MatchSummary {
        let rosters = HashMap::from([
            ("1".to_string(), "EDG".to_string()),
            ("2".to_string(), "RNG".to_string()),
        ]);
        let game = parse_lpl_match(&lpl_fixtures::match_info_body("1")).unwrap();
        LplGame::new(game, &rosters)
            .normalize(&directory(), &TeamOverrides::new())
            .unwrap()
    }

    const GOLDEN: &str = concat!(
        "\x1b[1;37;46mGame  1\x1b[m ───────────────┬───────────── 2017-05-01\n",
        "            \x1b[1;37;44m\x1b[m             55.4k    \x1b[1;36;40m14\x1b[m  │  \x1b[1;31;40m16\x1b[m    63.6k             \x1b[1;37;41m\x1b[m\n",
        "        \x1b[1;37;45m  戰敗  \x1b[m         PATCH   7.9  │  35:25               \x1b[1;37;42m  勝利  \x1b[m\n",
        "───────────────────┼───────────────────\n",
        "                  \x1b[1;37;40mK  D  A   CS  $/Dmg\x1b[m │                   \x1b[1;37;40mK  D  A   CS  $/Dmg\x1b[m\n",
        "\x1b[1;36;40mFW Maple          3/ 2/ 4  218  12.3k\x1b[m │ \x1b[1;31;40mSKT Faker         6/ 1/ 8  259  15.7k\x1b[m\n",
        "Annie            ███▋       18000 │ Urgot            ████▊     24000\n",
        "\x1b[1;36;40mFW Karsa          5/ 3/ 6  160  11.0k\x1b[m │ \x1b[1;31;40mSKT Peanut        2/ 2/10  168  12.0k\x1b[m\n",
        "Olaf             █▉            9500 │ LeBlanc          █▋            8000\n",
        "\x1b[1;36;40mFW MMD            2/ 4/ 3  208  10.5k\x1b[m │ \x1b[1;31;40mSKT Huni          1/ 3/ 5  226  11.5k\x1b[m\n",
        "Galio            ██▍         12000 │ Vladimir         ██▎         11000\n",
        "\x1b[1;36;40mFW Betty          4/ 1/ 5  272  14.0k\x1b[m │ \x1b[1;31;40mSKT Bang          7/ 0/ 6  300  16.2k\x1b[m\n",
        "TwistedFate      ████▎     21000 │ Fiddlesticks     ██████   30000\n",
        "\x1b[1;36;40mFW SwordArT       0/ 5/ 9   30   7.6k\x1b[m │ \x1b[1;31;40mSKT Wolf          0/ 2/12   25   8.1k\x1b[m\n",
        "XinZhao          ▊              4000 │ Kayle            ▋              3000\n",
        "───────────────────┼───────────────────\n",
        "禁用 LeBlanc    (無)                  │ 禁用 Annie      Olaf       Galio     \n",
        "                                      │                           \n",
        "小龍                                  │ 小龍 \n",
        " 4 塔 / 0 兵營 / 1 預示者 /  0 巴龍   │ 10 塔 / 2 兵營 / 0 預示者 /  1 巴龍\n",
        "───────────────────┴───────────────────\n",
        "\n",
    );

    #[test]
    fn test_golden_acs_scoreboard() {
        let summary = acs_summary(&[], &TeamOverrides::new());
        let rendered = Scoreboard::default().render(&summary, 1, None);
        assert_eq!(rendered, GOLDEN);
    }

    #[test]
    fn test_zero_max_damage_renders_blank_bars() {
        let mut summary = acs_summary(&[], &TeamOverrides::new());
        for player in &mut summary.participants {
            player.damage = 0;
        }
        summary.max_damage = 0;

        let rendered = Scoreboard::default().render(&summary, 1, None);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines[6],
            "Annie                               0 │ Urgot                               0"
        );
        assert!(!rendered.contains('█'));
    }

    #[test]
    fn test_columns_align_by_display_width() {
        let overrides = TeamOverrides::from([
            ("FW".to_string(), "閃電狼".to_string()),
            ("SKT".to_string(), "SK Telecom T1".to_string()),
        ]);
        let summaries = [
            acs_summary(&[(2, "FIRE_DRAGON"), (7, "WATER_DRAGON"), (1, "ELDER_DRAGON")], &overrides),
            lpl_summary(),
        ];
        let board = Scoreboard::new(Palette::PLAIN);

        for summary in &summaries {
            let rendered = board.render(summary, 12, Some("https://bit.ly/2pFw9xq"));
            for line in rendered.lines().filter(|l| !l.is_empty()) {
                let junction = line
                    .find(|c| matches!(c, '│' | '┼' | '┬' | '┴'))
                    .unwrap_or_else(|| panic!("no column divider in {:?}", line));
                assert_eq!(line[..junction].width_cjk(), 38, "{:?}", line);
            }
        }
    }

    #[test]
    fn test_team_banner_centers_wide_names() {
        let overrides = TeamOverrides::from([("FW".to_string(), "閃電狼".to_string())]);
        let summary = acs_summary(&[], &overrides);
        let rendered = Scoreboard::default().render(&summary, 3, None);
        let banner = rendered.lines().nth(1).unwrap();
        assert!(banner.starts_with(&format!("{}\x1b[1;37;44m閃電狼\x1b[m{} 55.4k", " ".repeat(9), " ".repeat(9))));
        assert!(rendered.starts_with("\x1b[1;37;46mGame  3\x1b[m "));
    }

    #[test]
    fn test_dragon_line_pads_blue_side() {
        let summary = acs_summary(&[(2, "FIRE_DRAGON"), (7, "WATER_DRAGON"), (1, "ELDER_DRAGON")], &TeamOverrides::new());
        let rendered = Scoreboard::default().render(&summary, 1, None);
        let expected = format!(
            "小龍 \x1b[1;31;40m火\x1b[m\x1b[1;37;46m古\x1b[m{} │ 小龍 \x1b[1;36;40m水\x1b[m",
            " ".repeat(28)
        );
        assert!(rendered.lines().any(|line| line == expected), "{}", rendered);
    }

    #[test]
    fn test_lpl_layout_omits_patch_and_unreported_structures() {
        let rendered = Scoreboard::new(Palette::PLAIN).render(&lpl_summary(), 2, None);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines[2],
            format!("{}  勝利  {}{}  │  31:05{}  戰敗  ", " ".repeat(8), " ".repeat(9), " ".repeat(11), " ".repeat(15))
        );
        assert!(!rendered.contains("PATCH"));
        assert!(!rendered.contains("兵營"));
        assert!(rendered.contains(&format!(" 9 塔 /  1 巴龍{} │  2 塔 /  0 巴龍\n", " ".repeat(22))));
        assert!(rendered.contains(&format!("小龍 3{} │ 小龍 1\n", " ".repeat(31))));
        assert!(rendered.starts_with("Game  2 ───────────────┬───────────── 2017-06-03\n"));
    }

    #[test]
    fn test_footer_embeds_short_url() {
        let summary = acs_summary(&[], &TeamOverrides::new());
        let rendered = Scoreboard::default().render(&summary, 1, Some("https://bit.ly/2pFw9xq"));
        let expected = format!("{}┴──────{:>26}\n\n", "─".repeat(19), "https://bit.ly/2pFw9xq");
        assert!(rendered.ends_with(&expected));
    }

    #[test]
    fn test_plain_palette_has_no_escapes() {
        let rendered = Scoreboard::new(Palette::PLAIN).render(&acs_summary(&[], &TeamOverrides::new()), 1, None);
        assert!(!rendered.contains('\x1b'));
    }
}
