use crate::summary::Dragon;

/// ANSI escapes used by the scoreboard. Plain text uses empty strings
/// everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub reset: &'static str,
    pub game_badge: &'static str,
    pub blue_banner: &'static str,
    pub red_banner: &'static str,
    pub blue_text: &'static str,
    pub red_text: &'static str,
    pub column_header: &'static str,
    pub victory: &'static str,
    pub defeat: &'static str,
    pub fire: &'static str,
    pub water: &'static str,
    pub air: &'static str,
    pub earth: &'static str,
    pub elder: &'static str,
}

impl Palette {
    pub const ANSI: Palette = Palette {
        reset: "\x1b[m",
        game_badge: "\x1b[1;37;46m",
        blue_banner: "\x1b[1;37;44m",
        red_banner: "\x1b[1;37;41m",
        blue_text: "\x1b[1;36;40m",
        red_text: "\x1b[1;31;40m",
        column_header: "\x1b[1;37;40m",
        victory: "\x1b[1;37;42m",
        defeat: "\x1b[1;37;45m",
        fire: "\x1b[1;31;40m",
        water: "\x1b[1;36;40m",
        air: "\x1b[1;37;40m",
        earth: "\x1b[0;33;40m",
        elder: "\x1b[1;37;46m",
    };

    pub const PLAIN: Palette = Palette {
        reset: "",
        game_badge: "",
        blue_banner: "",
        red_banner: "",
        blue_text: "",
        red_text: "",
        column_header: "",
        victory: "",
        defeat: "",
        fire: "",
        water: "",
        air: "",
        earth: "",
        elder: "",
    };

    pub fn dragon(&self, dragon: Dragon) -> &'static str {
        match dragon {
            Dragon::Fire => self.fire,
            Dragon::Water => self.water,
            Dragon::Air => self.air,
            Dragon::Earth => self.earth,
            Dragon::Elder => self.elder,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::ANSI
    }
}
