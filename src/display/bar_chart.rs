use std::fmt;

/// Resolution of a bar: six blocks of eight eighths each.
pub const MAX_EIGHTHS: i64 = 48;
pub const BAR_BLOCKS: usize = 6;

const FULL_BLOCK: char = '█';
const PARTIAL_BLOCKS: [&str; 8] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];

/// Block glyphs followed by padding. Block glyphs render two columns wide on
/// the terminals this targets, so every missing block is padded with two
/// spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphRun {
    text: String,
}

impl GlyphRun {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for GlyphRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Out-of-range values give an empty run rather than an error.
pub fn encode(value: i64) -> GlyphRun {
    if !(0..=MAX_EIGHTHS).contains(&value) {
        return GlyphRun::default();
    }

    let mut text = String::new();
    let mut glyphs = 0;
    let mut remaining = value;
    while remaining >= 8 {
        text.push(FULL_BLOCK);
        glyphs += 1;
        remaining -= 8;
    }
    let partial = PARTIAL_BLOCKS[remaining as usize];
    if !partial.is_empty() {
        text.push_str(partial);
        glyphs += 1;
    }
    text.push_str(&"  ".repeat(BAR_BLOCKS - glyphs));

    GlyphRun { text }
}

/// Damage share against the match maximum. A zero maximum draws a blank bar.
pub fn damage_bar(damage: u64, max_damage: u64) -> GlyphRun {
    if max_damage == 0 {
        return encode(0);
    }
    let eighths = (damage as f64 * MAX_EIGHTHS as f64 / max_damage as f64).round();
    encode(eighths as i64)
}
