/// Sprite resolution.
///
/// Sprites are named (`player/3`, `facing/up`, `beam/45`, ...). An
/// `AssetProvider` turns a name into a terminal glyph; `SpriteSheet::load`
/// resolves every name a session needs up front so that a missing sprite
/// fails at startup, never mid-game.

use std::collections::HashMap;

use crossterm::style::Color;

use crate::entities::{Direction, Reaction, SpriteKey, EFFECT_FRAMES};
use crate::error::AssetError;

/// Highest player sprite family.
pub const MAX_PLAYER_VARIANT: u8 = 9;

/// Player family whose pose is used after shooting down a hazard.
const KILL_VARIANT: u8 = 6;
/// Player family whose pose is used on defeat.
const DEFEAT_VARIANT: u8 = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub text: String,
    pub color: Color,
}

impl Glyph {
    fn new(text: &str, color: Color) -> Self {
        Glyph { text: text.to_string(), color }
    }
}

pub trait AssetProvider {
    fn resolve(&self, name: &str) -> Result<Glyph, AssetError>;
}

pub fn facing_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Right => "facing/right",
        Direction::UpRight => "facing/up-right",
        Direction::Up => "facing/up",
        Direction::UpLeft => "facing/up-left",
        Direction::Left => "facing/left",
        Direction::DownLeft => "facing/down-left",
        Direction::Down => "facing/down",
        Direction::DownRight => "facing/down-right",
    }
}

// ── Built-in catalogue ────────────────────────────────────────────────────────

/// Glyphs compiled into the binary.
#[derive(Clone, Debug)]
pub struct BuiltinGlyphs {
    table: HashMap<String, Glyph>,
}

impl Default for BuiltinGlyphs {
    fn default() -> Self {
        let mut table = HashMap::new();

        let player_colors = [
            Color::White,
            Color::Cyan,
            Color::Green,
            Color::Yellow,
            Color::Blue,
            Color::Magenta,
            Color::Yellow,
            Color::Grey,
            Color::Red,
            Color::DarkCyan,
        ];
        for (n, color) in player_colors.into_iter().enumerate() {
            let text = match n as u8 {
                KILL_VARIANT => "\\o/",
                DEFEAT_VARIANT => "x_x",
                _ => "(o)",
            };
            table.insert(format!("player/{n}"), Glyph::new(text, color));
        }

        let arrows = ["→", "↗", "↑", "↖", "←", "↙", "↓", "↘"];
        for (direction, arrow) in Direction::ALL.iter().zip(arrows) {
            table.insert(facing_name(*direction).to_string(), Glyph::new(arrow, Color::White));
        }

        for (angle, text) in [(0, "══"), (45, "╱"), (90, "║"), (135, "╲")] {
            table.insert(format!("beam/{angle}"), Glyph::new(text, Color::Cyan));
        }

        table.insert("explosion/0".into(), Glyph::new("✺", Color::Yellow));
        table.insert("explosion/1".into(), Glyph::new("✹", Color::Red));
        table.insert("background".into(), Glyph::new("·", Color::DarkBlue));

        BuiltinGlyphs { table }
    }
}

impl AssetProvider for BuiltinGlyphs {
    fn resolve(&self, name: &str) -> Result<Glyph, AssetError> {
        self.table
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::MissingSprite { name: name.to_string() })
    }
}

// ── Sprite sheet ──────────────────────────────────────────────────────────────

/// Every glyph a session draws, resolved once.
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    facing: HashMap<Direction, Glyph>,
    reactions: HashMap<Reaction, Glyph>,
    /// Indexed by azimuth folded into 0°, 45°, 90°, 135°.
    beams: [Glyph; 4],
    explosion: Vec<Glyph>,
    pub background: Glyph,
}

impl SpriteSheet {
    pub fn load(provider: &impl AssetProvider, player_variant: u8) -> Result<Self, AssetError> {
        if player_variant > MAX_PLAYER_VARIANT {
            return Err(AssetError::UnknownVariant {
                variant: player_variant,
                max: MAX_PLAYER_VARIANT,
            });
        }
        let body = provider.resolve(&format!("player/{player_variant}"))?;

        // The facing arrow is tinted with the chosen family's colour.
        let mut facing = HashMap::new();
        for direction in Direction::ALL {
            let arrow = provider.resolve(facing_name(direction))?;
            facing.insert(direction, Glyph { text: arrow.text, color: body.color });
        }

        let mut reactions = HashMap::new();
        reactions.insert(Reaction::Kill, provider.resolve(&format!("player/{KILL_VARIANT}"))?);
        reactions.insert(
            Reaction::Defeat,
            provider.resolve(&format!("player/{DEFEAT_VARIANT}"))?,
        );

        let beams = [
            provider.resolve("beam/0")?,
            provider.resolve("beam/45")?,
            provider.resolve("beam/90")?,
            provider.resolve("beam/135")?,
        ];

        let explosion = (0..EFFECT_FRAMES)
            .map(|i| provider.resolve(&format!("explosion/{i}")))
            .collect::<Result<Vec<_>, _>>()?;

        let background = provider.resolve("background")?;

        log::debug!("sprite sheet loaded for player variant {player_variant}");
        Ok(SpriteSheet { facing, reactions, beams, explosion, background })
    }

    pub fn actor(&self, key: SpriteKey) -> Option<&Glyph> {
        match key {
            SpriteKey::Facing(direction) => self.facing.get(&direction),
            SpriteKey::Reaction(reaction) => self.reactions.get(&reaction),
        }
    }

    /// Beam glyph for an azimuth in degrees. Opposite angles share a glyph.
    pub fn beam(&self, angle: f32) -> &Glyph {
        let octant = (angle / 45.0).round() as i32;
        &self.beams[octant.rem_euclid(4) as usize]
    }

    pub fn explosion(&self, frame: usize) -> &Glyph {
        &self.explosion[frame % self.explosion.len()]
    }
}
