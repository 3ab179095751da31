/// Startup failures: unresolvable sprites and rejected configurations.

use std::fmt;

/// A sprite could not be resolved. Fatal at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetError {
    MissingSprite { name: String },
    UnknownVariant { variant: u8, max: u8 },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSprite { name } => write!(f, "missing sprite `{name}`"),
            Self::UnknownVariant { variant, max } => {
                write!(f, "player variant {variant} does not exist (0..={max})")
            }
        }
    }
}

impl std::error::Error for AssetError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    EmptyPlayfield { width: i32, height: i32 },
    PlayfieldTooLarge { width: i32, height: i32, max: i32 },
    ZeroTickRate,
    StartOutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPlayfield { width, height } => {
                write!(f, "playfield {width}x{height} has no area")
            }
            Self::PlayfieldTooLarge { width, height, max } => {
                write!(f, "playfield {width}x{height} exceeds {max} units per side")
            }
            Self::ZeroTickRate => write!(f, "tick rate must be at least 1"),
            Self::StartOutOfBounds { x, y } => {
                write!(f, "actor start ({x}, {y}) does not fit inside the playfield")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
