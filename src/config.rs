/// Session configuration: playfield size, pacing and startup choices,
/// with the checks that must pass before a session starts.

use std::time::Duration;

use crate::compute::check_bound;
use crate::entities::{CollisionPolicy, Rect, ACTOR_SIZE};
use crate::error::ConfigError;

pub const WIDTH: i32 = 1600;
pub const HEIGHT: i32 = 900;
pub const NUM_OF_HAZARDS: usize = 5;
pub const TICK_RATE: u32 = 50;
pub const EFFECT_LIFE: i32 = 10;
/// Largest playfield side. Keeps entity and viewport arithmetic inside `i32`.
pub const MAX_PLAYFIELD: i32 = 1 << 16;

/// Session parameters. Everything the loop needs that is not entity state.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub hazard_count: usize,
    pub tick_rate: u32,
    pub actor_start: (i32, i32),
    pub player_variant: u8,
    pub effect_life: i32,
    /// How long the defeat pose stays on screen before the session returns.
    pub end_delay: Duration,
    pub collision_policy: CollisionPolicy,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: WIDTH,
            height: HEIGHT,
            hazard_count: NUM_OF_HAZARDS,
            tick_rate: TICK_RATE,
            actor_start: (900, 400),
            player_variant: 3,
            effect_life: EFFECT_LIFE,
            end_delay: Duration::from_secs(1),
            collision_policy: CollisionPolicy::SinglePerTick,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::EmptyPlayfield {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_PLAYFIELD || self.height > MAX_PLAYFIELD {
            return Err(ConfigError::PlayfieldTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_PLAYFIELD,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        let rect = Rect::from_center(self.actor_start, ACTOR_SIZE.0, ACTOR_SIZE.1);
        if check_bound(&rect, self.width, self.height) != (true, true) {
            let (x, y) = self.actor_start;
            return Err(ConfigError::StartOutOfBounds { x, y });
        }
        Ok(())
    }

    /// Wall-clock budget of one tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}
