use std::time::Duration;

use bounce_shooter::entities::CollisionPolicy;
use bounce_shooter::config::MAX_PLAYFIELD;
use bounce_shooter::{ConfigError, GameConfig};

#[test]
fn defaults_match_the_arcade_setup() {
    let c = GameConfig::default();
    assert_eq!((c.width, c.height), (1600, 900));
    assert_eq!(c.hazard_count, 5);
    assert_eq!(c.tick_rate, 50);
    assert_eq!(c.actor_start, (900, 400));
    assert_eq!(c.effect_life, 10);
    assert_eq!(c.end_delay, Duration::from_secs(1));
    assert_eq!(c.collision_policy, CollisionPolicy::SinglePerTick);
    assert!(c.validate().is_ok());
}

#[test]
fn tick_duration_follows_rate() {
    let c = GameConfig::default();
    assert_eq!(c.tick_duration(), Duration::from_millis(20));
}

#[test]
fn empty_playfield_is_rejected() {
    let c = GameConfig { width: 0, ..GameConfig::default() };
    assert_eq!(c.validate(), Err(ConfigError::EmptyPlayfield { width: 0, height: 900 }));
}

#[test]
fn oversized_playfield_is_rejected() {
    let c = GameConfig { width: i32::MAX, ..GameConfig::default() };
    assert_eq!(
        c.validate(),
        Err(ConfigError::PlayfieldTooLarge { width: i32::MAX, height: 900, max: MAX_PLAYFIELD })
    );

    let tall = GameConfig { height: MAX_PLAYFIELD + 1, ..GameConfig::default() };
    assert!(matches!(tall.validate(), Err(ConfigError::PlayfieldTooLarge { .. })));
}

#[test]
fn largest_playfield_is_accepted() {
    let c = GameConfig { width: MAX_PLAYFIELD, height: MAX_PLAYFIELD, ..GameConfig::default() };
    assert!(c.validate().is_ok());
}

#[test]
fn zero_tick_rate_is_rejected() {
    let c = GameConfig { tick_rate: 0, ..GameConfig::default() };
    assert_eq!(c.validate(), Err(ConfigError::ZeroTickRate));
}

#[test]
fn start_must_fit_inside_playfield() {
    let c = GameConfig { actor_start: (10, 400), ..GameConfig::default() };
    assert_eq!(c.validate(), Err(ConfigError::StartOutOfBounds { x: 10, y: 400 }));

    let small = GameConfig { width: 800, height: 600, ..GameConfig::default() };
    assert!(small.validate().is_err());
}
