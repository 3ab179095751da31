use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use bounce_shooter::entities::*;
use bounce_shooter::frame::{Frame, Paint};
use bounce_shooter::{play, run_session, GameConfig, InputSource, Renderer, SessionOutcome};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Replays queued snapshots, then reports no input.
struct Scripted(VecDeque<TickInput>);

impl Scripted {
    fn new(inputs: Vec<TickInput>) -> Self {
        Scripted(inputs.into())
    }
}

impl InputSource for Scripted {
    fn poll(&mut self) -> TickInput {
        self.0.pop_front().unwrap_or_default()
    }
}

#[derive(Default)]
struct Recorder {
    frames: Vec<Frame>,
}

impl Renderer for Recorder {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

struct Broken;

impl Renderer for Broken {
    fn present(&mut self, _frame: &Frame) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
    }
}

fn fast_config() -> GameConfig {
    GameConfig {
        hazard_count: 0,
        tick_rate: 1000,
        end_delay: Duration::ZERO,
        ..GameConfig::default()
    }
}

fn quit() -> TickInput {
    TickInput { held: Vec::new(), events: vec![InputEvent::Quit] }
}

fn fire() -> TickInput {
    TickInput { held: Vec::new(), events: vec![InputEvent::Fire] }
}

#[test]
fn quit_returns_after_rendered_ticks() {
    let config = fast_config();
    let mut input = Scripted::new(vec![TickInput::default(), TickInput::default(), quit()]);
    let mut renderer = Recorder::default();
    let outcome = run_session(
        &config,
        &mut StdRng::seed_from_u64(1),
        &mut input,
        &mut renderer,
    )
    .unwrap();

    assert_eq!(outcome, SessionOutcome::Quit { ticks: 2 });
    assert_eq!(renderer.frames.len(), 2);
    assert_eq!(renderer.frames[1].tick, 2);
}

#[test]
fn quit_wins_over_fire_in_the_same_poll() {
    let config = fast_config();
    let both = TickInput { held: Vec::new(), events: vec![InputEvent::Fire, InputEvent::Quit] };
    let mut input = Scripted::new(vec![both]);
    let mut renderer = Recorder::default();
    let outcome = run_session(
        &config,
        &mut StdRng::seed_from_u64(1),
        &mut input,
        &mut renderer,
    )
    .unwrap();

    assert_eq!(outcome, SessionOutcome::Quit { ticks: 0 });
    assert!(renderer.frames.is_empty());
}

#[test]
fn fired_projectile_reaches_the_renderer() {
    let config = fast_config();
    let mut input = Scripted::new(vec![fire(), quit()]);
    let mut renderer = Recorder::default();
    run_session(&config, &mut StdRng::seed_from_u64(1), &mut input, &mut renderer).unwrap();

    let last = renderer.frames.last().unwrap();
    assert!(matches!(last.items.last().unwrap().paint, Paint::Projectile { .. }));
}

#[test]
fn hazard_contact_ends_with_one_final_render() {
    let config = fast_config();
    let mut state = GameState::new(config.width, config.height, config.actor_start);
    state.hazards.push(Hazard {
        id: 0,
        rect: Rect::from_center(config.actor_start, 40, 40),
        radius: 20,
        color: HAZARD_PALETTE[2],
        vx: 0,
        vy: 0,
    });
    let mut input = Scripted::new(Vec::new());
    let mut renderer = Recorder::default();
    let outcome = play(&config, state, &mut input, &mut renderer).unwrap();

    assert_eq!(outcome, SessionOutcome::Defeated { ticks: 1 });
    assert_eq!(renderer.frames.len(), 1);
    let frame = &renderer.frames[0];
    assert_eq!(frame.status, GameStatus::Ended);
    let actor = frame
        .items
        .iter()
        .find(|i| matches!(i.paint, Paint::Actor(_)))
        .unwrap();
    assert_eq!(actor.paint, Paint::Actor(SpriteKey::Reaction(Reaction::Defeat)));
}

#[test]
fn renderer_errors_propagate() {
    let config = fast_config();
    let mut input = Scripted::new(Vec::new());
    let err = run_session(&config, &mut StdRng::seed_from_u64(1), &mut input, &mut Broken)
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
