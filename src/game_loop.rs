/// Fixed-rate session loop.
///
/// One iteration per tick: poll input, advance the simulation, hand the
/// frame to the renderer, sleep off the rest of the tick budget. Input and
/// rendering are traits so the loop runs headless in tests.

use std::thread;
use std::time::Instant;

use log::info;
use rand::Rng;

use crate::compute::{init_state, tick};
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus, TickInput};
use crate::frame::{compose, Frame};

pub trait InputSource {
    /// Point-in-time snapshot: held keys plus events since the last poll.
    fn poll(&mut self) -> TickInput;
}

pub trait Renderer {
    /// Draw one complete frame.
    fn present(&mut self, frame: &Frame) -> std::io::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The actor touched a hazard.
    Defeated { ticks: u64 },
    /// The player asked to leave.
    Quit { ticks: u64 },
}

/// Play one session to completion from a freshly spawned state.
pub fn run_session<I, R>(
    config: &GameConfig,
    rng: &mut impl Rng,
    input: &mut I,
    renderer: &mut R,
) -> std::io::Result<SessionOutcome>
where
    I: InputSource,
    R: Renderer,
{
    let state = init_state(config, rng);
    play(config, state, input, renderer)
}

/// Drive `state` until the actor is defeated or the player quits.
pub fn play<I, R>(
    config: &GameConfig,
    mut state: GameState,
    input: &mut I,
    renderer: &mut R,
) -> std::io::Result<SessionOutcome>
where
    I: InputSource,
    R: Renderer,
{
    let budget = config.tick_duration();

    loop {
        let frame_start = Instant::now();

        let snapshot = input.poll();
        if snapshot.quit_requested() {
            info!("quit requested after {} ticks", state.frame);
            return Ok(SessionOutcome::Quit { ticks: state.frame });
        }

        state = tick(&state, &snapshot);
        renderer.present(&compose(&state))?;

        if state.status == GameStatus::Ended {
            // Hold the defeat pose on screen.
            thread::sleep(config.end_delay);
            info!("session ended after {} ticks", state.frame);
            return Ok(SessionOutcome::Defeated { ticks: state.frame });
        }

        let elapsed = frame_start.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
    }
}
