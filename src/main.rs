mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bounce_shooter::assets::{BuiltinGlyphs, SpriteSheet};
use bounce_shooter::entities::CollisionPolicy;
use bounce_shooter::input::ChannelInput;
use bounce_shooter::{run_session, GameConfig, SessionOutcome};

use display::TerminalRenderer;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Collisions {
    /// At most one projectile hit per tick
    Single,
    /// Every non-conflicting projectile hit per tick
    All,
}

#[derive(Parser, Debug)]
#[command(name = "bounce_shooter")]
#[command(about = "Dodge and shoot bouncing hazards in your terminal")]
struct Args {
    /// Playfield width in playfield units
    #[arg(long, default_value_t = bounce_shooter::config::WIDTH)]
    width: i32,

    /// Playfield height in playfield units
    #[arg(long, default_value_t = bounce_shooter::config::HEIGHT)]
    height: i32,

    /// Number of hazards at session start
    #[arg(long, default_value_t = bounce_shooter::config::NUM_OF_HAZARDS)]
    hazards: usize,

    /// Simulation ticks per second
    #[arg(long, default_value_t = bounce_shooter::config::TICK_RATE)]
    tick_rate: u32,

    /// Player sprite family (0-9)
    #[arg(short, long, default_value_t = 3)]
    player: u8,

    /// Projectile/hazard resolution per tick
    #[arg(long, value_enum, default_value_t = Collisions::Single)]
    collisions: Collisions,

    /// Milliseconds the defeat pose stays on screen
    #[arg(long, default_value_t = 1000)]
    end_delay_ms: u64,

    /// RNG seed for hazard placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            hazard_count: self.hazards,
            tick_rate: self.tick_rate,
            player_variant: self.player,
            end_delay: Duration::from_millis(self.end_delay_ms),
            collision_policy: match self.collisions {
                Collisions::Single => CollisionPolicy::SinglePerTick,
                Collisions::All => CollisionPolicy::AllPairs,
            },
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    // The game owns the terminal; redirect stderr to keep logs.
    env_logger::init();

    let config = Args::parse().into_config();
    config.validate().context("invalid game configuration")?;

    // Resolve every sprite before touching the terminal.
    let sheet = SpriteSheet::load(&BuiltinGlyphs::default(), config.player_variant)
        .context("failed to load sprites")?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut renderer = TerminalRenderer::new(BufWriter::new(stdout()), sheet);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    // From here on every exit path, `?` included, restores the terminal.
    let mut guard = TerminalGuard::new(stdout());
    renderer.writer().execute(terminal::EnterAlternateScreen)?;
    renderer.writer().execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    guard.keyboard_enhanced = renderer
        .writer()
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let mut input = ChannelInput::new(rx);
    let result = run_session(&config, &mut rng, &mut input, &mut renderer);

    let _ = renderer.writer().flush();
    drop(guard);

    match result.context("terminal I/O failed")? {
        SessionOutcome::Defeated { ticks } => println!("Defeated after {ticks} ticks."),
        SessionOutcome::Quit { ticks } => println!("Quit after {ticks} ticks."),
    }
    Ok(())
}

/// Leaves the alternate screen and raw mode when dropped.
struct TerminalGuard<W: Write> {
    out: W,
    keyboard_enhanced: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        TerminalGuard { out, keyboard_enhanced: false }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
