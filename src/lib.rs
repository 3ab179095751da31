//! Bounce Shooter - dodge and shoot bouncing hazards.
//!
//! The library holds the whole simulation and is terminal-agnostic apart
//! from glyph colours and key codes; the binary plugs a crossterm renderer
//! and input thread into [`game_loop::run_session`].

pub mod assets;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod frame;
pub mod game_loop;
pub mod input;

pub use config::GameConfig;
pub use error::{AssetError, ConfigError};
pub use game_loop::{play, run_session, InputSource, Renderer, SessionOutcome};
