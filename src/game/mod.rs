//! Word-shooter game logic
//!
//! Pure state: no drawing calls and no direct reads of the keyboard or
//! clock. The platform shim in `main.rs` feeds ticks and keystrokes in,
//! and `render` reads a frame's worth of state back out.

pub mod enemy;
pub mod session;
pub mod words;

pub use session::{GameSession, KeyAction, Phase, SessionInput, TICK_DT};
