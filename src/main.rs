//! wordfall: a typing word shooter
//!
//! Words fall from the top of the screen; type them out to destroy them
//! before one reaches the bottom. Clear all ten levels to win.
//!
//! This file is the platform shim and the only place windowing APIs
//! appear: it owns the window, runs a fixed-step tick clock over the
//! frame loop, pumps keystrokes into the session, and hands the session
//! to the render pass once per frame.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod render;
mod theme;

use game::{GameSession, KeyAction, SessionInput, TICK_DT};
use macroquad::prelude::*;

/// Path of the optional tuning file, looked up relative to the working
/// directory.
const CONFIG_PATH: &str = "wordfall.ron";

/// Frame times above this are clamped so a stall (window drag, debugger)
/// doesn't burst a backlog of ticks into the session.
const MAX_FRAME_TIME: f32 = 0.25;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("wordfall v{}", VERSION),
        window_width: 800,
        window_height: 600,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = config::load_or_default(CONFIG_PATH);
    let mut rng = ::rand::thread_rng();
    let mut session = GameSession::new(config, &mut rng);
    let mut accumulator: f32 = 0.0;

    println!("=== wordfall v{} ===", VERSION);

    'frame: loop {
        // Pump keystrokes. Character keys drive the word matcher and the
        // restart key; Escape only acts on the end screens.
        while let Some(c) = get_char_pressed() {
            if !c.is_control() {
                session.key(SessionInput::Char(c), &mut rng);
            }
        }
        if is_key_pressed(KeyCode::Escape)
            && session.key(SessionInput::Escape, &mut rng) == KeyAction::Quit
        {
            println!("Final score: {}", session.score);
            break 'frame;
        }

        // Fixed-step clock: run as many whole ticks as the elapsed frame
        // time covers, carrying the remainder into the next frame.
        accumulator += get_frame_time().min(MAX_FRAME_TIME);
        while accumulator >= TICK_DT {
            session.tick(&mut rng);
            accumulator -= TICK_DT;
        }

        render::draw_session(&session);
        next_frame().await;
    }
}
