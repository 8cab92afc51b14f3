//! Render pass for the word shooter
//!
//! Read-only over the session: maps the game's normalized coordinates
//! (x right, y up, -1..1 visible) to pixels and issues macroquad draw
//! calls. All mutation happens in `game::session`; nothing here feeds back.

use crate::game::enemy::{Enemy, FLASH_TIME};
use crate::game::session::{GameSession, Phase};
use crate::theme;
use macroquad::prelude::*;

/// Normalized -> pixel coordinates for the current window size.
fn to_px(x: f32, y: f32) -> (f32, f32) {
    (
        (x + 1.0) * 0.5 * screen_width(),
        (1.0 - y) * 0.5 * screen_height(),
    )
}

/// Color of a word's untyped text. The green channel rises with the
/// keystroke flash so a hit visibly brightens the word, then decays back.
pub fn word_color(flash_timer: f32) -> Color {
    let t = (flash_timer / FLASH_TIME).clamp(0.0, 1.0);
    Color::new(
        theme::WORD_COLOR.r,
        theme::WORD_COLOR.g + (theme::WORD_FLASH_GREEN - theme::WORD_COLOR.g) * t,
        theme::WORD_COLOR.b,
        1.0,
    )
}

fn draw_centered(text: &str, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        (screen_width() - dims.width) * 0.5,
        y,
        font_size,
        color,
    );
}

fn draw_enemy(enemy: &Enemy) {
    let (px, py) = to_px(enemy.x, enemy.y);
    draw_text(
        enemy.remaining(),
        px,
        py,
        theme::FONT_SIZE_WORD,
        word_color(enemy.flash_timer),
    );
    if !enemy.typed.is_empty() {
        draw_text(
            &enemy.typed,
            px,
            py + theme::FONT_SIZE_WORD,
            theme::FONT_SIZE_WORD,
            theme::TYPED_COLOR,
        );
    }
}

fn draw_hud(session: &GameSession) {
    draw_text(
        &format!("Score: {}", session.score),
        12.0,
        28.0,
        theme::FONT_SIZE_HUD,
        theme::HUD_COLOR,
    );
    draw_text(
        &format!("Level: {}", session.level),
        12.0,
        52.0,
        theme::FONT_SIZE_HUD,
        theme::HUD_COLOR,
    );
}

fn draw_end_screen(headline: &str, color: Color, session: &GameSession) {
    let mid = screen_height() * 0.5;
    draw_centered(headline, mid - 40.0, theme::FONT_SIZE_BANNER, color);
    draw_centered(
        &format!("Final score: {}", session.score),
        mid + 10.0,
        theme::FONT_SIZE_HUD,
        theme::HUD_COLOR,
    );
    draw_centered(
        "R to restart - Esc to quit",
        mid + 44.0,
        theme::FONT_SIZE_HUD,
        theme::PROMPT_COLOR,
    );
}

/// Draw one frame of the session.
pub fn draw_session(session: &GameSession) {
    clear_background(theme::BG_COLOR);

    match session.phase {
        Phase::Playing => {
            for enemy in session.enemies.iter().filter(|e| e.active) {
                draw_enemy(enemy);
            }
            draw_hud(session);
        }
        Phase::Transition => {
            let mid = screen_height() * 0.5;
            if session.transition_to_victory() {
                draw_centered("You win!", mid, theme::FONT_SIZE_BANNER, theme::WIN_COLOR);
            } else {
                draw_centered(
                    &format!("Level {}", session.level),
                    mid,
                    theme::FONT_SIZE_BANNER,
                    theme::BANNER_COLOR,
                );
            }
            draw_hud(session);
        }
        Phase::GameOver => draw_end_screen("GAME OVER", theme::LOSS_COLOR, session),
        Phase::Victory => draw_end_screen("VICTORY", theme::WIN_COLOR, session),
    }
}
