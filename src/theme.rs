//! Shared colors and font sizes for the demos
//!
//! Centralized so the HUD, banners and falling words stay consistent.

use macroquad::prelude::Color;

/// Window clear color
pub const BG_COLOR: Color = Color::new(0.04, 0.04, 0.06, 1.0);

/// HUD text (score/level)
pub const HUD_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed prompt text ("press R to restart")
pub const PROMPT_COLOR: Color = Color::new(0.5, 0.5, 0.55, 1.0);

/// Untyped part of a falling word. The green channel is raised while the
/// keystroke flash is running (see `render::word_color`).
pub const WORD_COLOR: Color = Color::new(1.0, 0.35, 0.2, 1.0);

/// Flash brightens the word's green channel up to this value.
pub const WORD_FLASH_GREEN: f32 = 1.0;

/// Typed prefix, drawn below the word.
pub const TYPED_COLOR: Color = Color::new(0.3, 0.9, 0.4, 1.0);

/// Level banner text
pub const BANNER_COLOR: Color = Color::new(0.9, 0.9, 0.95, 1.0);

/// Game-over banner text
pub const LOSS_COLOR: Color = Color::new(0.95, 0.3, 0.25, 1.0);

/// Victory banner text
pub const WIN_COLOR: Color = Color::new(0.35, 0.95, 0.5, 1.0);

/// Banner/headline text size
pub const FONT_SIZE_BANNER: f32 = 48.0;

/// Falling word text size
pub const FONT_SIZE_WORD: f32 = 28.0;

/// HUD and prompt text size
pub const FONT_SIZE_HUD: f32 = 22.0;
