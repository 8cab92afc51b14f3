//! Falling word targets
//!
//! Each enemy is one word descending the screen. The player destroys it by
//! typing its characters in order. Positions use normalized coordinates
//! (x and y roughly in -1..1, y pointing up) so the game logic stays
//! independent of the window size; the render pass maps to pixels.

/// Seconds the keystroke flash tint lasts.
pub const FLASH_TIME: f32 = 0.5;

/// A falling word target.
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Target text, fixed at spawn.
    pub word: String,
    /// Correctly-typed prefix of `word`. Only ever extended by `accept`,
    /// which keeps the prefix invariant by construction.
    pub typed: String,
    /// Horizontal position, normalized.
    pub x: f32,
    /// Vertical position, normalized. Decreases each tick while playing.
    pub y: f32,
    /// Countdown tinting the word after a correct keystroke. Never below 0.
    pub flash_timer: f32,
    /// False once the word is fully typed. Inactive enemies are skipped by
    /// update, render and input, but stay in the collection until respawn.
    pub active: bool,
}

impl Enemy {
    pub fn new(word: String, x: f32, y: f32) -> Self {
        Self {
            word,
            typed: String::new(),
            x,
            y,
            flash_timer: 0.0,
            active: true,
        }
    }

    /// The next character the player has to type, if any.
    pub fn next_char(&self) -> Option<char> {
        self.word[self.typed.len()..].chars().next()
    }

    /// The part of the word not yet typed.
    pub fn remaining(&self) -> &str {
        &self.word[self.typed.len()..]
    }

    /// Offer a keystroke to this enemy. Returns true if it was consumed:
    /// the typed prefix grows, the flash tint restarts, and a fully-typed
    /// word deactivates the enemy.
    pub fn accept(&mut self, c: char) -> bool {
        if !self.active || self.next_char() != Some(c) {
            return false;
        }
        self.typed.push(c);
        self.flash_timer = FLASH_TIME;
        if self.typed == self.word {
            self.active = false;
        }
        true
    }
}
