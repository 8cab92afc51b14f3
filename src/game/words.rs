//! Built-in word pool for the shooter.
//!
//! The pool is lowercase a-z so every word is typeable without modifier
//! keys. A config file can replace it (see `config`).

/// Default word pool, used when no config file overrides it.
pub const DEFAULT_WORDS: &[&str] = &[
    "apple", "river", "stone", "cloud", "tiger", "piano", "lemon", "ocean",
    "maple", "comet", "ember", "frost", "quartz", "violet", "whisper",
    "zephyr", "breeze", "copper", "marble", "lantern", "meadow", "thunder",
    "willow", "harbor",
];
