//! Game session state machine
//!
//! Owns every piece of mutable game state and exposes three entry points
//! for the platform shim: `tick` (fixed ~60 Hz), `key` (one keystroke) and
//! the read-only state the render pass draws from. The RNG is injected so
//! tests can drive spawns with a seeded generator.

use crate::config::GameConfig;
use super::enemy::Enemy;
use rand::seq::SliceRandom;
use rand::Rng;

/// Fixed tick interval in seconds (~60 Hz).
pub const TICK_DT: f32 = 1.0 / 60.0;

/// An active enemy crossing below this y ends the game.
pub const BOTTOM_EDGE: f32 = -1.1;

/// Top of the visible range; enemies spawn staggered upward from here.
const TOP_EDGE: f32 = 1.0;

/// Vertical gap between consecutive spawned enemies.
const SPAWN_STAGGER: f32 = 0.4;

/// Horizontal spawn range, kept inside the screen edges so words stay
/// readable.
const SPAWN_X_RANGE: f32 = 0.85;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Enemies falling, input feeds the word matcher.
    Playing,
    /// Timed banner between levels or before the win screen.
    Transition,
    GameOver,
    Victory,
}

/// One keystroke, as delivered by the platform shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    Char(char),
    Escape,
}

/// What the shim should do after a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Keep running (the key was consumed or ignored).
    None,
    /// Tear down the window and exit.
    Quit,
}

/// The word-shooter session: state machine, enemy collection and score.
pub struct GameSession {
    pub config: GameConfig,
    pub phase: Phase,
    /// Current level, 1-based. During TRANSITION this is already the level
    /// being entered, so the banner and HUD show the right number.
    pub level: u32,
    pub score: u32,
    /// Per-tick descent rate. Non-decreasing across levels.
    pub speed: f32,
    /// Enemy count for the next spawn. Grows each level.
    pub max_enemies: usize,
    /// Seconds left on the between-level banner.
    pub transition_timer: f32,
    /// Ordered collection, replaced wholesale on each spawn.
    pub enemies: Vec<Enemy>,
}

impl GameSession {
    /// Create a session already in PLAYING with the first wave spawned.
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Self {
        let mut session = Self {
            phase: Phase::Playing,
            level: 1,
            score: 0,
            speed: config.start_speed,
            max_enemies: config.start_enemies,
            transition_timer: 0.0,
            enemies: Vec::new(),
            config,
        };
        session.reset(rng);
        session
    }

    /// Fresh game: starting stats and a new first wave.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.phase = Phase::Playing;
        self.level = 1;
        self.score = 0;
        self.speed = self.config.start_speed;
        self.max_enemies = self.config.start_enemies;
        self.transition_timer = 0.0;
        self.spawn_enemies(self.max_enemies, rng);
    }

    /// Replace the enemy collection with `count` fresh enemies. Words come
    /// cyclically from a shuffled copy of the pool (repeats once `count`
    /// exceeds the pool size); each enemy gets a random x and a y staggered
    /// upward from the top edge so they arrive one after another.
    pub fn spawn_enemies(&mut self, count: usize, rng: &mut impl Rng) {
        let mut pool: Vec<&str> = self.config.words.iter().map(|w| w.as_str()).collect();
        pool.shuffle(rng);

        self.enemies.clear();
        for i in 0..count {
            let word = pool[i % pool.len()].to_string();
            let x = rng.gen_range(-SPAWN_X_RANGE..SPAWN_X_RANGE);
            let y = TOP_EDGE + i as f32 * SPAWN_STAGGER;
            self.enemies.push(Enemy::new(word, x, y));
        }
    }

    /// True once every enemy in a non-empty wave has been typed out.
    fn wave_cleared(&self) -> bool {
        !self.enemies.is_empty() && self.enemies.iter().all(|e| !e.active)
    }

    /// During TRANSITION: is the banner leading into the win screen rather
    /// than the next level?
    pub fn transition_to_victory(&self) -> bool {
        self.level > self.config.final_level
    }

    /// Advance one fixed tick.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        match self.phase {
            Phase::Transition => {
                self.transition_timer -= TICK_DT;
                if self.transition_timer <= 0.0 {
                    if self.transition_to_victory() {
                        self.phase = Phase::Victory;
                    } else {
                        self.spawn_enemies(self.max_enemies, rng);
                        self.phase = Phase::Playing;
                    }
                }
            }
            Phase::Playing => {
                let mut lost = false;
                for enemy in self.enemies.iter_mut().filter(|e| e.active) {
                    enemy.y -= self.speed;
                    enemy.flash_timer = (enemy.flash_timer - TICK_DT).max(0.0);
                    if enemy.y <= BOTTOM_EDGE {
                        lost = true;
                    }
                }
                if lost {
                    self.phase = Phase::GameOver;
                    return;
                }
                // Level advance only fires from PLAYING, so a wave can
                // never be counted twice while the banner is up.
                if self.wave_cleared() {
                    self.level += 1;
                    if self.level <= self.config.final_level {
                        self.max_enemies += self.config.enemies_step;
                        self.speed += self.config.speed_step;
                    }
                    self.transition_timer = self.config.transition_time;
                    self.phase = Phase::Transition;
                }
            }
            Phase::GameOver | Phase::Victory => {}
        }
    }

    /// Handle one keystroke.
    pub fn key(&mut self, input: SessionInput, rng: &mut impl Rng) -> KeyAction {
        match self.phase {
            Phase::GameOver | Phase::Victory => match input {
                SessionInput::Char('r') | SessionInput::Char('R') => {
                    self.reset(rng);
                    KeyAction::None
                }
                SessionInput::Escape => KeyAction::Quit,
                SessionInput::Char(_) => KeyAction::None,
            },
            Phase::Playing | Phase::Transition => {
                if let SessionInput::Char(c) = input {
                    // First enemy in collection order that wants this
                    // character consumes it; one keystroke never feeds two
                    // words.
                    for enemy in &mut self.enemies {
                        if enemy.accept(c) {
                            if !enemy.active {
                                self.score += self.config.score_bonus;
                            }
                            break;
                        }
                    }
                }
                KeyAction::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn session() -> GameSession {
        GameSession::new(GameConfig::default(), &mut rng())
    }

    /// Type out the full word of the enemy at `index`.
    fn type_word(s: &mut GameSession, index: usize, rng: &mut impl Rng) {
        let word = s.enemies[index].word.clone();
        for c in word.chars() {
            s.key(SessionInput::Char(c), rng);
        }
    }

    #[test]
    fn test_initial_state() {
        let s = session();
        assert_eq!(s.phase, Phase::Playing);
        assert_eq!(s.level, 1);
        assert_eq!(s.score, 0);
        assert!((s.speed - 0.002).abs() < 1e-9);
        assert_eq!(s.max_enemies, 5);
        assert_eq!(s.enemies.len(), 5);
        assert!(s.enemies.iter().all(|e| e.active));
    }

    #[test]
    fn test_spawn_is_deterministic_with_seed() {
        let a = GameSession::new(GameConfig::default(), &mut rng());
        let b = GameSession::new(GameConfig::default(), &mut rng());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.word, eb.word);
            assert_eq!(ea.x, eb.x);
            assert_eq!(ea.y, eb.y);
        }
    }

    #[test]
    fn test_spawn_staggers_upward() {
        let s = session();
        for pair in s.enemies.windows(2) {
            assert!(pair[1].y > pair[0].y);
        }
        assert!(s.enemies[0].y >= 1.0);
    }

    #[test]
    fn test_spawn_cycles_pool_when_count_exceeds_it() {
        let config = GameConfig {
            words: vec!["ab".to_string(), "cd".to_string()],
            start_enemies: 5,
            ..GameConfig::default()
        };
        let s = GameSession::new(config, &mut rng());
        assert_eq!(s.enemies.len(), 5);
        assert!(s.enemies.iter().all(|e| e.word == "ab" || e.word == "cd"));
    }

    #[test]
    fn test_typing_full_word_scores_ten() {
        let mut s = session();
        let mut r = rng();
        type_word(&mut s, 0, &mut r);
        assert!(!s.enemies[0].active);
        assert_eq!(s.score, 10);
    }

    #[test]
    fn test_typed_stays_prefix_under_garbage_input() {
        let mut s = session();
        let mut r = rng();
        let first_char = s.enemies[0].word.chars().next().unwrap();
        for c in ['q', first_char, 'z', '!', first_char] {
            s.key(SessionInput::Char(c), &mut r);
            for e in &s.enemies {
                assert!(e.word.starts_with(&e.typed));
            }
        }
    }

    #[test]
    fn test_keystroke_feeds_at_most_one_enemy() {
        let mut s = session();
        let mut r = rng();
        // Force two enemies onto the same word so both want the same key
        s.enemies[0].word = "same".to_string();
        s.enemies[0].typed.clear();
        s.enemies[1].word = "same".to_string();
        s.enemies[1].typed.clear();
        s.key(SessionInput::Char('s'), &mut r);
        assert_eq!(s.enemies[0].typed, "s");
        assert!(s.enemies[1].typed.is_empty());
    }

    #[test]
    fn test_descent_and_flash_decay() {
        let mut s = session();
        let mut r = rng();
        let first_char = s.enemies[0].word.chars().next().unwrap();
        s.key(SessionInput::Char(first_char), &mut r);
        let y0 = s.enemies[0].y;
        let flash0 = s.enemies[0].flash_timer;
        s.tick(&mut r);
        assert!(s.enemies[0].y < y0);
        assert!(s.enemies[0].flash_timer < flash0);
        // Decay clamps at zero
        for _ in 0..120 {
            s.tick(&mut r);
        }
        assert!(s.enemies[0].flash_timer >= 0.0);
    }

    #[test]
    fn test_inactive_enemies_do_not_move() {
        let mut s = session();
        let mut r = rng();
        type_word(&mut s, 0, &mut r);
        let y0 = s.enemies[0].y;
        s.tick(&mut r);
        assert_eq!(s.enemies[0].y, y0);
    }

    #[test]
    fn test_clearing_wave_enters_transition_with_bumped_stats() {
        let mut s = session();
        let mut r = rng();
        for e in &mut s.enemies {
            e.active = false;
        }
        s.tick(&mut r);
        assert_eq!(s.phase, Phase::Transition);
        assert_eq!(s.level, 2);
        assert_eq!(s.max_enemies, 7);
        assert!((s.speed - 0.0025).abs() < 1e-6);
        assert!((s.transition_timer - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_transition_does_not_advance_level_again() {
        let mut s = session();
        let mut r = rng();
        for e in &mut s.enemies {
            e.active = false;
        }
        s.tick(&mut r);
        assert_eq!(s.level, 2);
        // A few banner ticks: the cleared wave must not be counted twice
        for _ in 0..10 {
            s.tick(&mut r);
        }
        assert_eq!(s.level, 2);
    }

    #[test]
    fn test_transition_ends_in_respawned_playing() {
        let mut s = session();
        let mut r = rng();
        for e in &mut s.enemies {
            e.active = false;
        }
        s.tick(&mut r);
        let ticks = (2.0 / TICK_DT) as usize + 1;
        for _ in 0..ticks {
            s.tick(&mut r);
        }
        assert_eq!(s.phase, Phase::Playing);
        assert_eq!(s.enemies.len(), 7);
        assert!(s.enemies.iter().all(|e| e.active));
    }

    #[test]
    fn test_clearing_final_level_leads_to_victory() {
        let mut s = session();
        let mut r = rng();
        s.level = 10;
        for e in &mut s.enemies {
            e.active = false;
        }
        s.tick(&mut r);
        assert_eq!(s.phase, Phase::Transition);
        assert_eq!(s.level, 11);
        assert!(s.transition_to_victory());
        // Level 11 never respawns: stats stay untouched
        assert_eq!(s.max_enemies, 5);
        let ticks = (2.0 / TICK_DT) as usize + 1;
        for _ in 0..ticks {
            s.tick(&mut r);
        }
        assert_eq!(s.phase, Phase::Victory);
        assert!(s.enemies.iter().all(|e| !e.active));
    }

    #[test]
    fn test_enemy_reaching_bottom_ends_game() {
        let mut s = session();
        let mut r = rng();
        s.enemies[0].y = BOTTOM_EDGE + s.speed * 0.5;
        s.tick(&mut r);
        assert_eq!(s.phase, Phase::GameOver);
    }

    #[test]
    fn test_one_runaway_enemy_loses_despite_progress() {
        let mut s = session();
        let mut r = rng();
        // Everything else already destroyed
        for e in s.enemies.iter_mut().skip(1) {
            e.active = false;
        }
        s.enemies[0].y = BOTTOM_EDGE + 0.0001;
        s.tick(&mut r);
        assert_eq!(s.phase, Phase::GameOver);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut s = session();
        let mut r = rng();
        s.score = 70;
        s.level = 4;
        s.speed = 0.004;
        s.max_enemies = 11;
        s.phase = Phase::GameOver;
        assert_eq!(s.key(SessionInput::Char('r'), &mut r), KeyAction::None);
        assert_eq!(s.phase, Phase::Playing);
        assert_eq!(s.level, 1);
        assert_eq!(s.score, 0);
        assert!((s.speed - 0.002).abs() < 1e-9);
        assert_eq!(s.max_enemies, 5);
        assert_eq!(s.enemies.iter().filter(|e| e.active).count(), 5);
    }

    #[test]
    fn test_restart_accepts_uppercase() {
        let mut s = session();
        let mut r = rng();
        s.phase = Phase::Victory;
        s.key(SessionInput::Char('R'), &mut r);
        assert_eq!(s.phase, Phase::Playing);
    }

    #[test]
    fn test_escape_quits_only_on_end_screens() {
        let mut s = session();
        let mut r = rng();
        assert_eq!(s.key(SessionInput::Escape, &mut r), KeyAction::None);
        s.phase = Phase::GameOver;
        assert_eq!(s.key(SessionInput::Escape, &mut r), KeyAction::Quit);
        s.phase = Phase::Victory;
        assert_eq!(s.key(SessionInput::Escape, &mut r), KeyAction::Quit);
    }

    #[test]
    fn test_other_keys_ignored_on_end_screens() {
        let mut s = session();
        let mut r = rng();
        s.phase = Phase::GameOver;
        let score = s.score;
        s.key(SessionInput::Char('x'), &mut r);
        assert_eq!(s.phase, Phase::GameOver);
        assert_eq!(s.score, score);
    }
}
