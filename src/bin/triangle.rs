//! Rotating-triangle demo
//!
//! A triangle spins at a fixed rate while its color ramps from black to
//! full red; pressing 's' locks the color to green. Same shape as the
//! word shooter: a small state object driven by a fixed-step tick clock
//! and a keystroke pump, drawn once per frame.

use macroquad::prelude::*;

/// Fixed tick interval in seconds (~60 Hz).
const TICK_DT: f32 = 1.0 / 60.0;

/// Degrees of rotation per tick.
const SPIN_RATE: f32 = 0.5;

/// Red ramp per tick, until the channel saturates.
const RED_RATE: f32 = 0.01;

/// Frame-time clamp, so a stall doesn't burst a tick backlog.
const MAX_FRAME_TIME: f32 = 0.25;

/// Triangle corners in normalized coordinates (x right, y up, -1..1).
const CORNERS: [(f32, f32); 3] = [(0.0, 0.5), (-0.5, -0.5), (0.5, -0.5)];

/// Rotation and color state.
struct TriangleDemo {
    /// Accumulated rotation in degrees.
    angle: f32,
    /// Animated red channel, ramps toward 1.0.
    red: f32,
    /// Once set by the 's' key the color stays green.
    locked_green: bool,
}

impl TriangleDemo {
    fn new() -> Self {
        Self {
            angle: 0.0,
            red: 0.0,
            locked_green: false,
        }
    }

    /// Advance one fixed tick: rotate, and ramp the red channel unless
    /// the color is locked.
    fn tick(&mut self) {
        self.angle += SPIN_RATE;
        if !self.locked_green && self.red < 1.0 {
            self.red = (self.red + RED_RATE).min(1.0);
        }
    }

    /// 's'/'S' locks the color to green; everything else is a no-op.
    fn key(&mut self, c: char) {
        if c == 's' || c == 'S' {
            self.locked_green = true;
        }
    }

    fn color(&self) -> Color {
        if self.locked_green {
            GREEN
        } else {
            Color::new(self.red, 0.0, 0.0, 1.0)
        }
    }

    /// Corner positions after rotation, still normalized.
    fn vertices(&self) -> [(f32, f32); 3] {
        let rad = self.angle.to_radians();
        let (sin, cos) = rad.sin_cos();
        CORNERS.map(|(x, y)| (x * cos - y * sin, x * sin + y * cos))
    }
}

/// Normalized -> pixel coordinates for the current window size.
fn to_px(x: f32, y: f32) -> Vec2 {
    vec2(
        (x + 1.0) * 0.5 * screen_width(),
        (1.0 - y) * 0.5 * screen_height(),
    )
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Rotating Triangle".to_string(),
        window_width: 600,
        window_height: 600,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut demo = TriangleDemo::new();
    let mut accumulator: f32 = 0.0;

    loop {
        while let Some(c) = get_char_pressed() {
            demo.key(c);
        }

        accumulator += get_frame_time().min(MAX_FRAME_TIME);
        while accumulator >= TICK_DT {
            demo.tick();
            accumulator -= TICK_DT;
        }

        clear_background(BLACK);
        let [a, b, c] = demo.vertices();
        draw_triangle(to_px(a.0, a.1), to_px(b.0, b.1), to_px(c.0, c.1), demo.color());
        next_frame().await;
    }
}
