//! # Wave Background
//!
//! The ambient animated backdrop: a vertical theme gradient, a stack of
//! sinusoid ribbon layers, and a field of twinkling sparkles.
//!
//! This is a continuous driver, not a state machine: the main loop calls
//! [`WaveBackground::tick`] once per frame and then renders. All mutable
//! state (time accumulator, sparkle field, ribbon opacity) is owned here;
//! the render pass is `&self` and reads the externally-mutable
//! [`BackdropContext`] each frame, so theme changes take effect on the
//! next frame without restarting anything.
//!
//! Sparkle positions are stored normalized to `[0, 1]²` and projected at
//! render time — resizing the terminal re-projects them without resetting
//! the accumulator or the field. The ribbon overlay fades toward the
//! context's visibility flag by a fixed per-frame step, so the fade
//! duration tracks the frame rate rather than the wall clock.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::core::settings::ThemeColor;
use crate::tui::theme::{self, Rgb};

/// Per-frame inputs, owned outside the driver and read fresh every frame.
#[derive(Debug, Clone, Copy)]
pub struct BackdropContext {
    pub theme: ThemeColor,
    /// Ribbon overlay target: fades in when true, out when false.
    pub ribbons_visible: bool,
}

/// Time accumulator increment per tick.
pub const TIME_STEP: f32 = 0.03;
/// Ribbon opacity change per tick while fading.
const RIBBON_FADE_STEP: f32 = 0.05;
const SPARKLE_COUNT: usize = 70;

const TAU: f32 = std::f32::consts::TAU;

struct Sparkle {
    /// Normalized position.
    x: f32,
    y: f32,
    /// Twinkle phase in `[0, TAU)`; brightness is `(1 - cos φ) / 2`, so a
    /// sparkle is born dark, peaks mid-cycle, and fades back out.
    phase: f32,
    speed: f32,
}

impl Sparkle {
    fn spawn(rng: &mut StdRng) -> Self {
        Self {
            x: rng.r#gen(),
            y: rng.r#gen(),
            phase: 0.0,
            speed: rng.gen_range(0.04..0.22),
        }
    }

    fn brightness(&self) -> f32 {
        (1.0 - self.phase.cos()) * 0.5
    }
}

pub struct WaveBackground {
    time: f32,
    ribbon_alpha: f32,
    sparkles: Vec<Sparkle>,
    rng: StdRng,
}

impl WaveBackground {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let sparkles = (0..SPARKLE_COUNT)
            .map(|_| {
                let mut s = Sparkle::spawn(&mut rng);
                // Stagger initial phases so the field doesn't pulse in unison.
                s.phase = rng.gen_range(0.0..TAU);
                s
            })
            .collect();
        Self {
            time: 0.0,
            ribbon_alpha: 0.0,
            sparkles,
            rng,
        }
    }

    /// Advance one frame: time, sparkle twinkles, overlay fade.
    pub fn tick(&mut self, ctx: &BackdropContext) {
        self.time += TIME_STEP;

        let target = if ctx.ribbons_visible { 1.0 } else { 0.0 };
        if self.ribbon_alpha < target {
            self.ribbon_alpha = (self.ribbon_alpha + RIBBON_FADE_STEP).min(target);
        } else if self.ribbon_alpha > target {
            self.ribbon_alpha = (self.ribbon_alpha - RIBBON_FADE_STEP).max(target);
        }

        for sparkle in &mut self.sparkles {
            sparkle.phase += sparkle.speed;
            if sparkle.phase >= TAU {
                // Fully faded out: relocate and start a fresh twinkle.
                *sparkle = Sparkle::spawn(&mut self.rng);
            }
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn ribbon_alpha(&self) -> f32 {
        self.ribbon_alpha
    }

    /// Paint gradient, ribbons, and sparkles into the buffer. Pure read of
    /// driver state — all mutation happens in [`tick`](Self::tick).
    pub fn render(&self, buf: &mut Buffer, area: Rect, ctx: &BackdropContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let palette = theme::palette(ctx.theme);
        self.render_gradient(buf, area, palette.gradient);
        if self.ribbon_alpha > f32::EPSILON {
            self.render_ribbons(buf, area, &palette.ribbons);
        }
        self.render_sparkles(buf, area);
    }

    fn render_gradient(&self, buf: &mut Buffer, area: Rect, gradient: [Rgb; 3]) {
        let h = f32::from(area.height.max(1));
        for row in 0..area.height {
            let t = f32::from(row) / h;
            let color = if t < 0.5 {
                theme::blend(gradient[0], gradient[1], t * 2.0)
            } else {
                theme::blend(gradient[1], gradient[2], (t - 0.5) * 2.0)
            };
            for col in 0..area.width {
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(" ");
                    cell.set_bg(Color::Rgb(color.0, color.1, color.2));
                }
            }
        }
    }

    fn render_ribbons(&self, buf: &mut Buffer, area: Rect, ribbons: &[Rgb; 5]) {
        let h = f32::from(area.height);
        for (layer, ribbon) in ribbons.iter().enumerate() {
            let depth = layer as f32;
            let amplitude = h * (0.055 + 0.022 * depth);
            let frequency = 0.05 + 0.015 * depth;
            let speed = 1.0 + 0.2 * depth;
            let y_offset = h * 0.30 + depth * h * 0.12;
            let layer_alpha = (0.3 + 0.1 * depth) * self.ribbon_alpha;

            for col in 0..area.width {
                let x = f32::from(col);
                // Two stacked sinusoids per layer, as in the original.
                let crest = y_offset
                    + (x * frequency + self.time * speed).sin() * amplitude
                    + (x * frequency * 0.5 + self.time * speed * 0.7).sin() * (amplitude * 0.5);
                let start = crest.max(0.0).min(h) as u16;
                for row in start..area.height {
                    if let Some(cell) = buf.cell_mut((area.x + col, area.y + row))
                        && let Color::Rgb(r, g, b) = cell.bg
                    {
                        let mixed = theme::blend((r, g, b), *ribbon, layer_alpha);
                        cell.set_bg(Color::Rgb(mixed.0, mixed.1, mixed.2));
                    }
                }
            }
        }
    }

    fn render_sparkles(&self, buf: &mut Buffer, area: Rect) {
        for sparkle in &self.sparkles {
            let brightness = sparkle.brightness();
            if brightness < 0.05 {
                continue;
            }
            let col = (sparkle.x * f32::from(area.width - 1)).round() as u16;
            let row = (sparkle.y * f32::from(area.height - 1)).round() as u16;
            let symbol = if brightness > 0.66 {
                "✦"
            } else if brightness > 0.33 {
                "+"
            } else {
                "·"
            };
            let v = (90.0 + 150.0 * brightness) as u8;
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_symbol(symbol);
                cell.set_fg(Color::Rgb(v, v, v.saturating_add(25)));
            }
        }
    }
}

impl Default for WaveBackground {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> WaveBackground {
        WaveBackground::with_rng(StdRng::seed_from_u64(7))
    }

    fn ctx(visible: bool) -> BackdropContext {
        BackdropContext {
            theme: ThemeColor::Blue,
            ribbons_visible: visible,
        }
    }

    #[test]
    fn time_accumulates_per_tick() {
        let mut bg = seeded();
        bg.tick(&ctx(false));
        bg.tick(&ctx(false));
        assert!((bg.time() - 2.0 * TIME_STEP).abs() < 1e-6);
    }

    #[test]
    fn ribbon_fade_steps_toward_target_and_stops() {
        let mut bg = seeded();
        assert_eq!(bg.ribbon_alpha(), 0.0);

        bg.tick(&ctx(true));
        assert!((bg.ribbon_alpha() - RIBBON_FADE_STEP).abs() < 1e-6);

        for _ in 0..100 {
            bg.tick(&ctx(true));
        }
        assert_eq!(bg.ribbon_alpha(), 1.0); // clamped exactly, no overshoot

        bg.tick(&ctx(false));
        assert!((bg.ribbon_alpha() - (1.0 - RIBBON_FADE_STEP)).abs() < 1e-6);
        for _ in 0..100 {
            bg.tick(&ctx(false));
        }
        assert_eq!(bg.ribbon_alpha(), 0.0);
    }

    #[test]
    fn sparkles_relocate_after_a_full_twinkle() {
        let mut bg = seeded();
        let (old_x, old_y) = (bg.sparkles[0].x, bg.sparkles[0].y);
        bg.sparkles[0].phase = TAU - 0.01;
        bg.sparkles[0].speed = 0.1;
        bg.tick(&ctx(false));
        let s = &bg.sparkles[0];
        assert!(s.phase < 1.0, "phase should restart");
        assert!(
            (s.x, s.y) != (old_x, old_y),
            "sparkle should move on relocation"
        );
    }

    #[test]
    fn sparkle_positions_stay_normalized() {
        let mut bg = seeded();
        for _ in 0..500 {
            bg.tick(&ctx(true));
        }
        for s in &bg.sparkles {
            assert!((0.0..=1.0).contains(&s.x));
            assert!((0.0..=1.0).contains(&s.y));
        }
    }

    #[test]
    fn render_paints_gradient_backgrounds() {
        let bg = seeded();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        bg.render(&mut buf, area, &ctx(false));
        let top = buf.cell((0, 0)).unwrap().bg;
        let bottom = buf.cell((0, 11)).unwrap().bg;
        assert!(matches!(top, Color::Rgb(..)));
        assert_ne!(top, bottom);
    }

    #[test]
    fn render_survives_resize_without_touching_state() {
        let mut bg = seeded();
        for _ in 0..10 {
            bg.tick(&ctx(true));
        }
        let time_before = bg.time();

        for (w, h) in [(80, 24), (20, 6), (200, 60)] {
            let area = Rect::new(0, 0, w, h);
            let mut buf = Buffer::empty(area);
            bg.render(&mut buf, area, &ctx(true));
        }
        assert_eq!(bg.time(), time_before);
    }

    #[test]
    fn render_tolerates_zero_area() {
        let bg = seeded();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        bg.render(&mut buf, area, &ctx(true));
    }
}
