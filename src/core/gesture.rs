//! # Gesture Interpreter
//!
//! Turns a continuous press→drag→release sequence into one discrete intent:
//! a tap, or a direction-locked swipe carrying a repeat count.
//!
//! ```text
//! idle ──press──► dragging(unlocked) ──move past lock threshold──►
//!        dragging(locked horizontal|vertical) ──release──► idle
//! ```
//!
//! The axis locks on the first movement that exceeds the lock threshold,
//! picking whichever axis shows the greater displacement at that instant;
//! it never changes for the rest of the gesture. Distances are measured in
//! terminal cells — cells are roughly twice as tall as they are wide, so
//! the horizontal step constants are larger than the vertical ones. The
//! literal constants are tuning values; the property that matters (and is
//! tested) is monotonicity: more distance or more velocity never lowers
//! the repeat count.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// A completed gesture, ready to feed the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureIntent {
    /// Press and release without meaningful movement; carries the press
    /// position for hit testing.
    Tap { column: u16, row: u16 },
    /// A direction-locked drag. `count` scales vertical item movement;
    /// category movement stays single-step regardless.
    Swipe { direction: SwipeDirection, count: u8 },
}

/// Tuning knobs, cell-scaled.
#[derive(Debug, Clone, Copy)]
pub struct GestureConfig {
    /// Displacement (either axis) at which the direction locks.
    pub lock_threshold: f32,
    /// Total displacement under which a release is a tap (both axes).
    pub tap_threshold: f32,
    /// Cells per repeat along the horizontal axis.
    pub horizontal_step: f32,
    /// Cells per repeat along the vertical axis.
    pub vertical_step: f32,
    /// Velocity (cells/ms) granting +1 to the count.
    pub brisk_velocity: f32,
    /// Velocity (cells/ms) granting +2.
    pub fast_velocity: f32,
    /// Count ceiling.
    pub max_count: u8,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            lock_threshold: 3.0,
            tap_threshold: 1.5,
            horizontal_step: 8.0,
            vertical_step: 4.0,
            brisk_velocity: 0.02,
            fast_velocity: 0.05,
            max_count: 5,
        }
    }
}

struct ActiveGesture {
    origin: (f32, f32),
    current: (f32, f32),
    pressed_at_ms: u64,
    axis: Option<Axis>,
}

/// Per-gesture state machine. Owned by the TUI loop; `press`/`movement`
/// are fed from mouse events, `release` yields the intent (if any).
pub struct GestureInterpreter {
    config: GestureConfig,
    active: Option<ActiveGesture>,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    pub fn press(&mut self, column: u16, row: u16, now_ms: u64) {
        let point = (f32::from(column), f32::from(row));
        self.active = Some(ActiveGesture {
            origin: point,
            current: point,
            pressed_at_ms: now_ms,
            axis: None,
        });
    }

    /// Track a drag position; locks the axis once past the threshold.
    pub fn movement(&mut self, column: u16, row: u16) {
        let Some(gesture) = self.active.as_mut() else {
            return;
        };
        gesture.current = (f32::from(column), f32::from(row));
        if gesture.axis.is_none() {
            let dx = (gesture.current.0 - gesture.origin.0).abs();
            let dy = (gesture.current.1 - gesture.origin.1).abs();
            if dx > self.config.lock_threshold || dy > self.config.lock_threshold {
                gesture.axis = Some(if dx >= dy {
                    Axis::Horizontal
                } else {
                    Axis::Vertical
                });
            }
        }
    }

    /// Finish the gesture. A release with no prior movement evaluates with
    /// the origin as the end point, which lands on the tap path.
    pub fn release(&mut self, column: u16, row: u16, now_ms: u64) -> Option<GestureIntent> {
        let gesture = self.active.take()?;
        let end = (f32::from(column), f32::from(row));
        let dx = end.0 - gesture.origin.0;
        let dy = end.1 - gesture.origin.1;

        // Tap wins regardless of any transient lock.
        if dx.abs() < self.config.tap_threshold && dy.abs() < self.config.tap_threshold {
            return Some(GestureIntent::Tap {
                column: gesture.origin.0 as u16,
                row: gesture.origin.1 as u16,
            });
        }

        let axis = gesture.axis?;
        let (distance, direction, step) = match axis {
            Axis::Horizontal => (
                dx.abs(),
                if dx > 0.0 {
                    SwipeDirection::Right
                } else {
                    SwipeDirection::Left
                },
                self.config.horizontal_step,
            ),
            Axis::Vertical => (
                dy.abs(),
                if dy > 0.0 {
                    SwipeDirection::Down
                } else {
                    SwipeDirection::Up
                },
                self.config.vertical_step,
            ),
        };

        // Locked but drifted back under the lock threshold: not a swipe,
        // not a tap. Nothing fires.
        if distance < self.config.lock_threshold {
            return None;
        }

        let elapsed_ms = now_ms.saturating_sub(gesture.pressed_at_ms).max(1);
        let velocity = distance / elapsed_ms as f32;
        let count = self.repeat_count(distance, step, velocity);
        Some(GestureIntent::Swipe { direction, count })
    }

    /// Drop any in-flight gesture (focus loss, teardown).
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// `clamp(distance/step + velocity_bonus, 1, max)`. Monotone in both
    /// distance and velocity.
    fn repeat_count(&self, distance: f32, step: f32, velocity: f32) -> u8 {
        let from_distance = (distance / step).floor() as u64;
        let bonus = if velocity >= self.config.fast_velocity {
            2
        } else if velocity >= self.config.brisk_velocity {
            1
        } else {
            0
        };
        (from_distance + bonus).clamp(1, u64::from(self.config.max_count)) as u8
    }
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
