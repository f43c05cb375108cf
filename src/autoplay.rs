use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// One full cycle of the back-and-forth sweep, in milliseconds.
pub const CYCLE_MS: f64 = 8000.0;
/// Divider position at the start of a cycle (fully "before").
pub const START_POSITION: f64 = 100.0;
/// Divider position at the midpoint of a cycle (fully "after").
pub const END_POSITION: f64 = 0.0;

/// Half-sine easing between two divider positions over a fixed duration.
///
/// `position_at(0) == start`, `position_at(0.5) == end`,
/// `position_at(1) == start` again, so one cycle is a single
/// there-and-back sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            start: START_POSITION,
            end: END_POSITION,
            duration_ms: CYCLE_MS,
        }
    }
}

impl Sweep {
    pub fn position_at(&self, progress: f64) -> f64 {
        self.start + (self.end - self.start) * (progress * PI).sin()
    }
}

/// Result of a single driver tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// New divider position, in percent.
    pub position: f64,
    /// True when this tick finished the cycle; the next tick starts a
    /// fresh one.
    pub cycle_complete: bool,
}

/// The autoplay driver proper: tracks where the current cycle began and
/// turns wall-clock timestamps into divider positions.
///
/// `cycle_start` is `None` whenever the driver is not mid-cycle; the first
/// tick after construction, a `reset`, or a completed cycle defines the
/// origin of the next cycle.
#[derive(Clone, Copy, Debug)]
pub struct Autoplay {
    sweep: Sweep,
    cycle_start: Option<f64>,
}

impl Autoplay {
    pub fn new(sweep: Sweep) -> Self {
        Self {
            sweep,
            cycle_start: None,
        }
    }

    pub fn tick(&mut self, now_ms: f64) -> Tick {
        let start = *self.cycle_start.get_or_insert(now_ms);
        let progress = (now_ms - start) / self.sweep.duration_ms;
        let position = self.sweep.position_at(progress);
        let cycle_complete = progress >= 1.0;
        if cycle_complete {
            self.cycle_start = None;
        }
        Tick {
            position,
            cycle_complete,
        }
    }

    /// Forgets the current cycle, so the next tick starts a fresh one.
    /// Called when the user pauses the animation.
    pub fn reset(&mut self) {
        self.cycle_start = None;
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(Sweep::default())
    }
}

/// Rotation over the list of before/after image pairs: advances by one
/// each completed cycle and wraps around after the last pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairRotation {
    index: usize,
    len: usize,
}

impl PairRotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

/// A repeating animation-frame task with an explicit cancellation handle.
///
/// The callback runs once per display refresh with the frame timestamp in
/// milliseconds and returns whether to arm the next frame. At most one
/// frame is pending at a time, and dropping the handle cancels the pending
/// frame, so no callback can fire after the owning component is gone.
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

struct FrameLoopInner {
    frame: RefCell<Option<AnimationFrame>>,
    on_frame: Box<dyn Fn(f64) -> bool>,
}

impl FrameLoop {
    pub fn start(on_frame: impl Fn(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(FrameLoopInner {
            frame: RefCell::new(None),
            on_frame: Box::new(on_frame),
        });
        FrameLoopInner::arm(&inner);
        Self { inner }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.inner.frame.borrow_mut().take();
    }
}

impl FrameLoopInner {
    fn arm(inner: &Rc<Self>) {
        if inner.frame.borrow().is_some() {
            return;
        }
        let next = Rc::clone(inner);
        let handle = request_animation_frame(move |timestamp| {
            next.frame.borrow_mut().take();
            if (next.on_frame)(timestamp) {
                Self::arm(&next);
            }
        });
        *inner.frame.borrow_mut() = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn sweep_endpoints() {
        let sweep = Sweep::default();
        assert_close(sweep.position_at(0.0), 100.0);
        assert_close(sweep.position_at(0.5), 0.0);
        assert_close(sweep.position_at(1.0), 100.0);
    }

    #[test]
    fn sweep_stays_within_divider_range() {
        let sweep = Sweep::default();
        for step in 0..=1000 {
            let progress = step as f64 / 1000.0;
            let position = sweep.position_at(progress);
            assert!(
                (-1e-9..=100.0 + 1e-9).contains(&position),
                "position {position} out of range at progress {progress}"
            );
        }
    }

    #[test]
    fn eight_second_cycle_timeline() {
        let mut driver = Autoplay::default();
        let quarter = 100.0 - 100.0 * (PI / 4.0).sin();

        let tick = driver.tick(0.0);
        assert_close(tick.position, 100.0);
        assert!(!tick.cycle_complete);

        let tick = driver.tick(2000.0);
        assert_close(tick.position, quarter);
        assert!(!tick.cycle_complete);

        let tick = driver.tick(4000.0);
        assert_close(tick.position, 0.0);
        assert!(!tick.cycle_complete);

        let tick = driver.tick(6000.0);
        assert_close(tick.position, quarter);
        assert!(!tick.cycle_complete);

        let tick = driver.tick(8000.0);
        assert_close(tick.position, 100.0);
        assert!(tick.cycle_complete);
    }

    #[test]
    fn completed_cycle_restarts_from_next_timestamp() {
        let mut driver = Autoplay::default();
        driver.tick(0.0);
        assert!(driver.tick(8000.0).cycle_complete);

        // The next frame defines a new cycle origin rather than carrying
        // progress over from the finished one.
        let tick = driver.tick(8016.0);
        assert_close(tick.position, 100.0);
        assert!(!tick.cycle_complete);
        assert_close(driver.tick(12016.0).position, 0.0);
    }

    #[test]
    fn reset_forgets_partial_progress() {
        let mut driver = Autoplay::default();
        driver.tick(0.0);
        driver.tick(3000.0);
        driver.reset();

        // Resuming mid-wall-clock starts over at the start position.
        let tick = driver.tick(5000.0);
        assert_close(tick.position, 100.0);
        assert!(!tick.cycle_complete);
    }

    #[test]
    fn pair_rotation_wraps_back_to_first() {
        let mut rotation = PairRotation::new(3);
        assert_eq!(rotation.index(), 0);
        rotation.advance();
        assert_eq!(rotation.index(), 1);
        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn single_pair_rotation_is_a_noop() {
        let mut rotation = PairRotation::new(1);
        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.index(), 0);
    }
}
