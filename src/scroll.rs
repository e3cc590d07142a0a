//! Smoothed wheel scrolling and animated jumps between sections.

use std::time::Duration;

use crate::motion::{clamp, damp, ease_out_expo, lerp};

const LERP: f64 = 0.11;
const WHEEL_MULTIPLIER: f64 = 0.86;
/// Lerp factors are tuned per 60 Hz frame.
const FRAME_RATE: f64 = 60.0;
const SETTLE_DISTANCE: f64 = 0.5;
pub const SECTION_SCROLL_DURATION: Duration = Duration::from_millis(700);

const LINE_HEIGHT: f64 = 16.0;

/// Converts a wheel delta to pixels according to its `deltaMode`
/// (0 pixels, 1 lines, 2 pages).
pub fn wheel_delta_pixels(delta: f64, delta_mode: u32, viewport_height: f64) -> f64 {
    match delta_mode {
        1 => delta * LINE_HEIGHT,
        2 => delta * viewport_height,
        _ => delta,
    }
}

/// Eases the page towards a wheel-driven target instead of jumping per notch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelSmoother {
    current: f64,
    target: f64,
    limit: f64,
}

impl WheelSmoother {
    pub fn new(scroll_y: f64, limit: f64) -> Self {
        let limit = limit.max(0.0);
        let y = clamp(scroll_y, 0.0, limit);
        Self {
            current: y,
            target: y,
            limit,
        }
    }

    /// Re-reads the real scroll position, e.g. after keyboard or scrollbar use.
    pub fn sync(&mut self, scroll_y: f64, limit: f64) {
        *self = Self::new(scroll_y, limit);
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.target = clamp(self.target + delta_y * WHEEL_MULTIPLIER, 0.0, self.limit);
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.current).abs() < SETTLE_DISTANCE
    }

    /// Advances by `dt` seconds and returns the scroll position to apply.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if self.is_settled() {
            self.current = self.target;
        } else {
            self.current = damp(self.current, self.target, LERP * FRAME_RATE, dt);
        }
        self.current
    }
}

/// Time-based scroll from one position to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: f64,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration.as_secs_f64()
    }

    /// Advances by `dt` seconds and returns the scroll position to apply.
    pub fn tick(&mut self, dt: f64) -> f64 {
        self.elapsed += dt.max(0.0);
        let total = self.duration.as_secs_f64();
        if total <= 0.0 || self.is_done() {
            return self.to;
        }
        lerp(self.from, self.to, ease_out_expo(self.elapsed / total))
    }
}

/// Owns whichever scroll animation is running. A section jump takes priority
/// over wheel smoothing, and a wheel notch cancels a jump in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollDriver {
    smoother: Option<WheelSmoother>,
    tween: Option<ScrollTween>,
}

impl ScrollDriver {
    /// Feeds a wheel delta (in pixels) given the live scroll position.
    pub fn wheel(&mut self, delta_y: f64, scroll_y: f64, limit: f64) {
        self.tween = None;
        let smoother = self
            .smoother
            .get_or_insert_with(|| WheelSmoother::new(scroll_y, limit));
        if smoother.is_settled() {
            smoother.sync(scroll_y, limit);
        }
        smoother.wheel(delta_y);
    }

    pub fn jump(&mut self, from: f64, to: f64) {
        self.smoother = None;
        self.tween = Some(ScrollTween::new(from, to, SECTION_SCROLL_DURATION));
    }

    pub fn stop(&mut self) {
        *self = Self::default();
    }

    /// Nothing left to animate; the frame loop can pause.
    pub fn is_idle(&self) -> bool {
        self.smoother.is_none() && self.tween.is_none()
    }

    /// Advances by `dt` seconds and returns the scroll position to apply, if
    /// anything is animating.
    pub fn tick(&mut self, dt: f64) -> Option<f64> {
        if let Some(tween) = self.tween.as_mut() {
            let y = tween.tick(dt);
            if tween.is_done() {
                self.tween = None;
            }
            return Some(y);
        }
        let smoother = self.smoother.as_mut()?;
        let y = smoother.tick(dt);
        if smoother.is_settled() {
            self.smoother = None;
        }
        Some(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_target_is_clamped() {
        let mut smoother = WheelSmoother::new(0.0, 1000.0);
        smoother.wheel(-500.0);
        for _ in 0..10 {
            assert_eq!(smoother.tick(1.0 / 60.0), 0.0);
        }
        for _ in 0..20 {
            smoother.wheel(400.0);
        }
        for _ in 0..600 {
            smoother.tick(1.0 / 60.0);
        }
        assert_eq!(smoother.tick(1.0 / 60.0), 1000.0);
        assert!(smoother.is_settled());
    }

    #[test]
    fn test_wheel_eases_in() {
        let mut smoother = WheelSmoother::new(100.0, 5000.0);
        smoother.wheel(100.0);
        let first = smoother.tick(1.0 / 60.0);
        assert!(first > 100.0 && first < 186.0);
        let second = smoother.tick(1.0 / 60.0);
        assert!(second > first);
    }

    #[test]
    fn test_sync_resets_target() {
        let mut smoother = WheelSmoother::new(0.0, 800.0);
        smoother.wheel(300.0);
        smoother.sync(2000.0, 800.0);
        assert!(smoother.is_settled());
        assert_eq!(smoother.tick(0.016), 800.0);
    }

    #[test]
    fn test_wheel_delta_modes() {
        assert_eq!(wheel_delta_pixels(120.0, 0, 900.0), 120.0);
        assert_eq!(wheel_delta_pixels(3.0, 1, 900.0), 48.0);
        assert_eq!(wheel_delta_pixels(-1.0, 2, 900.0), -900.0);
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = ScrollTween::new(0.0, 1200.0, SECTION_SCROLL_DURATION);
        let mid = tween.tick(0.35);
        assert!(mid > 1000.0 && mid < 1200.0);
        assert!(!tween.is_done());
        assert_eq!(tween.tick(0.5), 1200.0);
        assert!(tween.is_done());
    }

    #[test]
    fn test_tween_upwards() {
        let mut tween = ScrollTween::new(3000.0, 500.0, SECTION_SCROLL_DURATION);
        let v = tween.tick(0.1);
        assert!(v < 3000.0 && v > 500.0);
    }

    #[test]
    fn test_driver_goes_idle_after_wheel_settles() {
        let mut driver = ScrollDriver::default();
        assert!(driver.is_idle());
        assert_eq!(driver.tick(1.0 / 60.0), None);

        driver.wheel(300.0, 0.0, 2000.0);
        assert!(!driver.is_idle());
        let mut last = 0.0;
        for _ in 0..600 {
            match driver.tick(1.0 / 60.0) {
                Some(y) => last = y,
                None => break,
            }
        }
        assert!(driver.is_idle());
        assert!((last - 300.0 * WHEEL_MULTIPLIER).abs() < SETTLE_DISTANCE);
    }

    #[test]
    fn test_driver_goes_idle_after_jump() {
        let mut driver = ScrollDriver::default();
        driver.jump(0.0, 1200.0);
        assert!(!driver.is_idle());
        assert_eq!(driver.tick(1.0), Some(1200.0));
        assert!(driver.is_idle());
        assert_eq!(driver.tick(1.0 / 60.0), None);
    }

    #[test]
    fn test_wheel_cancels_jump() {
        let mut driver = ScrollDriver::default();
        driver.jump(0.0, 1200.0);
        driver.tick(0.1);
        driver.wheel(-100.0, 400.0, 5000.0);
        let y = driver.tick(1.0 / 60.0).unwrap();
        assert!(y < 400.0);
        driver.stop();
        assert!(driver.is_idle());
    }
}
