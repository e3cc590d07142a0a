//! Magnification of the bottom dock icons as the pointer passes over them.

use crate::motion::{interpolate, Spring, SpringConfig};

const DISTANCE_RANGE: [f64; 3] = [-140.0, 0.0, 140.0];
const SCALE_RANGE: [f64; 3] = [1.0, 1.8, 1.0];
const LIFT_RANGE: [f64; 3] = [0.0, -12.0, 0.0];
const GLOW_RANGE: [f64; 3] = [0.15, 0.65, 0.15];
const ICON_OPACITY_INPUT: [f64; 2] = [1.0, 1.8];
const ICON_OPACITY_OUTPUT: [f64; 2] = [0.75, 1.0];

const ICON_SPRING: SpringConfig = SpringConfig::new(280.0, 20.0, 0.2);
const GLOW_SPRING: SpringConfig = SpringConfig::new(260.0, 24.0, 0.25);

/// What one dock item paints this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockFrame {
    pub scale: f64,
    pub lift: f64,
    pub glow: f64,
    pub icon_opacity: f64,
}

impl Default for DockFrame {
    fn default() -> Self {
        Self {
            scale: SCALE_RANGE[0],
            lift: LIFT_RANGE[0],
            glow: GLOW_RANGE[0],
            icon_opacity: ICON_OPACITY_OUTPUT[0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockMagnifier {
    scale: Spring,
    lift: Spring,
    glow: Spring,
}

impl Default for DockMagnifier {
    fn default() -> Self {
        let rest = DockFrame::default();
        Self {
            scale: Spring::new(ICON_SPRING, rest.scale),
            lift: Spring::new(ICON_SPRING, rest.lift),
            glow: Spring::new(GLOW_SPRING, rest.glow),
        }
    }
}

impl DockMagnifier {
    /// Retargets on the pointer's horizontal distance from the item centre
    /// (infinite when the pointer is off the dock) and advances `dt` seconds.
    ///
    /// Returns `None` when nothing moved, so callers can skip repainting.
    pub fn step(&mut self, distance: f64, dt: f64) -> Option<DockFrame> {
        self.scale
            .set_target(interpolate(distance, &DISTANCE_RANGE, &SCALE_RANGE));
        self.lift
            .set_target(interpolate(distance, &DISTANCE_RANGE, &LIFT_RANGE));
        self.glow
            .set_target(interpolate(distance, &DISTANCE_RANGE, &GLOW_RANGE));

        let before = self.frame();
        self.scale.step(dt);
        self.lift.step(dt);
        self.glow.step(dt);
        let after = self.frame();
        (after != before).then_some(after)
    }

    pub fn frame(&self) -> DockFrame {
        let scale = self.scale.value();
        DockFrame {
            scale,
            lift: self.lift.value(),
            glow: self.glow.value(),
            icon_opacity: interpolate(scale, &ICON_OPACITY_INPUT, &ICON_OPACITY_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_dock_does_not_repaint() {
        let mut dock = DockMagnifier::default();
        assert_eq!(dock.step(f64::INFINITY, 1.0 / 60.0), None);
        assert_eq!(dock.frame(), DockFrame::default());
    }

    #[test]
    fn test_pointer_on_center_magnifies() {
        let mut dock = DockMagnifier::default();
        let mut last = None;
        for _ in 0..120 {
            if let Some(frame) = dock.step(0.0, 1.0 / 60.0) {
                last = Some(frame);
            }
        }
        let frame = last.expect("dock should have moved");
        assert_eq!(frame.scale, 1.8);
        assert_eq!(frame.lift, -12.0);
        assert_eq!(frame.glow, 0.65);
        assert_eq!(frame.icon_opacity, 1.0);
    }

    #[test]
    fn test_pointer_leaving_returns_to_rest() {
        let mut dock = DockMagnifier::default();
        for _ in 0..30 {
            dock.step(20.0, 1.0 / 60.0);
        }
        assert!(dock.frame().scale > 1.5);
        for _ in 0..240 {
            dock.step(f64::INFINITY, 1.0 / 60.0);
        }
        assert_eq!(dock.frame(), DockFrame::default());
    }

    #[test]
    fn test_far_pointer_has_no_effect() {
        let mut dock = DockMagnifier::default();
        assert_eq!(dock.step(-300.0, 1.0 / 60.0), None);
    }
}
