//! Small animation primitives shared by the interactive sections.
//!
//! Everything here is plain arithmetic so it runs the same on the server, in
//! the browser and under `cargo test`.

/// Longest integration step a [`Spring`] takes in one go, in seconds.
const MAX_SPRING_SUBSTEP: f64 = 0.002;

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Frame-rate independent lerp towards `to`.
pub fn damp(from: f64, to: f64, lambda: f64, dt: f64) -> f64 {
    lerp(from, to, 1.0 - (-lambda * dt).exp())
}

/// Exponential ease-out used for programmatic scrolls.
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Piecewise-linear mapping of `x` from `input` breakpoints onto `output`.
///
/// Values outside the input range are clamped to the first/last output.
/// `input` must be ascending and the same length as `output`.
pub fn interpolate(x: f64, input: &[f64], output: &[f64]) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    let (Some(&first_in), Some(&last_in)) = (input.first(), input.last()) else {
        return 0.0;
    };
    if x.is_nan() || x <= first_in {
        return output[0];
    }
    if x >= last_in {
        return output[output.len() - 1];
    }
    let i = input
        .windows(2)
        .position(|w| x >= w[0] && x <= w[1])
        .unwrap_or(0);
    let span = input[i + 1] - input[i];
    if span == 0.0 {
        return output[i + 1];
    }
    lerp(output[i], output[i + 1], (x - input[i]) / span)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }
}

/// A damped harmonic oscillator chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    const REST_DELTA: f64 = 0.001;
    const REST_SPEED: f64 = 0.01;

    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_resting(&self) -> bool {
        (self.value - self.target).abs() < Self::REST_DELTA && self.velocity.abs() < Self::REST_SPEED
    }

    /// Advances the spring by `dt` seconds and returns the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        if dt <= 0.0 || self.is_resting() {
            if self.is_resting() {
                self.value = self.target;
                self.velocity = 0.0;
            }
            return self.value;
        }
        let steps = (dt / MAX_SPRING_SUBSTEP).ceil().max(1.0);
        let h = dt / steps;
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        for _ in 0..steps as usize {
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
        }
        if self.is_resting() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// Card tilt in degrees `(rotate_x, rotate_y)` for a pointer at `(x, y)`
/// inside a `width` × `height` card. The card leans away from the pointer
/// around its centre, up to `max_x`/`max_y` degrees at the edges.
pub fn card_tilt(x: f64, y: f64, width: f64, height: f64, max_x: f64, max_y: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = x / width - 0.5;
    let ny = y / height - 0.5;
    (-ny * max_x, nx * max_y)
}

/// One character of a staggered text reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct StaggeredChar {
    pub ch: char,
    pub delay_ms: u32,
    pub is_gap: bool,
}

/// Splits `text` into characters with increasing reveal delays.
///
/// Spaces are swapped for non-breaking spaces so they keep their width once
/// every character is rendered as its own inline block.
pub fn stagger(text: &str, base_ms: u32, step_ms: u32) -> Vec<StaggeredChar> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let is_gap = ch == ' ';
            StaggeredChar {
                ch: if is_gap { '\u{a0}' } else { ch },
                delay_ms: base_ms + i as u32 * step_ms,
                is_gap,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_clamps_and_peaks() {
        let input = [-140.0, 0.0, 140.0];
        let output = [1.0, 1.8, 1.0];
        assert_eq!(interpolate(-500.0, &input, &output), 1.0);
        assert_eq!(interpolate(0.0, &input, &output), 1.8);
        assert_eq!(interpolate(f64::INFINITY, &input, &output), 1.0);
        assert!((interpolate(70.0, &input, &output) - 1.4).abs() < 1e-9);
        assert!((interpolate(-70.0, &input, &output) - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_interpolate_two_points() {
        let v = interpolate(1.4, &[1.0, 1.8], &[0.75, 1.0]);
        assert!((v - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_damp_moves_towards_target() {
        let v = damp(0.0, 100.0, 6.6, 1.0 / 60.0);
        assert!(v > 0.0 && v < 100.0);
        let settled = (0..600).fold(0.0, |acc, _| damp(acc, 100.0, 6.6, 1.0 / 60.0));
        assert!((settled - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_ease_out_expo_bounds() {
        assert!(ease_out_expo(0.0).abs() < 0.01);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(ease_out_expo(0.5) > 0.9);
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::new(280.0, 20.0, 0.2), 1.0);
        spring.set_target(1.8);
        assert!(!spring.is_resting());
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_resting());
        assert_eq!(spring.value(), 1.8);
    }

    #[test]
    fn test_spring_survives_long_frames() {
        let mut spring = Spring::new(SpringConfig::new(220.0, 22.0, 0.35), 0.0);
        spring.set_target(10.0);
        for _ in 0..10 {
            let v = spring.step(0.5);
            assert!(v.is_finite());
        }
        assert!((spring.value() - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_card_tilt() {
        assert_eq!(card_tilt(200.0, 150.0, 400.0, 300.0, 8.0, 10.0), (0.0, 0.0));
        assert_eq!(card_tilt(400.0, 0.0, 400.0, 300.0, 8.0, 10.0), (4.0, 5.0));
        assert_eq!(card_tilt(0.0, 300.0, 400.0, 300.0, 8.0, 10.0), (-4.0, -5.0));
        assert_eq!(card_tilt(10.0, 10.0, 0.0, 300.0, 8.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn test_stagger_marks_gaps() {
        let chars = stagger("my projects", 180, 26);
        assert_eq!(chars.len(), 11);
        assert_eq!(chars[0].delay_ms, 180);
        assert_eq!(chars[10].delay_ms, 180 + 10 * 26);
        assert!(chars[2].is_gap);
        assert_eq!(chars[2].ch, '\u{a0}');
        assert!(!chars[3].is_gap);
    }
}
