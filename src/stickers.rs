//! Floating hero stickers: bounded velocity motion with pointer repulsion.

use std::f64::consts::TAU;

use crate::motion::clamp;

pub const STICKER_IMAGES: [&str; 4] = [
    "/stickers/sticker1.png",
    "/stickers/sticker2.png",
    "/stickers/sticker3.png",
    "/stickers/sticker4.png",
];
pub const STICKER_COUNT: usize = STICKER_IMAGES.len();

const STICKER_SIZES: [f64; 3] = [76.0, 88.0, 100.0];
const BASE_SPEED_MIN: f64 = 95.0;
const BASE_SPEED_MAX: f64 = 165.0;
const ESCAPE_RADIUS: f64 = 120.0;
const ESCAPE_BOOST: f64 = 240.0;
const ESCAPE_COOLDOWN_MS: f64 = 200.0;
const MAX_FRAME_DELTA: f64 = 0.035;
const INITIAL_ROTATION: f64 = 12.0;
const ROTATION_SPEED: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the area the stickers bounce around in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn max_x(&self, size: f64) -> f64 {
        (self.width - size).max(0.0)
    }

    fn max_y(&self, size: f64) -> f64 {
        (self.height - size).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub rotate: f64,
    pub rotate_speed: f64,
    pub last_escape_at: f64,
}

impl Sticker {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    pub fn image(&self) -> &'static str {
        STICKER_IMAGES.get(self.id).copied().unwrap_or(STICKER_IMAGES[0])
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) rotate({:.2}deg)",
            self.x, self.y, self.rotate
        )
    }

    fn cooling_down(&self, now_ms: f64) -> bool {
        now_ms - self.last_escape_at < ESCAPE_COOLDOWN_MS
    }

    fn clamp_to(&mut self, bounds: Bounds) {
        self.x = clamp(self.x, 0.0, bounds.max_x(self.size));
        self.y = clamp(self.y, 0.0, bounds.max_y(self.size));
    }

    fn bounce(&mut self, bounds: Bounds) {
        let max_x = bounds.max_x(self.size);
        let max_y = bounds.max_y(self.size);
        if self.x <= 0.0 {
            self.x = 0.0;
            self.vx = self.vx.abs();
        } else if self.x >= max_x {
            self.x = max_x;
            self.vx = -self.vx.abs();
        }
        if self.y <= 0.0 {
            self.y = 0.0;
            self.vy = self.vy.abs();
        } else if self.y >= max_y {
            self.y = max_y;
            self.vy = -self.vy.abs();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickerField {
    stickers: Vec<Sticker>,
}

impl StickerField {
    /// Scatters the stickers inside `bounds`. `rng` must yield values in `[0, 1)`.
    pub fn spawn(bounds: Bounds, rng: &mut impl FnMut() -> f64) -> Self {
        let mut between = |min: f64, max: f64| min + rng() * (max - min);
        let stickers = (0..STICKER_COUNT)
            .map(|id| {
                let size = STICKER_SIZES
                    .get(id)
                    .copied()
                    .unwrap_or(STICKER_SIZES[STICKER_SIZES.len() - 1]);
                let x = between(0.0, bounds.max_x(size));
                let y = between(0.0, bounds.max_y(size));
                let angle = between(0.0, TAU);
                let speed = between(BASE_SPEED_MIN, BASE_SPEED_MAX);
                let rotate = between(-INITIAL_ROTATION, INITIAL_ROTATION);
                let rotate_speed = between(-ROTATION_SPEED, ROTATION_SPEED);
                Sticker {
                    id,
                    x,
                    y,
                    vx: angle.cos() * speed,
                    vy: angle.sin() * speed,
                    size,
                    rotate,
                    rotate_speed,
                    last_escape_at: 0.0,
                }
            })
            .collect();
        Self { stickers }
    }

    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    pub fn get(&self, id: usize) -> Option<&Sticker> {
        self.stickers.iter().find(|s| s.id == id)
    }

    /// Advances every sticker by one animation frame.
    ///
    /// `prev_ms` is the previous frame's timestamp, `None` on the first frame
    /// after (re)starting the loop. The frame delta is capped so a tab coming
    /// back from the background doesn't teleport the stickers.
    pub fn step(&mut self, now_ms: f64, prev_ms: Option<f64>, pointer: Option<Point>, bounds: Bounds) {
        let prev = prev_ms.unwrap_or(now_ms);
        let dt = ((now_ms - prev) / 1000.0).clamp(0.0, MAX_FRAME_DELTA);

        for sticker in self.stickers.iter_mut() {
            if let Some(pointer) = pointer {
                let center = sticker.center();
                let dx = center.x - pointer.x;
                let dy = center.y - pointer.y;
                let distance = dx.hypot(dy);
                if distance < ESCAPE_RADIUS && !sticker.cooling_down(now_ms) {
                    let force = (ESCAPE_RADIUS - distance) / ESCAPE_RADIUS;
                    let d = if distance == 0.0 { 1.0 } else { distance };
                    sticker.vx += dx / d * ESCAPE_BOOST * force;
                    sticker.vy += dy / d * ESCAPE_BOOST * force;
                    sticker.last_escape_at = now_ms;
                }
            }

            sticker.x += sticker.vx * dt;
            sticker.y += sticker.vy * dt;
            sticker.rotate += sticker.rotate_speed * dt;
            sticker.bounce(bounds);
        }
    }

    /// Kicks one sticker away from `source` at full boost.
    ///
    /// When the source sits on the sticker's centre the direction comes from
    /// `rng` instead. Stickers still cooling down from a previous escape are
    /// left alone, as are unknown ids.
    pub fn push_away(
        &mut self,
        id: usize,
        source: Point,
        now_ms: f64,
        rng: &mut impl FnMut() -> f64,
    ) {
        let Some(sticker) = self.stickers.iter_mut().find(|s| s.id == id) else {
            return;
        };
        if sticker.cooling_down(now_ms) {
            return;
        }
        let center = sticker.center();
        let mut dx = center.x - source.x;
        let mut dy = center.y - source.y;
        let mut distance = dx.hypot(dy);
        if distance < 1.0 {
            dx = rng() - 0.5;
            dy = rng() - 0.5;
            distance = dx.hypot(dy);
            if distance == 0.0 {
                dx = 1.0;
                distance = 1.0;
            }
        }
        sticker.vx += dx / distance * ESCAPE_BOOST;
        sticker.vy += dy / distance * ESCAPE_BOOST;
        sticker.last_escape_at = now_ms;
    }

    pub fn clamp_to(&mut self, bounds: Bounds) {
        for sticker in self.stickers.iter_mut() {
            sticker.clamp_to(bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    fn in_bounds(field: &StickerField, bounds: Bounds) -> bool {
        field.stickers().iter().all(|s| {
            s.x >= 0.0
                && s.y >= 0.0
                && s.x <= (bounds.width - s.size).max(0.0)
                && s.y <= (bounds.height - s.size).max(0.0)
        })
    }

    #[test]
    fn test_spawn_inside_bounds() {
        let bounds = Bounds::new(1280.0, 720.0);
        let mut rng = seq(&[0.0, 0.25, 0.5, 0.75, 0.999]);
        let field = StickerField::spawn(bounds, &mut rng);
        assert_eq!(field.stickers().len(), STICKER_COUNT);
        assert!(in_bounds(&field, bounds));

        let sizes: Vec<f64> = field.stickers().iter().map(|s| s.size).collect();
        assert_eq!(sizes, vec![76.0, 88.0, 100.0, 100.0]);
        for s in field.stickers() {
            let speed = s.vx.hypot(s.vy);
            assert!((BASE_SPEED_MIN..=BASE_SPEED_MAX).contains(&speed));
        }
    }

    #[test]
    fn test_spawn_in_tiny_hero() {
        let bounds = Bounds::new(50.0, 20.0);
        let field = StickerField::spawn(bounds, &mut seq(&[0.6]));
        assert!(field.stickers().iter().all(|s| s.x == 0.0 && s.y == 0.0));
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut field = StickerField::spawn(bounds, &mut seq(&[0.1, 0.9, 0.4, 0.7, 0.3]));
        let mut prev = None;
        for frame in 0..2000 {
            let now = frame as f64 * 16.0;
            let pointer = (frame % 7 == 0).then(|| Point::new(200.0, 150.0));
            field.step(now, prev, pointer, bounds);
            prev = Some(now);
            assert!(in_bounds(&field, bounds), "escaped at frame {frame}");
        }
    }

    #[test]
    fn test_bounce_reflects_velocity() {
        let bounds = Bounds::new(300.0, 300.0);
        let mut field = StickerField::spawn(bounds, &mut seq(&[0.5]));
        let s = &mut field.stickers[0];
        s.x = 1.0;
        s.vx = -200.0;
        s.y = 290.0 - s.size;
        s.vy = 1000.0;
        field.step(1000.0, Some(984.0), None, bounds);
        let s = &field.stickers()[0];
        assert_eq!(s.x, 0.0);
        assert!(s.vx > 0.0);
        assert_eq!(s.y, 300.0 - s.size);
        assert!(s.vy < 0.0);
    }

    #[test]
    fn test_frame_delta_is_capped() {
        let bounds = Bounds::new(10_000.0, 10_000.0);
        let mut field = StickerField::spawn(bounds, &mut seq(&[0.5]));
        let before = field.stickers()[0].clone();
        // a whole second passes, only MAX_FRAME_DELTA is integrated
        field.step(2000.0, Some(1000.0), None, bounds);
        let after = &field.stickers()[0];
        assert!((after.x - (before.x + before.vx * MAX_FRAME_DELTA)).abs() < 1e-9);
        assert!((after.y - (before.y + before.vy * MAX_FRAME_DELTA)).abs() < 1e-9);
    }

    #[test]
    fn test_first_frame_does_not_move() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut field = StickerField::spawn(bounds, &mut seq(&[0.3, 0.6]));
        let before = field.clone();
        field.step(5000.0, None, None, bounds);
        assert_eq!(field, before);
    }

    #[test]
    fn test_pointer_repels_with_cooldown() {
        let bounds = Bounds::new(2000.0, 2000.0);
        let mut field = StickerField::spawn(bounds, &mut seq(&[0.5]));
        {
            let s = &mut field.stickers[0];
            s.x = 1000.0;
            s.y = 1000.0;
            s.vx = 0.0;
            s.vy = 0.0;
        }
        let center = field.stickers()[0].center();
        let pointer = Point::new(center.x - 60.0, center.y);

        field.step(1000.0, Some(1000.0), Some(pointer), bounds);
        let s = &field.stickers()[0];
        assert!((s.vx - ESCAPE_BOOST * 0.5).abs() < 1e-9);
        assert_eq!(s.vy, 0.0);
        assert_eq!(s.last_escape_at, 1000.0);

        // still within cooldown: no extra impulse
        let vx = s.vx;
        field.step(1100.0, Some(1100.0), Some(pointer), bounds);
        assert_eq!(field.stickers()[0].vx, vx);
    }

    #[test]
    fn test_push_away_from_source() {
        let bounds = Bounds::new(2000.0, 2000.0);
        let mut field = StickerField::spawn(bounds, &mut seq(&[0.5]));
        {
            let s = &mut field.stickers[1];
            s.vx = 0.0;
            s.vy = 0.0;
        }
        let center = field.stickers()[1].center();
        let source = Point::new(center.x, center.y + 10.0);
        field.push_away(1, source, 500.0, &mut seq(&[0.5]));
        let s = field.get(1).unwrap();
        assert!(s.vx.abs() < 1e-9);
        assert!((s.vy + ESCAPE_BOOST).abs() < 1e-9);

        // cooling down
        field.push_away(1, source, 600.0, &mut seq(&[0.5]));
        assert!((field.get(1).unwrap().vy + ESCAPE_BOOST).abs() < 1e-9);
    }

    #[test]
    fn test_push_away_from_own_center_uses_rng() {
        let bounds = Bounds::new(2000.0, 2000.0);
        let mut field = StickerField::spawn(bounds, &mut seq(&[0.5]));
        {
            let s = &mut field.stickers[0];
            s.vx = 0.0;
            s.vy = 0.0;
        }
        let center = field.stickers()[0].center();
        field.push_away(0, center, 500.0, &mut seq(&[1.0, 0.5]));
        let s = field.get(0).unwrap();
        assert!((s.vx - ESCAPE_BOOST).abs() < 1e-9);
        assert!(s.vy.abs() < 1e-9);
    }

    #[test]
    fn test_push_unknown_sticker_is_noop() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut field = StickerField::spawn(bounds, &mut seq(&[0.2]));
        let before = field.clone();
        field.push_away(42, Point::new(0.0, 0.0), 1000.0, &mut seq(&[0.2]));
        assert_eq!(field, before);
    }

    #[test]
    fn test_clamp_after_resize() {
        let mut field = StickerField::spawn(Bounds::new(1920.0, 1080.0), &mut seq(&[0.95]));
        let small = Bounds::new(320.0, 480.0);
        field.clamp_to(small);
        assert!(in_bounds(&field, small));
    }
}
