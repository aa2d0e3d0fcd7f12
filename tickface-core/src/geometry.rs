//! Integer screen geometry and polar math
//!
//! Angles are in degrees, measured clockwise from 12 o'clock. Polar
//! points are truncated toward zero, matching the platform's fixed-point
//! trigonometry.

/// Screen point in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point, rounded toward the top-left
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Shrink by `amount` on every side
    pub const fn inset(&self, amount: i32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - 2 * amount,
            self.height - 2 * amount,
        )
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// Point at `radius` from `center` along `angle_deg`
pub fn polar_point(center: Point, radius: i32, angle_deg: f32) -> Point {
    let rad = angle_deg.to_radians();
    let r = radius as f32;
    Point::new(
        (libm::sinf(rad) * r) as i32 + center.x,
        (-libm::cosf(rad) * r) as i32 + center.y,
    )
}

/// Angle of `step` out of `steps` equal divisions of a full turn
pub fn step_angle(step: u32, steps: u32) -> f32 {
    if steps == 0 {
        return 0.0;
    }
    360.0 * step as f32 / steps as f32
}

/// Span of a radial arc
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Arc {
    pub start_deg: f32,
    pub end_deg: f32,
}

impl Arc {
    pub const fn new(start_deg: f32, end_deg: f32) -> Self {
        Self { start_deg, end_deg }
    }

    /// Swept angle; never negative
    pub fn sweep(&self) -> f32 {
        (self.end_deg - self.start_deg).max(0.0)
    }

    /// Returns true if nothing would be drawn
    pub fn is_empty(&self) -> bool {
        self.sweep() <= 0.0
    }
}

/// Battery gauge arc
///
/// Fills counter-clockwise from 12 o'clock: it ends at 360° and starts
/// `percent * 3.6` degrees before that. Percentages above 100 are clamped.
pub fn battery_arc(percent: u8) -> Arc {
    let percent = percent.min(100) as f32;
    Arc::new(360.0 - percent * 3.6, 360.0)
}

/// Step gauge arc
///
/// Fills clockwise from 12 o'clock in proportion to `steps / goal`,
/// saturating at a full circle.
pub fn health_arc(steps: u32, goal: u32) -> Arc {
    let fraction = if goal == 0 {
        1.0
    } else {
        (steps as f32 / goal as f32).clamp(0.0, 1.0)
    };
    Arc::new(0.0, 360.0 * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f32, b: f32) -> bool {
        libm::fabsf(a - b) < 1e-3
    }

    #[test]
    fn test_polar_cardinal_points() {
        let c = Point::new(72, 84);
        assert_eq!(polar_point(c, 10, 0.0), Point::new(72, 74));
        assert_eq!(polar_point(c, 10, 90.0), Point::new(82, 84));
        assert_eq!(polar_point(c, 10, 180.0), Point::new(72, 94));
        assert_eq!(polar_point(c, 10, 270.0), Point::new(62, 84));
    }

    #[test]
    fn test_polar_zero_radius() {
        let c = Point::new(90, 90);
        assert_eq!(polar_point(c, 0, 123.0), c);
    }

    #[test]
    fn test_rect_helpers() {
        let r = Rect::new(4, 64, 40, 40);
        assert_eq!(r.center(), Point::new(24, 84));
        assert_eq!(r.inset(2), Rect::new(6, 66, 36, 36));
        assert_eq!(r.bottom(), 104);
        assert_eq!(r.right(), 44);
    }

    #[test]
    fn test_step_angle() {
        assert!(close(step_angle(15, 60), 90.0));
        assert!(close(step_angle(0, 60), 0.0));
        assert_eq!(step_angle(3, 0), 0.0);
    }

    #[test]
    fn test_battery_arc_bounds() {
        assert!(battery_arc(0).is_empty());
        assert!(close(battery_arc(100).sweep(), 360.0));
        assert!(close(battery_arc(100).start_deg, 0.0));
        assert!(close(battery_arc(50).start_deg, 180.0));
        assert!(close(battery_arc(150).sweep(), 360.0));
    }

    #[test]
    fn test_health_arc_bounds() {
        assert!(health_arc(0, 10_000).is_empty());
        assert!(close(health_arc(5_000, 10_000).sweep(), 180.0));
        assert!(close(health_arc(10_000, 10_000).end_deg, 360.0));
        assert!(close(health_arc(25_000, 10_000).end_deg, 360.0));
    }

    proptest! {
        #[test]
        fn prop_battery_sweep_is_percent_times_3_6(percent in 0u8..=100) {
            prop_assert!(close(battery_arc(percent).sweep(), percent as f32 * 3.6));
        }

        #[test]
        fn prop_battery_sweep_monotonic(a in 0u8..=100, b in 0u8..=100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(battery_arc(lo).sweep() <= battery_arc(hi).sweep());
        }

        #[test]
        fn prop_health_sweep_saturates(steps in any::<u32>()) {
            let sweep = health_arc(steps, 10_000).sweep();
            prop_assert!((0.0..=360.0).contains(&sweep));
            if steps >= 10_000 {
                prop_assert!(close(sweep, 360.0));
            }
        }
    }
}
