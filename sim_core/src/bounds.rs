use glam::DVec3;

/// Axis-aligned box the balls are confined to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec3,
    pub max: DVec3,
}

impl Bounds {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Cube spanning `[0, size]` on every axis
    pub fn cube(size: f64) -> Self {
        Self {
            min: DVec3::ZERO,
            max: DVec3::splat(size),
        }
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn contains(&self, point: DVec3) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    /// Clamp every component of `point` into the box.
    ///
    /// Same as `f64::clamp` for a valid box, but an inverted axis resolves to
    /// `max` instead of panicking.
    pub fn clamp(&self, point: DVec3) -> DVec3 {
        let mut clamped = point;
        for axis in 0..3 {
            clamped[axis] = point[axis].max(self.min[axis]).min(self.max[axis]);
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_spans_zero_to_size() {
        let bounds = Bounds::cube(10.0);
        assert_eq!(bounds.min, DVec3::ZERO);
        assert_eq!(bounds.max, DVec3::splat(10.0));
        assert_eq!(bounds.center(), DVec3::splat(5.0));
        assert_eq!(bounds.extent(), DVec3::splat(10.0));
    }

    #[test]
    fn test_contains_is_closed() {
        let bounds = Bounds::cube(10.0);
        assert!(bounds.contains(DVec3::new(0.0, 10.0, 5.0)), "Walls are inside");
        assert!(!bounds.contains(DVec3::new(-0.01, 5.0, 5.0)));
        assert!(!bounds.contains(DVec3::new(5.0, 5.0, 10.01)));
    }

    #[test]
    fn test_clamp_per_axis() {
        let bounds = Bounds::new(DVec3::new(0.0, -1.0, 2.0), DVec3::new(1.0, 1.0, 2.0));
        let clamped = bounds.clamp(DVec3::new(3.0, -5.0, 7.0));
        assert_eq!(clamped, DVec3::new(1.0, -1.0, 2.0));

        let inside = DVec3::new(0.5, 0.0, 2.0);
        assert_eq!(bounds.clamp(inside), inside, "Inside points are untouched");
    }

    #[test]
    fn test_clamp_inverted_box_resolves_to_max() {
        let bounds = Bounds::new(DVec3::new(5.0, 0.0, 0.0), DVec3::new(1.0, 10.0, 10.0));
        let clamped = bounds.clamp(DVec3::new(3.0, 4.0, 12.0));
        assert_eq!(clamped, DVec3::new(1.0, 4.0, 10.0));
    }
}
