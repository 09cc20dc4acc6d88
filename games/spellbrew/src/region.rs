use glam::DVec2;

/// One circular node of a spell glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub center: DVec2,
    pub radius: f64,
    /// Position in the required trace order, 0-based.
    pub order_index: u32,
    pub traced: bool,
}

impl HitRegion {
    pub fn new(center: DVec2, radius: f64, order_index: u32) -> Self {
        Self {
            center,
            radius,
            order_index,
            traced: false,
        }
    }

    /// Whether `point` lies on or inside the circle.
    pub fn contains(&self, point: DVec2) -> bool {
        self.center.distance(point) <= self.radius
    }

    pub fn mark_traced(&mut self) {
        self.traced = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_counts_as_inside() {
        let r = HitRegion::new(DVec2::new(100.0, 100.0), 20.0, 0);
        assert!(r.contains(DVec2::new(100.0, 100.0)));
        assert!(r.contains(DVec2::new(120.0, 100.0)));
        assert!(!r.contains(DVec2::new(120.1, 100.0)));
        assert!(!r.contains(DVec2::new(115.0, 115.0)));
    }

    #[test]
    fn mark_traced_is_idempotent() {
        let mut r = HitRegion::new(DVec2::ZERO, 20.0, 3);
        r.mark_traced();
        r.mark_traced();
        assert!(r.traced);
        assert_eq!(r.order_index, 3);
    }
}
