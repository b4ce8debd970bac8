//! Axis-aligned rectangle overlap
//!
//! Everything on the field is hit-tested as a box: positions are the top-left
//! corner, sizes extend right and down (canvas coordinates).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point of the rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Check whether two rectangles overlap
///
/// Open intervals on all four sides: rectangles that only share an edge do
/// not collide.
#[inline]
pub fn is_colliding(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(is_colliding(&a, &b));
    }

    #[test]
    fn test_contained_rect_collides() {
        let outer = Rect::new(0.0, 0.0, 50.0, 50.0);
        let inner = Rect::new(20.0, 20.0, 8.0, 4.0);
        assert!(is_colliding(&outer, &inner));
        assert!(is_colliding(&inner, &outer));
    }

    #[test]
    fn test_shared_edge_is_not_a_hit() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Touching on the right edge
        assert!(!is_colliding(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Touching on the bottom edge
        assert!(!is_colliding(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Touching only at a corner
        assert!(!is_colliding(&a, &Rect::new(10.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_separated_rects_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!is_colliding(&a, &Rect::new(30.0, 0.0, 10.0, 10.0)));
        assert!(!is_colliding(&a, &Rect::new(0.0, -30.0, 10.0, 10.0)));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            0.0f32..100.0,
            0.0f32..100.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(is_colliding(&a, &b), is_colliding(&b, &a));
        }

        #[test]
        fn prop_edge_neighbours_never_collide(a in rect_strategy(), w in 0.0f32..100.0, dy in -50.0f32..50.0) {
            let right = Rect::new(a.right(), a.pos.y + dy, w, a.size.y);
            prop_assert!(!is_colliding(&a, &right));
            let below = Rect::new(a.pos.x + dy, a.bottom(), a.size.x, w);
            prop_assert!(!is_colliding(&a, &below));
        }
    }
}
