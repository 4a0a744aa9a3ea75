//! Geometry primitives shared by layout, hit-testing and divider math.

use crate::math::Vec2;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size anchored at the origin.
    pub fn from_size(size: Size) -> Self {
        Rect::new(0.0, 0.0, size.width, size.height)
    }

    /// Inclusive containment test; points on the edges are inside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Translate `point` into this rectangle's local coordinate space.
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        point - self.position()
    }

    /// Shrink by `insets`, never producing a negative extent.
    pub fn inset(&self, insets: Insets) -> Rect {
        Rect {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: (self.width - insets.left - insets.right).max(0.0),
            height: (self.height - insets.top - insets.bottom).max(0.0),
        }
    }
}

/// Width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }
}

/// Padding on each edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Insets {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Insets::new(value, value, value, value)
    }
}

/// Closed numeric interval `[lower, upper]`.
///
/// A range whose `lower` exceeds `upper` is empty: it contains nothing and
/// has size zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub lower: f32,
    pub upper: f32,
}

impl Range {
    pub fn new(lower: f32, upper: f32) -> Self {
        Range { lower, upper }
    }

    pub fn is_empty(&self) -> bool {
        self.lower > self.upper
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn size(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.upper - self.lower
        }
    }

    /// Clamp `value` into the range using [`ensure_between`] semantics.
    pub fn clamp(&self, value: f32) -> f32 {
        ensure_between(value, self.lower, self.upper)
    }
}

/// Clamp `value` into `[min, max]` with lenient bounds.
///
/// A negative `min` counts as zero, a negative `max` as unbounded, and a
/// `min` above `max` collapses onto `max`. Tab-width limits use negative
/// values to mean "unset".
pub fn ensure_between(value: f32, min: f32, max: f32) -> f32 {
    let mut min = min.max(0.0);
    let max = if max < 0.0 { f32::MAX } else { max };
    if min > max {
        min = max;
    }
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_empty() {
        assert!(!Range::new(1.0, 2.0).is_empty());
        assert!(!Range::new(1.0, 1.0).is_empty());
        assert!(Range::new(2.0, 1.0).is_empty());
    }

    #[test]
    fn test_range_contains() {
        let range = Range::new(1.0, 2.0);
        assert!(!range.contains(0.5));
        assert!(range.contains(1.0));
        assert!(range.contains(1.5));
        assert!(range.contains(2.0));
        assert!(!range.contains(2.5));
        assert!(!Range::new(2.0, 1.0).contains(1.5));
    }

    #[test]
    fn test_range_size() {
        assert_eq!(Range::new(1.0, 3.5).size(), 2.5);
        assert_eq!(Range::new(1.0, 1.0).size(), 0.0);
        assert_eq!(Range::new(3.0, 1.0).size(), 0.0);
    }

    #[test]
    fn test_ensure_between() {
        assert_eq!(ensure_between(5.0, 1.0, 10.0), 5.0);
        assert_eq!(ensure_between(-5.0, 1.0, 10.0), 1.0);
        assert_eq!(ensure_between(15.0, 1.0, 10.0), 10.0);
        // negative min means zero
        assert_eq!(ensure_between(-5.0, -1.0, 10.0), 0.0);
        // negative max means unbounded
        assert_eq!(ensure_between(1.0e6, 1.0, -1.0), 1.0e6);
        // inverted bounds collapse onto max
        assert_eq!(ensure_between(0.0, 8.0, 4.0), 4.0);
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(110.0, 60.0)));
        assert!(!rect.contains(Vec2::new(110.1, 60.0)));
        assert!(!rect.contains(Vec2::new(9.9, 30.0)));
    }

    #[test]
    fn test_rect_inset_never_negative() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0).inset(Insets::uniform(8.0));
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
        assert_eq!(rect.position(), Vec2::new(8.0, 8.0));
    }
}
