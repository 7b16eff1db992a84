//! Integer rectangles on the logical drawing surface.

/// Axis-aligned rectangle. `x`/`y` is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `(cx, cy)`.
    pub const fn centered(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        Self::new(cx - width / 2, cy - height / 2, width, height)
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Strict overlap test: rectangles that only share an edge do not collide.
    pub const fn overlaps(&self, other: &Bounds) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Whether a point lies inside. Right and bottom edges are exclusive.
    pub const fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }

    /// Same rectangle scaled about its center, as menu artwork is.
    pub fn scaled(&self, factor: f64) -> Self {
        let (cx, cy) = self.center();
        let width = (self.width as f64 * factor) as i32;
        let height = (self.height as f64 * factor) as i32;
        Self::centered(cx, cy, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let b = Bounds::new(10, 20, 30, 40);
        assert_eq!(b.left(), 10);
        assert_eq!(b.right(), 40);
        assert_eq!(b.top(), 20);
        assert_eq!(b.bottom(), 60);
        assert_eq!(b.center(), (25, 40));
    }

    #[test]
    fn test_centered() {
        let b = Bounds::centered(100, 100, 50, 20);
        assert_eq!(b, Bounds::new(75, 90, 50, 20));
    }

    #[test]
    fn test_overlap() {
        let a = Bounds::new(0, 0, 10, 10);
        assert!(a.overlaps(&Bounds::new(5, 5, 10, 10)));
        assert!(a.overlaps(&Bounds::new(2, 2, 2, 2)));
        assert!(!a.overlaps(&Bounds::new(20, 0, 5, 5)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Bounds::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Bounds::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Bounds::new(0, 10, 10, 10)));
    }

    #[test]
    fn test_contains_point() {
        let b = Bounds::new(0, 0, 10, 10);
        assert!(b.contains_point(0, 0));
        assert!(b.contains_point(9, 9));
        assert!(!b.contains_point(10, 5));
        assert!(!b.contains_point(-1, 5));
    }

    #[test]
    fn test_scaled_keeps_center() {
        let b = Bounds::centered(432, 150, 270, 60).scaled(2.0);
        assert_eq!(b.center(), (432, 150));
        assert_eq!(b.width, 540);
        assert_eq!(b.height, 120);
    }
}
