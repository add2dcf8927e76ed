//! Core geometry types for the layout engine
//!
//! All coordinates are integer pixels. The measure pass works in sizes,
//! the layout pass in frames (rectangles in the parent's coordinate space).

/// A measured width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A zero-by-zero size
    pub fn zero() -> Self {
        Self::new(0, 0)
    }
}

/// A rectangle given by its four edges, in parent coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// An empty rectangle at the origin
    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Build a rectangle from an origin and a size
    pub fn from_origin_size(left: i32, top: i32, size: Size) -> Self {
        Self::new(left, top, left + size.width, top + size.height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Per-edge spacing reserved around a child, not filled by the child itself
///
/// Fields are non-negative by convention. Nothing validates them; negative
/// values flow straight through the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeInsets {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Zero on all four edges
    pub fn zero() -> Self {
        Self::default()
    }

    /// The same inset on all four edges
    pub fn uniform(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Total inset along the horizontal axis
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total inset along the vertical axis
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_zero() {
        let size = Size::zero();
        assert_eq!(size.width, 0);
        assert_eq!(size.height, 0);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10, 20, 110, 70);
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 50);
        assert_eq!(rect.size(), Size::new(100, 50));
    }

    #[test]
    fn test_rect_from_origin_size() {
        let rect = Rect::from_origin_size(150, 0, Size::new(50, 50));
        assert_eq!(rect, Rect::new(150, 0, 200, 50));
    }

    #[test]
    fn test_edge_insets_axis_totals() {
        let insets = EdgeInsets::new(1, 2, 3, 4);
        assert_eq!(insets.horizontal(), 4);
        assert_eq!(insets.vertical(), 6);
    }

    #[test]
    fn test_edge_insets_uniform() {
        let insets = EdgeInsets::uniform(5);
        assert_eq!(insets, EdgeInsets::new(5, 5, 5, 5));
    }
}
