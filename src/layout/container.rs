//! The corner container: four slots, four corners
//!
//! `CornerLayout` arranges its first four children in the corners of its own
//! bounds. A layout pass is two calls driven by the host: [`CornerLayout::measure`]
//! negotiates sizes, [`CornerLayout::layout`] assigns frames. Measure may run
//! any number of times before a layout.

use super::child::{Child, LayoutParams};
use super::measure::MeasureSpec;
use super::types::{Rect, Size};

/// The four fixed slots, in attachment order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Corner for an attachment index; `None` past the fourth slot
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::TopLeft),
            1 => Some(Self::TopRight),
            2 => Some(Self::BottomLeft),
            3 => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Kebab-case name, used for CSS classes and debug output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

struct Slot {
    child: Box<dyn Child>,
    params: LayoutParams,
    corner: Option<Corner>,
    measured: Size,
    frame: Rect,
}

/// A container that anchors up to four children in its four corners
///
/// Children are interpreted strictly by attachment index: 0 = top-left,
/// 1 = top-right, 2 = bottom-left, 3 = bottom-right. Fewer than four is
/// fine; additional children are still measured but never placed.
#[derive(Default)]
pub struct CornerLayout {
    slots: Vec<Slot>,
    measured: Size,
}

impl CornerLayout {
    /// An empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a child; its corner is fixed by its attachment index.
    pub fn add_child(&mut self, child: Box<dyn Child>, params: LayoutParams) {
        let corner = Corner::from_index(self.slots.len());
        self.slots.push(Slot {
            child,
            params,
            corner,
            measured: Size::zero(),
            frame: Rect::zero(),
        });
    }

    pub fn child_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Size settled on by the last measure pass
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Corner of the slot at `index`; `None` for extras past the fourth
    pub fn corner_of(&self, index: usize) -> Option<Corner> {
        self.slots.get(index).and_then(|slot| slot.corner)
    }

    /// Frame of the slot at `index` as of the last layout pass
    ///
    /// Slots without a corner are never placed, so their frame stays at
    /// whatever it held before (zero for a fresh slot).
    pub fn child_frame(&self, index: usize) -> Option<Rect> {
        self.slots.get(index).map(|slot| slot.frame)
    }

    /// Margin box of the slot at `index`
    pub fn child_margin(&self, index: usize) -> Option<LayoutParams> {
        self.slots.get(index).map(|slot| slot.params)
    }

    /// Measure pass: size every child, then settle this container's size.
    ///
    /// The incoming specs are handed to each child unmodified; there is no
    /// per-child constraint adjustment. The wrap-content size is the wider
    /// of the two rows by the taller of the two columns, margins included.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        // Every attached child measures, the extras past index 3 included.
        for slot in &mut self.slots {
            slot.measured = slot.child.measure(width, height);
        }

        let mut top_row_width = 0;
        let mut bottom_row_width = 0;
        let mut left_column_height = 0;
        let mut right_column_height = 0;

        for (index, slot) in self.slots.iter().enumerate().take(4) {
            let outer_width = slot.measured.width + slot.params.margin.horizontal();
            let outer_height = slot.measured.height + slot.params.margin.vertical();

            if index == 0 || index == 1 {
                top_row_width += outer_width;
            }
            if index == 2 || index == 3 {
                bottom_row_width += outer_width;
            }
            if index == 0 || index == 2 {
                left_column_height += outer_height;
            }
            if index == 1 || index == 3 {
                right_column_height += outer_height;
            }
        }

        let desired = Size::new(
            top_row_width.max(bottom_row_width),
            left_column_height.max(right_column_height),
        );

        self.measured = Size::new(
            width.resolve(desired.width),
            height.resolve(desired.height),
        );
        self.measured
    }

    /// Layout pass: place each cornered child inside the assigned frame.
    ///
    /// The frame is taken as consistent with the size reported from the
    /// measure pass; it is not re-checked. The right column is inset by both
    /// horizontal margins, while the bottom row is offset by the bottom
    /// margin only (its top margin counts toward measurement, not placement).
    pub fn layout(&mut self, frame: Rect) {
        let width = frame.width();
        let height = frame.height();

        for slot in &mut self.slots {
            // Extras past the fourth slot keep their previous frame.
            let Some(corner) = slot.corner else {
                continue;
            };

            let margin = slot.params.margin;
            let (child_left, child_top) = match corner {
                Corner::TopLeft => (margin.left, margin.top),
                Corner::TopRight => (
                    width - slot.measured.width - margin.horizontal(),
                    margin.top,
                ),
                Corner::BottomLeft => (
                    margin.left,
                    height - slot.measured.height - margin.bottom,
                ),
                Corner::BottomRight => (
                    width - slot.measured.width - margin.horizontal(),
                    height - slot.measured.height - margin.bottom,
                ),
            };

            slot.frame = Rect::from_origin_size(child_left, child_top, slot.measured);
            slot.child.place(slot.frame);
        }
    }
}

impl std::fmt::Debug for CornerLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CornerLayout")
            .field("children", &self.slots.len())
            .field("measured", &self.measured)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::child::FixedChild;
    use crate::layout::types::EdgeInsets;

    fn container_with(children: &[(i32, i32, EdgeInsets)]) -> CornerLayout {
        let mut container = CornerLayout::new();
        for &(width, height, margin) in children {
            container.add_child(
                Box::new(FixedChild::new(width, height)),
                LayoutParams::new().with_margin(margin),
            );
        }
        container
    }

    #[test]
    fn test_corner_from_index() {
        assert_eq!(Corner::from_index(0), Some(Corner::TopLeft));
        assert_eq!(Corner::from_index(1), Some(Corner::TopRight));
        assert_eq!(Corner::from_index(2), Some(Corner::BottomLeft));
        assert_eq!(Corner::from_index(3), Some(Corner::BottomRight));
        assert_eq!(Corner::from_index(4), None);
    }

    #[test]
    fn test_empty_container_measures_zero() {
        let mut container = CornerLayout::new();
        let size = container.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
        assert_eq!(size, Size::zero());
    }

    #[test]
    fn test_wrap_content_takes_wider_row_and_taller_column() {
        // Top row 30+70=100 wide, bottom row 40+40=80.
        // Left column 10+60=70 tall, right column 20+20=40.
        let mut container = container_with(&[
            (30, 10, EdgeInsets::zero()),
            (70, 20, EdgeInsets::zero()),
            (40, 60, EdgeInsets::zero()),
            (40, 20, EdgeInsets::zero()),
        ]);
        let size = container.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
        assert_eq!(size, Size::new(100, 70));
    }

    #[test]
    fn test_margins_count_toward_desired_size() {
        let mut container = container_with(&[(40, 40, EdgeInsets::new(5, 6, 7, 8))]);
        let size = container.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
        assert_eq!(size, Size::new(40 + 5 + 7, 40 + 6 + 8));
    }

    #[test]
    fn test_exact_spec_overrides_children() {
        let mut container = container_with(&[(500, 500, EdgeInsets::zero())]);
        let size = container.measure(MeasureSpec::exact(200), MeasureSpec::exact(100));
        assert_eq!(size, Size::new(200, 100));
    }

    #[test]
    fn test_fifth_child_is_measured_but_never_placed() {
        let mut container = container_with(&[
            (50, 50, EdgeInsets::zero()),
            (50, 50, EdgeInsets::zero()),
            (50, 50, EdgeInsets::zero()),
            (50, 50, EdgeInsets::zero()),
            (999, 999, EdgeInsets::zero()),
        ]);
        let size = container.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
        // The extra child does not contribute to the desired size.
        assert_eq!(size, Size::new(100, 100));

        container.layout(Rect::from_origin_size(0, 0, size));
        assert_eq!(container.corner_of(4), None);
        assert_eq!(container.child_frame(4), Some(Rect::zero()));
    }

    #[test]
    fn test_layout_uses_frame_dimensions() {
        // The host may hand down a frame offset in parent coordinates;
        // placement depends only on its width and height.
        let mut container = container_with(&[(50, 50, EdgeInsets::zero())]);
        container.measure(MeasureSpec::exact(200), MeasureSpec::exact(200));
        container.layout(Rect::new(30, 40, 230, 240));
        assert_eq!(container.child_frame(0), Some(Rect::new(0, 0, 50, 50)));
    }

    #[test]
    fn test_oversized_margin_goes_negative_unclamped() {
        let mut container = container_with(&[
            (50, 50, EdgeInsets::zero()),
            (50, 50, EdgeInsets::new(80, 0, 80, 0)),
        ]);
        container.measure(MeasureSpec::exact(100), MeasureSpec::exact(100));
        container.layout(Rect::from_origin_size(0, 0, Size::new(100, 100)));
        // 100 - 50 - 80 - 80 = -110; nothing clamps it.
        assert_eq!(container.child_frame(1), Some(Rect::new(-110, 0, -60, 50)));
    }
}
