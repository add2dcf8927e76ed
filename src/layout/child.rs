//! The child side of the layout protocol
//!
//! A container sees its children through the [`Child`] trait: ask each one
//! to measure itself, then hand each one a final frame. The measurement is
//! a returned value, not hidden state on the child; the container caches it
//! between the two passes.

use super::measure::MeasureSpec;
use super::types::{EdgeInsets, Rect, Size};

/// An element a container can measure and position
pub trait Child {
    /// Compute this child's size under the proposed constraints.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Accept the final frame assigned by the parent.
    fn place(&mut self, frame: Rect);
}

/// Per-child layout parameters, fixed once the child is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutParams {
    pub margin: EdgeInsets,
}

impl LayoutParams {
    /// Parameters with zero margins
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the margin box
    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin;
        self
    }
}

/// A leaf child with a fixed intrinsic size
///
/// Answers every measurement with its intrinsic size, whatever the incoming
/// specs propose, and remembers the last frame it was placed in. Used by the
/// scene loader and as a test fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedChild {
    size: Size,
    frame: Option<Rect>,
}

impl FixedChild {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            frame: None,
        }
    }

    /// The frame from the most recent `place` call, if any
    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }
}

impl Child for FixedChild {
    fn measure(&mut self, _width: MeasureSpec, _height: MeasureSpec) -> Size {
        self.size
    }

    fn place(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }
}
