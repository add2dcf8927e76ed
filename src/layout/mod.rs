//! Layout engine: measure/layout protocol and the corner container
//!
//! A layout pass is driven from outside in two phases. The measure pass
//! hands size constraints down the tree and sizes bubble back up; the
//! layout pass assigns final frames top-down. This module provides the
//! protocol types and the one container this crate implements.

pub mod child;
pub mod container;
pub mod measure;
pub mod types;

pub use child::{Child, FixedChild, LayoutParams};
pub use container::{Corner, CornerLayout};
pub use measure::{MeasureMode, MeasureSpec};
pub use types::{EdgeInsets, Rect, Size};
