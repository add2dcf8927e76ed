//! Measure specs: the size-negotiation half of the layout protocol
//!
//! A parent proposes a size and a mode per axis. The child (or container)
//! answers with the size it settled on.

use serde::Deserialize;

/// How a proposed size is to be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasureMode {
    /// Use exactly the proposed size
    Exact,
    /// The proposed size is an upper bound
    AtMost,
    /// Use any size
    Unspecified,
}

/// A per-axis size constraint handed down by a parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: i32,
}

impl MeasureSpec {
    pub fn new(mode: MeasureMode, size: i32) -> Self {
        Self { mode, size }
    }

    /// An `Exact` spec for the given size
    pub fn exact(size: i32) -> Self {
        Self::new(MeasureMode::Exact, size)
    }

    /// An `AtMost` spec for the given size
    pub fn at_most(size: i32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    /// An `Unspecified` spec, carrying no size
    pub fn unspecified() -> Self {
        Self::new(MeasureMode::Unspecified, 0)
    }

    /// Pick the final size for one axis given the content-derived desired size.
    ///
    /// `Exact` adopts the proposed size; `AtMost` and `Unspecified` both adopt
    /// the desired size. Note that `AtMost` does NOT clamp the desired size to
    /// the proposed upper bound; content wider than the proposal wins.
    pub fn resolve(&self, desired: i32) -> i32 {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::AtMost | MeasureMode::Unspecified => desired,
        }
    }
}
