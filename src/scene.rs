//! Scene descriptions: what to lay out, loaded from TOML
//!
//! A scene names the constraints proposed to the container and the fixed
//! children to attach, in attachment order. Example:
//!
//! ```toml
//! [container]
//! width = { mode = "exact", size = 200 }
//! height = { mode = "exact", size = 200 }
//!
//! [[children]]
//! width = 50
//! height = 50
//! margin = { left = 10, top = 10 }
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::{
    CornerLayout, EdgeInsets, FixedChild, LayoutParams, MeasureMode, MeasureSpec,
};

/// Errors that can occur when loading or parsing scenes
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// One axis of the constraint proposed to the container
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AxisSpec {
    pub mode: MeasureMode,
    #[serde(default)]
    pub size: i32,
}

impl AxisSpec {
    fn to_spec(self) -> MeasureSpec {
        MeasureSpec::new(self.mode, self.size)
    }
}

impl Default for AxisSpec {
    fn default() -> Self {
        // Wrap-content: no proposal, the container sizes to its children.
        Self {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }
}

/// Constraints proposed to the container, one spec per axis
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ContainerSpec {
    pub width: AxisSpec,
    pub height: AxisSpec,
}

/// A fixed-size child to attach, with an optional margin box
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChildSpec {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub margin: EdgeInsets,
}

/// A full scene: container constraints plus children in attachment order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub container: ContainerSpec,
    pub children: Vec<ChildSpec>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(content)?)
    }

    /// The per-axis specs to propose to the container
    pub fn container_specs(&self) -> (MeasureSpec, MeasureSpec) {
        (
            self.container.width.to_spec(),
            self.container.height.to_spec(),
        )
    }

    /// Build a container populated with this scene's children.
    ///
    /// Any number of children is accepted; extras past the fourth are
    /// attached all the same and simply never get a corner.
    pub fn build(&self) -> CornerLayout {
        let mut container = CornerLayout::new();
        for child in &self.children {
            container.add_child(
                Box::new(FixedChild::new(child.width, child.height)),
                LayoutParams::new().with_margin(child.margin),
            );
        }
        container
    }
}
