//! Corner Layout - a four-slot corner-anchored layout container
//!
//! This library implements the two-pass measure/layout protocol for one
//! container: children attach in order, the first four land in the four
//! corners of the container's bounds. It ships a TOML scene format and an
//! SVG renderer for looking at the result.
//!
//! # Example
//!
//! ```rust
//! use corner_layout::render;
//!
//! let svg = render(r#"
//!     [[children]]
//!     width = 50
//!     height = 50
//! "#).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod layout;
pub mod renderer;
pub mod scene;

pub use layout::{
    Child, Corner, CornerLayout, EdgeInsets, FixedChild, LayoutParams, MeasureMode, MeasureSpec,
    Rect, Size,
};
pub use renderer::{render_svg, SvgConfig};
pub use scene::{Scene, SceneError};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading the scene description
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Debug mode: dump child frames to stderr
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a TOML scene to SVG with default configuration
///
/// This is the main entry point for the library. It loads the scene,
/// runs a measure pass with the scene's container constraints, a layout
/// pass at the origin, and draws the outcome.
pub fn render(scene_toml: &str) -> Result<String, RenderError> {
    render_with_config(scene_toml, RenderConfig::default())
}

/// Render a TOML scene to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use corner_layout::{render_with_config, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new().with_svg(SvgConfig::default().with_viewbox_padding(50));
///
/// let svg = render_with_config(r#"
///     [container]
///     width = { mode = "exact", size = 200 }
///     height = { mode = "exact", size = 200 }
///
///     [[children]]
///     width = 50
///     height = 50
/// "#, config).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
pub fn render_with_config(scene_toml: &str, config: RenderConfig) -> Result<String, RenderError> {
    let scene = Scene::from_str(scene_toml)?;

    let mut container = scene.build();
    let (width_spec, height_spec) = scene.container_specs();

    // Measure, then lay out at the origin with the size just reported.
    let size = container.measure(width_spec, height_spec);
    container.layout(Rect::from_origin_size(0, 0, size));

    if config.debug {
        eprintln!("=== Layout Debug ===");
        eprintln!("container w={} h={}", size.width, size.height);
        for index in 0..container.child_count() {
            let corner = container
                .corner_of(index)
                .map(|c| c.as_str())
                .unwrap_or("<unplaced>");
            if let Some(frame) = container.child_frame(index) {
                eprintln!(
                    "  [{}] {} l={} t={} r={} b={}",
                    index, corner, frame.left, frame.top, frame.right, frame.bottom
                );
            }
        }
        eprintln!("====================");
    }

    Ok(render_svg(&container, &config.svg))
}
