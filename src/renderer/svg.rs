//! SVG generation from a laid-out container

use crate::layout::{Corner, CornerLayout, Rect, Size};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the container outline
    pub fn add_container(&mut self, size: Size) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r##"{}<rect class="{}container" x="0" y="0" width="{}" height="{}" fill="none" stroke="#333333" stroke-width="2"/>"##,
            self.indent_str(),
            prefix,
            size.width,
            size.height,
        ));
    }

    /// Add one placed child: a filled rect plus its index centered as text
    pub fn add_child(&mut self, index: usize, corner: Corner, frame: Rect) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r##"{}<rect class="{}child {}{}" x="{}" y="{}" width="{}" height="{}" fill="#e3f2fd" stroke="#1565c0"/>"##,
            self.indent_str(),
            prefix,
            prefix,
            corner.as_str(),
            frame.left,
            frame.top,
            frame.width(),
            frame.height(),
        ));

        let cx = frame.left + frame.width() / 2;
        let cy = frame.top + frame.height() / 2;
        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            self.indent_str(),
            prefix,
            cx,
            cy,
            index,
        ));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: Size) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = -padding;
        let vb_y = -padding;
        let vb_w = viewbox.width + 2 * padding;
        let vb_h = viewbox.height + 2 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        for element in &self.elements {
            svg.push_str(element);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// Render a laid-out container to SVG.
///
/// Draws the container outline and a rect per placed child, tagged with
/// per-corner CSS classes. Children without a corner are not drawn, the
/// same way they are not placed.
pub fn render_svg(container: &CornerLayout, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    builder.add_container(container.measured_size());

    for index in 0..container.child_count() {
        if let (Some(corner), Some(frame)) =
            (container.corner_of(index), container.child_frame(index))
        {
            builder.add_child(index, corner, frame);
        }
    }

    builder.build(container.measured_size())
}
