//! Export utilities: render a sketch frame to SVG and PNG.
//!
//! Notes:
//! - SVG export is pure string building and works everywhere.
//! - PNG export rasterizes that SVG with resvg (native targets only).

use crate::config::SketchConfig;
use crate::sketch::Frame;
use egui::Color32;
use std::fmt::Write as _;

/// Appearance options for an exported image.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Fill the canvas before drawing
    pub include_background: bool,
    /// Background fill color
    pub background_color: Color32,
    /// Draw the grid nodes underneath the strokes
    pub include_nodes: bool,
    /// Node fill color
    pub node_color: Color32,
    /// Stroke color for shapes
    pub stroke_color: Color32,
    /// Scale applied when rasterizing to PNG
    pub png_scale: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_background: true,
            background_color: Color32::from_rgb(18, 18, 24),
            include_nodes: true,
            node_color: Color32::from_rgb(52, 52, 64),
            stroke_color: Color32::from_rgb(240, 200, 80),
            png_scale: 1.0,
        }
    }
}

/// Builds an SVG document for `frame` on a `width` x `height` canvas.
///
/// The live path is not exported; only completed shapes are.
pub fn build_svg(
    frame: &Frame<'_>,
    width: f32,
    height: f32,
    config: &SketchConfig,
    options: &ExportOptions,
) -> (String, u32, u32) {
    let w = width.ceil().max(1.0) as u32;
    let h = height.ceil().max(1.0) as u32;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );

    if options.include_background {
        let _ = writeln!(
            out,
            "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" {} />",
            paint("fill", options.background_color)
        );
    }

    if options.include_nodes && !frame.nodes.is_empty() {
        let _ = writeln!(out, "<g {}>", paint("fill", options.node_color));
        for node in frame.nodes {
            let _ = writeln!(
                out,
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" />",
                node.center.x, node.center.y, node.radius
            );
        }
        let _ = writeln!(out, "</g>");
    }

    if !frame.shapes.is_empty() {
        let _ = writeln!(
            out,
            "<g fill=\"none\" {} stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\">",
            paint("stroke", options.stroke_color),
            config.stroke_width
        );
        for shape in frame.shapes {
            let points = shape
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "  <polyline points=\"{points}\" />");
        }
        let _ = writeln!(out, "</g>");
    }

    out.push_str("</svg>\n");
    (out, w, h)
}

/// Rasterizes an SVG document into PNG bytes.
#[cfg(not(target_arch = "wasm32"))]
pub fn render_png(svg: &str, scale: f32) -> crate::Result<Vec<u8>> {
    use crate::SketchError;
    use tiny_skia::Pixmap;

    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default())
        .map_err(|e| SketchError::SvgParse(e.to_string()))?;

    let scale = scale.clamp(0.25, 8.0);
    let size = tree.size();
    let out_w = (size.width() * scale).round().max(1.0) as u32;
    let out_h = (size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = Pixmap::new(out_w, out_h).ok_or(SketchError::Pixmap {
        width: out_w,
        height: out_h,
    })?;
    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| SketchError::PngEncode(e.to_string()))
}

fn paint(attr: &str, c: Color32) -> String {
    format!(
        "{attr}=\"#{:02x}{:02x}{:02x}\" {attr}-opacity=\"{}\"",
        c.r(),
        c.g(),
        c.b(),
        c.a() as f32 / 255.0
    )
}
