// src/canvas/svg_export.rs

use super::RasterCanvas;
use crate::math::error::SpyralResult;
use std::path::Path;
use svg::Document;
use svg::node::element::{Line, Rectangle};

/// Baut ein SVG-Dokument aus dem Strich-Protokoll der Leinwand.
///
/// Der Hintergrund wird als Rechteck mit der Hintergrund-Alpha als `fill-opacity`
/// abgebildet, jeder Strich als eigenes `<line>`-Element in Zeichenreihenfolge.
pub fn canvas_to_svg(canvas: &RasterCanvas) -> Document {
    let (width, height) = (canvas.width(), canvas.height());
    let [r, g, b, a] = canvas.background();

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", format!("rgb({},{},{})", r, g, b))
        .set("fill-opacity", a as f32 / 255.0);

    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height))
        .add(background);

    for stroke in canvas.strokes() {
        document = document.add(
            Line::new()
                .set("x1", stroke.from.x)
                .set("y1", stroke.from.y)
                .set("x2", stroke.to.x)
                .set("y2", stroke.to.y)
                .set("stroke", stroke.color.to_css())
                .set("stroke-width", 1),
        );
    }

    document
}

pub fn save_svg(canvas: &RasterCanvas, path: &Path) -> SpyralResult<()> {
    svg::save(path, &canvas_to_svg(canvas))?;
    Ok(())
}
