// src/canvas/mod.rs

//! Zeichenfläche für die Spiralen: ein RGBA-Rasterbild mit Strich-Protokoll,
//! plus Export nach Rastern (PNG, JPEG, ...) und SVG.

pub mod export;
pub mod raster;
pub mod svg_export;

pub use self::export::save_canvas;
pub use self::raster::RasterCanvas;

use crate::math::types::{Rgb, Vec2};

/// Ein gezeichnetes Liniensegment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Rgb,
}

/// Eine Fläche, auf der Liniensegmente gezeichnet werden können. Nur anhängend.
pub trait Canvas {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgb);
}

/// Reine Aufzeichnung ohne Rasterung.
impl Canvas for Vec<Stroke> {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgb) {
        self.push(Stroke { from, to, color });
    }
}
