// src/canvas/raster.rs

use super::{Canvas, Stroke};
use crate::math::{
    error::{SpyralError, SpyralResult},
    types::{Bounds2D, IVec2, Rgb, Vec2},
    utils::constants,
};
use image::{Rgba, RgbaImage};

/// Vollständig transparentes Weiß.
pub const TRANSPARENT_WHITE: [u8; 4] = [255, 255, 255, 0];

/// RGBA-Rasterfläche mit Strich-Protokoll.
///
/// Linien werden sofort 1 px breit und opak gerastert; das Protokoll dient dem
/// Vektor-Export. Beides ist nur anhängend.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    image: RgbaImage,
    background: [u8; 4],
    strokes: Vec<Stroke>,
}

impl RasterCanvas {
    /// Leinwand mit transparent-weißem Hintergrund.
    pub fn new(width: u32, height: u32) -> SpyralResult<Self> {
        Self::with_background(width, height, TRANSPARENT_WHITE)
    }

    pub fn with_background(width: u32, height: u32, background: [u8; 4]) -> SpyralResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpyralError::InvalidConfiguration {
                message: format!("Canvas must not be empty, got {}x{}", width, height),
            });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background)),
            background,
            strokes: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn background(&self) -> [u8; 4] {
        self.background
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Bereich der Pixelmittelpunkte.
    pub fn pixel_bounds(&self) -> Bounds2D {
        Bounds2D::from_points(
            Vec2::ZERO,
            Vec2::new((self.width() - 1) as f32, (self.height() - 1) as f32),
        )
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Bresenham zwischen zwei Pixeln (beide inklusive).
    fn rasterize(&mut self, from: IVec2, to: IVec2, color: Rgba<u8>) {
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let step_x = if from.x < to.x { 1 } else { -1 };
        let step_y = if from.y < to.y { 1 } else { -1 };
        let mut error = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }
}

impl Canvas for RasterCanvas {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgb) {
        self.strokes.push(Stroke { from, to, color });

        let bounds = self.pixel_bounds();
        if let Some((start, end)) = clip_segment(from, to, &bounds) {
            let to_pixel = |p: Vec2| IVec2::new(p.x.round() as i32, p.y.round() as i32);
            self.rasterize(to_pixel(start), to_pixel(end), Rgba(color.to_rgba()));
        }
    }
}

/// Liang-Barsky: schneidet das Segment `from -> to` auf `bounds` zu.
///
/// `None`, wenn kein Teil des Segments in `bounds` liegt.
pub fn clip_segment(from: Vec2, to: Vec2, bounds: &Bounds2D) -> Option<(Vec2, Vec2)> {
    let delta = to - from;
    let (mut t_enter, mut t_exit) = (0.0f32, 1.0f32);

    // (Richtung nach außen, Abstand zur Kante) für links, rechts, unten, oben
    let edges = [
        (-delta.x, from.x - bounds.min.x),
        (delta.x, bounds.max.x - from.x),
        (-delta.y, from.y - bounds.min.y),
        (delta.y, bounds.max.y - from.y),
    ];
    for (outward, distance) in edges {
        if outward.abs() <= constants::EPSILON {
            // parallel zur Kante
            if distance < 0.0 {
                return None;
            }
            continue;
        }
        let t = distance / outward;
        if outward < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }
        if t_enter > t_exit {
            return None;
        }
    }

    Some((from + delta * t_enter, from + delta * t_exit))
}
