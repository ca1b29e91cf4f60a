// src/math/point_distribution/seeds.rs

use crate::math::{
    error::{SpyralError, SpyralResult},
    types::{Bounds2D, IVec2},
    utils::random::random_integer_point_in_rect,
};
use rand::Rng;

/// Streut ganzzahlige Seed-Punkte über die Bildfläche plus Rand.
///
/// Der Rand sorgt dafür, dass Zellen an der Bildkante nicht künstlich
/// abgeschnitten wirken: die Tessellation läuft über das sichtbare Bild hinaus.
#[derive(Debug, Clone, Copy)]
pub struct SeedGenerator {
    min: IVec2,
    max: IVec2,
}

impl SeedGenerator {
    /// Seeds fallen in `x ∈ [-width_margin, width + width_margin]`,
    /// `y ∈ [-height_margin, height + height_margin]` (jeweils inklusive).
    pub fn new(
        width: u32,
        height: u32,
        width_margin: u32,
        height_margin: u32,
    ) -> SpyralResult<Self> {
        let to_i32 = |value: i64, what: &str| {
            i32::try_from(value).map_err(|_| SpyralError::InvalidConfiguration {
                message: format!("seed area {} ({}) exceeds the i32 range", what, value),
            })
        };

        let min = IVec2::new(
            to_i32(-(width_margin as i64), "min x")?,
            to_i32(-(height_margin as i64), "min y")?,
        );
        let max = IVec2::new(
            to_i32(width as i64 + width_margin as i64, "max x")?,
            to_i32(height as i64 + height_margin as i64, "max y")?,
        );

        Ok(Self { min, max })
    }

    /// Die (geschlossene) Fläche, aus der Seeds gezogen werden.
    pub fn area(&self) -> Bounds2D {
        Bounds2D::from_points(self.min.as_vec2(), self.max.as_vec2())
    }

    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<IVec2> {
        (0..count)
            .map(|_| random_integer_point_in_rect(self.min, self.max, rng))
            .collect()
    }
}
