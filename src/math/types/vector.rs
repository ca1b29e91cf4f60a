// src/math/types/vector.rs

use super::SpadePoint;
use bevy::math::{DVec2, IVec2};

// --- Konvertierungsfunktionen ---

/// Konvertiert ganzzahlige Seed-Punkte in Spade-Punkte.
pub fn seeds_to_spade_points(seeds: &[IVec2]) -> Vec<SpadePoint> {
    seeds
        .iter()
        .map(|p| SpadePoint::new(p.x as f64, p.y as f64))
        .collect()
}

/// Konvertiert einen Spade-Punkt verlustfrei in einen Bevy DVec2.
pub fn spade_to_dvec2(point: SpadePoint) -> DVec2 {
    DVec2::new(point.x, point.y)
}

/// Linear interpolation helper used by the spiral contraction:
/// `(1 - t) * from + t * to`.
pub fn lerp_towards(from: DVec2, to: DVec2, t: f64) -> DVec2 {
    from * (1.0 - t) + to * t
}
