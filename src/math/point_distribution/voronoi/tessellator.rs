// src/math/point_distribution/voronoi/tessellator.rs

use crate::math::{
    error::{SpyralError, SpyralResult},
    types::{DVec2, IVec2, SpadePoint, seeds_to_spade_points, spade_to_dvec2},
    utils::constants::VERTEX_KEY_SCALE,
};
use bevy::log::debug;
use spade::{DelaunayTriangulation, Triangulation};
use std::collections::HashMap;

/// Index in die Vertex-Tabelle; [`UNBOUNDED_VERTEX`] markiert den Punkt im Unendlichen.
pub type RawVertexIndex = isize;

/// Eine rohe Region: Eckindizes in die Vertex-Tabelle, ggf. mit [`UNBOUNDED_VERTEX`].
/// Eine leere Region bedeutet "keine Zelle".
pub type RawRegion = Vec<RawVertexIndex>;

/// Sentinel für eine Zelle, die ins Unendliche reicht.
pub const UNBOUNDED_VERTEX: RawVertexIndex = -1;

/// Minimum number of distinct seeds for a non-degenerate planar Voronoi diagram.
pub const MIN_VORONOI_SEEDS: usize = 4;

/// Ungefilterte Ausgabe einer Voronoi-Zerlegung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawVoronoi {
    /// Globale Vertex-Tabelle (von allen Regionen geteilt), in voller Spade-Genauigkeit.
    pub vertices: Vec<DVec2>,
    /// Eine Region pro Seed.
    pub regions: Vec<RawRegion>,
}

/// Punktmengen-Voronoi-Zerlegung.
///
/// Degenerierte Eingaben (zu wenige Punkte, alle kollinear) sind ein Fehler
/// des Zerlegers und werden unverändert nach oben gereicht.
pub trait VoronoiTessellator {
    fn tessellate(&self, seeds: &[IVec2]) -> SpyralResult<RawVoronoi>;
}

/// Voronoi über die Delaunay-Triangulation von Spade.
///
/// Voronoi-Ecken sind die Umkreismittelpunkte der inneren Delaunay-Dreiecke.
/// Kozirkuläre Seeds liefern mehrere identische Umkreismittelpunkte; diese
/// werden über einen quantisierten Schlüssel zu einer Ecke zusammengeführt.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpadeVoronoi;

impl SpadeVoronoi {
    pub fn new() -> Self {
        Self
    }

    fn build_triangulation(
        &self,
        seeds: &[IVec2],
    ) -> SpyralResult<DelaunayTriangulation<SpadePoint>> {
        let spade_points = seeds_to_spade_points(seeds);
        let triangulation = DelaunayTriangulation::<SpadePoint>::bulk_load_stable(spade_points)
            .map_err(|e| SpyralError::TriangulationFailed {
                reason: format!(
                    "Spade's bulk_load_stable failed: {:?}. Input point count: {}",
                    e,
                    seeds.len()
                ),
            })?;

        if triangulation.num_vertices() < MIN_VORONOI_SEEDS {
            return Err(SpyralError::InsufficientPoints {
                expected: MIN_VORONOI_SEEDS,
                actual: triangulation.num_vertices(),
            });
        }
        if triangulation.num_inner_faces() == 0 {
            return Err(SpyralError::TriangulationFailed {
                reason: format!(
                    "all {} distinct seed points are collinear",
                    triangulation.num_vertices()
                ),
            });
        }

        Ok(triangulation)
    }
}

fn vertex_key(point: SpadePoint) -> (i64, i64) {
    (
        (point.x * VERTEX_KEY_SCALE).round() as i64,
        (point.y * VERTEX_KEY_SCALE).round() as i64,
    )
}

impl VoronoiTessellator for SpadeVoronoi {
    fn tessellate(&self, seeds: &[IVec2]) -> SpyralResult<RawVoronoi> {
        let triangulation = self.build_triangulation(seeds)?;

        // 1. Vertex-Tabelle: ein Eintrag pro (zusammengeführtem) Umkreismittelpunkt
        let mut vertices: Vec<DVec2> = Vec::with_capacity(triangulation.num_inner_faces());
        let mut table_index_by_key: HashMap<(i64, i64), usize> = HashMap::new();
        let mut table_index_by_face: Vec<Option<usize>> =
            vec![None; triangulation.num_all_faces()];

        for face in triangulation.inner_faces() {
            let circumcenter = face.circumcenter();
            let table_index = *table_index_by_key
                .entry(vertex_key(circumcenter))
                .or_insert_with(|| {
                    vertices.push(spade_to_dvec2(circumcenter));
                    vertices.len() - 1
                });
            table_index_by_face[face.fix().index()] = Some(table_index);
        }

        // 2. Regionen: Flächen rund um jeden Seed, nach Winkel sortiert (CCW).
        //    Die linke Fläche der ausgehenden Kante e_i liegt zwischen e_i und e_{i+1}.
        let mut regions = Vec::with_capacity(triangulation.num_vertices());
        for vertex in triangulation.vertices() {
            let origin = vertex.position();
            let mut out_edges: Vec<_> = vertex.out_edges().collect();
            out_edges.sort_by(|a, b| {
                let pa = a.to().position();
                let pb = b.to().position();
                let angle_a = (pa.y - origin.y).atan2(pa.x - origin.x);
                let angle_b = (pb.y - origin.y).atan2(pb.x - origin.x);
                angle_a.total_cmp(&angle_b)
            });

            let mut region: RawRegion = Vec::with_capacity(out_edges.len());
            for edge in out_edges {
                match edge.face().as_inner() {
                    Some(inner) => {
                        if let Some(table_index) = table_index_by_face[inner.fix().index()] {
                            region.push(table_index as RawVertexIndex);
                        }
                    }
                    None => region.push(UNBOUNDED_VERTEX),
                }
            }

            // Zusammengeführte Ecken erscheinen sonst doppelt hintereinander
            region.dedup();
            while region.len() > 1 && region.first() == region.last() {
                region.pop();
            }
            regions.push(region);
        }

        debug!(
            "SpadeVoronoi: {} seeds -> {} distinct seeds, {} Voronoi vertices, {} raw regions",
            seeds.len(),
            triangulation.num_vertices(),
            vertices.len(),
            regions.len()
        );

        Ok(RawVoronoi { vertices, regions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square_with_center() -> Vec<IVec2> {
        vec![
            IVec2::new(0, 0),
            IVec2::new(10, 0),
            IVec2::new(10, 10),
            IVec2::new(0, 10),
            IVec2::new(5, 4),
        ]
    }

    #[test]
    fn test_too_few_seeds_is_an_error() {
        let result = SpadeVoronoi::new().tessellate(&[
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            IVec2::new(0, 1),
        ]);
        assert!(matches!(
            result,
            Err(SpyralError::InsufficientPoints { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn test_duplicate_seeds_count_once() {
        let result = SpadeVoronoi::new().tessellate(&[
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            IVec2::new(0, 1),
            IVec2::new(0, 1),
        ]);
        // Nur drei verschiedene Punkte: kein gültiges Diagramm
        assert!(result.is_err());
    }

    #[test]
    fn test_collinear_seeds_are_rejected() {
        let seeds: Vec<IVec2> = (0..6).map(|i| IVec2::new(i, 2 * i)).collect();
        let result = SpadeVoronoi::new().tessellate(&seeds);
        assert!(matches!(result, Err(SpyralError::TriangulationFailed { .. })));
    }

    #[test]
    fn test_center_seed_gets_bounded_region() {
        let raw = SpadeVoronoi::new().tessellate(&square_with_center()).unwrap();
        assert_eq!(raw.regions.len(), 5);

        let bounded: Vec<&RawRegion> = raw
            .regions
            .iter()
            .filter(|r| !r.contains(&UNBOUNDED_VERTEX))
            .collect();
        assert_eq!(bounded.len(), 1);
        assert_eq!(bounded[0].len(), 4);
        for &index in bounded[0].iter() {
            assert!((index as usize) < raw.vertices.len());
        }
    }

    #[test]
    fn test_hull_seeds_have_exactly_one_unbounded_marker() {
        let raw = SpadeVoronoi::new().tessellate(&square_with_center()).unwrap();
        let unbounded_counts: Vec<usize> = raw
            .regions
            .iter()
            .map(|r| r.iter().filter(|&&i| i == UNBOUNDED_VERTEX).count())
            .collect();
        assert_eq!(unbounded_counts.iter().filter(|&&c| c == 1).count(), 4);
        assert!(unbounded_counts.iter().all(|&c| c <= 1));
    }

    #[test]
    fn test_cocircular_circumcenters_are_merged() {
        // Quadrat: beide Delaunay-Dreiecke haben denselben Umkreismittelpunkt
        let seeds = vec![
            IVec2::new(0, 0),
            IVec2::new(2, 0),
            IVec2::new(2, 2),
            IVec2::new(0, 2),
        ];
        let raw = SpadeVoronoi::new().tessellate(&seeds).unwrap();
        assert_eq!(raw.vertices.len(), 1);
        assert_relative_eq!(raw.vertices[0].x, 1.0);
        assert_relative_eq!(raw.vertices[0].y, 1.0);
        for region in &raw.regions {
            assert!(region.len() <= 2);
        }
    }

    #[test]
    fn test_bounded_region_vertices_surround_seed() {
        let raw = SpadeVoronoi::new().tessellate(&square_with_center()).unwrap();
        let region = raw
            .regions
            .iter()
            .find(|r| !r.contains(&UNBOUNDED_VERTEX))
            .unwrap();

        // Die Zelle des Zentrums muss den Seed (5, 4) enthalten: Winkelsumme ~ 2π
        let seed = DVec2::new(5.0, 4.0);
        let mut total_angle = 0.0f64;
        for i in 0..region.len() {
            let a = raw.vertices[region[i] as usize] - seed;
            let b = raw.vertices[region[(i + 1) % region.len()] as usize] - seed;
            total_angle += a.angle_between(b);
        }
        assert_relative_eq!(total_angle.abs(), std::f64::consts::TAU, epsilon = 1e-9);
    }
}
