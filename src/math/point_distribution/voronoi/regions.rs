// src/math/point_distribution/voronoi/regions.rs

use super::tessellator::{
    RawRegion, RawVoronoi, SpadeVoronoi, UNBOUNDED_VERTEX, VoronoiTessellator,
};
use crate::math::{
    error::{SpyralError, SpyralResult},
    types::{DVec2, IVec2, Polygon2D},
};
use bevy::log::debug;

/// Minimum number of vertices for a drawable closed region.
pub const MIN_REGION_VERTICES: usize = 3;

/// Filtert die rohen Regionen einer Voronoi-Zerlegung.
///
/// - Regionen ohne [`UNBOUNDED_VERTEX`] bleiben unverändert.
/// - Aus Regionen mit [`UNBOUNDED_VERTEX`] wird der Marker entfernt; sie bleiben
///   nur, wenn danach noch mindestens drei Ecken übrig sind.
/// - Leere Regionen fallen immer weg.
///
/// Die Funktion ist idempotent.
pub fn filter_regions(raw_regions: Vec<RawRegion>) -> Vec<RawRegion> {
    raw_regions
        .into_iter()
        .filter_map(|mut region| {
            if region.is_empty() {
                return None;
            }
            if !region.contains(&UNBOUNDED_VERTEX) {
                return Some(region);
            }
            region.retain(|&index| index != UNBOUNDED_VERTEX);
            (region.len() >= MIN_REGION_VERTICES).then_some(region)
        })
        .collect()
}

/// Gefilterte Tessellation: Vertex-Tabelle plus Regionen als Indexlisten.
///
/// Die Vertex-Tabelle ist nur lesbar; [`Tessellation::region_polygon`] liefert
/// eine Kopie, die der Spiral-Zeichner verändern darf, ohne Nachbarzellen zu stören.
#[derive(Debug, Clone, Default)]
pub struct Tessellation {
    vertices: Vec<DVec2>,
    regions: Vec<Vec<usize>>,
}

impl Tessellation {
    /// Prüft die gefilterten Regionen gegen die Vertex-Tabelle.
    pub fn from_filtered(
        vertices: Vec<DVec2>,
        filtered: Vec<RawRegion>,
    ) -> SpyralResult<Self> {
        let vertex_count = vertices.len();
        let regions = filtered
            .into_iter()
            .map(|region| {
                region
                    .into_iter()
                    .map(|index| {
                        usize::try_from(index)
                            .ok()
                            .filter(|&i| i < vertex_count)
                            .ok_or_else(|| SpyralError::TriangulationFailed {
                                reason: format!(
                                    "region references vertex {} of {}",
                                    index, vertex_count
                                ),
                            })
                    })
                    .collect::<SpyralResult<Vec<usize>>>()
            })
            .collect::<SpyralResult<Vec<_>>>()?;

        Ok(Self { vertices, regions })
    }

    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    pub fn regions(&self) -> &[Vec<usize>] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Kopiert die Koordinaten der Region `index` aus der Vertex-Tabelle.
    ///
    /// # Panics
    /// Wenn `index` keine Region ist.
    pub fn region_polygon(&self, index: usize) -> Polygon2D {
        self.regions[index]
            .iter()
            .map(|&vertex| self.vertices[vertex])
            .collect()
    }

    /// Alle Regionen als eigenständige Polygon-Kopien, in Regionsreihenfolge.
    pub fn polygons(&self) -> impl Iterator<Item = Polygon2D> + '_ {
        (0..self.regions.len()).map(move |index| self.region_polygon(index))
    }
}

/// Kapselt den Voronoi-Zerleger und wendet die Regionsfilterung an.
#[derive(Debug, Clone, Default)]
pub struct TessellationAdapter<T: VoronoiTessellator = SpadeVoronoi> {
    tessellator: T,
}

impl<T: VoronoiTessellator> TessellationAdapter<T> {
    pub fn new(tessellator: T) -> Self {
        Self { tessellator }
    }

    pub fn tessellate(&self, seeds: &[IVec2]) -> SpyralResult<Tessellation> {
        let RawVoronoi { vertices, regions } = self.tessellator.tessellate(seeds)?;
        let raw_count = regions.len();
        let filtered = filter_regions(regions);

        debug!(
            "TessellationAdapter: {} raw regions, {} kept after filtering ({} vertices)",
            raw_count,
            filtered.len(),
            vertices.len()
        );

        Tessellation::from_filtered(vertices, filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::math::point_distribution::seeds::SeedGenerator;

    /// Liefert die Seeds selbst als Vertex-Tabelle und genau eine Region.
    struct SingleRegionStub;

    impl VoronoiTessellator for SingleRegionStub {
        fn tessellate(&self, seeds: &[IVec2]) -> SpyralResult<RawVoronoi> {
            Ok(RawVoronoi {
                vertices: seeds.iter().map(|s| s.as_dvec2()).collect(),
                regions: vec![(0..seeds.len() as isize).collect()],
            })
        }
    }

    struct FixedStub(RawVoronoi);

    impl VoronoiTessellator for FixedStub {
        fn tessellate(&self, _seeds: &[IVec2]) -> SpyralResult<RawVoronoi> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_unbounded_marker_removed_when_three_remain() {
        assert_eq!(filter_regions(vec![vec![2, -1, 5, 7]]), vec![vec![2, 5, 7]]);
    }

    #[test]
    fn test_mostly_unbounded_region_dropped() {
        assert!(filter_regions(vec![vec![-1, 3]]).is_empty());
        assert!(filter_regions(vec![vec![4, -1, 3]]).is_empty());
    }

    #[test]
    fn test_empty_region_dropped() {
        assert_eq!(
            filter_regions(vec![vec![], vec![0, 1, 2], vec![]]),
            vec![vec![0, 1, 2]]
        );
    }

    #[test]
    fn test_bounded_region_kept_as_is() {
        let regions = vec![vec![9, 3, 4, 1], vec![0, 1]];
        assert_eq!(filter_regions(regions.clone()), regions);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let raw = vec![
            vec![2, -1, 5, 7],
            vec![-1, 3],
            vec![],
            vec![1, 2, 3],
            vec![6, 7, -1, 8, 9],
        ];
        let once = filter_regions(raw);
        let twice = filter_regions(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unit_square_single_region_stub() {
        let seeds = vec![
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            IVec2::new(1, 1),
            IVec2::new(0, 1),
        ];
        let tessellation = TessellationAdapter::new(SingleRegionStub)
            .tessellate(&seeds)
            .unwrap();

        assert_eq!(tessellation.len(), 1);
        assert_eq!(tessellation.regions()[0], vec![0, 1, 2, 3]);
        assert_eq!(
            tessellation.region_polygon(0),
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(1.0, 0.0),
                DVec2::new(1.0, 1.0),
                DVec2::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let stub = FixedStub(RawVoronoi {
            vertices: vec![DVec2::ZERO, DVec2::X, DVec2::Y],
            regions: vec![vec![0, 1, 3]],
        });
        let result = TessellationAdapter::new(stub).tessellate(&[]);
        assert!(matches!(result, Err(SpyralError::TriangulationFailed { .. })));
    }

    #[test]
    fn test_region_polygon_is_a_private_copy() {
        let stub = FixedStub(RawVoronoi {
            vertices: vec![DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y],
            regions: vec![vec![0, 1, 2], vec![0, 2, 3]],
        });
        let tessellation = TessellationAdapter::new(stub).tessellate(&[]).unwrap();

        let mut first = tessellation.region_polygon(0);
        first[0] = DVec2::new(100.0, 100.0);

        assert_eq!(tessellation.vertices()[0], DVec2::ZERO);
        assert_eq!(tessellation.region_polygon(1)[0], DVec2::ZERO);
    }

    #[test]
    fn test_random_seeds_never_yield_small_regions() {
        let generator = SeedGenerator::new(1500, 500, 1000, 500).unwrap();
        let adapter = TessellationAdapter::new(SpadeVoronoi::new());

        for seed in 0..10u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let seeds = generator.generate(4 + (seed as usize) * 30, &mut rng);
            let tessellation = adapter.tessellate(&seeds).unwrap();

            for region in tessellation.regions() {
                assert!(region.len() >= MIN_REGION_VERTICES, "region {:?}", region);
                assert!(region.iter().all(|&i| i < tessellation.vertices().len()));
            }
        }
    }
}
