// src/math/point_distribution/voronoi/mod.rs

// Deklaration der Untermodule für Voronoi-spezifische Funktionalität
pub mod regions;
pub mod tessellator;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Voronoi-Elemente
pub use self::regions::{MIN_REGION_VERTICES, Tessellation, TessellationAdapter, filter_regions};
pub use self::tessellator::{
    MIN_VORONOI_SEEDS, RawRegion, RawVertexIndex, RawVoronoi, SpadeVoronoi, UNBOUNDED_VERTEX,
    VoronoiTessellator,
};
