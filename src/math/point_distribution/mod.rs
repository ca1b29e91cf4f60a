// src/math/point_distribution/mod.rs

// Deklaration der verschiedenen Punktverteilungs-Methoden/Module
pub mod seeds;
pub mod voronoi;

// Re-Exporte der wichtigsten Elemente aus den Untermodulen
pub use self::seeds::SeedGenerator;
pub use self::voronoi::{
    RawVoronoi, SpadeVoronoi, Tessellation, TessellationAdapter, VoronoiTessellator,
    filter_regions,
};
