pub mod error;
pub mod geometry;
pub mod point_distribution;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{SpyralError, SpyralResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{SpyralError, SpyralResult},
        geometry::spiral::{SpiralConfig, SpiralInscriber, SpiralOutcome, StopReason, draw_spiral},
        point_distribution::{
            SeedGenerator, SpadeVoronoi, Tessellation, TessellationAdapter, VoronoiTessellator,
            filter_regions,
        },
        types::*,
    };
}
