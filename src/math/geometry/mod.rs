// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod spiral;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen,
// falls man nicht das gesamte `math::prelude` importieren möchte.
pub use self::spiral::{SpiralConfig, SpiralInscriber, SpiralOutcome, StopReason, draw_spiral};
