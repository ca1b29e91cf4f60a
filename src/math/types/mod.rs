// src/math/types/mod.rs
pub mod bounds;
pub mod color;
pub mod vector;

pub use bounds::*;
pub use color::*;
pub use vector::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::{DVec2, IVec2, Vec2};
pub use spade::Point2;

/// Punkt-Typ für die Übergabe an Spade (Delaunay in f64).
pub type SpadePoint = Point2<f64>;

/// Ein Polygon als geordnete Eckpunktliste; die letzte Ecke ist implizit mit der ersten
/// verbunden. In f64, damit die Kontraktion auch bei Bildkoordinaten nicht auf einen Punkt
/// zusammenfällt.
pub type Polygon2D = Vec<DVec2>;
