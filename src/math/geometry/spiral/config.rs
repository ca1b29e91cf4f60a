// src/math/geometry/spiral/config.rs

use crate::math::{
    error::{SpyralError, SpyralResult},
    types::Rgb,
};

/// Konfiguration für das Einschreiben einer Spirale in ein Polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralConfig {
    /// Anteil, um den eine Ecke pro Schritt zu ihrem Nachfolger wandert, in `(0, 1]`.
    pub ratio: f64,
    /// Abbruch, sobald eine gerade verschobene Ecke höchstens so weit von ihrem
    /// Nachfolger entfernt ist.
    pub min_distance: f64,
    /// Maximale Anzahl an Runden um das Polygon.
    pub max_laps: usize,
    /// Feste Strichfarbe; `None` zieht pro Region eine Zufallsfarbe.
    pub color: Option<Rgb>,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            ratio: 0.05,
            min_distance: 0.0,
            max_laps: 100,
            color: None,
        }
    }
}

impl SpiralConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_max_laps(mut self, max_laps: usize) -> Self {
        self.max_laps = max_laps;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn validate(&self) -> SpyralResult<()> {
        if !self.ratio.is_finite() || self.ratio <= 0.0 || self.ratio > 1.0 {
            return Err(SpyralError::InvalidConfiguration {
                message: format!("Spiral ratio must be in (0, 1], got {}", self.ratio),
            });
        }
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(SpyralError::InvalidConfiguration {
                message: format!(
                    "Minimum distance must be a finite value >= 0, got {}",
                    self.min_distance
                ),
            });
        }
        Ok(())
    }
}
