// src/math/geometry/spiral/inscriber.rs

use super::config::SpiralConfig;
use crate::canvas::Canvas;
use crate::math::{
    error::SpyralResult,
    point_distribution::voronoi::MIN_REGION_VERTICES,
    types::{DVec2, Rgb, lerp_towards},
};
use rand::Rng;

/// Zustand des Spiral-Automaten.
///
/// `lap_count` zählt, wie oft `current_vertex` wieder bei 0 angekommen ist.
/// Die Kontraktion ist in der ersten Runde (`lap_count == 0`) und noch einmal
/// für den einzelnen Schritt `lap_count == 1, current_vertex == 0` deaktiviert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpiralState {
    pub current_vertex: usize,
    pub lap_count: usize,
    pub contraction_armed: bool,
}

impl SpiralState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nächste Ecke; zählt Runden und schaltet die Kontraktion scharf.
    pub fn advance(&mut self, vertex_count: usize) {
        self.current_vertex = (self.current_vertex + 1) % vertex_count;
        if self.current_vertex == 0 {
            self.lap_count += 1;
        }
        self.contraction_armed =
            self.lap_count >= 1 && !(self.lap_count == 1 && self.current_vertex == 0);
    }
}

/// Warum eine Spirale beendet wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `max_laps` erreicht (geprüft vor dem Zeichnen).
    MaxLaps,
    /// Eine gerade verschobene Ecke liegt höchstens `min_distance` von ihrem Nachfolger entfernt.
    MinDistance,
}

/// Zusammenfassung eines Durchlaufs; die Segmente selbst werden nicht aufbewahrt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiralOutcome {
    pub segments_drawn: usize,
    pub laps: usize,
    pub stop_reason: StopReason,
}

/// Moves `vertices[index]` toward its successor by `ratio` and returns the new
/// distance between the two.
pub fn contract_vertex(vertices: &mut [DVec2], index: usize, ratio: f64) -> f64 {
    let next = vertices[(index + 1) % vertices.len()];
    vertices[index] = lerp_towards(vertices[index], next, ratio);
    vertices[index].distance(next)
}

/// Schreibt Spiralen in Polygone ein.
#[derive(Debug, Clone)]
pub struct SpiralInscriber {
    config: SpiralConfig,
}

impl SpiralInscriber {
    pub fn new(config: SpiralConfig) -> SpyralResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Feste Farbe aus der Konfiguration, sonst eine Zufallsfarbe.
    pub fn stroke_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        self.config.color.unwrap_or_else(|| Rgb::random(rng))
    }

    /// Zeichnet die Spirale eines Polygons mit einer pro Aufruf einmal bestimmten Farbe.
    pub fn inscribe_with_rng<C, R>(
        &self,
        polygon: &mut [DVec2],
        canvas: &mut C,
        rng: &mut R,
    ) -> SpiralOutcome
    where
        C: Canvas + ?Sized,
        R: Rng + ?Sized,
    {
        let color = self.stroke_color(rng);
        self.inscribe(polygon, color, canvas)
    }

    /// Zeichnet die Spirale; `polygon` wird dabei in-place zusammengezogen.
    ///
    /// Pro Schritt wird die Kante `polygon[i] -> polygon[i + 1]` gezeichnet und
    /// danach (falls scharf) `polygon[i]` um `ratio` zum Nachfolger verschoben.
    /// Höchstens `max_laps * polygon.len()` Segmente. Gerechnet wird in f64, die
    /// Leinwand bekommt die Endpunkte in f32.
    ///
    /// # Panics
    /// Bei weniger als drei Ecken. Solche Regionen werden vorher herausgefiltert.
    pub fn inscribe<C: Canvas + ?Sized>(
        &self,
        polygon: &mut [DVec2],
        color: Rgb,
        canvas: &mut C,
    ) -> SpiralOutcome {
        let vertex_count = polygon.len();
        assert!(
            vertex_count >= MIN_REGION_VERTICES,
            "spiral needs at least {} vertices, got {}",
            MIN_REGION_VERTICES,
            vertex_count
        );

        let mut state = SpiralState::new();
        let mut segments_drawn = 0;

        loop {
            if state.lap_count >= self.config.max_laps {
                return SpiralOutcome {
                    segments_drawn,
                    laps: state.lap_count,
                    stop_reason: StopReason::MaxLaps,
                };
            }

            let current = state.current_vertex;
            let next = (current + 1) % vertex_count;
            canvas.draw_line(polygon[current].as_vec2(), polygon[next].as_vec2(), color);
            segments_drawn += 1;

            // Abstandsprüfung nur direkt nach einer Kontraktion
            if state.contraction_armed
                && contract_vertex(polygon, current, self.config.ratio) <= self.config.min_distance
            {
                return SpiralOutcome {
                    segments_drawn,
                    laps: state.lap_count,
                    stop_reason: StopReason::MinDistance,
                };
            }

            state.advance(vertex_count);
        }
    }
}

/// Convenience wrapper: validates `config`, picks the stroke color and draws one spiral.
pub fn draw_spiral<C, R>(
    canvas: &mut C,
    vertices: &mut [DVec2],
    config: &SpiralConfig,
    rng: &mut R,
) -> SpyralResult<SpiralOutcome>
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let inscriber = SpiralInscriber::new(config.clone())?;
    Ok(inscriber.inscribe_with_rng(vertices, canvas, rng))
}
