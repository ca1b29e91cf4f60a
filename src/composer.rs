// src/composer.rs

use crate::canvas::{RasterCanvas, save_canvas};
use crate::math::{
    error::{SpyralError, SpyralResult},
    geometry::spiral::{SpiralConfig, SpiralInscriber},
    point_distribution::{
        SeedGenerator, SpadeVoronoi, Tessellation, TessellationAdapter, VoronoiTessellator,
        voronoi::MIN_VORONOI_SEEDS,
    },
    types::Rgb,
};
use crate::viewer::Presenter;
use bevy::log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

/// Parameter einer kompletten Bildgenerierung.
#[derive(Debug, Clone)]
pub struct ImageConfig {
    /// Bildbreite in Pixeln.
    pub width: u32,
    /// Bildhöhe in Pixeln.
    pub height: u32,
    /// Anzahl der Seed-Punkte (= Anzahl der Voronoi-Zellen vor dem Filtern).
    pub spiral_count: usize,
    /// Zusätzlicher Rand links und rechts, über den Seeds gestreut werden.
    pub width_margin: u32,
    /// Zusätzlicher Rand oben und unten.
    pub height_margin: u32,
    pub spiral: SpiralConfig,
    /// Zielpfad; ohne Pfad wird nicht gespeichert.
    pub output: Option<PathBuf>,
    /// Optionaler Seed für reproduzierbare Bilder.
    pub seed: Option<u64>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 500,
            spiral_count: 250,
            width_margin: 1000,
            height_margin: 500,
            spiral: SpiralConfig::default(),
            output: None,
            seed: None,
        }
    }
}

impl ImageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_spiral_count(mut self, count: usize) -> Self {
        self.spiral_count = count;
        self
    }

    pub fn with_margins(mut self, width_margin: u32, height_margin: u32) -> Self {
        self.width_margin = width_margin;
        self.height_margin = height_margin;
        self
    }

    pub fn with_spiral(mut self, spiral: SpiralConfig) -> Self {
        self.spiral = spiral;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.spiral.color = Some(color);
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> SpyralResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SpyralError::InvalidConfiguration {
                message: format!(
                    "Image dimensions must be positive, got {}x{}",
                    self.width, self.height
                ),
            });
        }
        if self.spiral_count < MIN_VORONOI_SEEDS {
            return Err(SpyralError::InvalidConfiguration {
                message: format!(
                    "At least {} spirals are required for a tessellation, got {}",
                    MIN_VORONOI_SEEDS, self.spiral_count
                ),
            });
        }
        self.spiral.validate()
    }

    /// Seeded `StdRng`, oder eines aus dem Thread-RNG.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        }
    }
}

/// Ergebnis von [`ImageComposer::compose`].
#[derive(Debug, Clone)]
pub struct ComposedImage {
    pub canvas: RasterCanvas,
    pub regions_drawn: usize,
}

/// Seeds → Tessellation → eine Spirale pro Region.
#[derive(Debug, Clone)]
pub struct ImageComposer<T: VoronoiTessellator = SpadeVoronoi> {
    config: ImageConfig,
    seeds: SeedGenerator,
    adapter: TessellationAdapter<T>,
    inscriber: SpiralInscriber,
}

impl ImageComposer<SpadeVoronoi> {
    pub fn new(config: ImageConfig) -> SpyralResult<Self> {
        Self::with_tessellator(config, SpadeVoronoi::new())
    }
}

impl<T: VoronoiTessellator> ImageComposer<T> {
    pub fn with_tessellator(config: ImageConfig, tessellator: T) -> SpyralResult<Self> {
        config.validate()?;
        let seeds = SeedGenerator::new(
            config.width,
            config.height,
            config.width_margin,
            config.height_margin,
        )?;
        let inscriber = SpiralInscriber::new(config.spiral.clone())?;
        Ok(Self {
            config,
            seeds,
            adapter: TessellationAdapter::new(tessellator),
            inscriber,
        })
    }

    /// Würfelt die Seeds und zerlegt sie; verbraucht `spiral_count` Zufallspunkte aus `rng`.
    pub fn tessellate<R: Rng + ?Sized>(&self, rng: &mut R) -> SpyralResult<Tessellation> {
        let seeds = self.seeds.generate(self.config.spiral_count, rng);
        debug!(
            "ImageComposer: {} seeds in {}",
            seeds.len(),
            self.seeds.area()
        );
        self.adapter.tessellate(&seeds)
    }

    /// Zeichnet ein komplettes Bild in eine neue Leinwand.
    ///
    /// Jede Region bekommt eine eigene Kopie ihrer Ecken; die Eckentabelle
    /// der Tessellation bleibt unverändert.
    pub fn compose<R: Rng + ?Sized>(&self, rng: &mut R) -> SpyralResult<ComposedImage> {
        let tessellation = self.tessellate(rng)?;
        let mut canvas = RasterCanvas::new(self.config.width, self.config.height)?;
        if tessellation.is_empty() {
            warn!("No bounded Voronoi region survived filtering, the image stays blank");
        }

        for (index, mut polygon) in tessellation.polygons().enumerate() {
            let outcome = self.inscriber.inscribe_with_rng(&mut polygon, &mut canvas, rng);
            debug!(
                "Region {}: {} segments, {} laps, stopped by {:?}",
                index, outcome.segments_drawn, outcome.laps, outcome.stop_reason
            );
        }

        Ok(ComposedImage {
            canvas,
            regions_drawn: tessellation.len(),
        })
    }

    /// Zeichnen, anzeigen, Anzahl melden, optional speichern.
    pub fn run<P: Presenter + ?Sized>(&self, presenter: &mut P) -> SpyralResult<usize> {
        let mut rng = self.config.rng();
        let ComposedImage {
            canvas,
            regions_drawn,
        } = self.compose(&mut rng)?;

        presenter.present(&canvas)?;
        info!("{} spirals drawn.", regions_drawn);

        if let Some(path) = &self.config.output {
            save_canvas(&canvas, path)?;
        }
        Ok(regions_drawn)
    }
}

/// Erzeugt ein Bild mit den Standard-Kollaborateuren.
///
/// Gibt die Anzahl gezeichneter Regionen zurück.
pub fn draw_image<P: Presenter + ?Sized>(
    config: ImageConfig,
    presenter: &mut P,
) -> SpyralResult<usize> {
    info!(
        "Generating {}x{} image with {} seeds (margins {}x{}, ratio {}, min distance {}, \
         max laps {})",
        config.width,
        config.height,
        config.spiral_count,
        config.width_margin,
        config.height_margin,
        config.spiral.ratio,
        config.spiral.min_distance,
        config.spiral.max_laps
    );
    ImageComposer::new(config)?.run(presenter)
}
