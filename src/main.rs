// src/main.rs
use bevy::log::error;
use clap::Parser;
use spyral::math::{geometry::spiral::SpiralConfig, types::Rgb};
use spyral::{ImageConfig, WindowPresenter, draw_image};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Zeichnet Spiralen in die Zellen eines zufälligen Voronoi-Diagramms.
#[derive(Debug, Parser)]
#[command(name = "spyral", version, about)]
struct Cli {
    /// Bildbreite in Pixeln
    #[arg(long, default_value_t = 1500)]
    width: u32,

    /// Bildhöhe in Pixeln
    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Anzahl der Seed-Punkte
    #[arg(long, default_value_t = 250)]
    spirals: usize,

    /// Rand links/rechts, über den Seeds gestreut werden
    #[arg(long, default_value_t = 1000)]
    width_margin: u32,

    /// Rand oben/unten, über den Seeds gestreut werden
    #[arg(long, default_value_t = 500)]
    height_margin: u32,

    /// Kontraktionsfaktor pro Schritt, in (0, 1]
    #[arg(long, default_value_t = 0.05)]
    ratio: f64,

    /// Abbruch, sobald eine verschobene Ecke so nah am Nachfolger liegt
    #[arg(long, default_value_t = 0.0)]
    min_dist: f64,

    /// Maximale Anzahl Runden pro Spirale
    #[arg(long, default_value_t = 100)]
    max_iter: usize,

    /// Feste Farbe als "r,g,b" oder "#rrggbb"; sonst zufällig pro Region
    #[arg(long)]
    color: Option<Rgb>,

    /// Ausgabedatei; das Format folgt aus der Endung (.png, .svg, ...)
    #[arg(long)]
    outfile: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> ImageConfig {
        let mut spiral = SpiralConfig::new()
            .with_ratio(self.ratio)
            .with_min_distance(self.min_dist)
            .with_max_laps(self.max_iter);
        if let Some(color) = self.color {
            spiral = spiral.with_color(color);
        }

        let mut config = ImageConfig::new()
            .with_size(self.width, self.height)
            .with_spiral_count(self.spirals)
            .with_margins(self.width_margin, self.height_margin)
            .with_spiral(spiral);
        if let Some(path) = self.outfile {
            config = config.with_output(path);
        }
        config
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_config();
    match draw_image(config, &mut WindowPresenter::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = Cli::parse_from(["spyral"]).into_config();
        assert_eq!((config.width, config.height), (1500, 500));
        assert_eq!(config.spiral_count, 250);
        assert_eq!((config.width_margin, config.height_margin), (1000, 500));
        assert_eq!(config.spiral.ratio, 0.05);
        assert_eq!(config.spiral.min_distance, 0.0);
        assert_eq!(config.spiral.max_laps, 100);
        assert!(config.spiral.color.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let config = Cli::parse_from([
            "spyral",
            "--width",
            "300",
            "--spirals",
            "12",
            "--min-dist",
            "1.5",
            "--color",
            "200,30,30",
            "--outfile",
            "out.svg",
        ])
        .into_config();
        assert_eq!(config.width, 300);
        assert_eq!(config.spiral_count, 12);
        assert_eq!(config.spiral.min_distance, 1.5);
        assert_eq!(config.spiral.color, Some(Rgb::new(200, 30, 30)));
        assert_eq!(config.output, Some(PathBuf::from("out.svg")));
    }

    #[test]
    fn test_cli_rejects_bad_color() {
        assert!(Cli::try_parse_from(["spyral", "--color", "red"]).is_err());
    }
}
