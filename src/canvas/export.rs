// src/canvas/export.rs

use super::{RasterCanvas, svg_export};
use crate::math::error::{SpyralError, SpyralResult};
use bevy::log::info;
use image::ImageFormat;
use std::path::Path;

/// Speichert die Leinwand; das Format folgt aus der Dateiendung.
///
/// `.svg` schreibt das Strich-Protokoll als Vektorgrafik, alle anderen
/// Endungen gehen an den passenden Encoder des `image`-Crates.
pub fn save_canvas(canvas: &RasterCanvas, path: &Path) -> SpyralResult<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    if extension.as_deref() == Some("svg") {
        svg_export::save_svg(canvas, path)?;
    } else {
        let format = ImageFormat::from_path(path).map_err(|_| SpyralError::UnsupportedFormat {
            path: path.display().to_string(),
        })?;
        canvas.image().save_with_format(path, format)?;
    }

    info!("Bild '{}' wurde gespeichert.", path.display());
    Ok(())
}
