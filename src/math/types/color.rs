// src/math/types/color.rs

use crate::math::error::{SpyralError, SpyralResult};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// RGB-Strichfarbe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Zufallsfarbe; jede Komponente gleichverteilt aus `0..255`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self([
            rng.random_range(0..255),
            rng.random_range(0..255),
            rng.random_range(0..255),
        ])
    }

    /// Opake RGBA-Komponenten.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.0[0], self.0[1], self.0[2], u8::MAX]
    }

    /// CSS-Notation, z.B. für SVG-Attribute.
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.0[0], self.0[1], self.0[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

/// Accepts `r,g,b` (decimal components) or `#rrggbb`.
impl FromStr for Rgb {
    type Err = SpyralError;

    fn from_str(s: &str) -> SpyralResult<Self> {
        let trimmed = s.trim();
        let invalid = || SpyralError::InvalidConfiguration {
            message: format!("'{}' is not a color (expected 'r,g,b' or '#rrggbb')", s),
        };

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let mut components = [0u8; 3];
            for (i, component) in components.iter_mut().enumerate() {
                *component =
                    u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
            }
            return Ok(Self(components));
        }

        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let mut components = [0u8; 3];
        for (component, part) in components.iter_mut().zip(parts) {
            *component = part.parse::<u8>().map_err(|_| invalid())?;
        }
        Ok(Self(components))
    }
}
