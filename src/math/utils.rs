// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    /// Quantisierung für das Zusammenführen fast identischer Voronoi-Ecken (1e-6 Einheiten).
    pub const VERTEX_KEY_SCALE: f64 = 1_000_000.0;
}

/// Random utilities (erweitert vorhandene rand-Funktionalität)
pub mod random {
    use bevy::math::IVec2;
    use rand::Rng;

    /// Generiert einen ganzzahligen Zufallspunkt im geschlossenen Rechteck `[min, max]`.
    pub fn random_integer_point_in_rect<R: Rng + ?Sized>(
        min: IVec2,
        max: IVec2,
        rng: &mut R,
    ) -> IVec2 {
        IVec2::new(
            rng.random_range(min.x..=max.x),
            rng.random_range(min.y..=max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::random::*;
    use bevy::math::IVec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_integer_point_range_is_closed() {
        let mut rng = StdRng::seed_from_u64(1);
        let (mut saw_min, mut saw_max) = (false, false);
        for _ in 0..2000 {
            let p = random_integer_point_in_rect(IVec2::new(-2, 0), IVec2::new(2, 0), &mut rng);
            assert!((-2..=2).contains(&p.x));
            assert_eq!(p.y, 0);
            saw_min |= p.x == -2;
            saw_max |= p.x == 2;
        }
        assert!(saw_min && saw_max);
    }
}
