use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::LayerGenerator;
use crate::bands::OctaveBand;
use crate::utils::TextureMap2D;

// Unfiltered Gaussian white noise: every cell is an independent N(0, 1) sample.
// The band passed to `generate` is ignored, so all layers share the same flat
// spectrum.
pub struct WhiteNoise2D {
    rng: ChaCha8Rng,
}

impl WhiteNoise2D {
    // Reproducible: same seed ⇒ same sequence of layers
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    // Seeded from the thread RNG, different on every run
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

impl LayerGenerator for WhiteNoise2D {
    fn generate(&mut self, size: usize, band: OctaveBand) -> TextureMap2D {
        tracing::trace!(low = band.low, high = band.high, "white noise layer");
        (0..size)
            .map(|_| (0..size).map(|_| self.rng.sample::<f64, _>(StandardNormal)).collect())
            .collect()
    }
}
