// core holds the octave bands, noise layers, normalization and PNG export
pub mod bands;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod utils;
pub mod white_noise;

pub use bands::{OctaveBand, OctaveBands};
pub use config::TextureConfig;
pub use error::{Result, TextureError};
pub use export::save_png;
pub use generator::{TextureGenerator, TextureReport};
pub use utils::{Colormap, TextureMap2D, flatten2, normalize2};
pub use white_noise::WhiteNoise2D;

// Source of one noise layer per octave band.
// Implementations decide whether the band edges shape the layer;
// `WhiteNoise2D` ignores them.
pub trait LayerGenerator {
    // Produce a size×size layer for `band`.
    fn generate(&mut self, size: usize, band: OctaveBand) -> TextureMap2D;
}
