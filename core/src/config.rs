use std::path::PathBuf;

use crate::bands::DEFAULT_OCTAVE_FREQUENCIES;
use crate::error::{Result, TextureError};
use crate::utils::Colormap;

pub const DEFAULT_SIZE: usize = 128;
pub const DEFAULT_OUTPUT: &str = "assets/textures/noise.png";

// Parameters of one texture run. Defaults reproduce the shipped asset.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureConfig {
    pub size: usize, // side length N of the square texture
    pub frequencies: Vec<f64>, // octave-band centres before Nyquist filtering
    pub output: PathBuf,
    pub colormap: Colormap,
    pub seed: Option<u64>, // None ⇒ fresh entropy every run
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            frequencies: DEFAULT_OCTAVE_FREQUENCIES.to_vec(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            colormap: Colormap::GrayReversed,
            seed: None,
        }
    }
}

impl TextureConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(TextureError::InvalidConfig(
                "size must be greater than zero".to_string(),
            ));
        }
        if let Some(f) = self.frequencies.iter().find(|f| !f.is_finite()) {
            return Err(TextureError::InvalidConfig(format!(
                "frequency {} is not finite",
                f
            )));
        }
        Ok(())
    }
}
