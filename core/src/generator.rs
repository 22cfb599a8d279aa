use std::path::PathBuf;

use crate::LayerGenerator;
use crate::bands::OctaveBands;
use crate::config::TextureConfig;
use crate::error::Result;
use crate::export::save_png;
use crate::utils::{TextureMap2D, accumulate2, normalize2, value_range2, zeros2};
use crate::white_noise::WhiteNoise2D;

// Summary of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct TextureReport {
    pub output: PathBuf,
    pub size: usize,
    pub layers: usize,
    // (min, max) of the summed layers before normalization
    pub raw_range: (f64, f64),
}

// Band selection → one noise layer per band → sum → normalize → PNG
pub struct TextureGenerator {
    config: TextureConfig,
    raw_range: Option<(f64, f64)>,
}

impl TextureGenerator {
    pub fn new(config: TextureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            raw_range: None,
        })
    }

    pub fn config(&self) -> &TextureConfig {
        &self.config
    }

    // Frequencies that survive the Nyquist limit of the configured size
    pub fn bands(&self) -> OctaveBands {
        OctaveBands::new(self.config.frequencies.clone()).nyquist_filter(self.config.size)
    }

    // Generate a normalized texture using white noise layers
    pub fn generate(&mut self) -> Result<TextureMap2D> {
        let mut layers = match self.config.seed {
            Some(seed) => WhiteNoise2D::new(seed),
            None => WhiteNoise2D::from_entropy(),
        };
        self.generate_with(&mut layers)
    }

    // Generate a normalized texture from any layer source
    pub fn generate_with(&mut self, layers: &mut dyn LayerGenerator) -> Result<TextureMap2D> {
        let size = self.config.size;
        let bands = self.bands();
        tracing::debug!(
            frequencies = ?bands.frequencies(),
            layers = bands.layer_count(),
            "selected octave bands"
        );

        let mut map = zeros2(size);
        for (i, band) in bands.intervals().into_iter().enumerate() {
            tracing::debug!(layer = i, low = band.low, high = band.high, "adding noise layer");
            let layer = layers.generate(size, band);
            accumulate2(&mut map, &layer)?;
        }

        self.raw_range = value_range2(&map);
        normalize2(&mut map)?;
        Ok(map)
    }

    // Generate and write the texture to the configured output path
    pub fn run(&mut self) -> Result<TextureReport> {
        let map = self.generate()?;
        save_png(&map, &self.config.output, self.config.colormap)?;

        let report = TextureReport {
            output: self.config.output.clone(),
            size: self.config.size,
            layers: self.bands().layer_count(),
            raw_range: self.raw_range.unwrap_or_default(),
        };
        tracing::info!(
            output = %report.output.display(),
            size = report.size,
            layers = report.layers,
            "generated noise texture"
        );
        Ok(report)
    }
}
