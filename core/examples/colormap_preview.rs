// Writes the same seeded texture through both grayscale maps, side by side
// with the raw per-layer noise, so the reversed mapping is easy to eyeball.

use std::path::Path;

use texture_core::{
    Colormap, LayerGenerator, OctaveBands, TextureConfig, TextureGenerator, WhiteNoise2D,
    normalize2, save_png,
};

fn main() -> texture_core::Result<()> {
    let size = 256;
    let seed = 42;

    let config = TextureConfig {
        size,
        seed: Some(seed),
        ..Default::default()
    };
    let map = TextureGenerator::new(config)?.generate()?;
    save_png(&map, Path::new("noise_gray_r.png"), Colormap::GrayReversed)?;
    save_png(&map, Path::new("noise_gray.png"), Colormap::Gray)?;
    println!("Saved noise_gray_r.png and noise_gray.png");

    // One normalized image per band interval
    let mut noise = WhiteNoise2D::new(seed);
    for band in OctaveBands::default().nyquist_filter(size).intervals() {
        let mut layer = noise.generate(size, band);
        normalize2(&mut layer)?;
        let filename = format!("layer_{}_{}.png", band.low, band.high);
        save_png(&layer, Path::new(&filename), Colormap::GrayReversed)?;
        println!("Saved {}", filename);
    }
    Ok(())
}
