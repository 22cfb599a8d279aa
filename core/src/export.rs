//! PNG export for normalized textures.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{Result, TextureError};
use crate::utils::{Colormap, TextureMap2D, flatten2, to_gray_image};

/// Writes a square texture as an 8-bit single-channel PNG.
///
/// Values are expected in `[0, 1]` and pass through `colormap`. The file is
/// created or overwritten; its parent directory must already exist.
pub fn save_png(map: &TextureMap2D, path: &Path, colormap: Colormap) -> Result<()> {
    let size = map.len();
    if let Some(row) = map.iter().find(|row| row.len() != size) {
        return Err(TextureError::ShapeMismatch {
            expected: size,
            actual: row.len(),
        });
    }

    let pixels = to_gray_image(&flatten2(map), colormap);

    let file = File::create(path).map_err(|source| TextureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
    encoder.write_image(&pixels, size as u32, size as u32, ExtendedColorType::L8)?;

    tracing::debug!(path = %path.display(), size, "wrote png");
    Ok(())
}
