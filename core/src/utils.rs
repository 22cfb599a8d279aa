use crate::error::{Result, TextureError};

// Entries in the colour lookup table, one per 8-bit output level
const LUT_SIZE: usize = 256;

// 2D texture: row‐major Vec<Vec<f64>> of size N×N
// access as `map[y][x]`.
pub type TextureMap2D = Vec<Vec<f64>>;

// Zero-filled N×N accumulator
pub fn zeros2(size: usize) -> TextureMap2D {
    vec![vec![0.0; size]; size]
}

// flatten a 2D texture (row‐major) into a single Vec<f64>
// For converting to an image buffer (e.g. grayscale u8)
pub fn flatten2(map: &TextureMap2D) -> Vec<f64> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Element-wise `target += layer`
pub fn accumulate2(target: &mut TextureMap2D, layer: &TextureMap2D) -> Result<()> {
    let expected = target.len();
    if layer.len() != expected {
        return Err(TextureError::ShapeMismatch {
            expected,
            actual: layer.len(),
        });
    }
    for (row, layer_row) in target.iter_mut().zip(layer) {
        if layer_row.len() != row.len() {
            return Err(TextureError::ShapeMismatch {
                expected: row.len(),
                actual: layer_row.len(),
            });
        }
        for (val, &add) in row.iter_mut().zip(layer_row) {
            *val += add;
        }
    }
    Ok(())
}

// Global (min, max), None for an empty map
pub fn value_range2(map: &TextureMap2D) -> Option<(f64, f64)> {
    let mut values = map.iter().flatten().copied();
    let first = values.next()?;
    Some(values.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
}

// Rescale in place to [0, 1] with (x - min) / (max - min).
// A constant map has no range to divide by and is left untouched.
pub fn normalize2(map: &mut TextureMap2D) -> Result<()> {
    let (min, max) = value_range2(map).ok_or(TextureError::EmptyMap)?;

    let range = max - min;
    if range == 0.0 {
        return Err(TextureError::ZeroRange { value: min });
    }

    for row in map.iter_mut() {
        for val in row.iter_mut() {
            *val = (*val - min) / range;
        }
    }
    Ok(())
}

// Grayscale colour maps for values in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    // 0 → black, 1 → white
    Gray,
    // 0 → white, 1 → black: higher values render darker
    #[default]
    GrayReversed,
}

impl Colormap {
    // Quantize through a 256-entry lookup table, clamping out-of-range input
    pub fn map(self, v: f64) -> u8 {
        let index = ((v.clamp(0.0, 1.0) * LUT_SIZE as f64) as usize).min(LUT_SIZE - 1) as u8;
        match self {
            Colormap::Gray => index,
            Colormap::GrayReversed => u8::MAX - index,
        }
    }
}

// Convert a flat &[f64] into a single-channel byte buffer
pub fn to_gray_image(flat: &[f64], colormap: Colormap) -> Vec<u8> {
    flat.iter().map(|&v| colormap.map(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn flatten2_row_major() {
        let map = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(flatten2(&map), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn accumulate2_adds_elementwise() {
        let mut acc = zeros2(2);
        accumulate2(&mut acc, &vec![vec![1.0, -2.0], vec![0.5, 3.0]]).unwrap();
        accumulate2(&mut acc, &vec![vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
        assert_eq!(acc, vec![vec![2.0, -1.0], vec![1.5, 4.0]]);
    }

    #[test]
    fn accumulate2_rejects_mismatched_shape() {
        let mut acc = zeros2(3);
        let err = accumulate2(&mut acc, &zeros2(2)).unwrap_err();
        assert!(matches!(
            err,
            TextureError::ShapeMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn normalize2_unit_range_with_exact_ends() {
        let mut map = vec![vec![-3.0, 1.0], vec![5.0, 0.25]];
        normalize2(&mut map).unwrap();
        let flat = flatten2(&map);
        assert!(flat.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!(flat.contains(&0.0));
        assert!(flat.contains(&1.0));
        assert_relative_eq!(map[0][1], 0.5);
    }

    #[test]
    fn normalize2_is_idempotent() {
        let mut map = vec![vec![0.3, -1.7, 2.2], vec![4.1, 0.0, -0.4], vec![1.0, 1.5, 3.3]];
        normalize2(&mut map).unwrap();
        let once = map.clone();
        normalize2(&mut map).unwrap();
        for (a, b) in flatten2(&once).iter().zip(flatten2(&map).iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalize2_constant_map_fails() {
        let mut map = zeros2(4);
        let err = normalize2(&mut map).unwrap_err();
        assert!(matches!(err, TextureError::ZeroRange { value } if value == 0.0));
        // left untouched
        assert_eq!(map, zeros2(4));
    }

    #[test]
    fn normalize2_empty_map_fails() {
        let mut map = zeros2(0);
        assert!(matches!(normalize2(&mut map), Err(TextureError::EmptyMap)));
    }

    #[test]
    fn colormap_reversed_ends() {
        assert_eq!(Colormap::GrayReversed.map(0.0), 255);
        assert_eq!(Colormap::GrayReversed.map(1.0), 0);
        assert_eq!(Colormap::Gray.map(0.0), 0);
        assert_eq!(Colormap::Gray.map(1.0), 255);
        // 0.5 lands on lut entry 128
        assert_eq!(Colormap::Gray.map(0.5), 128);
        assert_eq!(Colormap::GrayReversed.map(0.5), 127);
    }

    #[test]
    fn colormap_clamps_out_of_range() {
        assert_eq!(Colormap::GrayReversed.map(-0.5), 255);
        assert_eq!(Colormap::GrayReversed.map(1.5), 0);
    }

    #[test]
    fn colormap_reversed_is_monotonic_decreasing() {
        let flat: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        let bytes = to_gray_image(&flat, Colormap::default());
        assert!(bytes.windows(2).all(|w| w[0] >= w[1]));
    }
}
