// Nominal octave-band centre frequencies (Hz)
pub const DEFAULT_OCTAVE_FREQUENCIES: [f64; 10] = [
    31.5, 63.0, 125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0, 16000.0,
];

// One interval between two adjacent retained frequencies.
// Only the number of intervals matters today, the edges are carried along
// so a band-limited layer generator can use them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctaveBand {
    pub low: f64,
    pub high: f64,
}

// Ordered list of octave-band centre frequencies
#[derive(Debug, Clone, PartialEq)]
pub struct OctaveBands {
    frequencies: Vec<f64>,
}

impl Default for OctaveBands {
    fn default() -> Self {
        Self::new(DEFAULT_OCTAVE_FREQUENCIES.to_vec())
    }
}

impl OctaveBands {
    pub fn new(frequencies: Vec<f64>) -> Self {
        Self { frequencies }
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    // Keep only frequencies at or below the Nyquist limit of a size×size grid.
    // Order is preserved.
    pub fn nyquist_filter(&self, size: usize) -> Self {
        let nyquist = size as f64 / 2.0;
        Self {
            frequencies: self
                .frequencies
                .iter()
                .copied()
                .filter(|&f| f <= nyquist)
                .collect(),
        }
    }

    // Adjacent (low, high) pairs; empty with fewer than two frequencies
    pub fn intervals(&self) -> Vec<OctaveBand> {
        self.frequencies
            .windows(2)
            .map(|pair| OctaveBand {
                low: pair[0],
                high: pair[1],
            })
            .collect()
    }

    // One noise layer per interval
    pub fn layer_count(&self) -> usize {
        self.frequencies.len().saturating_sub(1)
    }
}
