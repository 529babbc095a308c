//! Error types shared by the transform and edge-detection modules.

/// Errors raised by the wavelet transform pipeline.
#[derive(Debug, thiserror::Error)]
pub enum WaveletError {
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("invalid scale: {0} (scale must be a positive finite number)")]
    InvalidScale(f64),
}
