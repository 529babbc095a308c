//! # EdgeDetector module
//!
//! Wavelet-based edge detection: a modified Canny detector that runs
//! non-maximum suppression on the wavelet modulus along the discretized
//! wavelet argument. No threshold is applied; every strict directional
//! maximum is kept for the caller to post-process.

pub mod core;

pub use self::core::{detect_edges, detect_edges_at_scale};
