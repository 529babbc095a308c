//! # GridFFT module
//!
//! Builds the centered coordinate grids and the quadrant-shifted 2D FFT of an
//! image. The triple is computed once per image and reused across every
//! scale/kernel evaluation, which is where the FFT-based pipeline saves its
//! time when many convolutions are taken on the same image.

pub mod core;
pub mod utils;

pub use self::core::{build_image_fft, ImageFft};
