//! # WaveletKernels module
//!
//! 2D continuous wavelet transform with Gaussian-family mother wavelets,
//! computed by FFT-based convolution against a cached image spectrum.
//!
//! The transform is not normalized (the norm depends on the application);
//! scales work best as small multiples of 2.

pub mod core;
pub mod kernels;

pub use self::core::{
    first_derivative, gaussian_smooth, second_derivative, wavelet_multi_scale, wavelet_response,
    WaveletKernel, WaveletResponse,
};
