//! # wavelet2d: multiscale 2D wavelet transform and edge detection
//!
//! FFT-based continuous wavelet transform of 2D images with Gaussian-family
//! mother wavelets, plus a non-maximum-suppression edge detector driven by
//! the wavelet modulus/argument field.
//!
//! The pipeline is three pure stages:
//! 1. [`fft`] builds the centered coordinate grids and the shifted image
//!    spectrum once per image ([`build_image_fft`]).
//! 2. [`wavelet`] convolves Gaussian-derivative kernels against that cached
//!    spectrum at any number of scales ([`first_derivative`],
//!    [`second_derivative`], [`gaussian_smooth`], [`wavelet_multi_scale`]).
//! 3. [`edges`] runs 8-direction non-maximum suppression on the resulting
//!    modulus/argument field ([`detect_edges`]).
//!
//! Kernels are built at image resolution without padding, so convolutions
//! wrap circularly at the borders. Image decoding, scale selection and
//! plotting are the caller's concern.
//!
//! ```
//! use ndarray::Array2;
//! use wavelet2d::{build_image_fft, detect_edges, first_derivative};
//!
//! let image = Array2::from_shape_fn((32, 32), |(_, x)| if x < 16 { 0.0 } else { 1.0 });
//! let grid = build_image_fft(&image);
//! let (modulus, argument) = first_derivative(2.0, &grid)?;
//! let mask = detect_edges(&modulus, &argument)?;
//! assert_eq!(mask.dim(), (32, 32));
//! # Ok::<(), wavelet2d::WaveletError>(())
//! ```

pub mod edges;
pub mod error;
pub mod fft;
pub mod wavelet;

pub use edges::{detect_edges, detect_edges_at_scale};
pub use error::WaveletError;
pub use fft::{build_image_fft, ImageFft};
pub use wavelet::{
    first_derivative, gaussian_smooth, second_derivative, wavelet_multi_scale, wavelet_response,
    WaveletKernel, WaveletResponse,
};
