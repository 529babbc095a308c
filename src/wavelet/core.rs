//! Core wavelet transform: FFT-domain convolution of the Gaussian-family
//! kernels with a cached image spectrum.
//!
//! Each operation builds its spatial kernel at image resolution, transforms
//! it with the same shift convention as the image spectrum, multiplies
//! pointwise and inverse-transforms. Because nothing is padded, the
//! convolution is circular: responses wrap around the image borders. That
//! approximation is part of the contract, not a defect to pad away.

use ndarray::{Array2, Zip};
use num_complex::Complex64;
use rayon::prelude::*;

use super::kernels::{first_derivative_kernels, second_derivative_kernels, smoothing_kernel};
use crate::error::WaveletError;
use crate::fft::core::ImageFft;
use crate::fft::utils::{fft2, fftshift, ifft2, ifftshift};

/// Mother-wavelet selector for the generic drivers.
#[derive(Debug, Clone, Copy)]
pub enum WaveletKernel {
    /// First derivative of a Gaussian: gradient-like response with direction
    FirstDerivative,
    /// Squared-envelope second-derivative variant
    SecondDerivative,
    /// Unit-sum Gaussian: smoothing only, no direction
    Smoothing,
}

/// Transform output at one scale.
#[derive(Debug, Clone)]
pub struct WaveletResponse {
    /// Non-negative modulus, same shape as the image
    pub modulus: Array2<f64>,
    /// Argument in degrees, `(-180, 180]`; `None` for the smoothing kernel
    pub argument: Option<Array2<f64>>,
}

fn validate(scale: f64, grid: &ImageFft) -> Result<(), WaveletError> {
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(WaveletError::InvalidScale(scale));
    }
    let expected = grid.fft.dim();
    for found in [grid.xg.dim(), grid.yg.dim()] {
        if found != expected {
            return Err(WaveletError::ShapeMismatch { expected, found });
        }
    }
    Ok(())
}

/// Convolve a spatial kernel with the image through its shifted spectrum.
fn convolve(kernel: &Array2<f64>, image_fft: &Array2<Complex64>) -> Array2<Complex64> {
    let kernel_fft = fftshift(&fft2(&kernel.mapv(|v| Complex64::new(v, 0.0))));
    let product = kernel_fft * image_fft;
    ifftshift(&ifft2(&product))
}

/// Modulus and argument (degrees) of the two directional responses.
///
/// The responses stay complex after the inverse transform; the argument is
/// taken from the complex sum `WT_x + i*WT_y`, matching `angle(wx + 1j*wy)`.
fn modulus_argument(wx: &Array2<Complex64>, wy: &Array2<Complex64>) -> (Array2<f64>, Array2<f64>) {
    let modulus = Zip::from(wx)
        .and(wy)
        .map_collect(|&a, &b| (a.norm_sqr() + b.norm_sqr()).sqrt());
    let argument = Zip::from(wx)
        .and(wy)
        .map_collect(|&a, &b| (a + Complex64::i() * b).arg().to_degrees());
    (modulus, argument)
}

/// Wavelet transform with the first derivative of a Gaussian as mother
/// wavelet. Returns `(modulus, argument_in_degrees)`.
pub fn first_derivative(
    scale: f64,
    grid: &ImageFft,
) -> Result<(Array2<f64>, Array2<f64>), WaveletError> {
    validate(scale, grid)?;
    let (kx, ky) = first_derivative_kernels(scale, &grid.xg, &grid.yg);
    let wx = convolve(&kx, &grid.fft);
    let wy = convolve(&ky, &grid.fft);
    Ok(modulus_argument(&wx, &wy))
}

/// Wavelet transform with the squared-envelope second-derivative kernels.
/// Returns `(modulus, argument_in_degrees)`.
pub fn second_derivative(
    scale: f64,
    grid: &ImageFft,
) -> Result<(Array2<f64>, Array2<f64>), WaveletError> {
    validate(scale, grid)?;
    let (kx, ky) = second_derivative_kernels(scale, &grid.xg, &grid.yg);
    let wx = convolve(&kx, &grid.fft);
    let wy = convolve(&ky, &grid.fft);
    Ok(modulus_argument(&wx, &wy))
}

/// Wavelet transform with a unit-sum Gaussian as mother wavelet.
///
/// Smoothing has no directional component, so only the modulus is returned.
pub fn gaussian_smooth(scale: f64, grid: &ImageFft) -> Result<Array2<f64>, WaveletError> {
    validate(scale, grid)?;
    let kernel = smoothing_kernel(scale, &grid.xg, &grid.yg);
    let wt = convolve(&kernel, &grid.fft);
    Ok(wt.mapv(|c| c.norm()))
}

/// Evaluate one kernel at one scale.
pub fn wavelet_response(
    kernel: WaveletKernel,
    scale: f64,
    grid: &ImageFft,
) -> Result<WaveletResponse, WaveletError> {
    match kernel {
        WaveletKernel::FirstDerivative => {
            let (modulus, argument) = first_derivative(scale, grid)?;
            Ok(WaveletResponse {
                modulus,
                argument: Some(argument),
            })
        }
        WaveletKernel::SecondDerivative => {
            let (modulus, argument) = second_derivative(scale, grid)?;
            Ok(WaveletResponse {
                modulus,
                argument: Some(argument),
            })
        }
        WaveletKernel::Smoothing => Ok(WaveletResponse {
            modulus: gaussian_smooth(scale, grid)?,
            argument: None,
        }),
    }
}

/// Evaluate one kernel at many scales in parallel.
///
/// Scales are independent and share only the read-only grid, so each one
/// runs on its own rayon worker; output order follows the input order.
pub fn wavelet_multi_scale(
    kernel: WaveletKernel,
    scales: &[f64],
    grid: &ImageFft,
    verbose: bool,
) -> Result<Vec<WaveletResponse>, WaveletError> {
    let n_scales = scales.len();
    scales
        .par_iter()
        .enumerate()
        .map(|(i, &scale)| {
            if verbose && i % 10 == 0 && n_scales > 20 {
                // Progress indication for large jobs (dev mode only)
                eprintln!("Computing WT: scale {}/{}", i + 1, n_scales);
            }
            wavelet_response(kernel, scale, grid)
        })
        .collect()
}
