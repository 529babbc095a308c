//! Spatial-domain Gaussian-family kernel generation.
//!
//! All kernels are symmetric, built at image resolution on the centered
//! coordinate grids, and defined for one particular scale at a time.

use ndarray::{Array2, Zip};

/// Gaussian envelope `exp(-((x/a)^2 + (y/a)^2) / 2)` at scale `a`.
pub fn gaussian_envelope(scale: f64, xg: &Array2<f64>, yg: &Array2<f64>) -> Array2<f64> {
    Zip::from(xg).and(yg).map_collect(|&x, &y| {
        let xs = x / scale;
        let ys = y / scale;
        (-(xs * xs + ys * ys) / 2.0).exp()
    })
}

/// First-derivative kernels in x and y, normalized by `1/scale^2`.
pub fn first_derivative_kernels(
    scale: f64,
    xg: &Array2<f64>,
    yg: &Array2<f64>,
) -> (Array2<f64>, Array2<f64>) {
    let phi = gaussian_envelope(scale, xg, yg);
    let inv_sq = 1.0 / (scale * scale);
    let kx = Zip::from(xg)
        .and(&phi)
        .map_collect(|&x, &p| -(x / scale) * p * inv_sq);
    let ky = Zip::from(yg)
        .and(&phi)
        .map_collect(|&y, &p| -(y / scale) * p * inv_sq);
    (kx, ky)
}

/// Second-derivative kernels in x and y, normalized by `1/scale^2`.
///
/// The terms are the literal squared envelopes `(x/a)^2 * phi`, without the
/// Hermite-style `(1 - (x/a)^2)` subtraction of a textbook second Gaussian
/// derivative. This is the kernel shape the transform is defined with; do
/// not swap in the textbook form.
pub fn second_derivative_kernels(
    scale: f64,
    xg: &Array2<f64>,
    yg: &Array2<f64>,
) -> (Array2<f64>, Array2<f64>) {
    let phi = gaussian_envelope(scale, xg, yg);
    let inv_sq = 1.0 / (scale * scale);
    let kx = Zip::from(xg)
        .and(&phi)
        .map_collect(|&x, &p| (x / scale) * (x / scale) * p * inv_sq);
    let ky = Zip::from(yg)
        .and(&phi)
        .map_collect(|&y, &p| (y / scale) * (y / scale) * p * inv_sq);
    (kx, ky)
}

/// Gaussian envelope normalized to unit sum, for smoothing/averaging.
pub fn smoothing_kernel(scale: f64, xg: &Array2<f64>, yg: &Array2<f64>) -> Array2<f64> {
    let phi = gaussian_envelope(scale, xg, yg);
    let total = phi.sum();
    phi / total
}
