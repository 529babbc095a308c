//! Per-image grid and spectrum construction.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use super::utils::{fft2, fftshift};

/// Centered coordinate grids and shifted spectrum of one image.
///
/// Built once per image by [`build_image_fft`] and shared (immutably) by
/// every kernel evaluation at every scale, so repeated convolutions on the
/// same image never recompute the forward FFT.
#[derive(Debug, Clone)]
pub struct ImageFft {
    /// x coordinate per pixel; every row repeats the same centered x-vector
    pub xg: Array2<f64>,
    /// y coordinate per pixel; every column repeats the same centered y-vector
    pub yg: Array2<f64>,
    /// `fftshift(fft2(image))`: spectrum with DC at the array center
    pub fft: Array2<Complex64>,
}

/// Build the coordinate grids and shifted 2D FFT of an image.
///
/// Coordinates run from `-W/2` with unit step (true division), so even
/// widths give integers `-W/2 ..= W/2-1` and odd widths give half-integers,
/// with length exactly `W` in both cases; same for heights.
///
/// Precondition: `H, W >= 1`. Empty images are undefined behavior.
pub fn build_image_fft(image: &Array2<f64>) -> ImageFft {
    let (h, w) = image.dim();

    let x: Array1<f64> = (0..w).map(|j| j as f64 - w as f64 / 2.0).collect();
    let y: Array1<f64> = (0..h).map(|i| i as f64 - h as f64 / 2.0).collect();
    let xg = Array2::from_shape_fn((h, w), |(_, j)| x[j]);
    let yg = Array2::from_shape_fn((h, w), |(i, _)| y[i]);

    let spectrum = fft2(&image.mapv(|v| Complex64::new(v, 0.0)));

    ImageFft {
        xg,
        yg,
        fft: fftshift(&spectrum),
    }
}
