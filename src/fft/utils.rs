//! 2D FFT primitives: forward/inverse transforms and quadrant shifts.
//!
//! The transforms are built from rustfft 1D passes applied row-wise then
//! column-wise. `fftshift`/`ifftshift` follow numpy semantics: a circular
//! roll of `floor(dim/2)` per axis (and its exact inverse), so odd
//! dimensions behave correctly.

use ndarray::Array2;
use num_complex::Complex64;
use rustfft::FftPlanner;

fn transform2(mat: &Array2<Complex64>, inverse: bool) -> Array2<Complex64> {
    let (h, w) = mat.dim();
    let mut planner = FftPlanner::new();
    let (row_fft, col_fft) = if inverse {
        (planner.plan_fft_inverse(w), planner.plan_fft_inverse(h))
    } else {
        (planner.plan_fft_forward(w), planner.plan_fft_forward(h))
    };

    let mut out = mat.to_owned();
    let mut buf: Vec<Complex64> = Vec::with_capacity(w.max(h));

    for mut row in out.rows_mut() {
        buf.clear();
        buf.extend(row.iter().copied());
        row_fft.process(&mut buf);
        for (dst, src) in row.iter_mut().zip(buf.iter()) {
            *dst = *src;
        }
    }
    for mut col in out.columns_mut() {
        buf.clear();
        buf.extend(col.iter().copied());
        col_fft.process(&mut buf);
        for (dst, src) in col.iter_mut().zip(buf.iter()) {
            *dst = *src;
        }
    }

    if inverse {
        // rustfft leaves the inverse unnormalized
        let norm = 1.0 / ((h * w) as f64);
        out.mapv_inplace(|c| c * norm);
    }
    out
}

/// 2D discrete Fourier transform (unnormalized, like `numpy.fft.fft2`).
pub fn fft2(mat: &Array2<Complex64>) -> Array2<Complex64> {
    transform2(mat, false)
}

/// Inverse 2D discrete Fourier transform, normalized by `1/(H*W)`.
pub fn ifft2(mat: &Array2<Complex64>) -> Array2<Complex64> {
    transform2(mat, true)
}

/// Circular roll by `(dy, dx)`: `out[(y + dy) % h][(x + dx) % w] = a[y][x]`.
fn roll2<A: Clone>(mat: &Array2<A>, dy: usize, dx: usize) -> Array2<A> {
    let (h, w) = mat.dim();
    Array2::from_shape_fn((h, w), |(y, x)| {
        mat[[(y + h - dy % h) % h, (x + w - dx % w) % w]].clone()
    })
}

/// Move the zero-frequency component to the array center (quadrant swap).
pub fn fftshift<A: Clone>(mat: &Array2<A>) -> Array2<A> {
    let (h, w) = mat.dim();
    roll2(mat, h / 2, w / 2)
}

/// Exact inverse of [`fftshift`] for both even and odd dimensions.
pub fn ifftshift<A: Clone>(mat: &Array2<A>) -> Array2<A> {
    let (h, w) = mat.dim();
    roll2(mat, h - h / 2, w - w / 2)
}
