//! Non-maximum suppression over the 8 discretized gradient directions.

use ndarray::{Array2, Zip};

use crate::error::WaveletError;
use crate::fft::core::build_image_fft;
use crate::wavelet::core::first_derivative;

/// The 8 compass directions as `(angle_degrees, row_step, col_step)`, with
/// rows increasing downward. Each direction's opposite sits 4 entries away,
/// so the backward neighbor reuses the forward shift of the opposite entry.
const DIRECTIONS: [(f64, isize, isize); 8] = [
    (0.0, 0, 1),
    (45.0, -1, 1),
    (90.0, -1, 0),
    (135.0, -1, -1),
    (-180.0, 0, -1),
    (-135.0, 1, -1),
    (-90.0, 1, 0),
    (-45.0, 1, 1),
];

/// One-pixel translation with zero fill: `out[y][x] = mat[y + dy][x + dx]`
/// where in range, 0 otherwise.
///
/// Border pixels whose neighbor falls off-grid compare against 0, which a
/// positive modulus always exceeds, so borders are biased toward being
/// flagged along directions pointing off-grid. Inherited behavior; callers
/// that care should mask the border themselves.
fn shift(mat: &Array2<f64>, dy: isize, dx: isize) -> Array2<f64> {
    let (h, w) = mat.dim();
    let mut out = Array2::zeros((h, w));
    for ((y, x), v) in out.indexed_iter_mut() {
        let sy = y as isize + dy;
        let sx = x as isize + dx;
        if (0..h as isize).contains(&sy) && (0..w as isize).contains(&sx) {
            *v = mat[[sy as usize, sx as usize]];
        }
    }
    out
}

/// Detect edges by non-maximum suppression of the wavelet modulus along the
/// discretized wavelet argument.
///
/// `argument` is in degrees; it is snapped to the nearest multiple of 45 and
/// `+180` folds onto `-180`. A pixel is marked 1 iff its modulus strictly
/// exceeds both one-pixel neighbors along its own direction; ties are never
/// marked. No magnitude threshold is applied.
pub fn detect_edges(
    modulus: &Array2<f64>,
    argument: &Array2<f64>,
) -> Result<Array2<u8>, WaveletError> {
    if modulus.dim() != argument.dim() {
        return Err(WaveletError::ShapeMismatch {
            expected: modulus.dim(),
            found: argument.dim(),
        });
    }

    let snapped = argument.mapv(|a| {
        let r = 45.0 * (a / 45.0).round();
        if r == 180.0 {
            -180.0
        } else {
            r
        }
    });

    let shifted: Vec<Array2<f64>> = DIRECTIONS
        .iter()
        .map(|&(_, dy, dx)| shift(modulus, dy, dx))
        .collect();

    let mut mask = Array2::zeros(modulus.dim());
    for (i, &(angle, _, _)) in DIRECTIONS.iter().enumerate() {
        let forward = &shifted[i];
        let backward = &shifted[(i + 4) % 8];
        Zip::from(&mut mask)
            .and(modulus)
            .and(&snapped)
            .and(forward)
            .and(backward)
            .for_each(|m, &v, &dir, &ap, &am| {
                if dir == angle && v > ap && v > am {
                    *m = 1;
                }
            });
    }
    Ok(mask)
}

/// Single-call pipeline: grid/FFT construction, first-derivative wavelet
/// transform at `scale`, then non-maximum suppression.
pub fn detect_edges_at_scale(
    image: &Array2<f64>,
    scale: f64,
) -> Result<Array2<u8>, WaveletError> {
    let grid = build_image_fft(image);
    let (modulus, argument) = first_derivative(scale, &grid)?;
    detect_edges(&modulus, &argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mask_is_binary() {
        let image =
            Array2::from_shape_fn((8, 8), |(y, x)| if x < 3 { 0.0 } else { 100.0 + y as f64 });
        let mask = detect_edges_at_scale(&image, 2.0).unwrap();
        for &v in mask.iter() {
            assert!(v == 0 || v == 1);
        }
    }

    #[test]
    fn test_blank_image_no_edges() {
        let mask = detect_edges_at_scale(&Array2::zeros((4, 4)), 2.0).unwrap();
        assert_eq!(mask.sum(), 0);
    }

    #[test]
    fn test_strict_maximum_along_direction() {
        let modulus = array![
            [0.0, 1.0, 3.0, 1.0, 0.0],
            [0.0, 1.0, 3.0, 1.0, 0.0],
            [0.0, 1.0, 3.0, 1.0, 0.0],
        ];
        let argument = Array2::zeros((3, 5));
        let mask = detect_edges(&modulus, &argument).unwrap();
        for y in 0..3 {
            assert_eq!(mask[[y, 2]], 1);
            assert_eq!(mask[[y, 1]], 0);
            assert_eq!(mask[[y, 3]], 0);
        }
    }

    #[test]
    fn test_ties_are_not_flagged() {
        let modulus = array![[0.0, 3.0, 3.0, 0.0]];
        let argument = Array2::zeros((1, 4));
        let mask = detect_edges(&modulus, &argument).unwrap();
        assert_eq!(mask.sum(), 0);
    }

    #[test]
    fn test_direction_selects_neighbor_pair() {
        // center argument 90: compared against up/down only, so the larger
        // left/right values do not suppress it
        let modulus = array![[0.0, 1.0, 0.0], [9.0, 4.0, 9.0], [0.0, 2.0, 0.0]];
        let argument = Array2::from_elem((3, 3), 90.0);
        let mask = detect_edges(&modulus, &argument).unwrap();
        assert_eq!(mask[[1, 1]], 1);
    }

    #[test]
    fn test_diagonal_45_uses_up_right_down_left_pair() {
        // center argument 45: compared along the up-right/down-left axis, so
        // the larger values on the other diagonal do not suppress it
        let modulus = array![[9.0, 0.0, 1.0], [0.0, 4.0, 0.0], [2.0, 0.0, 9.0]];
        let argument = Array2::from_elem((3, 3), 45.0);
        let mask = detect_edges(&modulus, &argument).unwrap();
        assert_eq!(mask[[1, 1]], 1);
        // swapping the diagonals puts the 9.0s on the compared axis
        let blocked = array![[1.0, 0.0, 9.0], [0.0, 4.0, 0.0], [9.0, 0.0, 2.0]];
        let mask = detect_edges(&blocked, &argument).unwrap();
        assert_eq!(mask[[1, 1]], 0);
    }

    #[test]
    fn test_diagonal_135_uses_up_left_down_right_pair() {
        let modulus = array![[1.0, 0.0, 9.0], [0.0, 4.0, 0.0], [9.0, 0.0, 2.0]];
        let argument = Array2::from_elem((3, 3), 135.0);
        let mask = detect_edges(&modulus, &argument).unwrap();
        assert_eq!(mask[[1, 1]], 1);
        let blocked = array![[9.0, 0.0, 1.0], [0.0, 4.0, 0.0], [2.0, 0.0, 9.0]];
        let mask = detect_edges(&blocked, &argument).unwrap();
        assert_eq!(mask[[1, 1]], 0);
    }

    #[test]
    fn test_180_degrees_folds_onto_minus_180() {
        let modulus = array![[1.0, 5.0, 2.0]];
        // 170 snaps to 180, which must land in the -180 bucket (left/right
        // neighbors) instead of matching nothing
        let argument = array![[0.0, 170.0, 0.0]];
        let mask = detect_edges(&modulus, &argument).unwrap();
        assert_eq!(mask[[0, 1]], 1);
    }

    #[test]
    fn test_border_zero_fill_bias() {
        // border pixel with an off-grid backward neighbor compares against 0
        let modulus = array![[5.0, 1.0, 0.0]];
        let argument = Array2::zeros((1, 3));
        let mask = detect_edges(&modulus, &argument).unwrap();
        assert_eq!(mask[[0, 0]], 1);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let modulus = Array2::zeros((3, 3));
        let argument = Array2::zeros((3, 4));
        assert!(matches!(
            detect_edges(&modulus, &argument),
            Err(WaveletError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_step_edge_column_marked() {
        // vertical step between columns 2 and 3; the ridge column must be
        // flagged in every row (the wrap twin at the border may be too)
        let image = Array2::from_shape_fn((8, 8), |(_, x)| if x < 3 { 0.0 } else { 100.0 });
        let mask = detect_edges_at_scale(&image, 2.0).unwrap();
        for y in 0..8 {
            assert_eq!(mask[[y, 3]], 1);
        }
    }
}
