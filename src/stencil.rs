//! Five-point FTCS update kernel.

use crate::config::Parameters;

/// Forward-time centered-space heat kernel.
///
/// `apply` reads only the current buffer and the caller writes the result
/// into the next buffer, so traversal order over the interior is immaterial
/// and disjoint row ranges can run concurrently without locks. Stability of
/// the chosen `dt` is the caller's problem; an unstable step diverges as the
/// scheme says it should.
#[derive(Clone, Copy, Debug)]
pub struct HeatStencil {
    dt: f64,
    alpha: f64,
    dx: f64,
    dy: f64,
}

impl HeatStencil {
    pub fn new(params: &Parameters) -> HeatStencil {
        HeatStencil {
            dt: params.dt,
            alpha: params.alpha(),
            dx: params.dx,
            dy: params.dy,
        }
    }

    /// Next-state value for interior cell `(i, j)` of a `dim`-sized grid.
    #[inline]
    pub fn apply(&self, current: &[f64], dim: usize, i: usize, j: usize) -> f64 {
        let middle = current[i * dim + j];
        let up = current[(i - 1) * dim + j];
        let down = current[(i + 1) * dim + j];
        let left = current[i * dim + j - 1];
        let right = current[i * dim + j + 1];
        middle
            + self.dt
                * self.alpha
                * ((up - 2.0 * middle + down) / (self.dx * self.dx)
                    + (left + right - 2.0 * middle) / (self.dy * self.dy))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn stencil(dt: f64, alpha: f64, dx: f64, dy: f64) -> HeatStencil {
        HeatStencil { dt, alpha, dx, dy }
    }

    #[test]
    fn exact_substitution() {
        // 3x3 grid, single interior cell at (1, 1)
        let current = [
            9.0, 100.0, 9.0, //
            50.0, 7.0, 60.0, //
            9.0, 0.0, 9.0,
        ];
        let s = stencil(0.1, 0.5, 2.0, 4.0);
        let got = s.apply(&current, 3, 1, 1);
        let expected = 7.0
            + 0.1 * 0.5 * ((100.0 - 2.0 * 7.0 + 0.0) / 4.0 + (50.0 + 60.0 - 2.0 * 7.0) / 16.0);
        assert_approx_eq!(f64, got, expected);
    }

    #[test]
    fn uniform_field_is_a_fixed_point() {
        let current = [3.0; 25];
        let s = stencil(0.2, 1.0, 1.0, 1.0);
        for i in 1..4 {
            for j in 1..4 {
                assert_approx_eq!(f64, s.apply(&current, 5, i, j), 3.0);
            }
        }
    }

    #[test]
    fn zero_dt_leaves_values_unchanged() {
        let current: Vec<f64> = (0..25).map(f64::from).collect();
        let s = stencil(0.0, 1.0, 1.0, 1.0);
        for i in 1..4 {
            for j in 1..4 {
                assert_approx_eq!(f64, s.apply(&current, 5, i, j), current[i * 5 + j]);
            }
        }
    }
}
