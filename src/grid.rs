//! Double-buffered temperature field.
//!
//! The grid holds two identically-initialized flat row-major buffers and a
//! ping-pong index selecting which one is current. Within a step the kernel
//! reads the current buffer and writes interior cells of the other; swapping
//! roles is a flip of the index. Boundary cells are written once here and
//! never again, so they stay constant in both buffers across all swaps.

use crate::config::Parameters;

pub struct Grid {
    dim: usize,
    buffers: [Vec<f64>; 2],
    front: usize,
}

impl Grid {
    /// Build both buffers from the configured boundary temperatures.
    ///
    /// The top and bottom rows span every column, so the four corners take
    /// the top/bottom values and are never influenced by left/right.
    pub fn new(params: &Parameters) -> Grid {
        let dim = params.dim();
        let mut cells = vec![0.0; dim * dim];
        for j in 0..dim {
            cells[j] = params.top_temp;
            cells[(dim - 1) * dim + j] = params.bottom_temp;
        }
        for i in 1..dim - 1 {
            cells[i * dim] = params.left_temp;
            cells[i * dim + dim - 1] = params.right_temp;
        }
        Grid {
            dim,
            buffers: [cells.clone(), cells],
            front: 0,
        }
    }

    /// Side length including the boundary rows and columns.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The buffer holding the most recently completed step.
    pub fn current(&self) -> &[f64] {
        &self.buffers[self.front]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.buffers[self.front][i * self.dim + j]
    }

    /// Borrow the current buffer read-only and the next buffer mutably.
    pub fn pair_mut(&mut self) -> (&[f64], &mut [f64]) {
        let (a, b) = self.buffers.split_at_mut(1);
        if self.front == 0 {
            (a[0].as_slice(), b[0].as_mut_slice())
        } else {
            (b[0].as_slice(), a[0].as_mut_slice())
        }
    }

    /// Exchange the current and next roles. O(1), no copying.
    pub fn swap(&mut self) {
        self.front ^= 1;
    }
}
