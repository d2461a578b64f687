//! Time-step driver: parallel dispatch over row partitions, barrier,
//! buffer swap, and the snapshot cadence.

use crate::config::Parameters;
use crate::grid::Grid;
use crate::partition;
use crate::snapshot::SnapshotSink;
use crate::stencil::HeatStencil;
use rayon::prelude::*;
use std::ops::Range;

pub struct Solver {
    params: Parameters,
    grid: Grid,
    stencil: HeatStencil,
    /// Partition ranges are fixed for the run, computed once.
    ranges: Vec<Range<usize>>,
    steps_taken: i64,
}

impl Solver {
    pub fn new(params: &Parameters) -> Solver {
        let grid = Grid::new(params);
        let stencil = HeatStencil::new(params);
        let ranges = partition::interior_row_ranges(grid.dim(), params.threads as usize);
        Solver {
            params: params.clone(),
            grid,
            stencil,
            ranges,
            steps_taken: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn steps_taken(&self) -> i64 {
        self.steps_taken
    }

    /// Advance the simulation by one timestep.
    ///
    /// The next buffer is carved into disjoint per-partition row slices, so
    /// each worker holds exclusive mutable access to its own rows while all
    /// workers share the current buffer read-only. Completion of the
    /// parallel iterator is the fork-join barrier: the swap below cannot
    /// happen before every interior cell of this step is written, and no
    /// worker can observe a partially-updated buffer.
    pub fn step(&mut self) {
        let dim = self.grid.dim();
        let stencil = self.stencil;
        let ranges = &self.ranges;
        let (current, next) = self.grid.pair_mut();

        let mut tasks: Vec<(usize, &mut [f64])> = Vec::with_capacity(ranges.len());
        let mut tail = &mut next[..];
        let mut consumed = 0;
        for range in ranges {
            let rows = partition::clamp_to_interior(range, dim);
            if rows.is_empty() {
                continue;
            }
            let begin = rows.start * dim;
            let end = rows.end * dim;
            let (_, rest) = tail.split_at_mut(begin - consumed);
            let (mine, rest) = rest.split_at_mut(end - begin);
            tail = rest;
            consumed = end;
            tasks.push((rows.start, mine));
        }

        tasks.into_par_iter().for_each(|(first_row, rows)| {
            for (offset, row) in rows.chunks_mut(dim).enumerate() {
                let i = first_row + offset;
                for j in 1..dim - 1 {
                    row[j] = stencil.apply(current, dim, i, j);
                }
            }
        });

        self.grid.swap();
        self.steps_taken += 1;
    }

    /// Run the full simulation: a snapshot at step 0, then exactly
    /// `time_count` steps with a snapshot at every `write_each`-th step.
    pub fn run(&mut self, sink: &mut SnapshotSink) {
        sink.emit(0.0, &self.grid);
        for t in 1..=self.params.time_count {
            self.step();
            if self.params.write_each > 0 && t % self.params.write_each == 0 {
                sink.emit(t as f64 * self.params.dt, &self.grid);
            }
        }
    }
}
