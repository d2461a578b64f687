//! PNG frame rendering of the temperature field.

use crate::config::Parameters;
use crate::grid::Grid;
use std::path::PathBuf;

/// Renders emitted snapshots as TURBO-gradient frames.
///
/// Values are normalized over the run's configured temperature range, which
/// is fixed up front so the coloring stays comparable across frames. An
/// unstable run pushes values outside the range; they clamp to the gradient
/// ends.
pub struct FrameSink {
    dir: PathBuf,
    min: f64,
    max: f64,
}

impl FrameSink {
    pub fn new(dir: PathBuf, params: &Parameters) -> FrameSink {
        let temps = [
            params.top_temp,
            params.bottom_temp,
            params.left_temp,
            params.right_temp,
            0.0,
        ];
        let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max <= min {
            max = min + 1.0;
        }
        FrameSink { dir, min, max }
    }

    pub fn write_frame(&self, grid: &Grid, index: usize) {
        let dim = grid.dim();
        let gradient = colorous::TURBO;
        let mut img = image::RgbImage::new(dim as u32, dim as u32);
        for i in 0..dim {
            for j in 0..dim {
                let r = (grid.get(i, j) - self.min) / (self.max - self.min);
                let c = gradient.eval_continuous(r.clamp(0.0, 1.0));
                img.put_pixel(j as u32, i as u32, image::Rgb(c.as_array()));
            }
        }
        let path = self.dir.join(format!("frame_{index:04}.png"));
        img.save(&path).expect("Couldn't save image");
    }
}
