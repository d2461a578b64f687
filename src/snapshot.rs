//! Snapshot emission to the console and an optional persistent sink.

use crate::grid::Grid;
use crate::image::FrameSink;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write one grid snapshot: a leading blank line, one line per row with
/// each value right-aligned in a 12-character field and followed by a
/// space, then a trailing blank line.
pub fn write_snapshot<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    writeln!(out)?;
    let dim = grid.dim();
    for i in 0..dim {
        for j in 0..dim {
            write!(out, "{:>12} ", grid.get(i, j))?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Destination for the periodic snapshots: always the console, plus a file
/// when one can be created, plus optional PNG frames.
pub struct SnapshotSink {
    file: Option<BufWriter<File>>,
    frames: Option<FrameSink>,
    frame_index: usize,
}

impl SnapshotSink {
    /// A file that cannot be created is not an error; snapshots then go to
    /// the console only.
    pub fn create<P: AsRef<Path>>(path: P) -> SnapshotSink {
        let file = match File::create(&path) {
            Ok(f) => Some(BufWriter::new(f)),
            Err(err) => {
                eprintln!(
                    "cannot create {}: {err}, writing snapshots to console only",
                    path.as_ref().display()
                );
                None
            }
        };
        SnapshotSink {
            file,
            frames: None,
            frame_index: 0,
        }
    }

    pub fn console_only() -> SnapshotSink {
        SnapshotSink {
            file: None,
            frames: None,
            frame_index: 0,
        }
    }

    pub fn with_frames(mut self, frames: FrameSink) -> SnapshotSink {
        self.frames = Some(frames);
        self
    }

    /// Emit the grid once to every destination. Called only between steps,
    /// after the buffer swap, so no writes race the emission. A failing
    /// file sink is dropped and emission continues on the console.
    pub fn emit(&mut self, time: f64, grid: &Grid) {
        println!("=============Time: {time}===============");
        {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            let _ = write_snapshot(&mut lock, grid);
        }

        let failed = match self.file.as_mut() {
            Some(file) => write_snapshot(file, grid).and_then(|()| file.flush()).err(),
            None => None,
        };
        if let Some(err) = failed {
            eprintln!("snapshot file unavailable: {err}, falling back to console only");
            self.file = None;
        }

        if let Some(frames) = &self.frames {
            frames.write_frame(grid, self.frame_index);
            self.frame_index += 1;
        }
    }
}
