use clap::Parser;
use heat2d::config::Parameters;
use heat2d::image::FrameSink;
use heat2d::snapshot::SnapshotSink;
use heat2d::solver::Solver;
use std::path::PathBuf;

/// 2D transient heat conduction, explicit FTCS with parallel workers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "configuration.txt")]
    config: PathBuf,

    /// File for persistent snapshot output.
    #[arg(short, long, default_value = "res.txt")]
    output: PathBuf,

    /// Directory for PNG frames, one per emitted snapshot, will be created.
    #[arg(short, long)]
    frames_dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let params = match Parameters::from_file(&args.config) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = params.validate() {
        eprintln!("{err}");
        std::process::exit(1);
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(params.threads as usize)
        .thread_name(|i| format!("rayon_thread_{}", i))
        .build_global()
        .unwrap();

    let mut sink = SnapshotSink::create(&args.output);
    if let Some(dir) = &args.frames_dir {
        std::fs::create_dir_all(dir).unwrap();
        sink = sink.with_frames(FrameSink::new(dir.clone(), &params));
    }

    let mut solver = Solver::new(&params);
    solver.run(&mut sink);
}
