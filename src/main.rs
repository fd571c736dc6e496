use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::prelude::*;

use pi_digits::{pi_digits_observed, PrecisionRequest};

/// Compute decimal digits of pi from scratch.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Number of fractional decimal digits to compute
    digits: usize,

    /// Worker threads for the binary-splitting stage
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Write the digit string to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Record a chrome trace of the computation
    #[arg(long)]
    trace: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let _trace_guard = if args.trace {
        let (layer, guard) = tracing_chrome::ChromeLayerBuilder::new().build();
        tracing_subscriber::registry().with(layer).init();
        Some(guard)
    } else {
        tracing_subscriber::fmt().with_writer(std::io::stderr).init();
        None
    };

    let req = PrecisionRequest::new(args.digits)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .use_current_thread()
        .build()?;

    let bar = ProgressBar::new(req.terms() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{bar:40} {pos}/{len} terms ({eta})",
    )?);
    let observer = |done: usize| bar.inc(done as u64);

    let started = Instant::now();
    let digits = pool.install(|| pi_digits_observed(args.digits, Some(&observer)))?;
    bar.finish_and_clear();
    info!(digits = args.digits, elapsed = ?started.elapsed(), "computation finished");

    match args.output {
        Some(path) => fs::write(path, digits)?,
        None => println!("{digits}"),
    }
    Ok(())
}
