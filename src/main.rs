use std::fs;

use clap::Parser;
use fermi::{Engine, EngineConfig, config::N_SAMPLES, report::render_model};
use tracing_subscriber::EnvFilter;

/// fermi is a line-oriented calculator for Fermi estimates. Ranges such as
/// `10 20` or `0.2 0.6 beta` are propagated by Monte Carlo sampling and
/// reported as P10/P50/P90.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells fermi to read the model from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Seed for the random source. Runs with the same seed print the same
    /// results.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of Monte Carlo draws per uncertain quantity.
    #[arg(short = 'n', long, default_value_t = N_SAMPLES)]
    samples: usize,

    contents: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let model = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.samples == 0 {
        eprintln!("The number of samples must be at least 1.");
        std::process::exit(1);
    }

    let config = EngineConfig { seed: args.seed,
                                ..EngineConfig::default() }.with_samples(args.samples);
    let mut engine = Engine::with_config(config);
    let results = engine.execute_model(&model);

    println!("{}", render_model(&model, &results));
}
