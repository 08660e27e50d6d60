mod input;
mod player;
mod step_graph;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sort_it_out::Algorithm;

use crate::player::Player;

const DEFAULT_ARRAY: [u32; 10] = [15, 6, 2, 18, 9, 13, 5, 20, 1, 11];

/// Terminal playback of sorting-algorithm histories.
#[derive(Debug, Parser)]
#[command(name = "sort-it-out")]
struct Args {
    /// Algorithm to visualize: Bubble Sort, Selection Sort, Insertion Sort,
    /// Merge Sort, or Quick Sort.
    #[arg(short, long, default_value = "Bubble Sort")]
    algorithm: String,

    /// Comma-separated input array, e.g. "15, 6, 2, 18, 9".
    #[arg(long)]
    array: Option<String>,

    /// Generate a random array instead of the demo array.
    #[arg(long)]
    random: bool,

    /// Initial playback speed, 10-100.
    #[arg(long, default_value_t = 50)]
    speed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let algorithm: Algorithm = args.algorithm.parse()?;

    let values = if let Some(ref raw) = args.array {
        input::parse_array(raw)?
    } else if args.random {
        input::random_array(&mut rand::thread_rng())
    } else {
        DEFAULT_ARRAY.to_vec()
    };

    let history = algorithm.generate(&values);
    tracing::debug!(algorithm = %algorithm, steps = history.len(), "generated history");

    Player::new(algorithm, &values, history, args.speed).run()
}
