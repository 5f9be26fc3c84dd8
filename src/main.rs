use clap::{Parser, Subcommand, ValueEnum};
use pbsearch::reduce::{run_min_max, run_prefix_sum};
use pbsearch::search::parallel::run_multi_target_search;
use pbsearch::search::run_linear_search;
use pbsearch::{
    DEFAULT_WORKERS, Matrix, ParallelConfig, SearchConfig, SearchStatistics, SortedView, Strategy,
    run_search, sequential_search,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use tracing::Level;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "pbs")]
#[command(about = "pbs - Parallel Binary Search")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Enable verbose output (debug logging and search statistics)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// CLI reduction selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliReduction {
    /// Smallest and largest element
    MinMax,
    /// Exclusive prefix sum
    PrefixSum,
}

/// Where the input array comes from
#[derive(clap::Args, Debug)]
struct DataArgs {
    /// Comma-separated values (e.g. 1,3,5,7)
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with = "size"
    )]
    values: Option<Vec<i64>>,
    /// Generate this many random values instead of --values
    #[arg(long)]
    size: Option<usize>,
    /// Random seed for generated data
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for one target
    Search {
        #[command(flatten)]
        data: DataArgs,
        /// Value to search for
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        /// Search strategy: sequential, segmented, adaptive, narrowing or linear
        #[arg(long, default_value = "adaptive")]
        strategy: Strategy,
        /// Number of workers (segments / probes per round)
        #[arg(long, short = 'j', default_value_t = DEFAULT_WORKERS)]
        workers: usize,
    },
    /// Search for several targets on a worker pool
    Multi {
        #[command(flatten)]
        data: DataArgs,
        /// Comma-separated values to search for
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        targets: Vec<i64>,
        /// Worker pool size
        #[arg(long, short = 'j', default_value_t = DEFAULT_WORKERS)]
        workers: usize,
    },
    /// Search data in any order with a parallel linear scan
    Linear {
        #[command(flatten)]
        data: DataArgs,
        /// Value to search for
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        /// Number of scanning workers
        #[arg(long, short = 'j', default_value_t = DEFAULT_WORKERS)]
        workers: usize,
    },
    /// Run a parallel reduction over the data
    Reduce {
        #[command(flatten)]
        data: DataArgs,
        /// Reduction to run
        #[arg(long, value_enum)]
        op: CliReduction,
        /// Number of workers
        #[arg(long, short = 'j', default_value_t = DEFAULT_WORKERS)]
        workers: usize,
    },
    /// Time every strategy against the sequential baseline on random data
    Bench {
        /// Number of elements in the generated array
        #[arg(long, default_value = "500000")]
        size: usize,
        /// Number of lookups per strategy
        #[arg(long, default_value = "200")]
        queries: usize,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// Number of worker threads (defaults to the CPU count)
        #[arg(long, short = 'j')]
        cores: Option<usize>,
    },
    /// Shear sort a matrix into snake order
    Shearsort {
        /// Matrix rows separated by ';', values by ',' (e.g. "9,2,7;4,5,6;3,8,1")
        #[arg(long, allow_hyphen_values = true)]
        matrix: Option<String>,
        /// Rows of a random matrix (when --matrix is absent)
        #[arg(long, default_value = "4")]
        rows: usize,
        /// Columns of a random matrix (when --matrix is absent)
        #[arg(long, default_value = "4")]
        cols: usize,
        /// Random seed for the generated matrix
        #[arg(long)]
        seed: Option<u64>,
        /// Split each row and column pass over this many workers
        #[arg(long, short = 'j')]
        workers: Option<usize>,
    },
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

// --- Input Helpers ---

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random values in `[0, 4 * size)`, duplicates allowed.
fn generate_values(size: usize, seed: Option<u64>) -> Vec<i64> {
    let mut rng = make_rng(seed);
    let upper = (size as i64).saturating_mul(4).max(1);
    (0..size).map(|_| rng.random_range(0..upper)).collect()
}

fn generate_sorted(size: usize, seed: Option<u64>) -> Vec<i64> {
    let mut values = generate_values(size, seed);
    values.sort_unstable();
    values
}

/// Values as given, or random values in generation order.
fn load_values(data: DataArgs) -> CliResult<Vec<i64>> {
    match (data.values, data.size) {
        (Some(values), _) => Ok(values),
        (None, Some(size)) => Ok(generate_values(size, data.seed)),
        (None, None) => Err("either --values or --size is required".into()),
    }
}

fn load_view(data: DataArgs) -> CliResult<SortedView<i64>> {
    let generated = data.values.is_none();
    let mut values = load_values(data)?;
    if generated {
        values.sort_unstable();
    }
    Ok(SortedView::new(values)?)
}

fn parse_matrix(text: &str) -> Result<Vec<Vec<i64>>, String> {
    text.split(';')
        .map(|row| {
            row.split(',')
                .map(|v| {
                    v.trim()
                        .parse::<i64>()
                        .map_err(|_| format!("Invalid matrix value: '{}'", v.trim()))
                })
                .collect()
        })
        .collect()
}

fn describe(index: Option<usize>) -> String {
    match index {
        Some(index) => index.to_string(),
        None => "not found".to_string(),
    }
}

/// Print search statistics
fn print_search_statistics(stats: &SearchStatistics) {
    println!("\nSearch Statistics:");
    for line in stats.format_summary().lines() {
        println!("  {}", line);
    }
}

// --- Commands ---

fn run_search_command(
    data: DataArgs,
    target: i64,
    strategy: Strategy,
    workers: usize,
    verbose: bool,
) -> CliResult<()> {
    let view = load_view(data)?;
    println!("Array size: {} elements", view.len());
    println!("Searching for: {}", target);
    println!("Strategy: {} ({} workers)", strategy, workers);

    let config = SearchConfig::default()
        .with_strategy(strategy)
        .with_workers(workers);
    let result = run_search(&view, &target, &config)?;

    print!("{}", result);
    if let Some(index) = result.index {
        println!("Value at index: {}", view[index]);
    }
    if verbose {
        print_search_statistics(&result.statistics);
    }
    Ok(())
}

fn run_multi_command(
    data: DataArgs,
    targets: Vec<i64>,
    workers: usize,
    verbose: bool,
) -> CliResult<()> {
    let view = load_view(data)?;
    println!("Array size: {} elements", view.len());
    println!("Searching for: {:?}", targets);

    let config = ParallelConfig::default().with_workers(workers);
    let result = run_multi_target_search(&view, &targets, &config)?;

    let mut entries: Vec<_> = result.results.iter().collect();
    entries.sort();
    println!("Results:");
    for (target, index) in entries {
        println!("  {} -> {}", target, describe(*index));
    }

    if verbose {
        let stats = &result.statistics;
        println!("\nDispatch Statistics:");
        println!("  Time: {:.2?}", stats.elapsed_time);
        println!("  Workers spawned: {}", stats.workers_spawned);
        println!("  Jobs scheduled: {}", stats.jobs_scheduled);
        println!("  Duplicate targets: {}", stats.duplicate_targets);
        println!("  Jobs per worker: {:?}", stats.jobs_per_worker);
    }
    Ok(())
}

fn run_bench_command(
    size: usize,
    queries: usize,
    seed: Option<u64>,
    cores: Option<usize>,
    verbose: bool,
) -> CliResult<()> {
    let workers = cores.unwrap_or_else(num_cpus::get).max(1);
    let view = SortedView::new(generate_sorted(size, seed))?;

    let mut rng = make_rng(seed.map(|s| s.wrapping_add(1)));
    let upper = (size as i64).saturating_mul(4).max(1);
    let targets: Vec<i64> = (0..queries).map(|_| rng.random_range(0..upper)).collect();

    println!("Array size: {} elements", view.len());
    println!("Queries: {}", targets.len());
    println!("Workers: {}", workers);

    let start = Instant::now();
    let baseline: Vec<Option<usize>> = targets
        .iter()
        .map(|target| sequential_search(&view, target))
        .collect();
    let baseline_time = start.elapsed();
    println!("\nSequential baseline: {:.4?}", baseline_time);

    for strategy in [
        Strategy::Segmented,
        Strategy::Adaptive,
        Strategy::Narrowing,
        Strategy::Linear,
    ] {
        let config = SearchConfig::default()
            .with_strategy(strategy)
            .with_workers(workers);
        let mut totals = SearchStatistics::new(strategy);
        let mut mismatches = 0;

        let start = Instant::now();
        for (target, expected) in targets.iter().zip(&baseline) {
            let result = run_search(&view, target, &config)?;
            if result.index.is_some() != expected.is_some() {
                mismatches += 1;
            }
            totals.merge(&result.statistics);
        }
        let elapsed = start.elapsed();

        println!(
            "{:<12} {:.4?} ({:.2}x baseline)",
            format!("{}:", strategy),
            elapsed,
            ratio(elapsed, baseline_time)
        );
        if verbose {
            print_search_statistics(&totals);
        }
        if mismatches > 0 {
            return Err(format!(
                "{} disagreed with the baseline on {} queries",
                strategy, mismatches
            )
            .into());
        }
    }

    let config = ParallelConfig::default().with_workers(workers);
    let start = Instant::now();
    let multi = run_multi_target_search(&view, &targets, &config)?;
    let elapsed = start.elapsed();
    println!(
        "{:<12} {:.4?} ({:.2}x baseline, {} distinct targets)",
        "multi:",
        elapsed,
        ratio(elapsed, baseline_time),
        multi.results.len()
    );

    Ok(())
}

fn ratio(elapsed: Duration, baseline: Duration) -> f64 {
    let base = baseline.as_secs_f64();
    if base == 0.0 {
        0.0
    } else {
        elapsed.as_secs_f64() / base
    }
}

fn run_linear_command(
    data: DataArgs,
    target: i64,
    workers: usize,
    verbose: bool,
) -> CliResult<()> {
    let values = load_values(data)?;
    println!("Array size: {} elements", values.len());
    println!("Searching for: {}", target);

    let config = ParallelConfig::default().with_workers(workers);
    let result = run_linear_search(&values, &target, &config)?;

    print!("{}", result);
    if verbose {
        print_search_statistics(&result.statistics);
    }
    Ok(())
}

fn run_reduce_command(data: DataArgs, op: CliReduction, workers: usize) -> CliResult<()> {
    let values = load_values(data)?;
    let config = ParallelConfig::default().with_workers(workers);
    println!("Array size: {} elements", values.len());

    match op {
        CliReduction::MinMax => match run_min_max(&values, &config)? {
            Some((min, max)) => {
                println!("Min: {}", min);
                println!("Max: {}", max);
            }
            None => println!("Empty input."),
        },
        CliReduction::PrefixSum => {
            let sums = run_prefix_sum(&values, &config)?;
            let line: Vec<String> = sums.iter().map(|v| v.to_string()).collect();
            println!("Prefix sums: {}", line.join(" "));
        }
    }
    Ok(())
}

fn run_shearsort_command(
    matrix: Option<String>,
    rows: usize,
    cols: usize,
    seed: Option<u64>,
    workers: Option<usize>,
) -> CliResult<()> {
    let rows = match matrix {
        Some(text) => parse_matrix(&text)?,
        None => {
            let mut rng = make_rng(seed);
            (0..rows)
                .map(|_| (0..cols).map(|_| rng.random_range(0..100)).collect())
                .collect()
        }
    };

    let mut matrix = Matrix::new(rows)?;
    println!("Original matrix:");
    print!("{}", matrix);

    match workers {
        Some(workers) => matrix.sort_parallel(&ParallelConfig::default().with_workers(workers))?,
        None => matrix.sort(),
    }
    println!("Sorted matrix ({} iterations):", matrix.iterations());
    print!("{}", matrix);
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// --- Main Function ---
fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let outcome = match args.command {
        Commands::Search {
            data,
            target,
            strategy,
            workers,
        } => run_search_command(data, target, strategy, workers, args.verbose),
        Commands::Multi {
            data,
            targets,
            workers,
        } => run_multi_command(data, targets, workers, args.verbose),
        Commands::Linear {
            data,
            target,
            workers,
        } => run_linear_command(data, target, workers, args.verbose),
        Commands::Reduce { data, op, workers } => run_reduce_command(data, op, workers),
        Commands::Bench {
            size,
            queries,
            seed,
            cores,
        } => run_bench_command(size, queries, seed, cores, args.verbose),
        Commands::Shearsort {
            matrix,
            rows,
            cols,
            seed,
            workers,
        } => run_shearsort_command(matrix, rows, cols, seed, workers),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
