//! Array Transforms CLI
//!
//! Runs the built-in check cases, evaluates either transform on numbers given
//! on the command line, and times both transforms on random data across
//! array sizes.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use array_transforms::report::{format_size, BenchmarkResult, CheckReport, ReportFormat};
use array_transforms::{
    check, checked_product_except_self, is_sorted, merge_sorted, product_except_self,
    verify_products,
};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default benchmark sizes: 1K to 4M elements
const DEFAULT_SIZES: [usize; 6] = [1 << 10, 1 << 12, 1 << 14, 1 << 16, 1 << 18, 1 << 22];

#[derive(Parser, Debug)]
#[command(name = "array-transforms", version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the built-in check cases and print PASS/FAIL per case
    Check {
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        /// Write the report to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Product of all other elements at each index
    Product {
        /// At least two integers
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Fail instead of wrapping when a product overflows i64
        #[arg(long)]
        checked: bool,
    },
    /// Merge two sorted lists of integers
    Merge {
        /// Comma separated, non-decreasing, e.g. 2,4,6
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        left: Vec<i64>,
        /// Comma separated, non-decreasing, e.g. 1,3,7
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        right: Vec<i64>,
    },
    /// Time both transforms on random data
    Bench {
        /// Comma separated array sizes
        #[arg(long, value_delimiter = ',')]
        sizes: Vec<usize>,
        /// Seed for the random data (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,
        /// Also write the timings as a report
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Check { format, output } => run_check(format, output),
        Command::Product { values, checked } => {
            let products = if checked {
                checked_product_except_self(&values)?
            } else {
                product_except_self(&values)?
            };
            println!("{}", check::render(&products));
            Ok(())
        }
        Command::Merge { left, right } => {
            if !is_sorted(&left) {
                bail!("--left is not sorted in non-decreasing order");
            }
            if !is_sorted(&right) {
                bail!("--right is not sorted in non-decreasing order");
            }
            println!("{}", check::render(&merge_sorted(&left, &right)));
            Ok(())
        }
        Command::Bench {
            sizes,
            seed,
            format,
            output,
        } => {
            let sizes = if sizes.is_empty() {
                DEFAULT_SIZES.to_vec()
            } else {
                sizes
            };
            run_benchmark(&sizes, seed, format, output)
        }
    }
}

fn run_check(format: ReportFormat, output: Option<PathBuf>) -> anyhow::Result<()> {
    let report = CheckReport::from_cases("built-in check cases", check::run_all());

    match output {
        Some(path) => {
            report
                .save(&path, format)
                .with_context(|| format!("writing report to {}", path.display()))?;
            log::info!("Report written to: {}", path.display());
        }
        None => print!("{}", report.render(format)),
    }

    log::info!("{} passed, {} failed", report.passed(), report.failed());
    if !report.all_passed() {
        bail!("{} check case(s) failed", report.failed());
    }
    Ok(())
}

/// Time both transforms across array sizes
fn run_benchmark(
    sizes: &[usize],
    seed: Option<u64>,
    format: ReportFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("Benchmark seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = CheckReport::new(&format!("timings, seed {}", seed));

    println!(
        "{:>12} | {:>20} | {:>14} | {:>8}",
        "Size", "Product (ms)", "Merge (ms)", "Verified"
    );
    println!("{:-<12}-+-{:-<20}-+-{:-<14}-+-{:-<8}", "", "", "", "");

    for &size in sizes {
        if size < 2 {
            log::warn!("Skipping size {}: need at least 2 elements", size);
            continue;
        }

        // Small magnitudes keep some products from wrapping immediately
        let values: Vec<i64> = (0..size).map(|_| rng.gen_range(-3..=3)).collect();
        let product_start = Instant::now();
        let products = product_except_self(&values)?;
        let product_ms = product_start.elapsed().as_secs_f64() * 1000.0;
        let product_ok = verify_products(&values, &products);

        let mut left: Vec<i64> = (0..size / 2).map(|_| rng.gen()).collect();
        let mut right: Vec<i64> = (0..size - size / 2).map(|_| rng.gen()).collect();
        left.sort_unstable();
        right.sort_unstable();
        let merge_start = Instant::now();
        let merged = merge_sorted(&left, &right);
        let merge_ms = merge_start.elapsed().as_secs_f64() * 1000.0;
        let merge_ok = merged.len() == size && is_sorted(&merged);

        println!(
            "{:>12} | {:>20.3} | {:>14.3} | {:>8}",
            format_size(size),
            product_ms,
            merge_ms,
            if product_ok && merge_ok { "OK" } else { "ERROR" }
        );

        report.add_timing(BenchmarkResult {
            transform: "product_except_self".to_string(),
            array_size: size,
            time_ms: product_ms,
            verified: product_ok,
        });
        report.add_timing(BenchmarkResult {
            transform: "merge_sorted".to_string(),
            array_size: size,
            time_ms: merge_ms,
            verified: merge_ok,
        });
    }

    if let Some(path) = output {
        report
            .save(&path, format)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("\nReport written to: {}", path.display());
    }

    if !report.all_passed() {
        bail!("benchmark output failed verification");
    }
    Ok(())
}
