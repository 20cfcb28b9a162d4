//! Benchmark suite for the calculator and the batch strategies
//!
//! ```bash
//! cargo bench
//! ```
//!
//! The strategy benchmarks write a generated request file to a temporary
//! directory once, then time complete runs of each pipeline over it.

use interest_calculator::cli::StrategyType;
use interest_calculator::strategy::{create_strategy, BatchConfig};
use interest_calculator::{CalculationRequest, InterestCalculator};
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::OnceLock;
use tempfile::NamedTempFile;

fn main() {
    divan::main();
}

const FD_TENURES: [i64; 8] = [3, 10, 20, 40, 50, 90, 200, 400];
const RD_TENURES: [i64; 6] = [6, 9, 12, 15, 18, 21];

/// Generated input with `rows` requests cycling through every product
fn requests_file(rows: u32) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "id,product,amount,variant,tenure,age").expect("write failed");

    for id in 0..rows {
        let age = 20 + id % 60;
        let line = match id % 3 {
            0 => format!("{},SB,{},Normal,,", id, 1000 + id),
            1 => format!(
                "{},FD,{},,{},{}",
                id,
                5000 * (id + 1),
                FD_TENURES[id as usize % FD_TENURES.len()],
                age
            ),
            _ => format!(
                "{},RD,{},,{},{}",
                id,
                500 + id,
                RD_TENURES[id as usize % RD_TENURES.len()],
                age
            ),
        };
        writeln!(file, "{}", line).expect("write failed");
    }

    file.flush().expect("flush failed");
    file
}

fn medium_file() -> &'static NamedTempFile {
    static FILE: OnceLock<NamedTempFile> = OnceLock::new();
    FILE.get_or_init(|| requests_file(10_000))
}

/// Single fixed deposit calculation
#[divan::bench]
fn calculate_fixed_deposit(bencher: divan::Bencher) {
    let calculator = InterestCalculator::new();
    let request = CalculationRequest::fixed_deposit(Decimal::new(50_000, 0), 90, 65);

    bencher.bench(|| calculator.calculate(divan::black_box(&request)));
}

/// Single recurring deposit calculation
#[divan::bench]
fn calculate_recurring_deposit(bencher: divan::Bencher) {
    let calculator = InterestCalculator::new();
    let request = CalculationRequest::recurring_deposit(Decimal::new(2_500, 0), 18, 40);

    bencher.bench(|| calculator.calculate(divan::black_box(&request)));
}

/// Synchronous strategy over 10,000 requests
#[divan::bench]
fn sync_strategy_medium() {
    let strategy = create_strategy(StrategyType::Sync, None);
    let mut output = Vec::new();

    strategy
        .process(medium_file().path(), &mut output)
        .expect("Processing failed");
}

/// Asynchronous strategy over 10,000 requests
#[divan::bench]
fn async_strategy_medium() {
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::default()));
    let mut output = Vec::new();

    strategy
        .process(medium_file().path(), &mut output)
        .expect("Processing failed");
}
