//! Interest Calculator CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run                                   # interactive menu
//! cargo run -- requests.csv > results.csv     # batch mode
//! cargo run -- --strategy async --batch-size 500 --max-concurrent 8 requests.csv
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see every resolved rate.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, terminal I/O failure, etc.)

use interest_calculator::cli;
use interest_calculator::core::InterestCalculator;
use interest_calculator::strategy;
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    cli::init_tracing();

    let Some(input_file) = args.input_file.as_deref() else {
        let calculator = InterestCalculator::new();
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        if let Err(e) = cli::run_menu(&calculator, stdin.lock(), &mut stdout) {
            error!(error = %e, "terminal I/O failed");
            process::exit(1);
        }
        return;
    };

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), config)
    };

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(input_file, &mut output) {
        error!(error = %e, "batch processing failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
