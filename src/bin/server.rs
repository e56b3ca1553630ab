//! Portfolio site server binary.
//! Run with: cargo run --bin portfolio-server

use std::process::ExitCode;

use portfolio_site::start_portfolio;

fn main() -> ExitCode {
    start_portfolio::run()
}
