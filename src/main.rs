//! Workshop CLI: reads cabinet capacities, an item count, and items from
//! stdin, then prints where the last item was found.
//!
//! Input layout:
//! - line 1: space-separated cabinet capacities (may be empty)
//! - line 2: number of items
//! - one item per line after that

use std::io;

use clap::Parser;
use tracing::warn;

mod cabinet;
mod driver;
mod logging;
mod types;
mod workshop;

#[derive(Parser)]
#[command(
    name = "workshop",
    about = "Simulate stowing items between a workbench, cabinets, and outside",
    version
)]
struct Cli {
    /// Log every stow and find step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match driver::run(io::stdin().lock()) {
        Ok(outcome) => println!("{outcome}"),
        Err(err) => {
            warn!("[INPUT] rejected: {err}");
            println!("INPUT_ERROR");
        }
    }
}
