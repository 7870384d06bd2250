//! `sift` - filter a JSON record list from the terminal.
//!
//! See the crate documentation of `sift-demo` for usage.

use std::io;

use clap::Parser;
use sift_demo::{logging, run, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&args, stdin.lock(), stdout.lock())
}
