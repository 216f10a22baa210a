#![forbid(unsafe_code)]

//! rops — Recycle Ops CLI entry point.

use clap::Parser;

use recycle_ops::cli_app;

fn main() {
    let args = cli_app::Cli::parse();
    if let Err(e) = cli_app::run(&args) {
        eprintln!("rops: {e}");
        std::process::exit(e.exit_code());
    }
}
