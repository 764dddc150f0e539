use clap::Parser;
use colored::Colorize;
use rowparse::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(e) = commands::setup_logging(&args) {
        eprintln!("{} {:#}", "Failed to initialize logging:".red(), e);
        process::exit(1);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("{} {}", "Failed to create async runtime:".red(), e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(&args)) {
        Ok(_summary) => process::exit(0),
        Err(error) => {
            eprintln!("{} {:#}", "Error:".red().bold(), error);
            process::exit(1);
        }
    }
}
