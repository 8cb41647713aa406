use clap::Parser;
use dxa_processor::cli::{self, Args};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    cli::setup_logging(&args);

    match cli::run(&args) {
        Ok(_summary) => {
            // Success - summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
