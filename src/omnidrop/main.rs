//! # Omnidrop CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument
//! parsing, logging setup, context initialization, dispatch, error handling and
//! printing of the conversion summary.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
