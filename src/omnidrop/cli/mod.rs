//! # CLI Behavior
//!
//! One possible UI client for omnidrop. It plays the part of the uploader: it finds
//! the export files, hands them to the converter and shows what happened.
//!
//! ### Naked Conversion (`omnidrop convert`)
//!
//! With no paths, the current directory is scanned for `*.json` files (the extension
//! list is configurable). Explicit files are always read, whatever their extension.
//!
//! The bookmark file is only written when at least one article was converted. Failed
//! files never stop the run; they are listed in the summary instead.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers
//! - `print`: Summary and message output
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
