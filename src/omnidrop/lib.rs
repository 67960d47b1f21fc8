//! # Omnidrop Architecture
//!
//! Omnidrop turns Omnivore JSON exports into a Netscape-style bookmark file that
//! Raindrop (and Pocket-compatible importers) can read. Like any good converter it is a
//! **library first**: the binary is one client of it, nothing more.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints the summary, sets up logging    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, applies configuration         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - convert: buffers → (document, stats), never fails        │
//! │  - scan / export / config: file system edges                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + Document (model.rs, document.rs)                   │
//! │  - Records, entries, stats, markup templates and escaping   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Conversion problems are data, not errors. A buffer that is not JSON, not an array,
//! or structurally broken shows up as a line in [`model::ConversionStats::failed`];
//! the remaining buffers are still converted. `Result` is reserved for the edges:
//! reading inputs, writing the output file, loading config.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Conversion, input discovery, delivery, config
//! - [`document`]: Bookmark markup assembly and escaping
//! - [`model`]: `InputBuffer`, `ArticleRecord`, `BookmarkEntry`, `ConversionStats`
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod model;
