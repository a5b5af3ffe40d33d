//! `bookshelf` - In-memory book collection service
//!
//! This crate wires the [`bookshelf_lib`] store to an HTTP/JSON surface.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Server configuration resolved from CLI and environment
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - HTTP-facing error type
//! - [`http`] - Router, handlers and the response envelope

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;

pub use error::{ApiError, ApiResult};

/// Run the service.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if logging cannot be initialized, the address cannot be
/// resolved or bound, or the server fails while running.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
