//! # machbar-cli
//!
//! Command-line interface for the machbar feasibility checker.
//!
//! ## Commands
//!
//! - `machbar analyze` — Classify a client request (argument, stdin or `--example N`)
//! - `machbar examples` — List the canned example requests
//! - `machbar catalog` — Show or export the skill catalog
//! - `machbar config` — Show the effective configuration
//! - `machbar init` — Write a default machbar.toml

pub mod commands;

pub use commands::Cli;
