//! # machbar-core
//!
//! Core types and primitives for the machbar feasibility checker.
//! This crate defines the shared vocabulary used by every other crate in the workspace:
//! the [`Assessment`] produced for a client request, its [`Verdict`] and
//! [`Confidence`], and the unified [`MachbarError`].

pub mod assessment;
pub mod error;
pub mod types;

pub use assessment::{AlternativeOption, Assessment};
pub use error::{MachbarError, Result};
pub use types::*;
