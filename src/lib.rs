//! # toolbelt
//!
//! Small stateless helpers shared across an application.
//!
//! ## Architecture
//!
//! - **batch**: Three-way key diff of existing entities against incoming inputs
//! - **arrays**: Duplicate detection over slices
//! - **bytes**: Human readable byte sizes
//! - **fqcn**: Class name parsing and namespace/file path conversion
//! - **strings**: Case conversion and random URL-friendly tokens
//! - **cli** / **config**: Command line surface and its flag/env resolution

pub mod arrays;
pub mod batch;
#[cfg(test)]
mod batch_proptest;
pub mod bytes;
pub mod cli;
pub mod config;
pub mod error;
pub mod fqcn;
pub mod strings;

pub use batch::{BatchUpdater, Reconciliation};
pub use error::{Error, Result};
