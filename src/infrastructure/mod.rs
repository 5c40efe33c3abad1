//! Infrastructure layer.
//!
//! Configuration loading, logging setup, and wiring of the database pool.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
