//! # PriceGraph Config
//!
//! Type-safe configuration for PriceGraph report generation.
//!
//! This crate provides the TOML configuration schema, defaults, loading with
//! environment variable overrides, and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::*;
pub use schema::*;
pub use validator::*;
