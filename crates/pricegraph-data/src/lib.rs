//! # PriceGraph Data
//!
//! Loading and summarizing the grocery price table.
//!
//! This crate owns the in-memory table of price records, the CSV loader that
//! produces it, and the descriptive-statistics aggregator that consumes it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod record;
pub mod summary;

pub use loader::*;
pub use record::*;
pub use summary::*;
