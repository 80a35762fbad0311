//! # PriceGraph Common
//!
//! Shared error types, logging setup, and small utilities used across the
//! PriceGraph workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod utils;

pub use error::*;
pub use logging::*;
pub use utils::*;
