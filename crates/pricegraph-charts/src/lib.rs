//! # PriceGraph Charts
//!
//! Renderer-agnostic chart specifications for the grocery price report,
//! plus a plotters-based renderer that writes them to PNG files.
//!
//! Each spec builder is a pure function of the loaded table: it clips and
//! classifies data for one view without touching any numeric aggregate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod grouped_bar;
pub mod histogram;
pub mod render;
pub mod scatter;
pub mod types;

pub use grouped_bar::*;
pub use histogram::*;
pub use render::*;
pub use scatter::*;
pub use types::*;
