//! crafter-rates: throughput sweep of the Minecraft crafter.
//!
//! The crate evaluates how fast a crafter can run when fed by hoppers,
//! droppers or faster item channels, bounded both by the input supply and by
//! the clock driving it, and draws the result as a grid of dual-axis charts.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{FigureConfig, GridRenderer};
pub use error::{CrafterError, CrafterResult};
