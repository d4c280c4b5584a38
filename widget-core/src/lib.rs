//! Core library for the weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com provider behind a small trait seam
//! - The search controller (input, loading, error, result)
//! - Pure presentation formatters for the three display lines
//!
//! It is used by `widget-cli`, but can also be reused by other front ends.

pub mod config;
pub mod format;
pub mod model;
pub mod provider;
pub mod search;

pub use config::Config;
pub use model::{CurrentConditions, WeatherReport};
pub use provider::{WeatherProvider, provider_from_config};
pub use search::{SearchController, SearchError};
