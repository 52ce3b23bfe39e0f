//! Command line components for the dose objectives converter.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
