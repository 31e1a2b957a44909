//! Building generators from configuration.

pub mod config;
