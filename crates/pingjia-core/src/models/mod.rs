//! Data models for listings, calculation results and configuration.

pub mod config;
pub mod listing;
pub mod results;
