//! Builder API for ergonomic configuration construction.
//!
//! Configurations can always be assembled by hand or deserialized from
//! JSON; the builder is a shorter path for configurations written in code.

pub mod config;

pub use config::ConfigurationBuilder;
