//! Domain models
//!
//! The shield controller, its configuration, and the error types used at
//! the edges of the crate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod shield;
