//! Shield services
//!
//! Operator-facing logic layered over the shield controller: the command
//! console and the damage drill.

pub mod console;
pub mod drill;
