//! Starship Shields
//!
//! A deflector shield model: a bounded energy buffer that draws from the
//! ship's reserve, absorbs damage, and reports its state.
//!
//! # Modules
//!
//! - [`models`] - Shield controller, configuration, and error types
//! - [`services`] - Operator console and damage drill
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of shield reports
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use starship_shields::ShieldController;
//!
//! let mut shield = ShieldController::default();
//! shield.raise_shield();
//! shield.transfer_energy(2500);
//! shield.apply_damage(500);
//! assert_eq!(shield.strength(), 2000);
//! assert_eq!(shield.ship_energy(), 47_500);
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::config::ShieldConfig;
pub use models::shield::{ShieldController, ShieldStatus};
