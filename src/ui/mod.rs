//! User interface and presentation
//!
//! Presenters format shield state for the operator, keeping text layout
//! out of the controller.

pub mod presenters;
