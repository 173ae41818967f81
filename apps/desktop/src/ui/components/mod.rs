//! UI Components Module
//!
//! Reusable pieces shared by the shell and the screens.

pub mod button;
pub mod drawer;
pub mod modal;

pub use drawer::drawer_overlay;
pub use modal::{alert_dialog, modal};
