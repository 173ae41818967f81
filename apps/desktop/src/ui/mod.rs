//! UI Module for the Cadastro desktop app
//!
//! Theme, reusable components and the routed screens.

pub mod components;
pub mod theme;
pub mod views;

pub use theme::{create_cadastro_theme, utils};
