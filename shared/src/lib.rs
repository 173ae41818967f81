//! Cadastro Shared Library
//!
//! This crate holds everything in Cadastro that is not widget code: the
//! product form store and its validation, the navigation shell with its
//! animated drawer, dialog definitions, and configuration management. The GUI
//! crate renders these snapshots and feeds user input back in as actions.
//!
//! # Usage
//!
//! ```rust
//! use cadastro_shared::form::{ProductFormAction, ProductFormState};
//! use cadastro_shared::models::Outcome;
//!
//! let state = ProductFormState::new()
//!     .reduce(ProductFormAction::NameChanged("Caneta".to_string()))
//!     .reduce(ProductFormAction::PriceChanged("5,00".to_string()))
//!     .reduce(ProductFormAction::QuantityChanged("10".to_string()))
//!     .reduce(ProductFormAction::Submit);
//!
//! assert_eq!(state.last_outcome(), Some(Outcome::Success));
//! assert!(state.success_visible());
//! assert!(state.fields().is_empty());
//! ```

pub mod config;
pub mod core;
pub mod dialog;
pub mod form;
pub mod models;
pub mod navigation;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{AppConfig, ConfigManager, UiConfig};
pub use crate::core::{
    CoreError, CoreResult, DesktopFileProvider, FileError, FileOperationProvider, FileResult,
    MockFileProvider,
};
pub use dialog::{DialogFlags, DialogKind};
pub use form::{submit, ProductFormAction, ProductFormState};
pub use models::{FieldFilter, InputChange, Outcome, ParsedProduct, ProductFields};
pub use navigation::{
    BackStackEntry, Destination, DrawerState, DrawerValue, NavigationShell, RouteParseError,
    ShellAction,
};
pub use validation::{FieldIssue, ValidationFailure};

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
