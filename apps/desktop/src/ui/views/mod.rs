//! UI Views Module
//!
//! One view per routed destination.

pub mod client_form;
pub mod product_form;

pub use client_form::ClientFormView;
pub use product_form::{ProductFormMessage, ProductFormView};
