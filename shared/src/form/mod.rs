//! Form stores
//!
//! Each form is an immutable state snapshot plus a reducer
//! `reduce(state, action) -> state`. The GUI maps widget events to actions
//! and renders whatever snapshot comes back.

pub mod product;

pub use product::{submit, ProductFormAction, ProductFormState};
