//! Shared data models for Cadastro
//!
//! The product form's text buffers, the values parsed out of them at submit
//! time, and the input filters that keep the buffers well-formed.

pub mod field;
pub mod product;

pub use field::*;
pub use product::*;
