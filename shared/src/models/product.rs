//! Product form data

use serde::{Deserialize, Serialize};

use super::field::{FieldFilter, InputChange};

/// Raw text buffers of the product form
///
/// `price_text` and `quantity_text` only ever hold text accepted by their
/// filters; [`ProductFields::set_price`] and [`ProductFields::set_quantity`]
/// are the only ways to change them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFields {
    name: String,
    price_text: String,
    quantity_text: String,
}

impl ProductFields {
    /// Filter applied to the product name
    pub const NAME_FILTER: FieldFilter = FieldFilter::Free;
    /// Filter applied to the price
    pub const PRICE_FILTER: FieldFilter = FieldFilter::Decimal;
    /// Filter applied to the quantity
    pub const QUANTITY_FILTER: FieldFilter = FieldFilter::Digits;

    /// Empty buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw text, dropping any buffer that violates its filter
    pub fn from_raw<N, P, Q>(name: N, price_text: P, quantity_text: Q) -> Self
    where
        N: Into<String>,
        P: Into<String>,
        Q: Into<String>,
    {
        let mut fields = Self::new();
        fields.set_name(name);
        fields.set_price(price_text);
        fields.set_quantity(quantity_text);
        fields
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    pub fn quantity_text(&self) -> &str {
        &self.quantity_text
    }

    /// Replace the name; always accepted
    pub fn set_name<S: Into<String>>(&mut self, name: S) -> InputChange {
        let change = Self::NAME_FILTER.apply(name);
        change.clone().apply_to(&mut self.name);
        change
    }

    /// Propose a new price buffer
    pub fn set_price<S: Into<String>>(&mut self, price_text: S) -> InputChange {
        let change = Self::PRICE_FILTER.apply(price_text);
        change.clone().apply_to(&mut self.price_text);
        change
    }

    /// Propose a new quantity buffer
    pub fn set_quantity<S: Into<String>>(&mut self, quantity_text: S) -> InputChange {
        let change = Self::QUANTITY_FILTER.apply(quantity_text);
        change.clone().apply_to(&mut self.quantity_text);
        change
    }

    /// Empty all three buffers
    pub fn clear(&mut self) {
        self.name.clear();
        self.price_text.clear();
        self.quantity_text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.price_text.is_empty() && self.quantity_text.is_empty()
    }
}

/// Values parsed from the form at submit time
///
/// Unparsable numbers are represented as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProduct {
    pub name: String,
    pub price: f32,
    pub quantity: i32,
}

/// Result of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Error,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::Error => write!(f, "error"),
        }
    }
}
