//! Product validation for Cadastro
//!
//! Submission parses the price and quantity buffers and checks three
//! conditions. Anything that fails (including numbers that do not parse,
//! which degrade to zero) is a single [`ValidationFailure`].

use std::fmt;

use thiserror::Error;

use crate::models::{ParsedProduct, ProductFields};

/// A check that a submitted product did not pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    /// Name is empty
    EmptyName,
    /// Parsed price is zero, negative, NaN, or did not parse
    NonPositivePrice,
    /// Parsed quantity is zero, negative, or did not parse
    NonPositiveQuantity,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::EmptyName => write!(f, "name is empty"),
            FieldIssue::NonPositivePrice => write!(f, "price is not greater than zero"),
            FieldIssue::NonPositiveQuantity => write!(f, "quantity is not greater than zero"),
        }
    }
}

/// The only error the product form can produce
///
/// The failed checks are kept for logging; the user always sees the same
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Por favor, preencha todos os campos corretamente")]
pub struct ValidationFailure {
    issues: Vec<FieldIssue>,
}

impl ValidationFailure {
    /// Message shown to the user for any validation failure
    pub const USER_MESSAGE: &'static str = "Por favor, preencha todos os campos corretamente";

    /// Checks that failed, in field order
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn has_issue(&self, issue: FieldIssue) -> bool {
        self.issues.contains(&issue)
    }
}

/// Replace every comma with a period
pub fn normalize_decimal_separator(text: &str) -> String {
    text.replace(',', ".")
}

/// Parse a price buffer, substituting `0.0` when it does not parse
pub fn parse_price(text: &str) -> f32 {
    normalize_decimal_separator(text)
        .parse::<f32>()
        .unwrap_or(0.0)
}

/// Parse a quantity buffer, substituting `0` when it does not parse or overflows
pub fn parse_quantity(text: &str) -> i32 {
    text.parse::<i32>().unwrap_or(0)
}

/// Parse the three raw submission values
pub fn parse_product(name: &str, price_text: &str, quantity_text: &str) -> ParsedProduct {
    ParsedProduct {
        name: name.to_string(),
        price: parse_price(price_text),
        quantity: parse_quantity(quantity_text),
    }
}

/// Parse the current form buffers
pub fn parse_fields(fields: &ProductFields) -> ParsedProduct {
    parse_product(fields.name(), fields.price_text(), fields.quantity_text())
}

/// Validate a parsed product
///
/// Valid iff the name is non-empty, the price is strictly positive and the
/// quantity is strictly positive.
pub fn validate_product(product: &ParsedProduct) -> Result<(), ValidationFailure> {
    let mut issues = Vec::new();

    if product.name.is_empty() {
        issues.push(FieldIssue::EmptyName);
    }
    // NaN compares false, so it fails here too
    if !(product.price > 0.0) {
        issues.push(FieldIssue::NonPositivePrice);
    }
    if product.quantity <= 0 {
        issues.push(FieldIssue::NonPositiveQuantity);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { issues })
    }
}

/// Parse and validate raw submission values in one step
pub fn check_submission(
    name: &str,
    price_text: &str,
    quantity_text: &str,
) -> Result<ParsedProduct, ValidationFailure> {
    let product = parse_product(name, price_text, quantity_text);
    validate_product(&product)?;
    Ok(product)
}
