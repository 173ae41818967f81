//! Product form store

use tracing::{debug, info};

use crate::dialog::{DialogFlags, DialogKind};
use crate::models::{InputChange, Outcome, ProductFields};
use crate::validation::{check_submission, FieldIssue};

/// Submit raw form values
///
/// Normalizes the decimal separator, parses price and quantity (unparsable
/// values become zero) and validates. On [`Outcome::Success`] the caller is
/// expected to clear the form fields.
pub fn submit(name: &str, price_text: &str, quantity_text: &str) -> Outcome {
    match check_submission(name, price_text, quantity_text) {
        Ok(product) => {
            info!(
                name = %product.name,
                price = product.price,
                quantity = product.quantity,
                "Product form submitted"
            );
            Outcome::Success
        }
        Err(failure) => {
            let issues: Vec<String> = failure.issues().iter().map(FieldIssue::to_string).collect();
            debug!(issues = ?issues, "Product form validation failed");
            info!("Product form rejected");
            Outcome::Error
        }
    }
}

/// User actions on the product form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFormAction {
    NameChanged(String),
    PriceChanged(String),
    QuantityChanged(String),
    NotifyCustomersToggled(bool),
    NotifyCollaboratorsToggled(bool),
    Submit,
    DismissError,
    DismissSuccess,
}

/// Snapshot of the product form
///
/// Only built through [`ProductFormState::new`] and [`ProductFormState::reduce`],
/// so the field buffers always satisfy their filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFormState {
    fields: ProductFields,
    /// Shared by both notification checkboxes
    notify: bool,
    dialogs: DialogFlags,
    last_outcome: Option<Outcome>,
}

impl ProductFormState {
    /// Fresh state for a newly mounted form
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action, producing the next snapshot
    pub fn reduce(mut self, action: ProductFormAction) -> Self {
        match action {
            ProductFormAction::NameChanged(name) => {
                self.fields.set_name(name);
            }
            ProductFormAction::PriceChanged(price) => {
                if let InputChange::Rejected = self.fields.set_price(price) {
                    debug!("Rejected price edit");
                }
            }
            ProductFormAction::QuantityChanged(quantity) => {
                if let InputChange::Rejected = self.fields.set_quantity(quantity) {
                    debug!("Rejected quantity edit");
                }
            }
            // Both checkboxes drive the same flag
            ProductFormAction::NotifyCustomersToggled(checked)
            | ProductFormAction::NotifyCollaboratorsToggled(checked) => {
                self.notify = checked;
            }
            ProductFormAction::Submit => {
                let outcome = submit(
                    self.fields.name(),
                    self.fields.price_text(),
                    self.fields.quantity_text(),
                );
                match outcome {
                    Outcome::Success => {
                        self.dialogs = DialogFlags::success();
                        self.fields.clear();
                    }
                    Outcome::Error => {
                        self.dialogs = DialogFlags::error();
                    }
                }
                self.last_outcome = Some(outcome);
            }
            ProductFormAction::DismissError => self.dialogs.dismiss(DialogKind::Error),
            ProductFormAction::DismissSuccess => self.dialogs.dismiss(DialogKind::Success),
        }
        self
    }

    pub fn fields(&self) -> &ProductFields {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.fields.name()
    }

    pub fn price_text(&self) -> &str {
        self.fields.price_text()
    }

    pub fn quantity_text(&self) -> &str {
        self.fields.quantity_text()
    }

    pub fn notify_customers(&self) -> bool {
        self.notify
    }

    pub fn notify_collaborators(&self) -> bool {
        self.notify
    }

    pub fn dialogs(&self) -> DialogFlags {
        self.dialogs
    }

    pub fn error_visible(&self) -> bool {
        self.dialogs.error_visible()
    }

    pub fn success_visible(&self) -> bool {
        self.dialogs.success_visible()
    }

    /// Dialog currently shown, if any
    pub fn visible_dialog(&self) -> Option<DialogKind> {
        self.dialogs.visible()
    }

    /// Outcome of the most recent submission
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Action that dismisses the given dialog
    pub fn dismiss_action(kind: DialogKind) -> ProductFormAction {
        match kind {
            DialogKind::Error => ProductFormAction::DismissError,
            DialogKind::Success => ProductFormAction::DismissSuccess,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, price: &str, quantity: &str) -> ProductFormState {
        ProductFormState::new()
            .reduce(ProductFormAction::NameChanged(name.to_string()))
            .reduce(ProductFormAction::PriceChanged(price.to_string()))
            .reduce(ProductFormAction::QuantityChanged(quantity.to_string()))
    }

    #[test]
    fn test_submit_outcomes() {
        assert_eq!(submit("Caneta", "5.00", "10"), Outcome::Success);
        assert_eq!(submit("", "5.00", "10"), Outcome::Error);
        assert_eq!(submit("Caneta", "0", "10"), Outcome::Error);
        assert_eq!(submit("Caneta", "5.00", "0"), Outcome::Error);
    }

    #[test]
    fn test_successful_submit_clears_fields() {
        let state = filled("Caneta", "5,00", "10").reduce(ProductFormAction::Submit);

        assert_eq!(state.last_outcome(), Some(Outcome::Success));
        assert!(state.success_visible());
        assert!(!state.error_visible());
        assert!(state.fields().is_empty());
    }

    #[test]
    fn test_failed_submit_keeps_fields() {
        let state = filled("Caneta", "0", "10").reduce(ProductFormAction::Submit);

        assert_eq!(state.last_outcome(), Some(Outcome::Error));
        assert!(state.error_visible());
        assert!(!state.success_visible());
        assert_eq!(state.name(), "Caneta");
        assert_eq!(state.price_text(), "0");
        assert_eq!(state.quantity_text(), "10");
    }

    #[test]
    fn test_success_after_error_replaces_dialog() {
        let state = filled("Caneta", "", "10").reduce(ProductFormAction::Submit);
        assert_eq!(state.visible_dialog(), Some(DialogKind::Error));

        // Submitting again without dismissing still leaves only one dialog
        let state = state
            .reduce(ProductFormAction::PriceChanged("2".to_string()))
            .reduce(ProductFormAction::Submit);
        assert!(state.success_visible());
        assert!(!state.error_visible());
    }

    #[test]
    fn test_dismiss_clears_only_its_flag() {
        let state = filled("", "", "").reduce(ProductFormAction::Submit);
        let state = state.reduce(ProductFormAction::DismissSuccess);
        assert!(state.error_visible());

        let state = state.reduce(ProductFormAction::DismissError);
        assert_eq!(state.visible_dialog(), None);
        // Dismissing does not touch the fields or the outcome
        assert_eq!(state.last_outcome(), Some(Outcome::Error));
    }

    #[test]
    fn test_quantity_rejects_letters() {
        let state = filled("Caneta", "1", "4").reduce(ProductFormAction::QuantityChanged(
            "4x".to_string(),
        ));
        assert_eq!(state.quantity_text(), "4");
    }

    #[test]
    fn test_price_rejects_letters() {
        let state = filled("Caneta", "1,5", "4")
            .reduce(ProductFormAction::PriceChanged("1,5e".to_string()));
        assert_eq!(state.price_text(), "1,5");
    }

    #[test]
    fn test_notify_checkboxes_share_one_flag() {
        // Known discrepancy: "notify collaborators" is bound to the same flag
        // as "notify customers", so toggling either moves both.
        let state = ProductFormState::new().reduce(ProductFormAction::NotifyCustomersToggled(true));
        assert!(state.notify_customers());
        assert!(state.notify_collaborators());

        let state = state.reduce(ProductFormAction::NotifyCollaboratorsToggled(false));
        assert!(!state.notify_customers());
        assert!(!state.notify_collaborators());
    }

    #[test]
    fn test_notify_flag_survives_submit() {
        let state = filled("Caneta", "5", "1")
            .reduce(ProductFormAction::NotifyCustomersToggled(true))
            .reduce(ProductFormAction::Submit);
        assert!(state.notify_customers());
    }

    #[test]
    fn test_dismiss_action_mapping() {
        assert_eq!(
            ProductFormState::dismiss_action(DialogKind::Error),
            ProductFormAction::DismissError
        );
        assert_eq!(
            ProductFormState::dismiss_action(DialogKind::Success),
            ProductFormAction::DismissSuccess
        );
    }
}
