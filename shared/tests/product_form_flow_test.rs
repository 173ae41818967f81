//! Product Form Flow Integration Test
//!
//! Drives the product form store and the navigation shell the way the GUI
//! does: one action per user event, checking the observable state after
//! each step.

use assert_matches::assert_matches;
use cadastro_shared::dialog::DialogKind;
use cadastro_shared::form::{submit, ProductFormAction, ProductFormState};
use cadastro_shared::models::Outcome;
use cadastro_shared::navigation::{Destination, NavigationShell, ShellAction};
use std::time::Duration;

fn type_into(name: &str, price: &str, quantity: &str) -> ProductFormState {
    let mut state = ProductFormState::new();
    // Type character by character, like a keyboard would
    let mut buffer = String::new();
    for c in name.chars() {
        buffer.push(c);
        state = state.reduce(ProductFormAction::NameChanged(buffer.clone()));
    }
    let mut buffer = String::new();
    for c in price.chars() {
        buffer.push(c);
        state = state.reduce(ProductFormAction::PriceChanged(buffer.clone()));
        buffer = state.price_text().to_string();
    }
    let mut buffer = String::new();
    for c in quantity.chars() {
        buffer.push(c);
        state = state.reduce(ProductFormAction::QuantityChanged(buffer.clone()));
        buffer = state.quantity_text().to_string();
    }
    state
}

#[test]
fn test_end_to_end_outcomes() {
    assert_eq!(submit("Caneta", "5.00", "10"), Outcome::Success);
    assert_eq!(submit("", "5.00", "10"), Outcome::Error);
    assert_eq!(submit("Caneta", "0", "10"), Outcome::Error);
    assert_eq!(submit("Caneta", "5.00", "0"), Outcome::Error);
}

#[test]
fn test_comma_and_period_are_equivalent() {
    assert_eq!(submit("Widget", "12,50", "3"), submit("Widget", "12.50", "3"));
    assert_eq!(submit("Widget", "0,00", "3"), submit("Widget", "0.00", "3"));
}

#[test]
fn test_unparsable_behaves_like_zero() {
    assert_eq!(submit("Widget", "abc", "3"), submit("Widget", "0", "3"));
    assert_eq!(submit("Widget", "abc", "3"), Outcome::Error);
    // Passes the character filter but still does not parse
    assert_eq!(submit("Widget", "1.2.", "3"), Outcome::Error);
    assert_eq!(submit("Widget", ",", "3"), Outcome::Error);
}

#[test]
fn test_valid_inputs_succeed_and_clear() {
    let cases = [
        ("Caneta", "5.00", "10"),
        ("Caderno", "0,01", "1"),
        ("Mochila", "199,9", "2147483647"),
        ("x", "1.", "1"),
    ];

    for (name, price, quantity) in cases {
        let state = type_into(name, price, quantity).reduce(ProductFormAction::Submit);
        assert_matches!(state.last_outcome(), Some(Outcome::Success), "{name}");
        assert!(state.fields().is_empty(), "{name}");
        assert_eq!(state.visible_dialog(), Some(DialogKind::Success));
    }
}

#[test]
fn test_invalid_inputs_fail_and_keep_fields() {
    let cases = [
        ("", "5.00", "10"),
        ("Caneta", "0", "10"),
        ("Caneta", "0,0", "10"),
        ("Caneta", "5.00", "0"),
        ("Caneta", "5.00", ""),
        ("Caneta", "", "10"),
        ("Caneta", "5.00", "2147483648"),
    ];

    for (name, price, quantity) in cases {
        let before = type_into(name, price, quantity);
        let after = before.clone().reduce(ProductFormAction::Submit);
        assert_matches!(after.last_outcome(), Some(Outcome::Error), "{name}/{price}/{quantity}");
        assert_eq!(after.fields(), before.fields());
        assert_eq!(after.visible_dialog(), Some(DialogKind::Error));
    }
}

#[test]
fn test_dialogs_never_both_visible() {
    let inputs = [
        ("Caneta", "5", "1"),
        ("", "5", "1"),
        ("Caneta", "5", "1"),
        ("Caneta", "", ""),
    ];

    let mut state = ProductFormState::new();
    for (name, price, quantity) in inputs {
        state = state
            .reduce(ProductFormAction::NameChanged(name.to_string()))
            .reduce(ProductFormAction::PriceChanged(price.to_string()))
            .reduce(ProductFormAction::QuantityChanged(quantity.to_string()))
            .reduce(ProductFormAction::Submit);
        assert!(!(state.error_visible() && state.success_visible()));
    }
}

#[test]
fn test_typing_letters_in_quantity_is_ignored() {
    let state = type_into("Caneta", "5", "1a0");
    assert_eq!(state.quantity_text(), "10");

    let state = type_into("Caneta", "R$5,5", "1");
    assert_eq!(state.price_text(), "5,5");
}

#[test]
fn test_drawer_navigation_flow() {
    let shell = NavigationShell::with_drawer_animation(Duration::from_millis(200))
        .reduce(ShellAction::OpenDrawer)
        .reduce(ShellAction::AnimationTick(Duration::from_millis(200)));
    assert!(shell.drawer().is_open());
    assert_eq!(shell.drawer().progress(), 1.0);

    let shell = shell.reduce(ShellAction::SelectFromDrawer(Destination::ClientForm));
    assert_eq!(shell.current(), Destination::ClientForm);
    assert!(!shell.drawer().is_open());
    // Still sliding out until the animation finishes
    assert!(shell.drawer().is_visible());

    let shell = shell.reduce(ShellAction::AnimationTick(Duration::from_millis(200)));
    assert!(!shell.drawer().is_visible());

    let shell = shell.reduce(ShellAction::Back);
    assert_eq!(shell.current(), Destination::ProductForm);
}
