//! Modal dialogs raised by form submission

use serde::{Deserialize, Serialize};

/// The two dialogs the product form can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogKind {
    Error,
    Success,
}

impl DialogKind {
    pub fn title(&self) -> &'static str {
        match self {
            DialogKind::Error => "Erro",
            DialogKind::Success => "Sucesso",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            DialogKind::Error => "Por favor, preencha todos os campos corretamente",
            DialogKind::Success => "Formulário enviado com sucesso",
        }
    }

    /// Label of the single confirm button
    pub fn confirm_label(&self) -> &'static str {
        match self {
            DialogKind::Error => "Ok",
            DialogKind::Success => "OK",
        }
    }
}

/// Visibility flags of both dialogs
///
/// After any submission at most one flag is set. Dismissing clears only the
/// dismissed dialog's flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogFlags {
    error_visible: bool,
    success_visible: bool,
}

impl DialogFlags {
    /// Flags after a failed submission
    pub fn error() -> Self {
        Self {
            error_visible: true,
            success_visible: false,
        }
    }

    /// Flags after a successful submission
    pub fn success() -> Self {
        Self {
            error_visible: false,
            success_visible: true,
        }
    }

    pub fn is_visible(&self, kind: DialogKind) -> bool {
        match kind {
            DialogKind::Error => self.error_visible,
            DialogKind::Success => self.success_visible,
        }
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Hide one dialog, leaving the other untouched
    pub fn dismiss(&mut self, kind: DialogKind) {
        match kind {
            DialogKind::Error => self.error_visible = false,
            DialogKind::Success => self.success_visible = false,
        }
    }

    /// The dialog currently on screen, if any
    pub fn visible(&self) -> Option<DialogKind> {
        if self.error_visible {
            Some(DialogKind::Error)
        } else if self.success_visible {
            Some(DialogKind::Success)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_texts() {
        assert_eq!(DialogKind::Error.title(), "Erro");
        assert_eq!(
            DialogKind::Error.body(),
            "Por favor, preencha todos os campos corretamente"
        );
        assert_eq!(DialogKind::Error.confirm_label(), "Ok");
        assert_eq!(DialogKind::Success.title(), "Sucesso");
        assert_eq!(DialogKind::Success.body(), "Formulário enviado com sucesso");
        assert_eq!(DialogKind::Success.confirm_label(), "OK");
    }

    #[test]
    fn test_error_body_matches_validation_message() {
        assert_eq!(
            DialogKind::Error.body(),
            crate::validation::ValidationFailure::USER_MESSAGE
        );
    }

    #[test]
    fn test_dismiss_only_touches_own_flag() {
        let mut flags = DialogFlags::error();
        flags.dismiss(DialogKind::Success);
        assert!(flags.error_visible());

        flags.dismiss(DialogKind::Error);
        assert_eq!(flags, DialogFlags::default());
        assert_eq!(flags.visible(), None);
    }

    #[test]
    fn test_constructors_are_exclusive() {
        assert_eq!(DialogFlags::error().visible(), Some(DialogKind::Error));
        assert_eq!(DialogFlags::success().visible(), Some(DialogKind::Success));
        assert!(!DialogFlags::success().is_visible(DialogKind::Error));
    }
}
