use iced::{widget::text, Element};

use crate::ui::theme::utils;

/// Client registration screen; a placeholder with no state
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientFormView;

impl ClientFormView {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        text("Formulário Cliente")
            .size(utils::typography::normal_text_size())
            .into()
    }
}
