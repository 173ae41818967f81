//! Reusable button components
//!
//! Pre-configured buttons built on the shared theme so every screen and
//! overlay gets the same look.

use iced::{
    widget::{button, svg, text},
    Element, Length,
};

use crate::ui::theme::{button_styles, utils};

/// Filled primary action button
pub fn primary_button<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let mut btn = button(text(label).size(utils::typography::normal_text_size()))
        .padding(utils::button_padding())
        .style(button_styles::primary());

    if let Some(message) = on_press {
        btn = btn.on_press(message);
    }

    btn.into()
}

/// Text-only button for dialog confirmations
pub fn text_button<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Message,
) -> Element<'a, Message> {
    button(text(label).size(utils::typography::normal_text_size()))
        .padding(utils::button_padding())
        .style(button_styles::text_action())
        .on_press(on_press)
        .into()
}

/// Square icon button, 48px hit target with a 24px glyph
pub fn icon_button<'a, Message: Clone + 'a>(
    icon: svg::Handle,
    on_press: Message,
) -> Element<'a, Message> {
    button(
        svg(icon)
            .width(Length::Fixed(24.0))
            .height(Length::Fixed(24.0)),
    )
    .padding(12)
    .style(button_styles::icon())
    .on_press(on_press)
    .into()
}
