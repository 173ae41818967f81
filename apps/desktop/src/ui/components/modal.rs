//! Modal overlay and alert dialog

use iced::{
    widget::{center, column, container, mouse_area, opaque, row, stack, text, Space},
    Element, Length,
};

use cadastro_shared::DialogKind;

use crate::ui::components::button::text_button;
use crate::ui::theme::{container_styles, utils};

/// Layer `content` over `base` behind a scrim
///
/// Clicks on the scrim emit `on_blur`; clicks inside `content` do not.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(container_styles::scrim(1.0)))
                .on_press(on_blur)
        )
    ]
    .into()
}

/// Alert card with a title, a body and one confirm button on the right
pub fn alert_dialog<'a, Message: Clone + 'a>(
    kind: DialogKind,
    on_confirm: Message,
) -> Element<'a, Message> {
    let content = column![
        text(kind.title()).size(utils::typography::title_size()),
        text(kind.body()).size(utils::typography::normal_text_size()),
        row![
            Space::with_width(Length::Fill),
            text_button(kind.confirm_label(), on_confirm)
        ],
    ]
    .spacing(utils::standard_spacing());

    container(content)
        .width(Length::Fixed(312.0))
        .padding(utils::dialog_padding())
        .style(container_styles::dialog())
        .into()
}
