//! Modal navigation drawer
//!
//! The sheet slides in from the left as the drawer progresses. The rest of
//! the window is covered by a scrim whose opacity follows the same progress;
//! clicking it dismisses the drawer.

use iced::{
    widget::{button, column, container, mouse_area, opaque, row, text, Column, Space},
    Element, Length,
};

use cadastro_shared::{Destination, DrawerState};

use crate::ui::theme::{button_styles, container_styles, utils};

/// Drawer overlay, or `None` when the drawer is fully closed
pub fn drawer_overlay<'a, Message: Clone + 'a>(
    drawer: &DrawerState,
    sheet_width: f32,
    on_select: impl Fn(Destination) -> Message,
    on_dismiss: Message,
) -> Option<Element<'a, Message>> {
    if !drawer.is_visible() {
        return None;
    }

    let progress = drawer.eased_progress();

    let sheet = container(drawer_sheet(on_select))
        .width(Length::Fixed(sheet_width * progress))
        .height(Length::Fill)
        .clip(true)
        .style(container_styles::drawer_sheet());

    let scrim = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(container_styles::scrim(progress)),
    )
    .on_press(on_dismiss);

    Some(opaque(row![sheet, scrim]))
}

/// Header block followed by one item per destination
fn drawer_sheet<'a, Message: Clone + 'a>(
    on_select: impl Fn(Destination) -> Message,
) -> Element<'a, Message> {
    let header = container(
        text("Formulários")
            .size(utils::typography::title_size())
            .width(Length::Fill),
    )
    .padding(utils::header_block_padding())
    .style(container_styles::header_block());

    let items = Destination::ALL.into_iter().map(|destination| {
        button(text(destination.drawer_label()).size(utils::typography::body_large_size()))
            .width(Length::Fill)
            .padding(utils::drawer_item_padding())
            .style(button_styles::drawer_item())
            .on_press(on_select(destination))
            .into()
    });

    column![
        container(header).padding(utils::header_block_padding()),
        Space::with_height(Length::Fixed(8.0)),
        Column::with_children(items),
    ]
    .width(Length::Fill)
    .into()
}
