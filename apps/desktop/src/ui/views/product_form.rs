use iced::{
    alignment::Horizontal,
    widget::{checkbox, column, container, row, text, text_input, Space},
    Alignment, Element, Length, Task,
};
use tracing::debug;

use cadastro_shared::{DialogKind, ProductFormAction, ProductFormState};

use crate::ui::components::{alert_dialog, button::primary_button};
use crate::ui::theme::{container_styles, text_input_styles, utils};

#[derive(Debug, Clone, PartialEq)]
pub enum ProductFormMessage {
    NameChanged(String),
    PriceChanged(String),
    QuantityChanged(String),
    NotifyCustomersToggled(bool),
    NotifyCollaboratorsToggled(bool),
    Submit,
    /// Confirm button or scrim click on a dialog
    DismissDialog(DialogKind),
}

impl From<ProductFormMessage> for ProductFormAction {
    fn from(message: ProductFormMessage) -> Self {
        match message {
            ProductFormMessage::NameChanged(value) => ProductFormAction::NameChanged(value),
            ProductFormMessage::PriceChanged(value) => ProductFormAction::PriceChanged(value),
            ProductFormMessage::QuantityChanged(value) => {
                ProductFormAction::QuantityChanged(value)
            }
            ProductFormMessage::NotifyCustomersToggled(checked) => {
                ProductFormAction::NotifyCustomersToggled(checked)
            }
            ProductFormMessage::NotifyCollaboratorsToggled(checked) => {
                ProductFormAction::NotifyCollaboratorsToggled(checked)
            }
            ProductFormMessage::Submit => ProductFormAction::Submit,
            ProductFormMessage::DismissDialog(kind) => ProductFormState::dismiss_action(kind),
        }
    }
}

/// Product registration screen
///
/// Owns a fresh [`ProductFormState`] per mount; the state is dropped when
/// the user navigates away.
#[derive(Debug, Clone, Default)]
pub struct ProductFormView {
    state: ProductFormState,
}

impl ProductFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: ProductFormMessage) -> Task<ProductFormMessage> {
        debug!("Product form message: {:?}", message);
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(message.into());
        Task::none()
    }

    pub fn state(&self) -> &ProductFormState {
        &self.state
    }

    /// Dialog to render above the whole window, if any
    pub fn dialog(&self) -> Option<(Element<'_, ProductFormMessage>, ProductFormMessage)> {
        self.state.visible_dialog().map(|kind| {
            let dismiss = ProductFormMessage::DismissDialog(kind);
            (alert_dialog(kind, dismiss.clone()), dismiss)
        })
    }

    pub fn view(&self) -> Element<'_, ProductFormMessage> {
        let header = container(
            text("Cadastro de produto")
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fixed(utils::header_block_width()))
        .padding(utils::header_block_padding())
        .style(container_styles::header_block());

        let content = column![
            header,
            Space::with_height(Length::Fixed(16.0)),
            labeled_field(
                "Digite o nome do produto:",
                self.state.name(),
                ProductFormMessage::NameChanged,
            ),
            labeled_field(
                "Digite o preço do produto:",
                self.state.price_text(),
                ProductFormMessage::PriceChanged,
            ),
            labeled_field(
                "Digite a quantidade do produto:",
                self.state.quantity_text(),
                ProductFormMessage::QuantityChanged,
            ),
            column![
                notify_row(
                    "Enviar notificação para clientes",
                    self.state.notify_customers(),
                    ProductFormMessage::NotifyCustomersToggled,
                ),
                notify_row(
                    "Enviar notificação para colaboradores",
                    self.state.notify_collaborators(),
                    ProductFormMessage::NotifyCollaboratorsToggled,
                ),
            ],
            primary_button("Enviar", Some(ProductFormMessage::Submit)),
        ];

        container(content).into()
    }
}

/// Label above a single-line field; Enter submits the form
fn labeled_field<'a>(
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> ProductFormMessage,
) -> Element<'a, ProductFormMessage> {
    column![
        container(text(label).size(utils::typography::normal_text_size()))
            .padding(utils::field_padding()),
        container(
            text_input("", value)
                .on_input(on_input)
                .on_submit(ProductFormMessage::Submit)
                .size(utils::typography::text_input_size())
                .padding(utils::text_input_padding())
                .width(Length::Fixed(utils::field_width()))
                .style(text_input_styles::filled()),
        )
        .padding(utils::field_padding()),
    ]
    .into()
}

/// Label followed by its checkbox
fn notify_row<'a>(
    label: &'a str,
    checked: bool,
    on_toggle: fn(bool) -> ProductFormMessage,
) -> Element<'a, ProductFormMessage> {
    row![
        text(label).size(utils::typography::normal_text_size()),
        checkbox("", checked).on_toggle(on_toggle),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
