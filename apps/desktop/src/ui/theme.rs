//! Theme and styling for the Cadastro desktop app
//!
//! Colors follow a plain Material look: gray header blocks with white text,
//! a white drawer sheet, and a purple primary color for actions. All style
//! helpers return Iced 0.13 style closures.

use iced::{
    widget::{button, container, svg, text_input},
    Background, Border, Color, Shadow, Theme,
};

/// Embedded hamburger icon for the top bar
pub const MENU_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/menu.svg");

pub fn menu_icon() -> svg::Handle {
    svg::Handle::from_memory(MENU_ICON_SVG)
}

/// Primary action color (#6750A4)
pub const PRIMARY_PURPLE: Color = Color::from_rgb(0.404, 0.314, 0.643);

/// Primary hover state
pub const PRIMARY_PURPLE_HOVER: Color = Color::from_rgb(0.35, 0.27, 0.57);

/// Primary pressed state
pub const PRIMARY_PURPLE_PRESSED: Color = Color::from_rgb(0.30, 0.23, 0.50);

/// Primary with low opacity for hover backgrounds
pub const PRIMARY_PURPLE_LIGHT: Color = Color::from_rgba(0.404, 0.314, 0.643, 0.1);

/// Primary with medium opacity for pressed backgrounds
pub const PRIMARY_PURPLE_MEDIUM: Color = Color::from_rgba(0.404, 0.314, 0.643, 0.2);

/// Header block gray (#888888)
pub const HEADER_GRAY: Color = Color::from_rgb(0.533, 0.533, 0.533);

/// Top app bar surface
pub const TOP_BAR_SURFACE: Color = Color::from_rgb(0.996, 0.969, 1.0);

pub const SUCCESS_GREEN: Color = Color::from_rgb(0.024, 0.839, 0.627);

pub const ERROR_RED: Color = Color::from_rgb(0.702, 0.149, 0.118);

/// Window background
pub const LIGHT_BACKGROUND: Color = Color::from_rgb(0.996, 0.969, 1.0);

pub const DARK_TEXT: Color = Color::from_rgb(0.114, 0.106, 0.125);

pub const WHITE: Color = Color::WHITE;

pub const TRANSPARENT: Color = Color::TRANSPARENT;

/// Dims the content behind the drawer and dialogs
pub const SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.32);

pub const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.15);

pub const DISABLED_BACKGROUND: Color = Color::from_rgb(0.8, 0.8, 0.8);

pub const DISABLED_TEXT: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Filled text field background
pub const FIELD_FILL: Color = Color::from_rgb(0.906, 0.878, 0.925);

pub const FIELD_INDICATOR: Color = Color::from_rgb(0.286, 0.271, 0.310);

pub const MEDIUM_GRAY: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Creates the Cadastro theme
pub fn create_cadastro_theme() -> Theme {
    Theme::custom(
        "Cadastro".to_string(),
        iced::theme::Palette {
            background: LIGHT_BACKGROUND,
            text: DARK_TEXT,
            primary: PRIMARY_PURPLE,
            success: SUCCESS_GREEN,
            danger: ERROR_RED,
        },
    )
}

/// Button style functions
pub mod button_styles {
    use super::*;

    /// Filled primary button
    pub fn primary() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| {
            let (background, shadow_offset) = match status {
                button::Status::Active => (PRIMARY_PURPLE, 2.0),
                button::Status::Hovered => (PRIMARY_PURPLE_HOVER, 2.0),
                button::Status::Pressed => (PRIMARY_PURPLE_PRESSED, 1.0),
                button::Status::Disabled => {
                    return button::Style {
                        background: Some(Background::Color(DISABLED_BACKGROUND)),
                        text_color: DISABLED_TEXT,
                        border: Border {
                            radius: utils::pill_radius().into(),
                            ..Border::default()
                        },
                        shadow: Shadow::default(),
                    }
                }
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color: WHITE,
                border: Border {
                    color: background,
                    width: 0.0,
                    radius: utils::pill_radius().into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: iced::Vector::new(0.0, shadow_offset),
                    blur_radius: 2.0 * shadow_offset,
                },
            }
        }
    }

    /// Text-only button used for dialog confirmations
    pub fn text_action() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| {
            let background = match status {
                button::Status::Active | button::Status::Disabled => TRANSPARENT,
                button::Status::Hovered => PRIMARY_PURPLE_LIGHT,
                button::Status::Pressed => PRIMARY_PURPLE_MEDIUM,
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color: PRIMARY_PURPLE,
                border: Border {
                    radius: utils::pill_radius().into(),
                    ..Border::default()
                },
                shadow: Shadow::default(),
            }
        }
    }

    /// Full-width drawer entry
    pub fn drawer_item() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| {
            let background = match status {
                button::Status::Active | button::Status::Disabled => TRANSPARENT,
                button::Status::Hovered => PRIMARY_PURPLE_LIGHT,
                button::Status::Pressed => PRIMARY_PURPLE_MEDIUM,
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color: DARK_TEXT,
                border: Border {
                    radius: utils::border_radius().into(),
                    ..Border::default()
                },
                shadow: Shadow::default(),
            }
        }
    }

    /// Round icon button in the top bar
    pub fn icon() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| {
            let background = match status {
                button::Status::Active | button::Status::Disabled => TRANSPARENT,
                button::Status::Hovered => PRIMARY_PURPLE_LIGHT,
                button::Status::Pressed => PRIMARY_PURPLE_MEDIUM,
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color: DARK_TEXT,
                border: Border {
                    radius: utils::pill_radius().into(),
                    ..Border::default()
                },
                shadow: Shadow::default(),
            }
        }
    }
}

/// Text input style functions
pub mod text_input_styles {
    use super::*;

    /// Filled field with a bottom-heavy indicator
    pub fn filled() -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
        |_theme, status| {
            let (indicator, width) = match status {
                text_input::Status::Active => (FIELD_INDICATOR, 1.0),
                text_input::Status::Hovered => (DARK_TEXT, 1.0),
                text_input::Status::Focused => (PRIMARY_PURPLE, 2.0),
                text_input::Status::Disabled => (DISABLED_TEXT, 1.0),
            };

            text_input::Style {
                background: Background::Color(FIELD_FILL),
                border: Border {
                    color: indicator,
                    width,
                    radius: 4.0.into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DARK_TEXT,
                selection: PRIMARY_PURPLE_MEDIUM,
            }
        }
    }
}

/// Container style functions
pub mod container_styles {
    use super::*;

    /// Gray rounded block with white text, used for section headers
    pub fn header_block() -> impl Fn(&Theme) -> container::Style {
        |_theme| container::Style {
            text_color: Some(WHITE),
            background: Some(Background::Color(HEADER_GRAY)),
            border: Border {
                radius: utils::border_radius().into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
        }
    }

    pub fn top_bar() -> impl Fn(&Theme) -> container::Style {
        |_theme| container::Style {
            text_color: Some(DARK_TEXT),
            background: Some(Background::Color(TOP_BAR_SURFACE)),
            border: Border::default(),
            shadow: Shadow::default(),
        }
    }

    /// Drawer sheet
    pub fn drawer_sheet() -> impl Fn(&Theme) -> container::Style {
        |_theme| container::Style {
            text_color: Some(DARK_TEXT),
            background: Some(Background::Color(WHITE)),
            border: Border::default(),
            shadow: Shadow {
                color: SHADOW_COLOR,
                offset: iced::Vector::new(2.0, 0.0),
                blur_radius: 8.0,
            },
        }
    }

    /// Alert dialog card
    pub fn dialog() -> impl Fn(&Theme) -> container::Style {
        |_theme| container::Style {
            text_color: Some(DARK_TEXT),
            background: Some(Background::Color(LIGHT_BACKGROUND)),
            border: Border {
                radius: 28.0.into(),
                ..Border::default()
            },
            shadow: Shadow {
                color: SHADOW_COLOR,
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
        }
    }

    /// Translucent backdrop scaled by `opacity` (0 to 1)
    pub fn scrim(opacity: f32) -> impl Fn(&Theme) -> container::Style {
        move |_theme| container::Style {
            background: Some(Background::Color(Color {
                a: SCRIM.a * opacity.clamp(0.0, 1.0),
                ..SCRIM
            })),
            ..container::Style::default()
        }
    }
}

/// Spacing, padding and typography helpers
pub mod utils {
    use iced::Padding;

    pub fn standard_spacing() -> u16 {
        16
    }

    /// Padding around each form label and field
    pub fn field_padding() -> Padding {
        Padding::from(8)
    }

    pub fn text_input_padding() -> Padding {
        Padding::from([12, 16])
    }

    pub fn field_width() -> f32 {
        280.0
    }

    pub fn button_padding() -> Padding {
        Padding::from([10, 24])
    }

    pub fn header_block_padding() -> Padding {
        Padding::from(16)
    }

    pub fn drawer_item_padding() -> Padding {
        Padding::from(16)
    }

    pub fn top_bar_padding() -> Padding {
        Padding::from([8, 4])
    }

    /// Padding around the routed screen
    pub fn content_padding() -> Padding {
        Padding::from(16)
    }

    pub fn dialog_padding() -> Padding {
        Padding::from(24)
    }

    pub fn border_radius() -> f32 {
        8.0
    }

    pub fn pill_radius() -> f32 {
        20.0
    }

    /// Width of the product form header block
    pub fn header_block_width() -> f32 {
        260.0
    }

    pub fn top_bar_height() -> f32 {
        64.0
    }

    /// Typography utilities for consistent font sizing
    pub mod typography {
        use std::sync::OnceLock;

        static FONT_SIZE: OnceLock<f32> = OnceLock::new();

        /// Initialize the global font size
        pub fn init_font_size(size: f32) {
            let _ = FONT_SIZE.set(size);
        }

        /// Get the base font size, defaulting to 14.0 if not set
        fn base_font_size() -> f32 {
            *FONT_SIZE.get().unwrap_or(&14.0)
        }

        pub fn normal_text_size() -> f32 {
            base_font_size()
        }

        pub fn text_input_size() -> f32 {
            base_font_size() + 2.0
        }

        /// Drawer items and body text of dialogs
        pub fn body_large_size() -> f32 {
            base_font_size() + 2.0
        }

        pub fn title_size() -> f32 {
            base_font_size() + 8.0
        }

        /// Top bar title
        pub fn top_bar_title_size() -> f32 {
            base_font_size() + 8.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrim_opacity_is_clamped() {
        let theme = create_cadastro_theme();

        let full = container_styles::scrim(2.0)(&theme);
        assert_eq!(full.background, Some(Background::Color(SCRIM)));

        let none = container_styles::scrim(-1.0)(&theme);
        assert_eq!(
            none.background,
            Some(Background::Color(Color { a: 0.0, ..SCRIM }))
        );
    }

    #[test]
    fn test_primary_button_states() {
        let theme = create_cadastro_theme();
        let style = button_styles::primary();

        assert_eq!(
            style(&theme, button::Status::Active).background,
            Some(Background::Color(PRIMARY_PURPLE))
        );
        assert_eq!(
            style(&theme, button::Status::Disabled).text_color,
            DISABLED_TEXT
        );
    }

    #[test]
    fn test_focused_field_uses_primary_indicator() {
        let theme = create_cadastro_theme();
        let style = text_input_styles::filled()(&theme, text_input::Status::Focused);
        assert_eq!(style.border.color, PRIMARY_PURPLE);
        assert_eq!(style.border.width, 2.0);
    }

    #[test]
    fn test_typography_scale() {
        use utils::typography::*;
        assert!(title_size() > body_large_size());
        assert!(body_large_size() >= normal_text_size());
    }
}
