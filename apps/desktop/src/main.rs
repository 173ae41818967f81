//! Cadastro Desktop App
//!
//! Desktop front end for Cadastro, built with the Iced GUI framework. A top
//! app bar opens a navigation drawer that routes between the product form and
//! the client form.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use iced::{
    keyboard::{self, key::Named, Key},
    widget::{center, column, container, row, stack, text},
    window, Alignment, Element, Length, Size, Subscription, Task, Theme,
};
use tracing::{debug, info};

mod config;
mod logging;
mod ui;

use cadastro_shared::{AppConfig, Destination, NavigationShell, ShellAction, UiConfig};
use ui::components::{button::icon_button, drawer_overlay, modal};
use ui::theme::{self, container_styles};
use ui::views::{ClientFormView, ProductFormMessage, ProductFormView};
use ui::{create_cadastro_theme, utils};

/// Frame interval while the drawer is moving
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Main application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Shell
    OpenDrawer,
    CloseDrawer,
    SelectDestination(Destination),
    /// Escape key: dismiss a dialog, else close the drawer, else pop
    Back,
    DrawerTick(Instant),

    // Screens
    ProductForm(ProductFormMessage),
}

/// Screen mounted for the current back stack entry
#[derive(Debug)]
enum Screen {
    ProductForm(ProductFormView),
    ClientForm(ClientFormView),
}

impl Screen {
    /// Fresh screen for `destination`
    fn mount(destination: Destination) -> Self {
        match destination {
            Destination::ProductForm => Screen::ProductForm(ProductFormView::new()),
            Destination::ClientForm => Screen::ClientForm(ClientFormView::new()),
        }
    }

    fn product_form(&self) -> Option<&ProductFormView> {
        match self {
            Screen::ProductForm(view) => Some(view),
            Screen::ClientForm(_) => None,
        }
    }
}

/// Application root: owns the navigation shell and the mounted screen
pub struct CadastroApp {
    shell: NavigationShell,
    screen: Screen,
    mounted_entry: u64,
    ui_config: UiConfig,
    theme: Theme,
    last_tick: Option<Instant>,
}

impl CadastroApp {
    fn new(config: AppConfig) -> Self {
        let shell = NavigationShell::with_drawer_animation(config.ui.drawer_animation());
        let entry = shell.current_entry();
        info!("Starting on {}", entry.destination);

        Self {
            shell,
            screen: Screen::mount(entry.destination),
            mounted_entry: entry.id,
            ui_config: config.ui,
            theme: create_cadastro_theme(),
            last_tick: None,
        }
    }

    fn title(&self) -> String {
        "Meu App".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenDrawer => {
                self.apply(ShellAction::OpenDrawer);
                Task::none()
            }
            Message::CloseDrawer => {
                self.apply(ShellAction::CloseDrawer);
                Task::none()
            }
            Message::SelectDestination(destination) => {
                self.apply(ShellAction::SelectFromDrawer(destination));
                Task::none()
            }
            Message::Back => {
                if let Screen::ProductForm(view) = &mut self.screen {
                    if let Some(kind) = view.state().visible_dialog() {
                        debug!("Back dismisses the {:?} dialog", kind);
                        return view
                            .update(ProductFormMessage::DismissDialog(kind))
                            .map(Message::ProductForm);
                    }
                }
                self.apply(ShellAction::Back);
                Task::none()
            }
            Message::DrawerTick(now) => {
                let elapsed = self
                    .last_tick
                    .map(|last| now.saturating_duration_since(last))
                    .unwrap_or_default();
                self.last_tick = Some(now);
                self.apply(ShellAction::AnimationTick(elapsed));
                Task::none()
            }
            Message::ProductForm(message) => match &mut self.screen {
                Screen::ProductForm(view) => view.update(message).map(Message::ProductForm),
                // Late message from a screen that is no longer mounted
                Screen::ClientForm(_) => Task::none(),
            },
        }
    }

    /// Feed an action to the shell and remount the screen if the entry changed
    fn apply(&mut self, action: ShellAction) {
        let was_animating = self.shell.drawer().is_animating();
        let shell = std::mem::take(&mut self.shell);
        self.shell = shell.reduce(action);

        let animating = self.shell.drawer().is_animating();
        if animating && !was_animating {
            self.last_tick = Some(Instant::now());
        } else if !animating {
            self.last_tick = None;
        }

        let entry = self.shell.current_entry();
        if entry.id != self.mounted_entry {
            info!(
                destination = %entry.destination,
                entry = entry.id,
                "Mounting screen"
            );
            self.screen = Screen::mount(entry.destination);
            self.mounted_entry = entry.id;
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let top_bar = container(
            row![
                icon_button(theme::menu_icon(), Message::OpenDrawer),
                text("Meu App").size(utils::typography::top_bar_title_size()),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(utils::top_bar_height()))
        .padding(utils::top_bar_padding())
        .style(container_styles::top_bar());

        let screen: Element<'_, Message> = match &self.screen {
            Screen::ProductForm(view) => view.view().map(Message::ProductForm),
            Screen::ClientForm(view) => view.view(),
        };

        let base = column![top_bar, center(screen).padding(utils::content_padding())];

        let mut layers = stack![base].width(Length::Fill).height(Length::Fill);
        if let Some(drawer) = drawer_overlay(
            self.shell.drawer(),
            self.ui_config.drawer_width,
            Message::SelectDestination,
            Message::CloseDrawer,
        ) {
            layers = layers.push(drawer);
        }

        match self.screen.product_form().and_then(ProductFormView::dialog) {
            Some((dialog, dismiss)) => modal(
                layers,
                dialog.map(Message::ProductForm),
                Message::ProductForm(dismiss),
            ),
            None => layers.into(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(Named::Escape) => Some(Message::Back),
            _ => None,
        });

        if self.shell.drawer().is_animating() {
            Subscription::batch([
                keys,
                iced::time::every(ANIMATION_FRAME).map(Message::DrawerTick),
            ])
        } else {
            keys
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::initialize_logging(logging::resolve_logging_config(args.debug)) {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    info!("Starting Cadastro v{}", cadastro_shared::VERSION);

    let app_config = config::load_config(args.config.as_deref())?;
    utils::typography::init_font_size(app_config.ui.font_size);

    let (width, height) = app_config.ui.window_size();
    let window_settings = window::Settings {
        size: Size::new(width as f32, height as f32),
        min_size: Some(Size::new(320.0, 480.0)),
        position: window::Position::Centered,
        ..Default::default()
    };

    iced::application(CadastroApp::title, CadastroApp::update, CadastroApp::view)
        .theme(CadastroApp::theme)
        .subscription(CadastroApp::subscription)
        .window(window_settings)
        .antialiasing(true)
        .run_with(move || (CadastroApp::new(app_config), Task::none()))
        .context("Application terminated with an error")?;

    info!("Cadastro exited");
    Ok(())
}
