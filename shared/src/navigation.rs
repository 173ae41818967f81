//! Navigation shell: destinations, back stack and the drawer
//!
//! The shell is owned by the application root. Screens never hold it; they
//! only emit messages that the root turns into [`ShellAction`]s.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Routable screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    ProductForm,
    ClientForm,
}

impl Destination {
    /// Every destination, in drawer order
    pub const ALL: [Destination; 2] = [Destination::ProductForm, Destination::ClientForm];

    /// Destination shown at startup
    pub const INITIAL: Destination = Destination::ProductForm;

    /// Stable route name
    pub fn route(&self) -> &'static str {
        match self {
            Destination::ProductForm => "product-form",
            Destination::ClientForm => "client-form",
        }
    }

    /// Label of the drawer item leading here
    pub fn drawer_label(&self) -> &'static str {
        match self {
            Destination::ProductForm => "Formulário Produto",
            Destination::ClientForm => "Formulário Cliente",
        }
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// Unknown route name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown destination: {0}")]
pub struct RouteParseError(pub String);

impl FromStr for Destination {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .into_iter()
            .find(|d| d.route() == s)
            .ok_or_else(|| RouteParseError(s.to_string()))
    }
}

/// One visit to a destination
///
/// Every navigation mints a new id, so a screen is remounted with fresh state
/// even when navigating to the destination already shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackStackEntry {
    pub id: u64,
    pub destination: Destination,
}

/// Requested drawer position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawerValue {
    Closed,
    Open,
}

/// Drawer with open/close animation
///
/// `progress` is 0 when fully closed and 1 when fully open; it moves toward
/// the target as time is fed in through [`DrawerState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawerState {
    target: DrawerValue,
    progress: f32,
    duration: Duration,
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

impl DrawerState {
    /// Closed drawer whose full sweep takes `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            target: DrawerValue::Closed,
            progress: 0.0,
            duration,
        }
    }

    pub fn open(&mut self) {
        self.target = DrawerValue::Open;
        self.settle_if_instant();
    }

    pub fn close(&mut self) {
        self.target = DrawerValue::Closed;
        self.settle_if_instant();
    }

    pub fn target(&self) -> DrawerValue {
        self.target
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress with ease-out applied, for rendering
    pub fn eased_progress(&self) -> f32 {
        let t = self.progress;
        1.0 - (1.0 - t) * (1.0 - t)
    }

    /// Whether the drawer is open or on its way there
    pub fn is_open(&self) -> bool {
        self.target == DrawerValue::Open
    }

    /// Whether any part of the drawer is on screen
    pub fn is_visible(&self) -> bool {
        self.progress > 0.0
    }

    pub fn is_animating(&self) -> bool {
        self.progress != self.target_progress()
    }

    /// Move toward the target by `elapsed`
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.is_animating() {
            return;
        }
        if self.duration.is_zero() {
            self.progress = self.target_progress();
            return;
        }

        let step = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.progress = match self.target {
            DrawerValue::Open => (self.progress + step).min(1.0),
            DrawerValue::Closed => (self.progress - step).max(0.0),
        };
    }

    fn target_progress(&self) -> f32 {
        match self.target {
            DrawerValue::Open => 1.0,
            DrawerValue::Closed => 0.0,
        }
    }

    fn settle_if_instant(&mut self) {
        if self.duration.is_zero() {
            self.progress = self.target_progress();
        }
    }
}

/// Actions handled by the shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellAction {
    OpenDrawer,
    CloseDrawer,
    NavigateTo(Destination),
    /// Drawer item click: navigate, then close the drawer
    SelectFromDrawer(Destination),
    Back,
    AnimationTick(Duration),
}

/// Root navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationShell {
    back_stack: Vec<BackStackEntry>,
    drawer: DrawerState,
    next_entry_id: u64,
}

impl Default for NavigationShell {
    fn default() -> Self {
        Self::new(DrawerState::default())
    }
}

impl NavigationShell {
    /// Shell showing the initial destination with a closed drawer
    pub fn new(drawer: DrawerState) -> Self {
        Self {
            back_stack: vec![BackStackEntry {
                id: 0,
                destination: Destination::INITIAL,
            }],
            drawer,
            next_entry_id: 1,
        }
    }

    /// Shell whose drawer sweeps in `animation`
    pub fn with_drawer_animation(animation: Duration) -> Self {
        Self::new(DrawerState::new(animation))
    }

    /// Apply one action, producing the next snapshot
    pub fn reduce(mut self, action: ShellAction) -> Self {
        match action {
            ShellAction::OpenDrawer => self.open_drawer(),
            ShellAction::CloseDrawer => self.close_drawer(),
            ShellAction::NavigateTo(destination) => self.navigate_to(destination),
            ShellAction::SelectFromDrawer(destination) => self.select_from_drawer(destination),
            ShellAction::Back => {
                self.back();
            }
            ShellAction::AnimationTick(elapsed) => self.drawer.advance(elapsed),
        }
        self
    }

    pub fn open_drawer(&mut self) {
        debug!("Opening drawer");
        self.drawer.open();
    }

    pub fn close_drawer(&mut self) {
        debug!("Closing drawer");
        self.drawer.close();
    }

    /// Push a new entry for `destination`
    pub fn navigate_to(&mut self, destination: Destination) {
        let entry = BackStackEntry {
            id: self.next_entry_id,
            destination,
        };
        self.next_entry_id += 1;
        self.back_stack.push(entry);
        debug!(
            destination = %destination,
            depth = self.back_stack.len(),
            "Navigated"
        );
    }

    pub fn select_from_drawer(&mut self, destination: Destination) {
        self.navigate_to(destination);
        self.close_drawer();
    }

    /// Close the drawer if it is open, otherwise pop the back stack
    ///
    /// The last entry is never popped. Returns whether anything changed.
    pub fn back(&mut self) -> bool {
        if self.drawer.is_open() {
            self.close_drawer();
            return true;
        }
        if self.back_stack.len() > 1 {
            self.back_stack.pop();
            debug!(destination = %self.current(), "Navigated back");
            return true;
        }
        false
    }

    /// Entry currently shown
    pub fn current_entry(&self) -> BackStackEntry {
        // The stack always holds at least the initial entry
        self.back_stack
            .last()
            .copied()
            .unwrap_or(BackStackEntry {
                id: 0,
                destination: Destination::INITIAL,
            })
    }

    pub fn current(&self) -> Destination {
        self.current_entry().destination
    }

    pub fn back_stack(&self) -> &[BackStackEntry] {
        &self.back_stack
    }

    pub fn can_go_back(&self) -> bool {
        self.back_stack.len() > 1
    }

    pub fn drawer(&self) -> &DrawerState {
        &self.drawer
    }
}
