//! Selection state machine.
//!
//! The controller knows nothing about terminals. It consumes abstract [`Key`]s,
//! answers with an optional [`Effect`] for the driver to perform, and describes
//! what to draw as a [`View`].

use crate::catalog::Catalog;
use crate::error::DxError;

/// Message shown once the user quits.
pub const FAREWELL: &str = "Bye!";

/// Footer hint while browsing.
pub const QUIT_HINT: &str = "Press q to quit.";

/// Footer shown when the catalog has no entries.
pub const EMPTY_HINT: &str = "No commands detected";

/// Abstract keys understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Quit,
    Up,
    Down,
    Confirm,
    First,
    Last,
    Other,
}

/// Lifecycle phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Cursor over the catalog.
    Browsing,
    /// The user quit; terminal.
    Quitting,
    /// Loading failed; terminal.
    Erred { message: String, exit_code: i32 },
}

/// A command the driver should hand the terminal to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub name: String,
    pub command: String,
}

/// Work the driver performs on behalf of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Stop the event loop.
    Quit,
    /// Suspend the UI, run the command, resume.
    Run(RunRequest),
}

/// One menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub selected: bool,
    pub name: String,
    pub description: String,
}

/// Render model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Menu {
        header: String,
        items: Vec<MenuItem>,
        footer: String,
    },
    Farewell(String),
    Error(String),
}

/// Cursor and phase over a read-only catalog.
#[derive(Debug, Clone)]
pub struct Controller {
    catalog: Catalog,
    cursor: usize,
    phase: Phase,
}

impl Controller {
    /// Start browsing `catalog` with the cursor on the first entry.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cursor: 0,
            phase: Phase::Browsing,
        }
    }

    /// Start in the error phase.
    pub fn erred(error: &DxError) -> Self {
        Self {
            catalog: Catalog::default(),
            cursor: 0,
            phase: Phase::Erred {
                message: error.to_string(),
                exit_code: error.exit_code(),
            },
        }
    }

    /// Build from a load result.
    pub fn from_load(result: Result<Catalog, DxError>) -> Self {
        match result {
            Ok(catalog) => Self::new(catalog),
            Err(e) => Self::erred(&e),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Process one key.
    pub fn handle(&mut self, key: Key) -> Option<Effect> {
        match self.phase {
            Phase::Quitting => None,
            Phase::Erred { .. } => (key == Key::Quit).then_some(Effect::Quit),
            Phase::Browsing => self.browse(key),
        }
    }

    fn browse(&mut self, key: Key) -> Option<Effect> {
        let last = self.catalog.len().saturating_sub(1);

        match key {
            Key::Quit => {
                self.phase = Phase::Quitting;
                return Some(Effect::Quit);
            }
            Key::Up => self.cursor = self.cursor.saturating_sub(1),
            Key::Down => {
                if self.cursor < last {
                    self.cursor += 1;
                }
            }
            Key::First => self.cursor = 0,
            Key::Last => self.cursor = last,
            Key::Confirm => {
                return self.catalog.get(self.cursor).map(|entry| {
                    Effect::Run(RunRequest {
                        name: entry.name().to_string(),
                        command: entry.command().to_string(),
                    })
                });
            }
            Key::Other => {}
        }

        None
    }

    /// Describe what to draw.
    pub fn view(&self) -> View {
        match &self.phase {
            Phase::Quitting => View::Farewell(FAREWELL.to_string()),
            Phase::Erred { message, .. } => View::Error(message.clone()),
            Phase::Browsing => {
                let items: Vec<MenuItem> = self
                    .catalog
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| MenuItem {
                        selected: i == self.cursor,
                        name: entry.name().to_string(),
                        description: entry.description().to_string(),
                    })
                    .collect();

                let footer = if items.is_empty() {
                    EMPTY_HINT
                } else {
                    QUIT_HINT
                };

                View::Menu {
                    header: self.catalog.project_label().to_string(),
                    items,
                    footer: footer.to_string(),
                }
            }
        }
    }

    /// Process exit code: zero unless loading failed.
    pub fn exit_code(&self) -> i32 {
        match &self.phase {
            Phase::Erred { exit_code, .. } => *exit_code,
            _ => 0,
        }
    }
}
