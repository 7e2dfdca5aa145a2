//! Catalog type definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A runnable command shown in the menu.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    name: String,
    command: String,
    description: String,
}

impl CommandEntry {
    /// Create a new command entry.
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            description: description.into(),
        }
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the shell command string.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("command", &self.command)
            .field("description", &self.description)
            .finish()
    }
}

impl fmt::Display for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.command)
    }
}

/// The ordered list of commands for one project.
///
/// Entry order is display order. Names are not unique: detectors may emit
/// entries with the same name and all of them are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "projectName")]
    project_label: String,
    #[serde(rename = "commands", default)]
    entries: Vec<CommandEntry>,
}

impl Catalog {
    /// Create an empty catalog for a project.
    pub fn new(project_label: impl Into<String>) -> Self {
        Self {
            project_label: project_label.into(),
            entries: Vec::new(),
        }
    }

    /// Create a catalog from existing entries.
    pub fn with_entries(project_label: impl Into<String>, entries: Vec<CommandEntry>) -> Self {
        Self {
            project_label: project_label.into(),
            entries,
        }
    }

    /// Get the project label.
    pub fn project_label(&self) -> &str {
        &self.project_label
    }

    /// Append entries in order.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = CommandEntry>) {
        self.entries.extend(entries);
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by position.
    pub fn get(&self, index: usize) -> Option<&CommandEntry> {
        self.entries.get(index)
    }

    /// Find the first entry with the given name.
    pub fn find(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    /// Get the entries as a slice.
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Get entry names in order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name()).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CommandEntry;
    type IntoIter = std::slice::Iter<'a, CommandEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
