//! Command definitions
//!
//! Represents requests typed at the interactive prompt.

use std::path::PathBuf;

use crate::error::{Result, StaffError};

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Prompt for a worker and add it
    Add,

    /// Print the table of all workers
    List,

    /// Print workers with at least `period` years of tenure
    Select { period: i32 },

    /// Replace the workers with the contents of a file
    Load { path: PathBuf },

    /// Write the workers to a file
    Save { path: PathBuf },

    /// Print the command reference
    Help,

    /// Leave the shell
    Exit,
}

impl Command {
    /// Parse one input line
    ///
    /// The keyword is case-insensitive, its argument is kept verbatim.
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, Some(rest.trim())),
            None => (line, None),
        };

        let command = match (keyword.to_lowercase().as_str(), argument) {
            ("add", None) => Command::Add,
            ("list", None) => Command::List,
            ("help", None) => Command::Help,
            ("exit", None) => Command::Exit,
            ("select", Some(period)) => {
                let period = period.parse::<i32>().map_err(|_| {
                    StaffError::InvalidInput(format!("tenure `{}` is not an integer", period))
                })?;
                Command::Select { period }
            }
            ("load", Some(path)) => Command::Load {
                path: PathBuf::from(path),
            },
            ("save", Some(path)) => Command::Save {
                path: PathBuf::from(path),
            },
            _ => return Err(StaffError::UnknownCommand(line.to_string())),
        };

        Ok(Some(command))
    }

    /// Keyword that introduces the command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::List => "list",
            Command::Select { .. } => "select",
            Command::Load { .. } => "load",
            Command::Save { .. } => "save",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}
