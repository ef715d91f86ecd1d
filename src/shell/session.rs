//! Interactive session
//!
//! Reads commands line by line, runs them against a `Staff`, and keeps
//! going after errors.

use std::io::{BufRead, Write};

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{Result, StaffError};
use crate::staff::Staff;
use crate::worker::Worker;

use super::Command;

/// Printed by `select` when nothing matches
pub const NOT_FOUND_MESSAGE: &str = "No workers with the requested tenure were found.";

const HELP: &str = "\
Commands:

add - add a worker;
list - print all workers;
select <tenure> - print workers with at least <tenure> years;
load <file> - load workers from a file;
save <file> - save workers to a file;
help - show this help;
exit - leave the program.
";

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// An interactive shell over one `Staff`
pub struct Session {
    config: Config,
    staff: Staff,
}

impl Session {
    /// Start a session with an empty store
    pub fn new(config: Config) -> Self {
        Self::with_staff(config, Staff::new())
    }

    /// Start a session over existing workers
    pub fn with_staff(config: Config, staff: Staff) -> Self {
        Self { config, staff }
    }

    /// Run the read-execute loop until `exit` or end of input
    ///
    /// Command failures are written to `errors` and logged; only failures
    /// writing the prompt or reading input end the loop early.
    pub fn run<R, W, E>(&mut self, mut input: R, mut output: W, mut errors: E) -> Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            let Some(line) = read_line(&mut input)? else {
                break;
            };

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    report(&mut errors, &e)?;
                    continue;
                }
            };

            match self.execute(&command, &mut input, &mut output) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!(command = command.name(), "command failed");
                    report(&mut errors, &e)?;
                }
            }
        }

        Ok(())
    }

    /// Execute a single command
    ///
    /// `add` reads its answers from `input`.
    pub fn execute<R, W>(&mut self, command: &Command, input: &mut R, output: &mut W) -> Result<Flow>
    where
        R: BufRead,
        W: Write,
    {
        match command {
            Command::Add => {
                let name = ask(input, output, "Name? ")?;
                let post = ask(input, output, "Post? ")?;
                let answer = ask(input, output, "Year? ")?;
                let year = answer.trim().parse::<i32>().map_err(|_| {
                    StaffError::InvalidInput(format!("year `{}` is not an integer", answer))
                })?;

                self.staff
                    .add(name.clone(), post.clone(), year, self.config.current_year())?;
                info!(%name, %post, year, "added worker");
            }
            Command::List => {
                writeln!(output, "{}", self.staff)?;
                info!(count = self.staff.len(), "displayed workers");
            }
            Command::Select { period } => {
                let selected = self.staff.select(*period, self.config.current_year());
                write_selection(output, &selected)?;
                if selected.is_empty() {
                    warn!(period, "no workers with the requested tenure");
                } else {
                    info!(period, count = selected.len(), "selected workers by tenure");
                }
            }
            Command::Load { path } => {
                self.staff.load(path)?;
                info!(path = %path.display(), "loaded workers from file");
            }
            Command::Save { path } => {
                self.staff.save(path)?;
                info!(path = %path.display(), "saved workers to file");
            }
            Command::Help => output.write_all(HELP.as_bytes())?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    pub fn staff(&self) -> &Staff {
        &self.staff
    }

    pub fn into_staff(self) -> Staff {
        self.staff
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Write a `select` result: numbered names, or the not-found message
pub fn write_selection<W: Write>(output: &mut W, selected: &[&Worker]) -> std::io::Result<()> {
    if selected.is_empty() {
        return writeln!(output, "{}", NOT_FOUND_MESSAGE);
    }

    for (idx, worker) in selected.iter().enumerate() {
        writeln!(output, "{:>4}: {}", idx + 1, worker.name())?;
    }
    Ok(())
}

fn report<E: Write>(errors: &mut E, e: &StaffError) -> Result<()> {
    error!(error = %e, "request rejected");
    writeln!(errors, "{}", e)?;
    Ok(())
}

/// Print `question` and read the answer, kept verbatim apart from the line terminator
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    read_line(input)?.ok_or_else(|| StaffError::InvalidInput("unexpected end of input".to_string()))
}

/// Read one line without its terminator; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
