//! Shell Module
//!
//! The interactive front end of the record book.
//!
//! ## Commands
//! - `add`              - prompt for name, post and year
//! - `list`             - print the table
//! - `select <tenure>`  - print workers with at least `<tenure>` years
//! - `load <file>`      - replace workers with a file's contents
//! - `save <file>`      - write workers to a file
//! - `help`             - print the command reference
//! - `exit`             - leave the shell

mod command;
mod session;

pub use command::Command;
pub use session::{write_selection, Flow, Session, NOT_FOUND_MESSAGE};
