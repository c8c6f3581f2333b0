//! Tool adapters.
//!
//! Each adapter wraps an external command and provides:
//! - Availability detection
//! - Command resolution (configured override, project-local, then `PATH`)
//! - The stdin/stdout exchange with the tool

mod command_fixer;
mod decaffeinate;

pub use command_fixer::CommandFixer;
pub use decaffeinate::Decaffeinate;

use std::path::PathBuf;

/// Split a configured command line into program and arguments.
pub(crate) fn split_command(command: &[String]) -> Option<(PathBuf, Vec<String>)> {
    let (program, args) = command.split_first()?;
    Some((PathBuf::from(program), args.to_vec()))
}
