//! Interactive shell over an [`AddressBook`].
//!
//! The shell reads one line at a time, parses it into a [`Command`], runs it
//! and prints the reply. It owns no state of its own: the book is lent in by
//! the caller, so a test can drive a session over in-memory buffers.

pub mod command;
pub mod handlers;

pub use command::{Command, HELP};
pub use handlers::{execute, write_listing, Reply};

use crate::error::CommandError;
use crate::models::AddressBook;
use std::io::{self, BufRead, Write};

/// Run the read/eval/print loop until an exit command or end of input.
///
/// # Arguments
/// * `book` - The address book every command operates on
/// * `input` - Source of command lines
/// * `output` - Where prompts and replies are written
/// * `prompt` - Text written before each line is read
///
/// # Returns
/// An error only if reading input or writing output fails
pub fn run<R, W>(book: &mut AddressBook, input: R, mut output: W, prompt: &str) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write_prompt(&mut output, prompt)?;

    for line in input.lines() {
        let line = line?;

        if !line.trim().is_empty() {
            match Command::parse(&line) {
                Ok(command) => match execute(book, command) {
                    Reply::Text(text) => writeln!(output, "{}", text)?,
                    Reply::Listing => write_listing(book, &mut output)?,
                    Reply::Exit(text) => {
                        writeln!(output, "{}", text)?;
                        tracing::info!("Exit requested");
                        return Ok(());
                    }
                },
                Err(err) => {
                    match &err {
                        CommandError::NotEnoughParams { command, expected } => {
                            tracing::debug!(
                                command = *command,
                                expected = *expected,
                                "Too few arguments"
                            );
                        }
                        CommandError::TooManyParams { command, max } => {
                            tracing::debug!(command = *command, max = *max, "Too many arguments");
                        }
                        CommandError::Unknown(input) => {
                            tracing::debug!(input = %input, "Unknown command");
                        }
                    }
                    writeln!(output, "{}", err)?;
                }
            }
        }

        write_prompt(&mut output, prompt)?;
    }

    tracing::info!("Input closed");
    Ok(())
}

fn write_prompt<W: Write>(output: &mut W, prompt: &str) -> io::Result<()> {
    write!(output, "{}", prompt)?;
    output.flush()
}
