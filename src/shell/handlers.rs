//! Command handlers for the contact book shell.
//!
//! Each handler calls the address book's public operations and turns the
//! outcome into a [`Reply`]. Validation failures and missing contacts are
//! replies like any other; nothing here is fatal.

use super::command::{Command, HELP};
use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use std::io::{self, Write};

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading.
    Text(String),
    /// Stream the book's pages to the output and keep reading.
    Listing,
    /// Print the text and stop.
    Exit(String),
}

/// Execute one command against the book.
pub fn execute(book: &mut AddressBook, command: Command) -> Reply {
    tracing::debug!(?command, "Executing command");

    let outcome = match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Help => Ok(HELP.to_string()),
        Command::Exit => return Reply::Exit("Goodbye!".to_string()),
        Command::ShowAll => return Reply::Listing,
        Command::Add {
            name,
            phone,
            birthday,
        } => add_contact(book, &name, &phone, birthday.as_deref()),
        Command::AddPhone { name, phone } => {
            with_record(book, &name, |record| Ok(record.add_phone(&phone)?))
        }
        Command::Change { name, old, new } => {
            with_record(book, &name, |record| record.edit_phone(&old, &new))
        }
        Command::RemovePhone { name, phone } => {
            with_record(book, &name, |record| record.remove_phone(&phone))
        }
        Command::Remove { name } => book.remove_record(&name),
        Command::Find { name } => book.find_record(&name),
        Command::SetBirthday { name, date } => with_record(book, &name, |record| {
            record.set_birthday(&date)?;
            Ok(format!("Birthday {} saved for contact {}", date, name))
        }),
        Command::DaysToBirthday { name } => days_to_birthday(book, &name),
    };

    match outcome {
        Ok(text) => Reply::Text(text),
        Err(err) => {
            tracing::debug!(error = %err, "Command failed");
            Reply::Text(err.to_string())
        }
    }
}

/// Write every page of the book, each headed by its page number.
pub fn write_listing<W: Write>(book: &AddressBook, output: &mut W) -> io::Result<()> {
    if book.is_empty() {
        return writeln!(output, "Address book is empty");
    }

    let total = book.page_count();
    for (index, page) in book.pages().enumerate() {
        writeln!(output, "--- Page {}/{} ---", index + 1, total)?;
        for entry in page {
            writeln!(output, "{}", entry)?;
        }
    }
    Ok(())
}

fn add_contact(
    book: &mut AddressBook,
    name: &str,
    phone: &str,
    birthday: Option<&str>,
) -> BookResult<String> {
    let mut record = Record::new(Name::new(name)?).with_phone(Phone::new(phone)?);
    if let Some(raw) = birthday {
        record = record.with_birthday(Birthday::new(raw)?);
    }
    Ok(book.add_record(record))
}

fn with_record<F>(book: &mut AddressBook, name: &str, action: F) -> BookResult<String>
where
    F: FnOnce(&mut Record) -> BookResult<String>,
{
    let record = book
        .get_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    action(record)
}

fn days_to_birthday(book: &AddressBook, name: &str) -> BookResult<String> {
    let record = book
        .get(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(match record.days_to_birthday() {
        None => format!("Birthday for {} is not set", name),
        Some(0) => format!("{}'s birthday is today!", name),
        Some(1) => format!("{}'s birthday is tomorrow", name),
        Some(days) => format!("{} days until {}'s birthday", days, name),
    })
}
