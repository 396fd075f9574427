//! Turning a line of user input into a [`Command`].
//!
//! Keywords are matched case-insensitively against the leading words of the
//! line, longest keyword first, so `remove number` wins over `remove`.
//! Whatever follows the keyword is split on whitespace into arguments.

use crate::error::{CommandError, CommandResult};

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    /// Create (or replace) a contact with one phone and an optional birthday.
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    /// Add a phone to an existing contact.
    AddPhone { name: String, phone: String },
    /// Replace one phone of a contact with another.
    Change {
        name: String,
        old: String,
        new: String,
    },
    RemovePhone { name: String, phone: String },
    Remove { name: String },
    Find { name: String },
    SetBirthday { name: String, date: String },
    DaysToBirthday { name: String },
    ShowAll,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Hello,
    Help,
    Add,
    NewNumber,
    Change,
    RemoveNumber,
    Remove,
    Phone,
    Find,
    Birthday,
    ShowAll,
    Exit,
}

/// Multi-word keywords come first so they shadow their single-word prefixes.
const KEYWORDS: &[(&str, Keyword)] = &[
    ("show all", Keyword::ShowAll),
    ("new number", Keyword::NewNumber),
    ("remove number", Keyword::RemoveNumber),
    ("good bye", Keyword::Exit),
    ("hello", Keyword::Hello),
    ("help", Keyword::Help),
    ("add", Keyword::Add),
    ("change", Keyword::Change),
    ("remove", Keyword::Remove),
    ("phone", Keyword::Phone),
    ("find", Keyword::Find),
    ("birthday", Keyword::Birthday),
    ("goodbye", Keyword::Exit),
    ("close", Keyword::Exit),
    ("exit", Keyword::Exit),
];

/// One line per command, printed by `help`.
pub const HELP: &str = "\
Commands:
  hello                               greet
  add <name> <phone> [YYYY-MM-DD]     create or replace a contact
  new number <name> <phone>           add a phone to a contact
  change <name> <old> <new>           replace a phone
  remove number <name> <phone>        delete a phone
  remove <name>                       delete a contact
  phone <name> | find <name>          show a contact
  birthday <name> [YYYY-MM-DD]        set a birthday or show days until it
  show all                            list every contact page by page
  good bye | close | exit             quit
Names and phones are single words; extra arguments are rejected.";

impl Command {
    /// Parse one line of input.
    ///
    /// # Errors
    ///
    /// - `CommandError::Unknown` if no keyword matches
    /// - `CommandError::NotEnoughParams` if the keyword needs more arguments
    /// - `CommandError::TooManyParams` if the keyword was given extra arguments
    pub fn parse(line: &str) -> CommandResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let (text, keyword, args) = KEYWORDS
            .iter()
            .find_map(|&(text, keyword)| {
                strip_keyword(&tokens, text).map(|args| (text, keyword, args))
            })
            .ok_or_else(|| CommandError::Unknown(line.trim().to_string()))?;

        let arg = |i: usize| args[i].to_string();

        let command = match keyword {
            Keyword::Hello => Self::Hello,
            Keyword::Help => Self::Help,
            Keyword::ShowAll => Self::ShowAll,
            Keyword::Exit => Self::Exit,
            Keyword::Add => {
                arity(args, text, 2, 3)?;
                Self::Add {
                    name: arg(0),
                    phone: arg(1),
                    birthday: args.get(2).map(|s| s.to_string()),
                }
            }
            Keyword::NewNumber => {
                arity(args, text, 2, 2)?;
                Self::AddPhone {
                    name: arg(0),
                    phone: arg(1),
                }
            }
            Keyword::Change => {
                arity(args, text, 3, 3)?;
                Self::Change {
                    name: arg(0),
                    old: arg(1),
                    new: arg(2),
                }
            }
            Keyword::RemoveNumber => {
                arity(args, text, 2, 2)?;
                Self::RemovePhone {
                    name: arg(0),
                    phone: arg(1),
                }
            }
            Keyword::Remove => {
                arity(args, text, 1, 1)?;
                Self::Remove { name: arg(0) }
            }
            Keyword::Phone | Keyword::Find => {
                arity(args, text, 1, 1)?;
                Self::Find { name: arg(0) }
            }
            Keyword::Birthday => {
                arity(args, text, 1, 2)?;
                match args.get(1) {
                    Some(date) => Self::SetBirthday {
                        name: arg(0),
                        date: date.to_string(),
                    },
                    None => Self::DaysToBirthday { name: arg(0) },
                }
            }
        };

        Ok(command)
    }
}

/// If `tokens` starts with every word of `keyword`, return the remaining tokens.
fn strip_keyword<'a, 'b>(tokens: &'a [&'b str], keyword: &str) -> Option<&'a [&'b str]> {
    let words: Vec<&str> = keyword.split(' ').collect();
    if tokens.len() < words.len() {
        return None;
    }

    let matches = tokens
        .iter()
        .zip(&words)
        .all(|(token, word)| token.eq_ignore_ascii_case(word));

    matches.then(|| &tokens[words.len()..])
}

/// Check that `command` got between `min` and `max` arguments.
fn arity(args: &[&str], command: &'static str, min: usize, max: usize) -> CommandResult<()> {
    if args.len() < min {
        return Err(CommandError::NotEnoughParams {
            command,
            expected: min,
        });
    }
    if args.len() > max {
        return Err(CommandError::TooManyParams { command, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keywords() {
        assert_eq!(Command::parse("hello").unwrap(), Command::Hello);
        assert_eq!(Command::parse("HELP").unwrap(), Command::Help);
        assert_eq!(Command::parse("  show   all ").unwrap(), Command::ShowAll);
        for exit in ["good bye", "goodbye", "close", "exit", "Exit"] {
            assert_eq!(Command::parse(exit).unwrap(), Command::Exit);
        }
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add Alice 1234567").unwrap(),
            Command::Add {
                name: "Alice".to_string(),
                phone: "1234567".to_string(),
                birthday: None,
            }
        );
        assert_eq!(
            Command::parse("add Alice 1234567 1990-05-17").unwrap(),
            Command::Add {
                name: "Alice".to_string(),
                phone: "1234567".to_string(),
                birthday: Some("1990-05-17".to_string()),
            }
        );
    }

    #[test]
    fn test_longest_keyword_wins() {
        assert_eq!(
            Command::parse("remove number Alice 1234567").unwrap(),
            Command::RemovePhone {
                name: "Alice".to_string(),
                phone: "1234567".to_string(),
            }
        );
        assert_eq!(
            Command::parse("remove Alice").unwrap(),
            Command::Remove {
                name: "Alice".to_string()
            }
        );
        assert_eq!(
            Command::parse("new number Alice 7654321").unwrap(),
            Command::AddPhone {
                name: "Alice".to_string(),
                phone: "7654321".to_string(),
            }
        );
    }

    #[test]
    fn test_keyword_must_be_whole_word() {
        assert!(matches!(
            Command::parse("phones Alice"),
            Err(CommandError::Unknown(_))
        ));
        assert!(matches!(
            Command::parse("addAlice 123"),
            Err(CommandError::Unknown(_))
        ));
    }

    #[test]
    fn test_birthday_forms() {
        assert_eq!(
            Command::parse("birthday Alice").unwrap(),
            Command::DaysToBirthday {
                name: "Alice".to_string()
            }
        );
        assert_eq!(
            Command::parse("birthday Alice 1990-05-17").unwrap(),
            Command::SetBirthday {
                name: "Alice".to_string(),
                date: "1990-05-17".to_string(),
            }
        );
    }

    #[test]
    fn test_not_enough_params() {
        assert_eq!(
            Command::parse("change Alice 1234567"),
            Err(CommandError::NotEnoughParams {
                command: "change",
                expected: 3
            })
        );
        assert!(Command::parse("add Alice").is_err());
        assert!(Command::parse("phone").is_err());
        assert!(Command::parse("birthday").is_err());
    }

    #[test]
    fn test_error_names_the_typed_keyword() {
        assert_eq!(
            Command::parse("phone"),
            Err(CommandError::NotEnoughParams {
                command: "phone",
                expected: 1
            })
        );
        assert_eq!(
            Command::parse("find"),
            Err(CommandError::NotEnoughParams {
                command: "find",
                expected: 1
            })
        );
    }

    #[test]
    fn test_too_many_params() {
        assert_eq!(
            Command::parse("remove Alice Bob"),
            Err(CommandError::TooManyParams {
                command: "remove",
                max: 1
            })
        );
        assert_eq!(
            Command::parse("add Alice 1234567 1990-05-17 junk"),
            Err(CommandError::TooManyParams {
                command: "add",
                max: 3
            })
        );
        assert!(Command::parse("change Alice 1 2 3").is_err());
        assert!(Command::parse("birthday Alice 1990-05-17 extra").is_err());
        assert!(Command::parse("new number Alice 1 2").is_err());
        assert!(Command::parse("remove number Alice 1 2").is_err());
        assert!(Command::parse("phone Alice Bob").is_err());
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            Command::parse("fly away"),
            Err(CommandError::Unknown("fly away".to_string()))
        );
        assert!(Command::parse("").is_err());
    }
}
