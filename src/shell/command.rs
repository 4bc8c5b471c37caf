//! Shell command parsing.

use thiserror::Error;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Prompt for fields and add a new contact
    Add,

    /// Prompt for fields and replace the selected contact
    Update,

    /// Delete the selected contact
    Delete,

    /// Select a displayed row (1-based)
    Select(usize),

    /// Filter the displayed list by a substring of name or phone
    Search(String),

    /// Drop the filter and show every contact
    ShowAll,

    /// Clear the current selection
    Clear,

    /// Re-render the current view
    List,

    /// Show the command summary
    Help,

    /// Leave the shell
    Quit,
}

/// Errors produced while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// The first word is not a known command
    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),

    /// `select` was given without a row number
    #[error("'select' needs a row number, e.g. 'select 2'")]
    MissingRow,

    /// `select` was given something that is not a positive row number
    #[error("Not a row number: {0}")]
    InvalidRow(String),
}

impl Command {
    /// Parse a single input line into a command.
    ///
    /// The command word is case-insensitive. `search` takes the rest of
    /// the line verbatim (an empty rest is allowed; the search itself
    /// reports the empty query). `select` takes a 1-based row number as
    /// displayed in the table.
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "select" => {
                if rest.is_empty() {
                    return Err(CommandParseError::MissingRow);
                }
                match rest.parse::<usize>() {
                    Ok(row) if row >= 1 => Ok(Self::Select(row)),
                    _ => Err(CommandParseError::InvalidRow(rest.to_string())),
                }
            }
            "search" => Ok(Self::Search(rest.to_string())),
            "all" => Ok(Self::ShowAll),
            "clear" => Ok(Self::Clear),
            "list" => Ok(Self::List),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(Command::parse("add"), Ok(Command::Add));
        assert_eq!(Command::parse("  UPDATE  "), Ok(Command::Update));
        assert_eq!(Command::parse("delete"), Ok(Command::Delete));
        assert_eq!(Command::parse("all"), Ok(Command::ShowAll));
        assert_eq!(Command::parse("clear"), Ok(Command::Clear));
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_select() {
        assert_eq!(Command::parse("select 2"), Ok(Command::Select(2)));
        assert_eq!(Command::parse("select"), Err(CommandParseError::MissingRow));
        assert_eq!(
            Command::parse("select zero"),
            Err(CommandParseError::InvalidRow("zero".to_string()))
        );
        assert_eq!(
            Command::parse("select 0"),
            Err(CommandParseError::InvalidRow("0".to_string()))
        );
    }

    #[test]
    fn test_parse_search_takes_rest_of_line() {
        assert_eq!(
            Command::parse("search jo"),
            Ok(Command::Search("jo".to_string()))
        );
        assert_eq!(
            Command::parse("search mary jane"),
            Ok(Command::Search("mary jane".to_string()))
        );
        // Empty query is parsed fine; the search operation rejects it
        assert_eq!(Command::parse("search"), Ok(Command::Search(String::new())));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse("frobnicate"),
            Err(CommandParseError::Unknown("frobnicate".to_string()))
        );
    }
}
