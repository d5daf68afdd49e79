use std::str::FromStr;

use thiserror::Error;

use crate::sort::{SortKey, UnknownSortKey};

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Change the input without searching.
    Type(String),
    /// Search for the given term, or the current input.
    Search(Option<String>),
    More,
    Sort(SortKey),
    Remove(String),
    History,
    /// Re-issue the n-th last search (1 = oldest shown).
    Last(usize),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a valid position")]
    InvalidIndex(String),
    #[error(transparent)]
    Sort(#[from] UnknownSortKey),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        match name {
            "" => Err(CommandError::Empty),
            "type" | "t" => Ok(Command::Type(rest.to_string())),
            "search" | "s" => Ok(Command::Search(arg)),
            "more" | "m" => Ok(Command::More),
            "sort" => Ok(Command::Sort(
                arg.ok_or(CommandError::MissingArgument("sort"))?
                    .parse::<SortKey>()?,
            )),
            "remove" | "rm" | "dismiss" => {
                Ok(Command::Remove(arg.ok_or(CommandError::MissingArgument("remove"))?))
            }
            "history" | "h" => Ok(Command::History),
            "last" | "l" => {
                let raw = arg.ok_or(CommandError::MissingArgument("last"))?;
                match raw.parse::<usize>() {
                    Ok(n) if n > 0 => Ok(Command::Last(n)),
                    _ => Err(CommandError::InvalidIndex(raw)),
                }
            }
            "show" | "ls" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  type <term>     change the search input without searching
  search [term]   search for <term> or the current input
  more            load the next page
  sort <key>      none | title | author | comment | point (again to reverse)
  remove <id>     dismiss a story
  history         list last searches
  last <n>        search again for the n-th last search
  show            print the list again
  quit            leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_with_spaces() {
        assert_eq!(
            "search  rust async ".parse(),
            Ok(Command::Search(Some("rust async".to_string())))
        );
        assert_eq!("search".parse(), Ok(Command::Search(None)));
    }

    #[test]
    fn type_allows_empty_input() {
        assert_eq!("type".parse(), Ok(Command::Type(String::new())));
    }

    #[test]
    fn parses_sort_and_last() {
        assert_eq!("sort title".parse(), Ok(Command::Sort(SortKey::Title)));
        assert_eq!("last 2".parse(), Ok(Command::Last(2)));
        assert_eq!(
            "last 0".parse::<Command>(),
            Err(CommandError::InvalidIndex("0".to_string()))
        );
    }

    #[test]
    fn reports_missing_arguments() {
        assert_eq!(
            "remove".parse::<Command>(),
            Err(CommandError::MissingArgument("remove"))
        );
        assert!(matches!("sort".parse::<Command>(), Err(CommandError::MissingArgument(_))));
        assert!(matches!("sort date".parse::<Command>(), Err(CommandError::Sort(_))));
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(
            "frobnicate".parse::<Command>(),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
    }
}
