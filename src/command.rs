use crate::error::Error;
use std::str::FromStr;

/// Command accepted by the interactive shell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Add,
    Delete,
    Find,
    PrintTable,
    Load,
    Count,
    Buckets,
    Who,
    Help,
    Exit,
}

impl Command {
    /// Commands with their descriptions, in menu order.
    pub const MENU: [(&'static str, &'static str); 10] = [
        ("add", "Add a movie title and then a related quote"),
        ("delete", "Remove a movie and all related quotes"),
        ("find", "Search for a movie title and related quote"),
        ("printHT", "Print out current hash table movie quote database"),
        (
            "load",
            "Print current load factor and max load factor for hash table.",
        ),
        ("count", "Return current number of items in hash table"),
        (
            "buckets",
            "Return the current number of movies, or buckets of the hash table",
        ),
        ("who", "Provide program name and version"),
        ("help or ?", "Provide program information"),
        ("exit", "Exit program ('x' or 'q' also work)"),
    ];
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(match input.trim().to_lowercase().as_str() {
            "add" => Self::Add,
            "delete" => Self::Delete,
            "find" => Self::Find,
            "printht" => Self::PrintTable,
            "load" => Self::Load,
            "count" => Self::Count,
            "buckets" => Self::Buckets,
            "who" => Self::Who,
            "help" | "?" => Self::Help,
            "exit" | "x" | "q" => Self::Exit,
            _ => return Err(Error::UnknownCommand(input.trim().into())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add);
        assert_eq!("printHT".parse::<Command>().unwrap(), Command::PrintTable);
        assert_eq!("  FIND \n".parse::<Command>().unwrap(), Command::Find);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
    }

    #[test]
    fn parse_exit_aliases() {
        for input in ["exit", "x", "q", "Q", "EXIT"] {
            assert_eq!(input.parse::<Command>().unwrap(), Command::Exit);
        }
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            "fly".parse::<Command>(),
            Err(Error::UnknownCommand(command)) if command == "fly"
        ));
        assert!("".parse::<Command>().is_err());
    }
}
