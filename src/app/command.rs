//! Parsing of interactive input lines

use crate::error::{MarqueeError, Result};

/// What `open` points at: a 1-based index into the shown list, or an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    Index(usize),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Next,
    Prev,
    Page(u32),
    Year(String),
    Open(OpenTarget),
    Fav,
    Back,
    Help,
    Quit,
}

/// Parse one input line; blank lines yield `None`
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if let Some(title) = line.strip_prefix('/') {
        return Ok(Some(Command::Search(title.trim().to_string())));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "s" => Command::Search(rest.to_string()),
        "n" | "next" => Command::Next,
        "p" | "prev" => Command::Prev,
        "page" => Command::Page(parse_number(rest, "page")?),
        "year" | "y" => {
            if rest.is_empty() {
                return Err(MarqueeError::Validation(
                    "year needs a value such as 2008 or All".to_string(),
                ));
            }
            Command::Year(rest.to_string())
        }
        "open" | "o" => {
            if rest.is_empty() {
                return Err(MarqueeError::Validation(
                    "open needs a list number or an IMDb id".to_string(),
                ));
            }
            match rest.parse::<usize>() {
                Ok(index) => Command::Open(OpenTarget::Index(index)),
                Err(_) => Command::Open(OpenTarget::Id(rest.to_string())),
            }
        }
        "fav" | "f" => Command::Fav,
        "back" | "b" => Command::Back,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => {
            return Err(MarqueeError::Validation(format!(
                "Unknown command '{word}'. Type 'help' for a list of commands"
            )));
        }
    };

    Ok(Some(command))
}

fn parse_number(value: &str, what: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .map_err(|_| MarqueeError::Validation(format!("invalid {what} '{value}'")))
}
