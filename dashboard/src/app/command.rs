//! Terminal command parser
//!
//! Each input line is either a slash command or new text for the search box.

use super::search::SearchEvent;
use crate::error::ParseError;

/// What one line of terminal input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward an event to the search bar
    Search(SearchEvent),
    /// Re-run every mounted query
    Refresh,
    Help,
    Quit,
}

/// Parse a line of terminal input
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();

    // Anything that is not a slash command is what the user typed in the box
    let Some(name) = trimmed.strip_prefix('/') else {
        return Ok(Command::Search(SearchEvent::Changed(line.to_string())));
    };

    match name.to_lowercase().as_str() {
        "get" | "submit" => Ok(Command::Search(SearchEvent::Submit)),
        "clear" => Ok(Command::Search(SearchEvent::Clear)),
        "refresh" | "reload" => Ok(Command::Refresh),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(ParseError::UnknownCommand(trimmed.to_string())),
    }
}

/// Help text listing the commands
pub fn help_text() -> &'static str {
    "Type a user name to put it in the search box, then:\n\
     - `/get` - Show the feeds that user follows\n\
     - `/clear` - Clear the search box\n\
     - `/refresh` - Fetch users, feeds and posts again\n\
     - `/help` - Show this help\n\
     - `/quit` - Exit\n"
}
