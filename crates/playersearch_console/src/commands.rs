use playersearch_interface::errors::{AppError, Result};
use playersearch_interface::players::model::SearchMode;

pub const HELP: &str = "\
Type a player name (or an id in id mode) and press enter to search.
  /mode name|id   switch the search mode
  /input <text>   edit the input without searching
  /search         search again with the current input
  /show           show the current results
  /help           show this message
  /quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Plain text: set the input and search.
    Search(String),
    Input(String),
    Mode(SearchMode),
    Rerun,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);

        let Some(command) = line.trim_start().strip_prefix('/') else {
            return Ok(Command::Search(line.to_string()));
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (command, ""),
        };

        match name {
            "mode" => argument.parse().map(Command::Mode),
            "input" => Ok(Command::Input(argument.to_string())),
            "search" => Ok(Command::Rerun),
            "show" => Ok(Command::Show),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(AppError::ValidationError {
                msg: format!("unknown command '/{}', type /help", other),
            }),
        }
    }
}
