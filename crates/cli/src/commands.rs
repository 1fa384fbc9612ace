//! Shell command parsing.

use people_common::PersonId;
use pipeline::Decade;
use std::fmt;

/// One line typed at the `people>` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    People,
    Refresh,
    Filter(Decade, bool),
    Filters,
    Add(PersonId),
    Remove(PersonId),
    Clear,
    Winners,
    Show(PersonId),
    Done,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseError {}

fn usage(message: impl Into<String>) -> ParseError {
    ParseError(message.into())
}

impl ShellCommand {
    /// Parse a shell line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<ShellCommand>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("people" | "ls", []) => ShellCommand::People,
            ("refresh" | "r", []) => ShellCommand::Refresh,
            ("filter", [decade, state]) => {
                let decade = Decade::from_label(decade)
                    .ok_or_else(|| usage(format!("Unknown decade '{}' (try 70s..10s)", decade)))?;
                ShellCommand::Filter(decade, parse_switch(state)?)
            }
            ("filter", _) => return Err(usage("Usage: filter <70s|80s|90s|00s|10s> <on|off>")),
            ("filters", []) => ShellCommand::Filters,
            ("add", [id]) => ShellCommand::Add(parse_id(id)?),
            ("remove" | "rm", [id]) => ShellCommand::Remove(parse_id(id)?),
            ("clear", []) => ShellCommand::Clear,
            ("winners", []) => ShellCommand::Winners,
            ("show", [id]) => ShellCommand::Show(parse_id(id)?),
            ("done", []) => ShellCommand::Done,
            ("help" | "?", []) => ShellCommand::Help,
            ("quit" | "exit" | "q", []) => ShellCommand::Quit,
            ("add" | "remove" | "rm" | "show", _) => {
                return Err(usage(format!("Usage: {} <id>", verb)));
            }
            _ => return Err(usage(format!("Unknown command '{}'; type 'help'", line.trim()))),
        };
        Ok(Some(command))
    }
}

fn parse_id(raw: &str) -> Result<PersonId, ParseError> {
    raw.parse()
        .map_err(|_| usage(format!("'{}' is not a person id", raw)))
}

fn parse_switch(raw: &str) -> Result<bool, ParseError> {
    match raw.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(usage(format!("Expected on or off, got '{}'", raw))),
    }
}

pub const HELP: &str = "\
Commands:
  people                     show the visible people
  refresh                    refresh the list (cached for 10 seconds)
  filter <decade> <on|off>   include or hide a decade (70s 80s 90s 00s 10s)
  filters                    show the decade toggles
  add <id>                   add a visible person to today's winners
  remove <id>                remove a person from today's winners
  clear                      clear today's winners
  winners                    show today's winners
  show <id>                  look a person up in the data source
  done                       save today's winners
  help                       this text
  quit                       leave";
