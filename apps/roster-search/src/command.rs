use roster_domain::{QueryChange, Selection, StatusMode};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
	#[error("Unknown command '{0}'. Type `help` for the command list.")]
	Unknown(String),
	#[error("Usage: {0}")]
	Usage(&'static str),
	#[error("{0}")]
	InvalidStatus(String),
}

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
	Change(QueryChange),
	Vocabulary,
	Rules,
	Wishes,
	Help,
	Quit,
	Empty,
}

pub const HELP: &str = "\
Commands:
  text <query>                 set the search text (empty clears it)
  select <dimension> <value>   select a value, or `all` to drop the constraint
  status <any|occupied|unoccupied>
  clear                        reset text, selections, and status
  vocab                        list selectable options per dimension
  rules                        show community rules and links
  wishes                       show the wish wall
  help
  quit";

pub fn parse(line: &str) -> Result<Command, CommandError> {
	let line = line.trim();
	let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
	let rest = rest.trim();

	match name {
		"" => Ok(Command::Empty),
		"text" => Ok(Command::Change(QueryChange::Text(rest.to_string()))),
		"select" => {
			let (dimension, value) = rest
				.split_once(char::is_whitespace)
				.ok_or(CommandError::Usage("select <dimension> <value>"))?;
			let value = value.trim();

			if value.is_empty() {
				return Err(CommandError::Usage("select <dimension> <value>"));
			}

			Ok(Command::Change(QueryChange::Select {
				dimension: dimension.to_string(),
				selection: Selection::from(value),
			}))
		},
		"status" => {
			let status = rest.parse::<StatusMode>().map_err(CommandError::InvalidStatus)?;

			Ok(Command::Change(QueryChange::Status(status)))
		},
		"clear" => Ok(Command::Change(QueryChange::ClearAll)),
		"vocab" => Ok(Command::Vocabulary),
		"rules" => Ok(Command::Rules),
		"wishes" => Ok(Command::Wishes),
		"help" | "?" => Ok(Command::Help),
		"quit" | "exit" => Ok(Command::Quit),
		other => Err(CommandError::Unknown(other.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_query_changes() {
		assert_eq!(
			parse("text  Hifumi Ajitani "),
			Ok(Command::Change(QueryChange::Text("Hifumi Ajitani".to_string())))
		);
		assert_eq!(parse("text"), Ok(Command::Change(QueryChange::Text(String::new()))));
		assert_eq!(
			parse("select length 长段"),
			Ok(Command::Change(QueryChange::Select {
				dimension: "length".to_string(),
				selection: Selection::Value("长段".to_string()),
			}))
		);
		assert_eq!(
			parse("select school all"),
			Ok(Command::Change(QueryChange::Select {
				dimension: "school".to_string(),
				selection: Selection::All,
			}))
		);
		assert_eq!(
			parse("status occupied"),
			Ok(Command::Change(QueryChange::Status(StatusMode::Occupied)))
		);
		assert_eq!(parse("clear"), Ok(Command::Change(QueryChange::ClearAll)));
	}

	#[test]
	fn parses_control_commands() {
		assert_eq!(parse("   "), Ok(Command::Empty));
		assert_eq!(parse("vocab"), Ok(Command::Vocabulary));
		assert_eq!(parse("rules"), Ok(Command::Rules));
		assert_eq!(parse(" wishes "), Ok(Command::Wishes));
		assert_eq!(parse("exit"), Ok(Command::Quit));
	}

	#[test]
	fn rejects_malformed_input() {
		assert_eq!(parse("select length"), Err(CommandError::Usage("select <dimension> <value>")));
		assert!(matches!(parse("status free"), Err(CommandError::InvalidStatus(_))));
		assert_eq!(parse("peroro"), Err(CommandError::Unknown("peroro".to_string())));
	}
}
