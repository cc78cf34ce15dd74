use std::fmt;

pub enum ShellCommand {
    Quit,
    Help,
    Add(Vec<i32>),
    Delete(usize),
    Remove(i32),
    RemovePair(i32),
    Clear,
    Show,
    Reverse,
    Memory,
}

#[derive(Debug, PartialEq)]
pub enum CommandError {
    /// The command needs an argument that was not given. Contains the command name.
    MissingArgument(String),
    /// An argument could not be parsed as a number. Contains the offending token.
    InvalidNumber(String),
    /// The command takes fewer arguments than were given. Contains the command name.
    UnexpectedArgument(String),
    Unknown(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingArgument(cmd) => write!(f, "Missing the argument of {}", cmd),
            CommandError::InvalidNumber(token) => write!(f, "Not a valid number: {}", token),
            CommandError::UnexpectedArgument(cmd) => write!(f, "Too many arguments for {}", cmd),
            CommandError::Unknown(cmd) => write!(f, "Unrecognized command: {}", cmd),
        }
    }
}

impl std::error::Error for CommandError {}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, CommandError> {
    token
        .parse::<T>()
        .map_err(|_| CommandError::InvalidNumber(token.to_string()))
}

/// Parses the single argument of `cmd`.
fn single_argument<T: std::str::FromStr>(cmd: &str, tokens: &[&str]) -> Result<T, CommandError> {
    match tokens.len() {
        1 => Err(CommandError::MissingArgument(cmd.to_string())),
        2 => parse_number(tokens[1]),
        _ => Err(CommandError::UnexpectedArgument(cmd.to_string())),
    }
}

fn no_argument(cmd: ShellCommand, name: &str, tokens: &[&str]) -> Result<ShellCommand, CommandError> {
    if tokens.len() > 1 {
        return Err(CommandError::UnexpectedArgument(name.to_string()));
    }
    Ok(cmd)
}

impl ShellCommand {
    pub fn from_tokens(tokens: &[&str]) -> Result<ShellCommand, CommandError> {
        let name = match tokens.first() {
            Some(name) => *name,
            None => return Err(CommandError::Unknown(String::new())),
        };
        match name {
            "q" | "quit" => no_argument(ShellCommand::Quit, "quit", tokens),
            "h" | "help" => no_argument(ShellCommand::Help, "help", tokens),
            "a" | "add" => {
                if tokens.len() < 2 {
                    return Err(CommandError::MissingArgument("add".to_string()));
                }
                let values = tokens[1..]
                    .iter()
                    .map(|token| parse_number::<i32>(token))
                    .collect::<Result<Vec<i32>, CommandError>>()?;
                Ok(ShellCommand::Add(values))
            },
            "d" | "delete" => Ok(ShellCommand::Delete(single_argument("delete", tokens)?)),
            "rm" | "remove" => Ok(ShellCommand::Remove(single_argument("remove", tokens)?)),
            "rp" | "removepair" => {
                Ok(ShellCommand::RemovePair(single_argument("removepair", tokens)?))
            },
            "c" | "clear" => no_argument(ShellCommand::Clear, "clear", tokens),
            "s" | "show" => no_argument(ShellCommand::Show, "show", tokens),
            "r" | "reverse" => no_argument(ShellCommand::Reverse, "reverse", tokens),
            "m" | "memory" => no_argument(ShellCommand::Memory, "memory", tokens),
            // Default case:
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}
