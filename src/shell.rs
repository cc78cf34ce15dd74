use crate::linked_list::{LinkedList, EMPTY_MESSAGE};
use crate::shell_command::ShellCommand;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead};

const HELP: &str = "\
add (a) <value>...         append values at the tail
delete (d) <index>         delete the node at a zero-based index
remove (rm) <value>        delete every node holding value
removepair (rp) <value>    delete every node holding value and the node after it
clear (c)                  delete every node
show (s)                   print the list head to tail
reverse (r)                print the list tail to head
memory (m)                 print the estimated memory usage
help (h)                   print this message
quit (q)                   leave";

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Renders the memory estimate the way the demo prints it.
pub fn format_memory(list: &LinkedList) -> String {
    match list.memory_estimate() {
        Some(bytes) => format!("Total memory usage: {} bytes", bytes),
        None => EMPTY_MESSAGE.to_string(),
    }
}

/// Applies `command` to `list`. Returns the text to print, if the command produces any.
/// `Quit` is left to the caller and does nothing here.
pub fn execute(list: &mut LinkedList, command: &ShellCommand) -> Option<String> {
    match command {
        ShellCommand::Add(values) => {
            for value in values {
                list.add_node(*value);
            }
            None
        }
        ShellCommand::Delete(index) => {
            list.delete_at(*index);
            None
        }
        ShellCommand::Remove(value) => {
            list.delete_by_value(*value);
            None
        }
        ShellCommand::RemovePair(value) => {
            list.delete_by_value_and_follower(*value);
            None
        }
        ShellCommand::Clear => {
            list.clear();
            None
        }
        ShellCommand::Show => Some(list.display_forward()),
        ShellCommand::Reverse => Some(list.display_reverse()),
        ShellCommand::Memory => Some(format_memory(list)),
        ShellCommand::Help => Some(HELP.to_string()),
        ShellCommand::Quit => None,
    }
}

/// Reads the file at the supplied path, and returns a vector of strings.
fn read_file_lines(filename: &str) -> Result<Vec<String>, io::Error> {
    let mut str_vec = Vec::new();
    let file = File::open(filename)?;
    for line in io::BufReader::new(file).lines() {
        let line_str = line?;
        str_vec.push(line_str);
    }
    Ok(str_vec)
}

/// Runs the commands in `lines` against `list`, printing whatever they render. Blank lines and
/// lines starting with `#` are skipped. A line that does not parse is reported on stderr and
/// skipped. Returns the number of commands executed.
pub fn run_lines(lines: &[String], list: &mut LinkedList) -> usize {
    let mut executed = 0;
    for (idx, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match ShellCommand::from_tokens(&tokens) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                if let Some(output) = execute(list, &command) {
                    println!("{}", output);
                }
                executed += 1;
            }
            Err(err) => eprintln!("line {}: {}", idx + 1, err),
        }
    }
    executed
}

pub fn run_script(path: &str, list: &mut LinkedList) -> Result<(), Error> {
    let lines = read_file_lines(path)?;
    let executed = run_lines(&lines, list);
    log::info!("Executed {} command(s) from {}", executed, path);
    Ok(())
}

pub struct Shell {
    history_path: String,
    readline: Editor<()>,
    list: LinkedList,
}

impl Shell {
    pub fn new(history_path: &str, list: LinkedList) -> Shell {
        let mut readline = Editor::<()>::new();
        // Attempt to load history if it exists
        let _ = readline.load_history(history_path);

        Shell {
            history_path: history_path.to_string(),
            readline,
            list,
        }
    }

    pub fn run(&mut self) {
        loop {
            let command = match self.get_next_command() {
                Some(command) => command,
                None => return,
            };
            match command {
                ShellCommand::Quit => return,
                command => {
                    if let Some(output) = execute(&mut self.list, &command) {
                        println!("{}", output);
                    }
                }
            }
        }
    }

    /// Prompts until the user enters a valid command. Returns `None` if the input stream fails.
    fn get_next_command(&mut self) -> Option<ShellCommand> {
        loop {
            match self.readline.readline("(list) ") {
                Err(ReadlineError::Interrupted) => {
                    // User pressed ctrl+c. We're going to ignore it
                    println!("Type \"quit\" to exit");
                }
                Err(ReadlineError::Eof) => {
                    return Some(ShellCommand::Quit);
                }
                Err(err) => {
                    log::error!("Unexpected I/O error: {:?}", err);
                    return None;
                }
                Ok(line) => {
                    if line.trim().len() == 0 {
                        continue;
                    }
                    self.readline.add_history_entry(line.as_str());
                    if let Err(err) = self.readline.save_history(&self.history_path) {
                        log::warn!(
                            "Failed to save history file at {}: {}",
                            self.history_path, err
                        );
                    }
                    let tokens: Vec<&str> = line.split_whitespace().collect();
                    match ShellCommand::from_tokens(&tokens) {
                        Ok(command) => return Some(command),
                        Err(err) => println!("{}", err),
                    }
                }
            }
        }
    }
}
