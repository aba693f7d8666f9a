//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use contactdb_executor::Session;

use crate::commands::{build_repl_cmd, REPL_COMMANDS};
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_command, MetaCommand};

const PROMPT: &str = "contacts> ";

/// Run the interactive REPL.
pub fn run_repl(session: &mut Session, mode: OutputMode) -> rustyline::Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<ContactsHelper, _> = Editor::with_config(config)?;
    rl.set_helper(Some(ContactsHelper));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    print_help(None);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match check_meta_command(trimmed) {
                    Some(MetaCommand::Quit) => break,
                    Some(MetaCommand::Help { command }) => print_help(command.as_deref()),
                    None => {
                        execute_line(trimmed, session, mode);
                    }
                }
            }
            // Ctrl-C: new prompt
            Err(ReadlineError::Interrupted) => continue,
            // Ctrl-D
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
    Ok(())
}

/// Run in pipe mode: read lines from stdin, execute each.
///
/// Returns the process exit code: 1 if any line failed.
pub fn run_pipe(session: &mut Session, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match check_meta_command(trimmed) {
            Some(MetaCommand::Quit) => break,
            Some(MetaCommand::Help { command }) => print_help(command.as_deref()),
            None => {
                if !execute_line(trimmed, session, mode) {
                    exit_code = 1;
                }
            }
        }
    }

    exit_code
}

/// Tokenize, parse and execute one line. Returns true on success.
pub fn execute_line(line: &str, session: &mut Session, mode: OutputMode) -> bool {
    let tokens = match shlex::split(line) {
        Some(t) if !t.is_empty() => t,
        Some(_) => return true,
        None => {
            eprintln!("(error) Invalid quoting: {}", line);
            return false;
        }
    };

    let matches = match build_repl_cmd().try_get_matches_from(tokens) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        }
    };

    let cmd = match matches_to_command(&matches) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("(error) {}", e);
            return false;
        }
    };

    match session.execute(cmd) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            true
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            false
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.contactdb_history", h))
}

fn print_help(command: Option<&str>) {
    if let Some(cmd) = command {
        if let Err(e) = build_repl_cmd().try_get_matches_from(vec![cmd, "--help"]) {
            println!("{}", e);
        }
        return;
    }
    println!("Contact Log System");
    println!("Commands:");
    println!("  create <name>:            creates a new log with specified name");
    println!("  log:                      shows the name of the active contacts log");
    println!("  add <name> <phone> <zip>: adds a new contact");
    println!("  lookup <name>:            searches for a phone number by contact name");
    println!("  clear:                    resets current contacts log");
    println!("  print:                    shows all contacts in active log");
    println!("  write_text:               saves all contacts to text file");
    println!("  read_text <file_name>:    loads contacts from text file");
    println!("  write_bin:                saves all contacts to binary file");
    println!("  read_bin <file_name>:     loads contacts from binary file");
    println!("  open <file_name>:         loads a .txt or .bin file by extension");
    println!("  help [command]:           shows this message");
    println!("  exit:                     exits the program");
}

// =========================================================================
// TAB Completion
// =========================================================================

struct ContactsHelper;

impl Helper for ContactsHelper {}
impl Validator for ContactsHelper {}
impl Highlighter for ContactsHelper {}
impl Hinter for ContactsHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for ContactsHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];
        // Only the command word is completed
        if line_to_pos.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }
        let start = pos - line_to_pos.len();
        let candidates = REPL_COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line_to_pos))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}
