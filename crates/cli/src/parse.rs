//! Prompt line → Command/MetaCommand conversion.
//!
//! Meta-commands (`help`, `exit`, `quit`) are handled by the loop itself;
//! every other line is parsed by clap and converted into a session
//! [`Command`].

use std::path::PathBuf;

use clap::ArgMatches;
use contactdb_executor::Command;

/// REPL meta-commands.
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Help { command: Option<String> },
    Quit,
}

/// Check for meta-commands before delegating to clap.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "exit" | "quit" => Some(MetaCommand::Quit),
        "help" => Some(MetaCommand::Help {
            command: parts.next().map(str::to_string),
        }),
        _ => None,
    }
}

/// Convert clap matches from `build_repl_cmd` into a session command.
pub fn matches_to_command(matches: &ArgMatches) -> Result<Command, String> {
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let cmd = match name {
        "create" => Command::CreateLog {
            name: string_arg(sub, "name")?,
        },
        "log" => Command::LogName,
        "add" => Command::AddContact {
            name: string_arg(sub, "name")?,
            phone: copied_arg(sub, "phone")?,
            zip: copied_arg(sub, "zip")?,
        },
        "lookup" => Command::Lookup {
            name: string_arg(sub, "name")?,
        },
        "clear" => Command::Clear,
        "print" => Command::PrintAll,
        "write_text" => Command::WriteText,
        "read_text" => Command::ReadText {
            path: path_arg(sub)?,
        },
        "write_bin" => Command::WriteBinary,
        "read_bin" => Command::ReadBinary {
            path: path_arg(sub)?,
        },
        "open" => Command::Open {
            path: path_arg(sub)?,
        },
        other => return Err(format!("Unknown command {}", other)),
    };
    Ok(cmd)
}

fn string_arg(matches: &ArgMatches, id: &str) -> Result<String, String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| format!("missing <{}>", id))
}

fn copied_arg<T>(matches: &ArgMatches, id: &str) -> Result<T, String>
where
    T: Copy + Send + Sync + 'static,
{
    matches
        .get_one::<T>(id)
        .copied()
        .ok_or_else(|| format!("missing <{}>", id))
}

fn path_arg(matches: &ArgMatches) -> Result<PathBuf, String> {
    string_arg(matches, "file").map(PathBuf::from)
}
