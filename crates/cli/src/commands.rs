//! Clap command tree definition.
//!
//! `build_cli` parses the process arguments; `build_repl_cmd` parses each
//! line typed at the prompt (or read from a pipe).

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the top-level command line.
pub fn build_cli() -> Command {
    Command::new("contactdb")
        .about("Contact directory with text and binary persistence")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Config file (default: ./contactdb.toml if present)"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .help("Directory for files of newly created logs"),
        )
        .arg(
            Arg::new("init-config")
                .long("init-config")
                .help("Write a default config file if none exists, then exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Contacts log to load at startup (.txt or .bin)"),
        )
}

/// Build a command tree for one prompt line.
pub fn build_repl_cmd() -> Command {
    Command::new("repl")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("create")
                .about("Create a new log with the given name")
                .arg(Arg::new("name").required(true)),
        )
        .subcommand(Command::new("log").about("Show the name of the active contacts log"))
        .subcommand(
            Command::new("add")
                .about("Add a new contact")
                .arg(Arg::new("name").required(true))
                .arg(
                    Arg::new("phone")
                        .required(true)
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("zip")
                        .required(true)
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("lookup")
                .about("Search for a phone number by contact name")
                .arg(Arg::new("name").required(true)),
        )
        .subcommand(Command::new("clear").about("Release the active contacts log"))
        .subcommand(Command::new("print").about("Show all contacts in the active log"))
        .subcommand(Command::new("write_text").about("Save all contacts to <name>.txt"))
        .subcommand(
            Command::new("read_text")
                .about("Load contacts from a text file")
                .arg(Arg::new("file").required(true)),
        )
        .subcommand(Command::new("write_bin").about("Save all contacts to <name>.bin"))
        .subcommand(
            Command::new("read_bin")
                .about("Load contacts from a binary file")
                .arg(Arg::new("file").required(true)),
        )
        .subcommand(
            Command::new("open")
                .about("Load contacts, choosing the format by extension")
                .arg(Arg::new("file").required(true)),
        )
}

/// Command names offered by TAB completion.
pub const REPL_COMMANDS: &[&str] = &[
    "create",
    "log",
    "add",
    "lookup",
    "clear",
    "print",
    "write_text",
    "read_text",
    "write_bin",
    "read_bin",
    "open",
    "help",
    "exit",
    "quit",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definitions_are_valid() {
        build_cli().debug_assert();
        build_repl_cmd().debug_assert();
    }

    #[test]
    fn test_every_repl_subcommand_is_completable() {
        for sub in build_repl_cmd().get_subcommands() {
            assert!(REPL_COMMANDS.contains(&sub.get_name()), "{}", sub.get_name());
        }
    }
}
