//! ContactDB CLI: an interactive shell over a single contacts log.
//!
//! Two modes:
//! - **REPL mode**: `contactdb [flags] [FILE]` on a TTY, with history and TAB completion
//! - **Pipe mode**: `echo "create friends" | contactdb`, line-by-line from stdin
//!
//! An optional `.txt` or `.bin` FILE is loaded before the first prompt.
//! `--init-config` writes a commented default `contactdb.toml` and exits.

mod commands;
mod format;
mod parse;
mod repl;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use contactdb_executor::{Command, ContactDbConfig, Result, Session, CONFIG_FILE_NAME};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    // Handle `--init-config` before loading any config.
    if matches.get_flag("init-config") {
        process::exit(run_init_config(&matches));
    }

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    };

    let mut session = Session::new(config);

    // A startup file that fails to load leaves an empty session.
    if let Some(file) = matches.get_one::<String>("file") {
        let cmd = Command::Open {
            path: PathBuf::from(file),
        };
        match session.execute(cmd) {
            Ok(output) => println!("{}", format_output(&output, output_mode)),
            Err(e) => eprintln!("{}", format_error(&e, output_mode)),
        }
    }

    if std::io::stdin().is_terminal() {
        if let Err(e) = repl::run_repl(&mut session, output_mode) {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    } else {
        let exit_code = repl::run_pipe(&mut session, output_mode);
        process::exit(exit_code);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_path(matches: &clap::ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

fn run_init_config(matches: &clap::ArgMatches) -> i32 {
    let path = config_path(matches);
    match ContactDbConfig::write_default_if_missing(&path) {
        Ok(true) => {
            println!("Wrote default config to {}", path.display());
            0
        }
        Ok(false) => {
            println!("Config file {} already exists", path.display());
            0
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}

fn load_config(matches: &clap::ArgMatches) -> Result<ContactDbConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ContactDbConfig::from_file(Path::new(path))?,
        None => ContactDbConfig::load_or_default(&config_path(matches))?,
    };
    if let Some(dir) = matches.get_one::<String>("data-dir") {
        config = config.with_data_dir(dir);
    }
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
