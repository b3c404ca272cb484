use crate::error::AsdfError;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_EDITOR: &str = "vi";
pub const DEFAULT_TERMINAL: &str = "gnome-terminal --working-directory={dir}";

pub const USAGE_TEXT: &str = "asdf usage:
  asdf list
  asdf add <name> <path>
  asdf open <name>
  asdf dir <name>
  asdf delete <name>
  asdf master
  asdf help";

const ARG_COUNT_MESSAGE: &str = "1-3 arguments needed, run 'asdf help' for usage";
const COMMAND_NAMES: [&str; 7] = ["list", "add", "open", "dir", "delete", "master", "help"];
const MAX_COMMAND_TOKENS: usize = 3;
const VALUE_OPTIONS: [&str; 3] = ["--store", "--editor", "--terminal"];

#[derive(Parser, Debug)]
#[command(
    name = "asdf",
    version,
    about = "Map short names to directories",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "ASDF_STORE",
        value_name = "FILE",
        help = "Shortcut store file [default: ~/.asdf/shortcuts.csv]"
    )]
    pub store: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "EDITOR",
        default_value = DEFAULT_EDITOR,
        help = "Editor used by `master`"
    )]
    pub editor: String,
    #[arg(
        long,
        global = true,
        env = "ASDF_TERMINAL",
        default_value = DEFAULT_TERMINAL,
        help = "Terminal command used by `open`; {dir} is replaced by the target"
    )]
    pub terminal: String,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a shortcut, or point an existing one somewhere new
    Add {
        #[arg(allow_hyphen_values = true)]
        name: String,
        #[arg(allow_hyphen_values = true)]
        path: String,
    },
    /// List all shortcuts sorted by name
    List,
    /// Print the directory behind a shortcut
    Dir {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Open a new terminal in the shortcut's directory
    Open {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Remove a shortcut
    Delete {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Edit the shortcut file by hand
    Master,
    /// Print usage
    Help,
}

/// `--help` and `--version` print and exit successfully; every other parse
/// failure is a usage error.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Maps a clap parse failure onto the tool's own usage messages, keyed on
/// the command token the user typed.
pub fn usage_error(args: &[String], err: &clap::Error) -> AsdfError {
    if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
        if arg.starts_with('-') {
            return AsdfError::Usage(clap_message(err));
        }
    }
    let message = match command_token(args) {
        None => ARG_COUNT_MESSAGE.to_string(),
        Some((_, count)) if count > MAX_COMMAND_TOKENS => ARG_COUNT_MESSAGE.to_string(),
        Some(("add", _)) => "usage - asdf add <name> <path>".to_string(),
        Some((cmd @ ("open" | "dir" | "delete"), _)) => format!("usage - asdf {} <name>", cmd),
        Some(("list" | "master" | "help", _)) => "too many arguments".to_string(),
        Some(_) => unknown_command_message(),
    };
    AsdfError::Usage(message)
}

fn unknown_command_message() -> String {
    let mut lines = vec!["second arg must be one of the following:".to_string()];
    lines.extend(COMMAND_NAMES.iter().map(|c| format!("  {}", c)));
    lines.join("\n")
}

fn clap_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Command token plus the number of tokens given to the command, skipping
/// global options and their values.
fn command_token(args: &[String]) -> Option<(&str, usize)> {
    let mut iter = args.iter().skip(1).map(|a| a.trim());
    let mut command = None;
    let mut count = 0;
    let mut escaped = false;
    while let Some(tok) = iter.next() {
        if !escaped {
            if tok == "--" {
                escaped = true;
                continue;
            }
            if VALUE_OPTIONS.contains(&tok) {
                iter.next();
                continue;
            }
            if is_global_flag(tok) || (command.is_none() && tok.starts_with('-') && tok.len() > 1) {
                continue;
            }
        }
        if command.is_none() {
            command = Some(tok);
        }
        count += 1;
    }
    command.map(|c| (c, count))
}

fn is_global_flag(tok: &str) -> bool {
    if matches!(tok, "--json" | "--verbose") {
        return true;
    }
    if VALUE_OPTIONS.iter().any(|o| tok.starts_with(&format!("{}=", o))) {
        return true;
    }
    tok.strip_prefix('-')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c == 'v'))
}
