use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod logging;
mod services;

use cli::Cli;
use services::config::{home_dir, Settings};
use services::launcher::SystemLauncher;
use services::storage::ShortcutStore;

fn main() {
    let args: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if cli::is_informational(&err) => err.exit(),
        Err(err) => fail(cli::usage_error(&args, &err).into()),
    };
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        fail(e);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = Settings::resolve(
        cli.store.clone(),
        home_dir().as_deref(),
        cli.editor.clone(),
        cli.terminal.clone(),
    )?;
    let store = ShortcutStore::new(&settings.store_path);
    let launcher = SystemLauncher {
        terminal: settings.terminal,
        editor: settings.editor,
    };
    commands::handle_shortcut_commands(cli, &store, &launcher)
}

fn fail(err: anyhow::Error) -> ! {
    tracing::debug!(error = %format!("{:#}", err), "fatal_error");
    println!("Error: {:#}", err);
    std::process::exit(1);
}
