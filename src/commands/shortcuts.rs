use crate::cli::{Cli, Commands, USAGE_TEXT};
use crate::domain::models::{Outcome, ShortcutName};
use crate::services::launcher::Launcher;
use crate::services::output::print_outcome;
use crate::services::shortcuts;
use crate::services::storage::ShortcutStore;

/// Runs one command and prints its outcome. Names are validated here,
/// before any service touches the store.
pub fn handle_shortcut_commands(
    cli: &Cli,
    store: &ShortcutStore,
    launcher: &dyn Launcher,
) -> anyhow::Result<()> {
    let outcome = dispatch(&cli.command, store, launcher)?;
    print_outcome(cli.json, &outcome)
}

pub fn dispatch(
    command: &Commands,
    store: &ShortcutStore,
    launcher: &dyn Launcher,
) -> anyhow::Result<Outcome> {
    tracing::debug!(?command, store = %store.path().display(), "dispatching");
    match command {
        Commands::Add { name, path } => {
            let name = ShortcutName::parse(name)?;
            shortcuts::add(store, &name, path)
        }
        Commands::List => shortcuts::list(store),
        Commands::Dir { name } => {
            let name = ShortcutName::parse(name)?;
            shortcuts::dir(store, &name)
        }
        Commands::Open { name } => {
            let name = ShortcutName::parse(name)?;
            shortcuts::open(store, &name, launcher)
        }
        Commands::Delete { name } => {
            let name = ShortcutName::parse(name)?;
            shortcuts::delete(store, &name)
        }
        Commands::Master => shortcuts::master(store, launcher),
        Commands::Help => Ok(Outcome::Usage {
            text: USAGE_TEXT.to_string(),
        }),
    }
}
