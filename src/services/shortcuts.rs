use crate::domain::models::{Outcome, Shortcut, ShortcutName};
use crate::error::AsdfError;
use crate::services::launcher::Launcher;
use crate::services::storage::ShortcutStore;
use std::path::Path;

/// Adds or updates `name`. `path` only has to exist; any file type is allowed.
/// Paths with line breaks are refused since a store row is one line.
pub fn add(store: &ShortcutStore, name: &ShortcutName, path: &str) -> anyhow::Result<Outcome> {
    let path = path.trim();
    if path.contains(['\n', '\r']) {
        return Err(AsdfError::InvalidPath(path.to_string()).into());
    }
    if !Path::new(path).exists() {
        return Err(AsdfError::PathNotFound(path.to_string()).into());
    }
    store.ensure_dir()?;

    let mut shortcuts = store.load()?;
    let previous = shortcuts.insert(name.to_string(), path.to_string());
    store.save(&shortcuts)?;

    let name = name.to_string();
    match previous {
        Some(old) => {
            tracing::info!(%name, %old, new = %path, "updated shortcut");
            Ok(Outcome::Updated { name })
        }
        None => {
            tracing::info!(%name, %path, "added shortcut");
            Ok(Outcome::Added { name })
        }
    }
}

/// All shortcuts in name order. No store file reads as an empty list.
pub fn list(store: &ShortcutStore) -> anyhow::Result<Outcome> {
    let shortcuts = store
        .load()?
        .into_iter()
        .map(|(name, path)| Shortcut { name, path })
        .collect();
    Ok(Outcome::Listed { shortcuts })
}

pub fn dir(store: &ShortcutStore, name: &ShortcutName) -> anyhow::Result<Outcome> {
    let shortcuts = store.load()?;
    Ok(match shortcuts.get(name.as_str()) {
        Some(path) => Outcome::Resolved {
            shortcut: Shortcut {
                name: name.to_string(),
                path: path.clone(),
            },
        },
        None => Outcome::NotFound {
            name: name.to_string(),
        },
    })
}

/// Removes `name` and rewrites the store. Nothing is written when the
/// name is absent.
pub fn delete(store: &ShortcutStore, name: &ShortcutName) -> anyhow::Result<Outcome> {
    let not_found = Outcome::NotFound {
        name: name.to_string(),
    };
    if !store.exists() {
        return Ok(not_found);
    }
    let mut shortcuts = store.load()?;
    if shortcuts.remove(name.as_str()).is_none() {
        return Ok(not_found);
    }
    store.save(&shortcuts)?;
    tracing::info!(name = %name, "deleted shortcut");
    Ok(Outcome::Deleted {
        name: name.to_string(),
    })
}

/// Launches a terminal in the directory behind `name`. The recorded path
/// must still be a directory.
pub fn open(
    store: &ShortcutStore,
    name: &ShortcutName,
    launcher: &dyn Launcher,
) -> anyhow::Result<Outcome> {
    if !store.exists() {
        return Ok(Outcome::NotFound {
            name: name.to_string(),
        });
    }
    let shortcuts = store.load()?;
    let path = shortcuts
        .get(name.as_str())
        .ok_or_else(|| AsdfError::UnknownShortcut(name.to_string()))?;
    if !Path::new(path).is_dir() {
        return Err(AsdfError::InvalidPath(path.clone()).into());
    }
    launcher.open_terminal(Path::new(path))?;
    Ok(Outcome::Opened {
        shortcut: Shortcut {
            name: name.to_string(),
            path: path.clone(),
        },
    })
}

/// Hands the raw store file to the editor and waits for it.
pub fn master(store: &ShortcutStore, launcher: &dyn Launcher) -> anyhow::Result<Outcome> {
    store.ensure_dir()?;
    launcher.edit(store.path())?;
    Ok(Outcome::Edited {
        path: store.path().to_string_lossy().to_string(),
    })
}
