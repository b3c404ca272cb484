use crate::error::AsdfError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// In-memory view of the store file, keyed and ordered by shortcut name.
pub type Shortcuts = BTreeMap<String, String>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A shortcut name that passed validation: non-empty, ASCII letters,
/// digits, `_` and `-` only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShortcutName(String);

impl ShortcutName {
    pub fn parse(raw: &str) -> Result<Self, AsdfError> {
        let name = raw.trim();
        if name.is_empty() || !name.chars().all(is_name_char) {
            return Err(AsdfError::InvalidName);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

impl fmt::Display for ShortcutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub name: String,
    pub path: String,
}

/// Result of a single command, rendered either as text or as the `data`
/// field of a [`JsonOut`] envelope.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Added { name: String },
    Updated { name: String },
    Listed { shortcuts: Vec<Shortcut> },
    Resolved { shortcut: Shortcut },
    Deleted { name: String },
    NotFound { name: String },
    Opened { shortcut: Shortcut },
    Edited { path: String },
    Usage { text: String },
}

impl Outcome {
    /// Text form of the outcome. `None` means the command prints nothing.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Added { name } => Some(format!("Adding shortcut {}", name)),
            Outcome::Updated { name } => Some(format!("Updating {}", name)),
            Outcome::Listed { shortcuts } if shortcuts.is_empty() => {
                Some("No shortcuts".to_string())
            }
            Outcome::Listed { shortcuts } => Some(
                shortcuts
                    .iter()
                    .map(|s| format!("{} -> {}", s.name, s.path))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Outcome::Resolved { shortcut } => Some(shortcut.path.clone()),
            Outcome::Deleted { name } => Some(format!("Deleted shortcut {}", name)),
            Outcome::NotFound { name } => Some(format!("Shortcut {} does not exist", name)),
            Outcome::Opened { .. } | Outcome::Edited { .. } => None,
            Outcome::Usage { text } => Some(text.clone()),
        }
    }
}
