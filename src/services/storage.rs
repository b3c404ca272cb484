use crate::domain::models::Shortcuts;
use anyhow::Context;
use std::path::{Path, PathBuf};

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// The single delimited file holding every shortcut.
///
/// Rows are `name,path`. Fields that would break the two-column layout are
/// written quoted, with inner quotes doubled. Plain rows from older files
/// still load as before.
#[derive(Debug, Clone)]
pub struct ShortcutStore {
    path: PathBuf,
}

impl ShortcutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn ensure_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
                tracing::info!(dir = %parent.display(), "created store directory");
            }
        }
        Ok(())
    }

    /// Missing file loads as an empty map. Rows that do not split into
    /// exactly two fields are dropped; later rows win over earlier ones.
    pub fn load(&self) -> anyhow::Result<Shortcuts> {
        let mut shortcuts = Shortcuts::new();
        if !self.exists() {
            return Ok(shortcuts);
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        for (lineno, line) in raw.lines().enumerate() {
            match parse_row(line.trim()) {
                Some((name, path)) => {
                    shortcuts.insert(name, path);
                }
                None => {
                    tracing::debug!(line = lineno + 1, "skipping malformed store row");
                }
            }
        }
        tracing::debug!(count = shortcuts.len(), path = %self.path.display(), "loaded store");
        Ok(shortcuts)
    }

    /// Rewrites the whole file, truncating what was there.
    pub fn save(&self, shortcuts: &Shortcuts) -> anyhow::Result<()> {
        self.ensure_dir()?;
        let body: String = shortcuts
            .iter()
            .map(|(name, path)| format_row(name, path))
            .collect();
        std::fs::write(&self.path, body)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        tracing::debug!(count = shortcuts.len(), path = %self.path.display(), "saved store");
        Ok(())
    }
}

fn format_row(name: &str, path: &str) -> String {
    format!("{}{}{}\n", encode_field(name), DELIMITER, encode_field(path))
}

fn encode_field(raw: &str) -> String {
    let needs_quotes = raw.contains(DELIMITER)
        || raw.contains(QUOTE)
        || raw.trim() != raw;
    if !needs_quotes {
        return raw.to_string();
    }
    let doubled = raw.replace(QUOTE, "\"\"");
    format!("{QUOTE}{doubled}{QUOTE}")
}

fn parse_row(line: &str) -> Option<(String, String)> {
    let mut fields = split_fields(line)?;
    if fields.len() != 2 {
        return None;
    }
    let path = fields.pop()?;
    let name = fields.pop()?;
    Some((name, path))
}

/// Splits one row into fields. `None` on an unterminated quote or on
/// trailing text after a closing quote.
fn split_fields(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();
    loop {
        let mut field = String::new();
        if chars.peek() == Some(&QUOTE) {
            chars.next();
            loop {
                match chars.next() {
                    Some(QUOTE) if chars.peek() == Some(&QUOTE) => {
                        chars.next();
                        field.push(QUOTE);
                    }
                    Some(QUOTE) => break,
                    Some(c) => field.push(c),
                    None => return None,
                }
            }
            match chars.next() {
                None => {
                    fields.push(field);
                    return Some(fields);
                }
                Some(DELIMITER) => fields.push(field),
                Some(_) => return None,
            }
        } else {
            loop {
                match chars.next() {
                    Some(DELIMITER) => {
                        fields.push(field);
                        break;
                    }
                    Some(c) => field.push(c),
                    None => {
                        fields.push(field);
                        return Some(fields);
                    }
                }
            }
        }
    }
}
