use crate::error::AsdfError;
use std::path::{Path, PathBuf};

pub const STORE_DIR_NAME: &str = ".asdf";
pub const STORE_FILE_NAME: &str = "shortcuts.csv";

/// Process-wide settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub store_path: PathBuf,
    pub editor: String,
    pub terminal: String,
}

impl Settings {
    /// `store` overrides the default `<home>/.asdf/shortcuts.csv`; `home`
    /// is only consulted when no override is given.
    pub fn resolve(
        store: Option<PathBuf>,
        home: Option<&Path>,
        editor: String,
        terminal: String,
    ) -> Result<Self, AsdfError> {
        let store_path = match store {
            Some(p) => p,
            None => default_store_path(home.ok_or(AsdfError::HomeNotSet)?),
        };
        Ok(Self {
            store_path,
            editor,
            terminal,
        })
    }
}

pub fn default_store_path(home: &Path) -> PathBuf {
    home.join(STORE_DIR_NAME).join(STORE_FILE_NAME)
}

pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_defaults_under_home() {
        let s = Settings::resolve(None, Some(Path::new("/home/me")), "vi".into(), "t".into())
            .expect("resolve");
        assert_eq!(s.store_path, PathBuf::from("/home/me/.asdf/shortcuts.csv"));
    }

    #[test]
    fn explicit_store_wins_without_home() {
        let s = Settings::resolve(Some(PathBuf::from("/x/s.csv")), None, "vi".into(), "t".into())
            .expect("resolve");
        assert_eq!(s.store_path, PathBuf::from("/x/s.csv"));
    }

    #[test]
    fn missing_home_is_fatal_without_override() {
        let err = Settings::resolve(None, None, "vi".into(), "t".into()).expect_err("no home");
        assert!(matches!(err, AsdfError::HomeNotSet));
    }
}
