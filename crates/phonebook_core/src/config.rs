//! Store configuration.
//!
//! # Invariants
//! - The default configuration reproduces the historical startup behavior:
//!   `contacts.db` in the working directory, reset on every open.

use std::path::PathBuf;

/// Database file used when the caller does not name one.
pub const DEFAULT_DB_FILE_NAME: &str = "contacts.db";

/// What happens to an existing `contacts` table when the store opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitMode {
    /// Drop and recreate the table; every run starts from an empty directory.
    #[default]
    Reset,
    /// Keep existing rows, creating the table only if it is missing.
    Preserve,
}

impl InitMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Preserve => "preserve",
        }
    }
}

/// Location and startup policy for a [`ContactStore`](crate::ContactStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub init_mode: InitMode,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            init_mode: InitMode::default(),
        }
    }

    pub fn with_init_mode(mut self, init_mode: InitMode) -> Self {
        self.init_mode = init_mode;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::{InitMode, StoreConfig, DEFAULT_DB_FILE_NAME};
    use std::path::Path;

    #[test]
    fn default_config_resets_contacts_db() {
        let config = StoreConfig::default();
        assert_eq!(config.db_path, Path::new(DEFAULT_DB_FILE_NAME));
        assert_eq!(config.init_mode, InitMode::Reset);
    }

    #[test]
    fn with_init_mode_overrides_default() {
        let config = StoreConfig::new("/tmp/book.db").with_init_mode(InitMode::Preserve);
        assert_eq!(config.init_mode, InitMode::Preserve);
        assert_eq!(config.init_mode.as_str(), "preserve");
    }
}
