//! Runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use sheet_core::LayoutProfile;

/// Where characters are kept.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageKind {
    /// `characters.json` under the data directory.
    #[default]
    File,
    /// Process memory only; nothing survives exit.
    Memory,
}

/// Paths and switches needed to bootstrap the sheet.
#[derive(Clone, Debug)]
pub struct SheetConfig {
    pub data_dir: PathBuf,
    /// RON catalog replacing the built-in one.
    pub catalog: Option<PathBuf>,
    /// TOML layout overrides.
    pub layout: Option<PathBuf>,
    pub profile: LayoutProfile,
    pub storage: StorageKind,
}

impl SheetConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `SHEET_DATA_DIR`
    /// - `SHEET_CATALOG` / `SHEET_LAYOUT`
    /// - `SHEET_PROFILE` (`desktop` or `mobile`)
    /// - `SHEET_STORAGE` (`file` or `memory`)
    ///
    /// Unparseable values are ignored and keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("SHEET_DATA_DIR") {
            config.data_dir = dir;
        }
        config.catalog = read_env("SHEET_CATALOG");
        config.layout = read_env("SHEET_LAYOUT");

        if let Some(profile) = read_env("SHEET_PROFILE") {
            config.profile = profile;
        }
        if let Some(storage) = read_env("SHEET_STORAGE") {
            config.storage = storage;
        }

        config
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog: None,
            layout: None,
            profile: LayoutProfile::Desktop,
            storage: StorageKind::File,
        }
    }
}

/// Platform data directory for the sheet.
///
/// - macOS: `~/Library/Application Support/mausheet`
/// - Linux: `~/.local/share/mausheet` (or `$XDG_DATA_HOME/mausheet`)
/// - Windows: `%APPDATA%\mausheet`
/// - Fallback: `./save_data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "mausheet")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(key, value = trimmed, "ignoring unparseable environment value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_kind_parses_case_insensitively() {
        assert_eq!("MEMORY".parse::<StorageKind>(), Ok(StorageKind::Memory));
        assert_eq!(StorageKind::File.to_string(), "file");
        assert!("sqlite".parse::<StorageKind>().is_err());
    }

    #[test]
    fn defaults_use_file_storage_on_desktop() {
        let config = SheetConfig::default();
        assert_eq!(config.storage, StorageKind::File);
        assert_eq!(config.profile, LayoutProfile::Desktop);
        assert!(config.catalog.is_none());
    }
}
