//! Configuration file location and environment-supplied defaults.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, normalize_user_path};

/// File name of the persisted roots record inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable naming a root used to seed a fresh configuration.
pub const DEFAULT_ROOT_ENV: &str = "DOCBRIDGE_DEFAULT_ROOT";

/// Location of the JSON file holding `{ "roots": [...] }`.
pub fn config_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(CONFIG_FILE_NAME))
}

/// Root supplied through `DOCBRIDGE_DEFAULT_ROOT`, if set and non-blank.
///
/// Only consulted when no configuration record exists yet.
pub fn default_root_from_env() -> Option<PathBuf> {
    let raw = env::var(DEFAULT_ROOT_ENV).ok()?;
    match normalize_user_path(&raw) {
        Ok(path) => Some(path),
        Err(PathError::EmptyPath) => None,
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring unusable {DEFAULT_ROOT_ENV}");
            None
        }
    }
}
