// SPDX-License-Identifier: MPL-2.0
//! Where settings and local storage live.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** passed to a `*_with_override()` function (tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) set via [`init_cli_overrides`]
//! 3. **Environment variables** (`MAJLIS_DATA_DIR`, `MAJLIS_CONFIG_DIR`)
//! 4. **Platform default** via `dirs`, with [`APP_NAME`] appended
//!
//! ```ignore
//! paths::init_cli_overrides(flags.data_dir, flags.config_dir);
//! let storage_dir = paths::get_app_data_dir();
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform data/config roots.
pub const APP_NAME: &str = "Majlis";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "MAJLIS_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "MAJLIS_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` arguments.
///
/// Call once at startup, before any path is resolved. Later calls are
/// ignored; the first overrides win.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI path overrides already initialized");
    }
}

/// Directory holding `storage.cbor`, the local key/value store.
///
/// - Linux: `~/.local/share/Majlis/`
/// - macOS: `~/Library/Application Support/Majlis/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Majlis\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_DATA_DIR.get().and_then(Clone::clone),
        ENV_DATA_DIR,
        dirs::data_dir,
    )
}

/// Directory holding `settings.toml`.
///
/// - Linux: `~/.config/Majlis/`
/// - macOS: `~/Library/Application Support/Majlis/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Majlis\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_CONFIG_DIR.get().and_then(Clone::clone),
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path.or(cli) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
