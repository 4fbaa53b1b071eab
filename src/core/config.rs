//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.pacesim/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PacesimConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub connect_delay_ms: Option<u64>,
    pub verify_delay_ms: Option<u64>,
    pub transfer_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MonitorConfig {
    pub muted: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CONNECT_DELAY_MS: u64 = 2000;
pub const DEFAULT_VERIFY_DELAY_MS: u64 = 2000;
pub const DEFAULT_TRANSFER_DELAY_MS: u64 = 4000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Simulated latency of the wireless connect.
    pub connect_delay: Duration,
    /// Simulated latency of the connection-state check.
    pub verify_delay: Duration,
    /// Simulated latency of the firmware transfer.
    pub transfer_delay: Duration,
    /// Start sessions with the monitor tone muted.
    pub muted: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&PacesimConfig::default(), false)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pacesim/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pacesim").join("config.toml"))
}

/// Load config from `custom` or, if not given, `~/.pacesim/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PacesimConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(custom: Option<&Path>) -> Result<PacesimConfig, ConfigError> {
    let path = match custom.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PacesimConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PacesimConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: PacesimConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# pacesim Configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [simulation]
# connect_delay_ms = 2000      # Simulated wireless connect latency
# verify_delay_ms = 2000       # Simulated connection-state check
# transfer_delay_ms = 4000     # Simulated firmware transfer

# [monitor]
# muted = false                # Start with the heart monitor tone muted
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// `cli_muted` is the `--muted` flag (false = not specified).
pub fn resolve(config: &PacesimConfig, cli_muted: bool) -> ResolvedConfig {
    let connect_ms = config
        .simulation
        .connect_delay_ms
        .unwrap_or(DEFAULT_CONNECT_DELAY_MS);
    let verify_ms = config
        .simulation
        .verify_delay_ms
        .unwrap_or(DEFAULT_VERIFY_DELAY_MS);
    let transfer_ms = config
        .simulation
        .transfer_delay_ms
        .unwrap_or(DEFAULT_TRANSFER_DELAY_MS);

    ResolvedConfig {
        connect_delay: Duration::from_millis(connect_ms),
        verify_delay: Duration::from_millis(verify_ms),
        transfer_delay: Duration::from_millis(transfer_ms),
        muted: cli_muted || config.monitor.muted.unwrap_or(false),
    }
}
