//! Configuration system: TOML file + env var overrides + smart defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{OpsError, Result};

/// Environment variable that points at an alternate config file.
pub const CONFIG_PATH_ENV: &str = "RECYCLE_OPS_CONFIG";

/// Full console configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub console: ConsoleConfig,
    pub display: DisplayConfig,
    pub routing: RoutingConfig,
    pub paths: PathsConfig,
}

/// Event-loop and notification timing knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// How often the event loop wakes to poll input and redraw.
    pub refresh_interval_ms: u64,
    /// Page shown on startup, 1-based hotkey number.
    pub start_page: u8,
    /// How long a toast notification stays on screen.
    pub toast_ttl_ms: u64,
    /// Visible toast cap; older toasts are evicted beyond this.
    pub max_visible_toasts: usize,
}

/// Color and contrast preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub high_contrast: bool,
    pub no_color: bool,
}

/// Route optimization preferences shown on the Routes page.
///
/// The optimizer itself is a stub that only raises a notification, but the
/// knobs are real configuration and survive restarts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoutingConfig {
    pub optimize_for: OptimizeFor,
    pub max_pickups_per_route: usize,
    pub avoid_highways: bool,
}

/// What the route optimizer should minimize.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptimizeFor {
    #[default]
    Time,
    Distance,
    Fuel,
}

impl OptimizeFor {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Distance => "distance",
            Self::Fuel => "fuel",
        }
    }
}

/// Filesystem paths used by rops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub config_file: PathBuf,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 1_000,
            start_page: 1,
            toast_ttl_ms: 3_500,
            max_visible_toasts: 3,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            high_contrast: false,
            no_color: false,
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            optimize_for: OptimizeFor::Time,
            max_pickups_per_route: 15,
            avoid_highways: false,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let home_dir = env::var_os("HOME").map_or_else(
            || {
                eprintln!(
                    "[ROPS-CONFIG] WARNING: HOME not set, falling back to /tmp for config path"
                );
                PathBuf::from("/tmp")
            },
            PathBuf::from,
        );
        Self {
            config_file: home_dir
                .join(".config")
                .join("recycle-ops")
                .join("config.toml"),
        }
    }
}

impl Config {
    /// Default configuration path, honoring the `RECYCLE_OPS_CONFIG` override.
    #[must_use]
    pub fn default_path() -> PathBuf {
        env::var_os(CONFIG_PATH_ENV)
            .filter(|raw| !raw.is_empty())
            .map_or_else(|| PathsConfig::default().config_file, PathBuf::from)
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from the default
    /// path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| OpsError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(OpsError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.paths.config_file = path_buf;
        cfg.apply_env_overrides()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Persist the config as TOML, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| OpsError::io(parent, source))?;
        }
        let rendered = toml::to_string_pretty(self)?;
        fs::write(path, rendered).map_err(|source| OpsError::io(path, source))?;
        Ok(())
    }

    /// Deterministic hash of the effective config for logging.
    ///
    /// Uses FNV-1a for cross-process-stable hashing.
    pub fn stable_hash(&self) -> Result<String> {
        let canonical = serde_json::to_string(self)?;
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in canonical.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        Ok(format!("{hash:016x}"))
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        set_env_u64(
            "ROPS_CONSOLE_REFRESH_INTERVAL_MS",
            &mut self.console.refresh_interval_ms,
        )?;
        set_env_u8("ROPS_CONSOLE_START_PAGE", &mut self.console.start_page)?;
        set_env_u64("ROPS_CONSOLE_TOAST_TTL_MS", &mut self.console.toast_ttl_ms)?;
        set_env_usize(
            "ROPS_CONSOLE_MAX_VISIBLE_TOASTS",
            &mut self.console.max_visible_toasts,
        )?;

        set_env_bool("ROPS_DISPLAY_HIGH_CONTRAST", &mut self.display.high_contrast)?;
        set_env_bool("ROPS_DISPLAY_NO_COLOR", &mut self.display.no_color)?;

        set_env_usize(
            "ROPS_ROUTING_MAX_PICKUPS_PER_ROUTE",
            &mut self.routing.max_pickups_per_route,
        )?;
        set_env_bool("ROPS_ROUTING_AVOID_HIGHWAYS", &mut self.routing.avoid_highways)?;

        Ok(())
    }

    /// Validate cross-field invariants.
    pub fn validate(&self) -> Result<()> {
        if !(100..=60_000).contains(&self.console.refresh_interval_ms) {
            return Err(OpsError::InvalidConfig {
                details: format!(
                    "console.refresh_interval_ms must be in [100, 60000], got {}",
                    self.console.refresh_interval_ms
                ),
            });
        }

        if !(1..=7).contains(&self.console.start_page) {
            return Err(OpsError::InvalidConfig {
                details: format!(
                    "console.start_page must be in [1, 7], got {}",
                    self.console.start_page
                ),
            });
        }

        if self.console.toast_ttl_ms < 500 {
            return Err(OpsError::InvalidConfig {
                details: format!(
                    "console.toast_ttl_ms must be >= 500, got {}",
                    self.console.toast_ttl_ms
                ),
            });
        }

        if !(1..=10).contains(&self.console.max_visible_toasts) {
            return Err(OpsError::InvalidConfig {
                details: format!(
                    "console.max_visible_toasts must be in [1, 10], got {}",
                    self.console.max_visible_toasts
                ),
            });
        }

        if self.routing.max_pickups_per_route == 0 {
            return Err(OpsError::InvalidConfig {
                details: "routing.max_pickups_per_route must be >= 1".to_string(),
            });
        }

        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}

fn set_env_u64(name: &str, slot: &mut u64) -> Result<()> {
    if let Some(raw) = env_var(name) {
        *slot = raw.parse::<u64>().map_err(|error| OpsError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })?;
    }
    Ok(())
}

fn set_env_u8(name: &str, slot: &mut u8) -> Result<()> {
    if let Some(raw) = env_var(name) {
        *slot = raw.parse::<u8>().map_err(|error| OpsError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })?;
    }
    Ok(())
}

fn set_env_usize(name: &str, slot: &mut usize) -> Result<()> {
    if let Some(raw) = env_var(name) {
        *slot = raw
            .parse::<usize>()
            .map_err(|error| OpsError::ConfigParse {
                context: "env",
                details: format!("{name}={raw:?}: {error}"),
            })?;
    }
    Ok(())
}

fn set_env_bool(name: &str, slot: &mut bool) -> Result<()> {
    if let Some(raw) = env_var(name) {
        *slot = raw.parse::<bool>().map_err(|error| OpsError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Config, OpsError, OptimizeFor};

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn refresh_interval_bounds_enforced() {
        let mut cfg = Config::default();
        cfg.console.refresh_interval_ms = 50;
        let err = cfg.validate().expect_err("expected validation error");
        match err {
            OpsError::InvalidConfig { details } => {
                assert!(details.contains("refresh_interval_ms"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn start_page_out_of_range_rejected() {
        let mut cfg = Config::default();
        cfg.console.start_page = 8;
        let err = cfg.validate().expect_err("expected validation error");
        assert!(err.to_string().contains("start_page"));
    }

    #[test]
    fn zero_toast_cap_rejected() {
        let mut cfg = Config::default();
        cfg.console.max_visible_toasts = 0;
        let err = cfg.validate().expect_err("expected validation error");
        assert!(err.to_string().contains("max_visible_toasts"));
    }

    #[test]
    fn zero_route_capacity_rejected() {
        let mut cfg = Config::default();
        cfg.routing.max_pickups_per_route = 0;
        let err = cfg.validate().expect_err("expected validation error");
        assert!(err.to_string().contains("max_pickups_per_route"));
    }

    #[test]
    fn stable_hash_changes_when_config_changes() {
        let cfg = Config::default();
        let hash_before = cfg.stable_hash().expect("hash should compute");
        let mut modified = Config::default();
        modified.routing.optimize_for = OptimizeFor::Fuel;
        let hash_after = modified.stable_hash().expect("hash should compute");
        assert_ne!(hash_before, hash_after);
    }

    #[test]
    fn toml_round_trip_preserves_fields() {
        let mut cfg = Config::default();
        cfg.console.refresh_interval_ms = 250;
        cfg.display.high_contrast = true;
        cfg.routing.optimize_for = OptimizeFor::Distance;

        let rendered = toml::to_string_pretty(&cfg).expect("config should serialize");
        let parsed: Config = toml::from_str(&rendered).expect("config should parse");
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config =
            toml::from_str("[console]\nrefresh_interval_ms = 2000\n").expect("partial toml parses");
        assert_eq!(parsed.console.refresh_interval_ms, 2_000);
        assert_eq!(parsed.console.start_page, 1);
        assert_eq!(parsed.routing.max_pickups_per_route, 15);
    }

    #[test]
    fn optimize_for_labels_are_stable() {
        assert_eq!(OptimizeFor::Time.label(), "time");
        assert_eq!(OptimizeFor::Distance.label(), "distance");
        assert_eq!(OptimizeFor::Fuel.label(), "fuel");
    }
}
