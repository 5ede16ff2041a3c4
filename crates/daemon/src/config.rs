// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration file

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tvr_adapters::gpio::SYSFS_GPIO_ROOT;
use tvr_engine::ControllerConfig;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/tvh-relay/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub gpio: GpioConfig,
    pub tvheadend: TvheadendConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GpioConfig {
    #[serde(default = "default_chip_path")]
    pub chip_path: PathBuf,
    pub relay_line: u32,
    /// Relay boards commonly switch on a low level
    #[serde(default = "default_true")]
    pub relay_active_low: bool,
    /// Without a line, errors are only logged
    #[serde(default)]
    pub error_led_line: Option<u32>,
}

#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TvheadendConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    #[serde(default, with = "humantime_serde")]
    pub request_timeout: Option<Duration>,
}

impl std::fmt::Debug for TvheadendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TvheadendConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    #[serde(with = "humantime_serde")]
    pub max_upcoming_lead: Duration,
    #[serde(with = "humantime_serde")]
    pub check_interval: Duration,
    #[serde(with = "humantime_serde")]
    pub maintenance_settle: Duration,
    pub maintenance_max_age_days: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        let defaults = ControllerConfig::default();
        Self {
            max_upcoming_lead: defaults.max_upcoming_lead,
            check_interval: defaults.check_interval,
            maintenance_settle: defaults.maintenance_settle,
            maintenance_max_age_days: defaults.maintenance_max_age_days,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    #[serde(with = "humantime_serde")]
    pub availability_poll_interval: Duration,
    /// Unload the driver and restart the backend before cutting power
    pub reset_before_power_off: bool,
    pub kernel_module: String,
    pub backend_service: String,
    pub use_sudo: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            availability_poll_interval: ControllerConfig::default().availability_poll_interval,
            reset_before_power_off: true,
            kernel_module: "dvb_usb_dvbsky".to_string(),
            backend_service: "tvheadend".to_string(),
            use_sudo: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub state_file: PathBuf,
    pub log_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("/var/lib/tvh-relay/last-epg-check"),
            log_file: PathBuf::from("/var/log/tvh-relay/status.log"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Never,
    Hourly,
    Daily,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rotation: LogRotation,
    /// Rotated files kept, including the one being written
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rotation: LogRotation::Daily,
            max_files: 2,
        }
    }
}

fn default_chip_path() -> PathBuf {
    PathBuf::from(SYSFS_GPIO_ROOT)
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse and validate; `path` is only used in errors
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let tvh = &self.tvheadend;
        if tvh.url.trim().is_empty() {
            return Err(invalid("tvheadend.url is empty"));
        }
        if tvh.username.is_empty() || tvh.password.is_empty() {
            return Err(invalid("tvheadend credentials are empty"));
        }
        if tvh.request_timeout == Some(Duration::ZERO) {
            return Err(invalid("tvheadend.request_timeout must be non-zero"));
        }
        if self.general.check_interval.is_zero() {
            return Err(invalid("general.check_interval must be non-zero"));
        }
        if self.general.maintenance_settle.is_zero() {
            return Err(invalid("general.maintenance_settle must be non-zero"));
        }
        if self.device.availability_poll_interval.is_zero() {
            return Err(invalid("device.availability_poll_interval must be non-zero"));
        }
        if self.device.reset_before_power_off && self.device.kernel_module.trim().is_empty() {
            return Err(invalid("device.kernel_module is empty"));
        }
        if self.gpio.error_led_line == Some(self.gpio.relay_line) {
            return Err(invalid("gpio.error_led_line must differ from gpio.relay_line"));
        }
        if self.logging.max_files == 0 {
            return Err(invalid("logging.max_files must be at least 1"));
        }
        if self.paths.log_file.file_name().is_none() {
            return Err(invalid("paths.log_file must name a file"));
        }
        Ok(())
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig::default()
            .with_max_upcoming_lead(self.general.max_upcoming_lead)
            .with_check_interval(self.general.check_interval)
            .with_maintenance_settle(self.general.maintenance_settle)
            .with_maintenance_max_age_days(self.general.maintenance_max_age_days)
            .with_availability_poll_interval(self.device.availability_poll_interval)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
