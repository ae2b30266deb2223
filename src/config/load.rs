use std::{env, path::PathBuf};

use tracing::warn;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `VIVACE__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("VIVACE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Load settings, substituting defaults when loading or validation
    /// fails. Configuration is optional and a broken file should not stop
    /// the player from starting.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(settings) => match settings.validate() {
                Ok(()) => settings,
                Err(msg) => {
                    warn!("Invalid configuration, using defaults: {}", msg);
                    Settings::default()
                }
            },
            Err(err) => {
                warn!("Failed to load configuration, using defaults: {}", err);
                Settings::default()
            }
        }
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.playback.volume) {
            return Err("playback.volume must be within 0.0..=1.0".to_string());
        }
        if !self.playback.previous_restart_secs.is_finite()
            || self.playback.previous_restart_secs < 0.0
        {
            return Err("playback.previous_restart_secs must be a non-negative number".to_string());
        }
        if self.history.capacity == 0 {
            return Err("history.capacity must be >= 1".to_string());
        }
        if !(self.resume.max_percent > 0.0 && self.resume.max_percent <= 100.0) {
            return Err("resume.max_percent must be within (0, 100]".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `VIVACE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("VIVACE_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/vivace/config.toml`
/// or `~/.config/vivace/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("vivace").join("config.toml"))
}
