//! Settings management for CLI set/unset commands.
//!
//! Each persisted key has a [`SettingHandler`] that validates input and
//! edits an in-memory [`Config`]; the caller decides when to save.

pub mod error;
pub mod handlers;
pub mod registry;

pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::data::Config;

/// Trait for handling a configuration setting.
pub trait SettingHandler: Send + Sync {
    /// Returns the configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Validate `args` and store the value.
    ///
    /// Returns a success message to display.
    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError>;

    /// Clear the value so the built-in default applies again.
    fn unset(&self, config: &mut Config) -> String;

    /// Format the current value for display in `personabot set` output.
    fn format(&self, config: &Config) -> String;
}

pub(crate) fn success_set(key: &str, value: &str) -> String {
    format!("✅ Set {key} to: {value}")
}

pub(crate) fn success_unset(key: &str) -> String {
    format!("✅ Unset {key}")
}

/// Load the config, apply `set` for `key`, and save.
pub fn apply_set(key: &str, args: &[String]) -> Result<String, SettingError> {
    let registry = SettingRegistry::new();
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;

    let mut config = load_config()?;
    let message = handler.set(args, &mut config)?;
    save_config(&config)?;
    Ok(message)
}

/// Load the config, apply `unset` for `key`, and save.
pub fn apply_unset(key: &str) -> Result<String, SettingError> {
    let registry = SettingRegistry::new();
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;

    let mut config = load_config()?;
    let message = handler.unset(&mut config);
    save_config(&config)?;
    Ok(message)
}

/// Every setting with its current value, in display order.
pub fn describe_all(config: &Config) -> Vec<String> {
    let registry = SettingRegistry::new();
    registry
        .keys_display_order()
        .iter()
        .filter_map(|key| registry.get(key))
        .map(|handler| handler.format(config))
        .collect()
}

fn load_config() -> Result<Config, SettingError> {
    Config::load().map_err(|e| SettingError::ConfigError(e.to_string()))
}

fn save_config(config: &Config) -> Result<(), SettingError> {
    config
        .save()
        .map(|_| ())
        .map_err(|e| SettingError::ConfigError(e.to_string()))
}
