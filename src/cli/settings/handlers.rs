//! Handlers for each persisted setting.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::{success_set, success_unset, SettingHandler};
use crate::core::catalog::{lookup, CatalogEntry, ModelRef, NotFound, Personality};
use crate::core::config::data::Config;
use crate::utils::url::validate_base_url;

fn format_value(key: &str, value: Option<&str>) -> String {
    format!("  {key}: {}", value.unwrap_or("(unset)"))
}

fn unknown_item(err: NotFound, list_command: &str) -> SettingError {
    SettingError::UnknownItem {
        kind: err.kind,
        input: err.input,
        hint: Some(format!(
            "Run 'personabot {list_command}' to list the available choices."
        )),
    }
}

/// Handler for the `default-model` setting.
pub struct DefaultModelHandler;

impl SettingHandler for DefaultModelHandler {
    fn key(&self) -> &'static str {
        "default-model"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To set a default model, specify the model:",
                example: "personabot set default-model Gemma2-9B-It",
            });
        }

        let model = lookup::<ModelRef>(&args.join(" ")).map_err(|e| unknown_item(e, "models"))?;
        config.default_model = Some(model.display_name().to_string());
        Ok(success_set(self.key(), model.display_name()))
    }

    fn unset(&self, config: &mut Config) -> String {
        config.default_model = None;
        success_unset(self.key())
    }

    fn format(&self, config: &Config) -> String {
        format_value(self.key(), config.default_model.as_deref())
    }
}

/// Handler for the `default-personality` setting.
pub struct DefaultPersonalityHandler;

impl SettingHandler for DefaultPersonalityHandler {
    fn key(&self) -> &'static str {
        "default-personality"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To set a default personality, specify the personality:",
                example: "personabot set default-personality Travel Guide",
            });
        }

        let personality = lookup::<Personality>(&args.join(" "))
            .map_err(|e| unknown_item(e, "personalities"))?;
        config.default_personality = Some(personality.display_name().to_string());
        Ok(success_set(self.key(), personality.display_name()))
    }

    fn unset(&self, config: &mut Config) -> String {
        config.default_personality = None;
        success_unset(self.key())
    }

    fn format(&self, config: &Config) -> String {
        format_value(self.key(), config.default_personality.as_deref())
    }
}

/// Handler for the `base-url` setting.
pub struct BaseUrlHandler;

impl SettingHandler for BaseUrlHandler {
    fn key(&self) -> &'static str {
        "base-url"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let [url] = args else {
            return Err(SettingError::MissingArgs {
                hint: "To set the API base URL, specify a single URL:",
                example: "personabot set base-url https://api.groq.com/openai/v1",
            });
        };

        let url = validate_base_url(url).map_err(|reason| SettingError::InvalidValue {
            key: "base-url",
            reason,
        })?;
        let message = success_set(self.key(), &url);
        config.base_url = Some(url);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> String {
        config.base_url = None;
        success_unset(self.key())
    }

    fn format(&self, config: &Config) -> String {
        format_value(self.key(), config.base_url.as_deref())
    }
}

/// Handler for the `request-timeout` setting, in whole seconds.
pub struct RequestTimeoutHandler;

impl SettingHandler for RequestTimeoutHandler {
    fn key(&self) -> &'static str {
        "request-timeout"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let [value] = args else {
            return Err(SettingError::MissingArgs {
                hint: "To set the request timeout, specify a number of seconds:",
                example: "personabot set request-timeout 60",
            });
        };

        let secs = value
            .trim()
            .trim_end_matches('s')
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| SettingError::InvalidValue {
                key: "request-timeout",
                reason: format!("expected a positive number of seconds, got '{value}'"),
            })?;
        config.request_timeout_secs = Some(secs);
        Ok(success_set(self.key(), &format!("{secs}s")))
    }

    fn unset(&self, config: &mut Config) -> String {
        config.request_timeout_secs = None;
        success_unset(self.key())
    }

    fn format(&self, config: &Config) -> String {
        let value = config.request_timeout_secs.map(|secs| format!("{secs}s"));
        format_value(self.key(), value.as_deref())
    }
}
