use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, ENV_PREFIX, INTERVAL_MAX, INTERVAL_MIN};
use crate::error::{CoreError, CoreResult};
use crate::types::Frequency;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub editor: EditorSettings,
    pub logging: LoggingConfig,
}

/// Seed values for a freshly opened recurrence editor.
#[derive(Debug, Clone, Deserialize)]
pub struct EditorSettings {
    /// Frequency selected when the editor opens. `None` opens the editor uninitialized.
    pub default_frequency: Option<Frequency>,
    pub default_interval: u8,
    /// Whether weekly selections that skip the anchor's weekday raise an advisory.
    pub start_date_advisory: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_frequency: Some(Frequency::Weekly),
            default_interval: INTERVAL_MIN,
            start_date_advisory: true,
        }
    }
}

impl EditorSettings {
    /// ## Summary
    /// Checks that the configured defaults fall inside the editor's domain.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if `default_interval` is outside `1..=30`.
    pub fn validate(&self) -> CoreResult<()> {
        if (INTERVAL_MIN..=INTERVAL_MAX).contains(&self.default_interval) {
            Ok(())
        } else {
            Err(CoreError::ConfigError(format!(
                "editor.default_interval must be within {INTERVAL_MIN}..={INTERVAL_MAX}, got {}",
                self.default_interval
            )))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("editor.default_frequency", Frequency::Weekly.as_str())?
            .set_default("editor.default_interval", 1)?
            .set_default("editor.start_date_advisory", true)?
            .set_default("logging.level", "info")?)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder.build()?.try_deserialize::<Self>()?;
        settings.editor.validate()?;
        Ok(settings)
    }

    /// `CADENCE_EDITOR__DEFAULT_INTERVAL` maps to `editor.default_interval`.
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    fn layered<S>(file: S, env: config::Environment) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Self::finish(Self::defaults()?.add_source(file).add_source(env))
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional `cadence.toml`.
    /// Environment variables (`CADENCE_EDITOR__DEFAULT_INTERVAL=2`) take precedence.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> Result<Self> {
        Self::layered(
            config::File::with_name(CONFIG_FILE).required(false),
            Self::environment(),
        )
    }

    /// ## Summary
    /// Builds settings from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml(document: &str) -> Result<Self> {
        Self::finish(
            Self::defaults()?
                .add_source(config::File::from_str(document, config::FileFormat::Toml)),
        )
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_vars(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect::<config::Map<_, _>>();
        Settings::environment().source(Some(map))
    }

    fn toml(document: &'static str) -> impl config::Source + Send + Sync + 'static {
        config::File::from_str(document, config::FileFormat::Toml)
    }

    #[test_log::test]
    fn environment_sets_nested_editor_keys() {
        let settings = Settings::layered(
            toml(""),
            env_vars(&[
                ("CADENCE_EDITOR__DEFAULT_INTERVAL", "7"),
                ("CADENCE_EDITOR__DEFAULT_FREQUENCY", "daily"),
            ]),
        )
        .unwrap();
        tracing::debug!(?settings, "Loaded settings from environment");

        assert_eq!(settings.editor.default_interval, 7);
        assert_eq!(settings.editor.default_frequency, Some(Frequency::Daily));
        assert!(settings.editor.start_date_advisory);
    }

    #[test]
    fn environment_overrides_toml() {
        let settings = Settings::layered(
            toml(
                r#"
                [editor]
                default_frequency = "monthly"
                default_interval = 3

                [logging]
                level = "debug"
                "#,
            ),
            env_vars(&[
                ("CADENCE_EDITOR__DEFAULT_INTERVAL", "12"),
                ("CADENCE_LOGGING__LEVEL", "trace"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.editor.default_interval, 12);
        assert_eq!(settings.editor.default_frequency, Some(Frequency::Monthly));
        assert_eq!(settings.logging.level, "trace");
    }

    #[test]
    fn environment_values_are_validated() {
        let result = Settings::layered(
            toml(""),
            env_vars(&[("CADENCE_EDITOR__DEFAULT_INTERVAL", "0")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let settings = Settings::layered(
            toml(""),
            env_vars(&[
                ("OTHERAPP_EDITOR__DEFAULT_INTERVAL", "9"),
                ("CADENCE_EDITOR__DEFAULT_INTERVAL", ""),
            ]),
        )
        .unwrap();
        assert_eq!(settings.editor.default_interval, 1);
    }

    #[test]
    fn load_without_config_file_uses_defaults_and_environment() {
        let settings = Settings::load().unwrap();
        assert!(settings.editor.validate().is_ok());
    }

    #[test_log::test]
    fn defaults_apply_without_sources() {
        let settings = Settings::from_toml("").unwrap();
        tracing::debug!(?settings, "Loaded default settings");

        assert_eq!(settings.editor.default_frequency, Some(Frequency::Weekly));
        assert_eq!(settings.editor.default_interval, 1);
        assert!(settings.editor.start_date_advisory);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn toml_overrides_defaults() {
        let settings = Settings::from_toml(
            r#"
            [editor]
            default_frequency = "monthly"
            default_interval = 3
            start_date_advisory = false

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(settings.editor.default_frequency, Some(Frequency::Monthly));
        assert_eq!(settings.editor.default_interval, 3);
        assert!(!settings.editor.start_date_advisory);
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn out_of_range_interval_is_rejected() {
        let result = Settings::from_toml(
            r"
            [editor]
            default_interval = 31
            ",
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_frequency_is_rejected() {
        let result = Settings::from_toml(
            r#"
            [editor]
            default_frequency = "hourly"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn editor_defaults_validate() {
        assert!(EditorSettings::default().validate().is_ok());

        let zero = EditorSettings {
            default_interval: 0,
            ..EditorSettings::default()
        };
        assert!(matches!(zero.validate(), Err(CoreError::ConfigError(_))));
    }
}
