//! Settings loaded at start-up: built-in defaults, then `configuration/base.yaml`, then
//! `APP_`-prefixed environment variables (`APP_CUSTOMERS__UPDATE_MISSING=reject`).

use crate::clients::UpdatePolicy;
use crate::resolver::ViaCepClient;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub resolver: ResolverSettings,
    pub customers: CustomerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverSettings {
    pub base_url: String,
    pub timeout_milliseconds: u64,
}

impl ResolverSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(&self) -> Result<ViaCepClient, reqwest::Error> {
        ViaCepClient::new(self.base_url.clone(), self.timeout())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerSettings {
    /// Capacity of each store actor's request channel. Zero is rejected on load.
    pub channel_capacity: NonZeroUsize,
    #[serde(default)]
    pub update_missing: UpdatePolicy,
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {e}")))?;
    let configuration_directory = base_path.join("configuration");

    with_defaults(Config::builder())?
        .add_source(File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Settings>()
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("resolver.base_url", "https://viacep.com.br/ws")?
        .set_default("resolver.timeout_milliseconds", 5000_i64)?
        .set_default("customers.channel_capacity", 32_i64)?
        .set_default("customers.update_missing", "ignore")
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok;
    use config::FileFormat;

    fn load(yaml: &str) -> Result<Settings, ConfigError> {
        with_defaults(Config::builder())?
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let settings = assert_ok!(load(""));

        assert_eq!(settings.resolver.base_url, "https://viacep.com.br/ws");
        assert_eq!(settings.resolver.timeout(), Duration::from_secs(5));
        assert_eq!(settings.customers.channel_capacity.get(), 32);
        assert_eq!(settings.customers.update_missing, UpdatePolicy::Ignore);
    }

    #[test]
    fn file_values_override_defaults() {
        let settings = assert_ok!(load(
            r#"
resolver:
  base_url: "http://127.0.0.1:8080"
  timeout_milliseconds: 250
customers:
  channel_capacity: 4
  update_missing: reject
"#
        ));

        assert_eq!(settings.resolver.base_url, "http://127.0.0.1:8080");
        assert_eq!(settings.resolver.timeout(), Duration::from_millis(250));
        assert_eq!(settings.customers.channel_capacity.get(), 4);
        assert_eq!(settings.customers.update_missing, UpdatePolicy::Reject);
    }

    #[test]
    fn zero_channel_capacity_is_rejected() {
        let outcome = load("customers:\n  channel_capacity: 0\n");
        assert!(outcome.is_err());
    }

    #[test]
    fn unknown_update_policy_is_rejected() {
        let outcome = load("customers:\n  update_missing: overwrite\n");
        assert!(outcome.is_err());
    }
}
