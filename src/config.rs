use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::ClientConfig;
use crate::serving::ServingConfig;

pub const CONFIG_FILE: &str = "App.toml";
pub const ENV_PREFIX: &str = "TODO_BOARD_";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub serving: ServingConfig,
    pub client: ClientConfig,
}

/// Built-in defaults, overridden by `App.toml` when present, then by
/// `TODO_BOARD_<SECTION>__<KEY>` environment variables.
pub fn figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

pub fn load() -> Result<Config> {
    let config: Config = figment().extract()?;
    info!(
        port = config.serving.port,
        endpoint = %config.client.endpoint,
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config: Config = figment().extract()?;
            assert_eq!(config.serving.port, 8000);
            assert_eq!(config.client.endpoint, "http://localhost:8000/graphql");
            Ok(())
        });
    }

    #[test]
    fn file_then_env_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                [serving]
                port = 9000

                [client]
                endpoint = "http://todos.internal:9000/graphql"
                "#,
            )?;
            jail.set_env("TODO_BOARD_SERVING__PORT", "9100");

            let config: Config = figment().extract()?;
            assert_eq!(config.serving.port, 9100);
            assert_eq!(config.client.endpoint, "http://todos.internal:9000/graphql");
            Ok(())
        });
    }
}
