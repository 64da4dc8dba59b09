use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use admin_mock::FixturesConfig;
use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use mock_scenarios::ScenarioConfig;
use serde::{Deserialize, Serialize};

/// Prefix of environment overrides; `__` separates nested keys
/// (`APP__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub scenarios: ScenarioConfig,
    pub fixtures: FixturesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// State directory; a leading `~` is expanded.
    pub home_dir: PathBuf,
    pub cors_allow_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8087,
            home_dir: PathBuf::from("~/.mock-admin"),
            cors_allow_any: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Layered load: defaults, then the YAML file (if any), then `APP__*`
    /// environment variables. `home_dir` is tilde-expanded.
    ///
    /// # Errors
    /// Fails if the file cannot be parsed, a value has the wrong type, an
    /// unknown key is present, or `~` cannot be resolved.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let mut config: Self = figment
            .extract()
            .context("failed to load configuration")?;
        config.server.home_dir = expand_tilde(&config.server.home_dir)?;
        Ok(config)
    }

    /// Applies `--port` and `-v` on top of the loaded layers.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) {
        if let Some(port) = port {
            self.server.port = port;
        }
        match verbose {
            0 => {}
            1 => self.logging.level = "info".to_owned(),
            2 => self.logging.level = "debug".to_owned(),
            _ => self.logging.level = "trace".to_owned(),
        }
    }

    /// # Errors
    /// Fails if the configuration cannot be rendered as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}

fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = dirs::home_dir().context("cannot expand '~': home directory is unknown")?;
    Ok(home.join(rest))
}
