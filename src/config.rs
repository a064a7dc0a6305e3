use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directories {
    pub templates: String,

    pub units: String,
}

impl Default for Directories {
    fn default() -> Self {
        Directories {
            templates: default_template_dir(),
            units: default_unit_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    pub level: String,

    #[serde(default)]
    pub json_output: bool,
}

impl Default for Logging {
    fn default() -> Self {
        Logging {
            level: default_log_level(),
            json_output: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub directories: Directories,

    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let mut config = Config::default();
            config.apply_env_overrides();
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let mut config = Self::parse(&content)?;

        config.apply_env_overrides();

        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        std::env::var_os("MIRRORBOT_DEPLOY_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/etc/mirrorbot/deploy.toml"))
    }

    fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn template_dir(&self) -> PathBuf {
        PathBuf::from(&self.directories.templates)
    }

    pub fn unit_dir(&self) -> PathBuf {
        PathBuf::from(&self.directories.units)
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    pub fn json_output(&self) -> bool {
        self.logging.json_output
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MIRRORBOT_TEMPLATE_DIR") {
            self.directories.templates = val;
        }
        if let Ok(val) = std::env::var("MIRRORBOT_UNIT_DIR") {
            self.directories.units = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.level = val;
        }
    }
}

// The original deployment tool resolved template paths relative to the
// working directory; packaged installs point this at a fixed location.
fn default_template_dir() -> String {
    ".".to_string()
}

fn default_unit_dir() -> String {
    "/etc/systemd/system".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
