use std::{
    env,
    fs,
    io,
    path::{
        Path,
        PathBuf,
    },
};

use serde::Deserialize;
use thiserror::Error;

const CONFIG_FILES: &[&str] = &["config.yaml", "config.yml"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("no config.yaml or config.yml found in {0}")]
    NotFound(PathBuf),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to decode {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
}

/// All fields are required, there are no defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl Settings {
    pub fn load_from_current_dir() -> Result<Self, ConfigError> {
        let dir = env::current_dir().map_err(ConfigError::CurrentDir)?;
        Self::load_from_dir(&dir)
    }

    /// Load settings from the first of `config.yaml` / `config.yml` found in `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = find_config_file(dir)?;
        tracing::debug!(path = %path.display(), "reading config file");
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}

impl DatabaseSettings {
    pub fn connection_url(&self) -> String {
        self.format_url(&self.password)
    }

    /// Same as `connection_url` with the password masked, the only form that gets logged.
    pub fn redacted_url(&self) -> String {
        self.format_url("***")
    }

    fn format_url(&self, password: &str) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, password, self.host, self.port, self.name
        )
    }
}

fn find_config_file(dir: &Path) -> Result<PathBuf, ConfigError> {
    CONFIG_FILES
        .iter()
        .map(|f| dir.join(f))
        .find(|p| p.is_file())
        .ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))
}
