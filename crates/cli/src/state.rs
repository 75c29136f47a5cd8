use std::{fs, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::seed::Seed;

pub const APP_NAME: &str = "wiki";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SEED_FILE_NAME: &str = "seed.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default log level, overridable with `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Seed file to load the wiki from. Relative paths are resolved
    ///  against the wiki directory; defaults to `seed.toml` inside it.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            seed_file: None,
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> Result<tracing::Level, StateError> {
        tracing::Level::from_str(&self.log_level)
            .map_err(|_| StateError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the wiki directory (~/.wiki)
    pub wiki_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the wiki directory path (custom or default ~/.wiki)
    pub fn wiki_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new wiki directory with a config file and a sample seed
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let wiki_dir = Self::wiki_dir(custom_path)?;

        if wiki_dir.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&wiki_dir)?;

        let config = config.unwrap_or_default();
        let config_path = wiki_dir.join(CONFIG_FILE_NAME);
        fs::write(&config_path, toml::to_string_pretty(&config)?)?;

        let state = Self {
            wiki_dir,
            config_path,
            config,
        };
        fs::write(state.seed_path(), toml::to_string_pretty(&Seed::sample())?)?;

        Ok(state)
    }

    /// Load existing state from the wiki directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let wiki_dir = Self::wiki_dir(custom_path)?;

        if !wiki_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_path = wiki_dir.join(CONFIG_FILE_NAME);
        let config: AppConfig = toml::from_str(&fs::read_to_string(&config_path)?)?;

        Ok(Self {
            wiki_dir,
            config_path,
            config,
        })
    }

    /// Where the seed file lives
    pub fn seed_path(&self) -> PathBuf {
        match &self.config.seed_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.wiki_dir.join(path),
            None => self.wiki_dir.join(SEED_FILE_NAME),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("wiki directory not initialized. Run 'wiki init' first")]
    NotInitialized,
    #[error("wiki directory already initialized")]
    AlreadyInitialized,
    #[error("no home directory found")]
    NoHomeDirectory,
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_then_load() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("wiki");

        let created = AppState::init(Some(dir.clone()), None).unwrap();
        assert!(created.config_path.exists());
        assert!(created.seed_path().exists());

        let loaded = AppState::load(Some(dir)).unwrap();
        assert_eq!(loaded.config, AppConfig::default());
        assert_eq!(loaded.config.log_level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("wiki");

        AppState::init(Some(dir.clone()), None).unwrap();
        assert!(matches!(
            AppState::init(Some(dir), None),
            Err(StateError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_load_uninitialized_fails() {
        let temp = tempfile::tempdir().unwrap();
        assert!(matches!(
            AppState::load(Some(temp.path().join("missing"))),
            Err(StateError::NotInitialized)
        ));
    }

    #[test]
    fn test_seed_path_resolution() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("wiki");
        let mut state = AppState::init(Some(dir.clone()), None).unwrap();
        assert_eq!(state.seed_path(), dir.join(SEED_FILE_NAME));

        state.config.seed_file = Some(PathBuf::from("other.toml"));
        assert_eq!(state.seed_path(), dir.join("other.toml"));

        let absolute = temp.path().join("elsewhere.toml");
        state.config.seed_file = Some(absolute.clone());
        assert_eq!(state.seed_path(), absolute);
    }

    #[test]
    fn test_invalid_log_level() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            seed_file: None,
        };
        assert!(matches!(
            config.log_level(),
            Err(StateError::InvalidLogLevel(_))
        ));
    }
}
