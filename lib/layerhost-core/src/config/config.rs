use crate::config::serializer::render_documented_yaml;
use crate::hotkey::KeyCombo;
use crate::{LayerHostError, LayerHostResult};
use log::{trace, warn};
use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// The path the config file was loaded from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Color of the backdrop behind the presented overlay (RGB)
    pub backdrop_color: (u8, u8, u8),
    /// Opacity of the backdrop (0.0 - 1.0)
    pub backdrop_opacity: f32,
    /// Whether to unmount the host container when the last overlay closes
    pub unmount_when_empty: bool,
    /// Hotkey that closes the topmost overlay
    #[schemars(with = "String")]
    pub close_hotkey: KeyCombo,
}

static CURRENT_CONFIG: Lazy<Arc<RwLock<Config>>> =
    Lazy::new(|| Arc::new(RwLock::new(Config::default())));

impl Config {
    pub fn default_config_path() -> Option<PathBuf> {
        crate::paths::default_config_path()
    }

    pub fn load(config_path: Option<&Path>, save: bool) -> LayerHostResult<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path().ok_or_else(|| {
                LayerHostError::Config("could not determine default config directory".to_owned())
            })?,
        };

        if !path.exists() {
            Self::create_default_config_file(&path)?;
            trace!("Created default config file at: {}", path.display());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            LayerHostError::Config(format!("failed to read config file '{}': {e}", path.display()))
        })?;

        let mut config: Config = serde_yaml::from_str(&contents).map_err(|e| {
            LayerHostError::Config(format!(
                "failed to parse config file '{}': {e}",
                path.display()
            ))
        })?;

        config.config_path = Some(path.clone());

        // Save the config back so missing fields get filled in with defaults
        if save {
            if let Err(e) = config.save_to_file(&path) {
                warn!("Failed to update config file with missing fields: {e}");
            }
        }

        Ok(config)
    }

    fn create_default_config_file(path: &Path) -> LayerHostResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| LayerHostError::Config(e.to_string()))?;
        }

        Config::default().save_to_file(path)
    }

    /// Save this config to a file, with each field preceded by its
    /// documentation.
    pub fn save_to_file(&self, path: &Path) -> LayerHostResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| LayerHostError::Config(e.to_string()))?;
        }

        let contents = render_documented_yaml(self)?;
        fs::write(path, contents).map_err(|e| LayerHostError::Config(e.to_string()))
    }

    pub fn set_config(config: Config) {
        if let Ok(mut global_config) = CURRENT_CONFIG.write() {
            *global_config = config;
        }
    }

    pub fn current() -> std::sync::RwLockReadGuard<'static, Config> {
        CURRENT_CONFIG.read().unwrap()
    }

    pub fn update<F>(f: F)
    where
        F: FnOnce(&mut Config),
    {
        if let Ok(mut config) = CURRENT_CONFIG.write() {
            f(&mut config);
        }
    }

    pub fn reset() {
        if let Ok(mut config) = CURRENT_CONFIG.write() {
            *config = Config::default();
        }
    }

    pub fn backdrop_color() -> (u8, u8, u8) {
        Self::current().backdrop_color
    }

    pub fn backdrop_opacity() -> f32 {
        Self::current().backdrop_opacity
    }

    pub fn unmount_when_empty() -> bool {
        Self::current().unmount_when_empty
    }

    pub fn close_hotkey() -> KeyCombo {
        Self::current().close_hotkey.clone()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            backdrop_color: (0, 0, 0),
            backdrop_opacity: 0.7,
            unmount_when_empty: true,
            close_hotkey: "escape".into(),
        }
    }
}
