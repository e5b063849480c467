use std::fmt;
use std::str::FromStr;

use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

/// Colour as written in the config file: hex sRGB, with or without a
/// leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct ConfigColor(Srgb<u8>);

impl ConfigColor {
    pub fn to_srgba(self) -> Srgba<f64> {
        let c = self.0.into_format::<f64>();
        Srgba::new(c.red, c.green, c.blue, 1.0)
    }
}

impl FromStr for ConfigColor {
    type Err = palette::rgb::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for ConfigColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }
}

/// Fill colours for the three running speeds. Unset entries resolve to a
/// GTK named colour, or transparent when the theme has none either.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct PaletteConfig {
    pub fan_color_1: Option<ConfigColor>,
    pub fan_color_2: Option<ConfigColor>,
    pub fan_color_3: Option<ConfigColor>,
}

/// Display text drawn at each of the four dial positions.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Labels {
    pub off: String,
    pub low: String,
    pub medium: String,
    pub high: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            off: "off".to_owned(),
            low: "low".to_owned(),
            medium: "medium".to_owned(),
            high: "high".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub labels: Labels,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "fandial", "fandial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("FANDIAL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default configuration: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_deserialization() {
        let cases = vec![
            ("\"#f94144\"", "#f94144"),
            ("\"f94144\"", "#f94144"),
            ("\"#90BE6D\"", "#90be6d"),
        ];

        for (json, display) in cases {
            let color: ConfigColor = serde_json::from_str(json).unwrap();
            assert_eq!(color.to_string(), display);
        }

        assert!(serde_json::from_str::<ConfigColor>("\"not-a-color\"").is_err());
    }

    #[test]
    fn test_color_converts_to_unit_range() {
        let color: ConfigColor = "#ff0080".parse().unwrap();
        let srgba = color.to_srgba();

        assert!((srgba.red - 1.0).abs() < 1e-5);
        assert!(srgba.green.abs() < 1e-5);
        assert!((srgba.blue - 128.0 / 255.0).abs() < 1e-5);
        assert_eq!(srgba.alpha, 1.0);
    }

    #[test]
    fn test_missing_palette_entries_stay_unset() {
        let palette: PaletteConfig =
            serde_json::from_str("{\"fan_color_1\": \"#90be6d\"}").unwrap();

        assert!(palette.fan_color_1.is_some());
        assert!(palette.fan_color_2.is_none());
        assert!(palette.fan_color_3.is_none());
    }

    #[test]
    fn test_default_labels() {
        let labels = Labels::default();

        assert_eq!(labels.off, "off");
        assert_eq!(labels.low, "low");
        assert_eq!(labels.medium, "medium");
        assert_eq!(labels.high, "high");
    }

    #[test]
    fn test_bundled_default_config_is_valid() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.palette.fan_color_1.is_some());
        assert!(config.palette.fan_color_2.is_some());
        assert!(config.palette.fan_color_3.is_some());
        assert_eq!(config.labels.off, "off");
    }
}
