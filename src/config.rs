use crate::error::ConfigError;
use crate::marker::{DEFAULT_MARKER_COLOR, HighlightMarker};

const ENV_MARKER: &str = "POSITION_PICKER_MARKER";
const ENV_FRAME_HEIGHT: &str = "POSITION_PICKER_FRAME_HEIGHT";

pub const DEFAULT_FRAME_HEIGHT: u32 = 430;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub marker_color: String,
    pub frame_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker_color: DEFAULT_MARKER_COLOR.to_string(),
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(color) = lookup(ENV_MARKER) {
            let color = color.trim();
            if !color.is_empty() {
                if !color.bytes().all(|b| b.is_ascii_alphanumeric()) {
                    return Err(ConfigError::InvalidConfiguration(format!(
                        "{ENV_MARKER} must be alphanumeric, got {color:?}"
                    )));
                }
                config.marker_color = color.to_string();
            }
        }

        if let Some(height) = lookup(ENV_FRAME_HEIGHT) {
            let height = height.trim();
            if !height.is_empty() {
                config.frame_height = match height.parse::<u32>() {
                    Ok(h) if h > 0 => h,
                    _ => {
                        return Err(ConfigError::InvalidConfiguration(format!(
                            "{ENV_FRAME_HEIGHT} must be a positive integer, got {height:?}"
                        )));
                    }
                };
            }
        }

        Ok(config)
    }

    pub fn marker(&self) -> HighlightMarker {
        HighlightMarker::new(&self.marker_color)
    }
}
