use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_CELL_DIMENSION, DEFAULT_CELL_SPACING, DEFAULT_MAX_ZOOM_SCALE, DEFAULT_TRANSITION_MS,
};
use crate::error::FieldError;

/// Configuration for the field presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub field: FieldConfig,
    pub zoom: ZoomConfig,
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Edge length of a square cell in pixels
    pub cell_dimension: f32,
    /// Gap between adjacent cells in pixels
    pub cell_spacing: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Upper bound for user zoom (the lower bound is computed per layout)
    pub max_scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Duration of animated layout transitions in milliseconds
    pub transition_duration_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: FieldConfig {
                cell_dimension: DEFAULT_CELL_DIMENSION,
                cell_spacing: DEFAULT_CELL_SPACING,
            },
            zoom: ZoomConfig {
                max_scale: DEFAULT_MAX_ZOOM_SCALE,
            },
            animation: AnimationConfig {
                transition_duration_ms: DEFAULT_TRANSITION_MS,
            },
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            let mut p = dirs::config_dir().expect("No config directory");
            p.push("fieldgrid");
            p.push("config.toml");
            p
        });

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            // Create default config
            let config = Config::default();
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = toml::to_string_pretty(&config)?;
            std::fs::write(&config_path, contents)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> anyhow::Result<()> {
        let config_path = path.unwrap_or_else(|| {
            let mut p = dirs::config_dir().expect("No config directory");
            p.push("fieldgrid");
            p.push("config.toml");
            p
        });

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;
        Ok(())
    }

    /// Reject values the layout math cannot run on before they reach it
    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.field.cell_dimension.is_finite()
            || self.field.cell_dimension <= 0.0
            || !self.field.cell_spacing.is_finite()
            || self.field.cell_spacing < 0.0
        {
            return Err(FieldError::InvalidCellMetrics {
                dimension: self.field.cell_dimension,
                spacing: self.field.cell_spacing,
            });
        }
        if !self.zoom.max_scale.is_finite() || self.zoom.max_scale < 1.0 {
            return Err(FieldError::InvalidZoomBounds {
                max_scale: self.zoom.max_scale,
            });
        }
        Ok(())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn config_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| {
            let mut path = PathBuf::from(home);
            path.push(".config");
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.field.cell_dimension, 41.0);
        assert_eq!(config.field.cell_spacing, 1.0);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let contents = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.field.cell_dimension, config.field.cell_dimension);
        assert_eq!(parsed.zoom.max_scale, config.zoom.max_scale);
        assert_eq!(
            parsed.animation.transition_duration_ms,
            config.animation.transition_duration_ms
        );
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let mut config = Config::default();
        config.field.cell_dimension = 0.0;
        assert!(matches!(
            config.validate(),
            Err(FieldError::InvalidCellMetrics { .. })
        ));

        let mut config = Config::default();
        config.field.cell_spacing = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.zoom.max_scale = 0.5;
        assert!(matches!(
            config.validate(),
            Err(FieldError::InvalidZoomBounds { .. })
        ));
    }
}
