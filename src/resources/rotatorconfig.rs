//! Rotator configuration resource.
//!
//! Loaded once, before the injector runs, from an INI file. Every flag spawned
//! afterwards shares these values through the template.
//!
//! # Configuration File Format
//!
//! ```ini
//! [flag_rotator]
//! delta_angle = 5.0
//! clockwise_name = Clockwise
//! counterclockwise_name = Counterclockwise
//! ```
//!
//! Missing keys keep their defaults. An empty label keeps the default label.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

const SECTION: &str = "flag_rotator";
const DEFAULT_DELTA_ANGLE: f32 = 5.0;
const DEFAULT_CLOCKWISE_NAME: &str = "Clockwise";
const DEFAULT_COUNTERCLOCKWISE_NAME: &str = "Counterclockwise";
const DEFAULT_CONFIG_PATH: &str = "./flagturn.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RotatorConfig {
    /// Step angle in degrees.
    pub delta_angle: f32,
    /// Label for the clockwise action.
    pub clockwise_name: String,
    /// Label for the counterclockwise action.
    pub counterclockwise_name: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RotatorConfig {
    /// Create a configuration holding the default values.
    pub fn new() -> Self {
        Self {
            delta_angle: DEFAULT_DELTA_ANGLE,
            clockwise_name: DEFAULT_CLOCKWISE_NAME.to_string(),
            counterclockwise_name: DEFAULT_COUNTERCLOCKWISE_NAME.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load values from the INI file at `config_path`.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Load values from INI text. Used by tests and embedded defaults.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        match config.getfloat(SECTION, "delta_angle") {
            Ok(Some(angle)) if (angle as f32).is_finite() => self.delta_angle = angle as f32,
            Ok(Some(angle)) => warn!("Ignoring non-finite delta_angle {}", angle),
            Ok(None) => {}
            Err(e) => warn!("Ignoring invalid delta_angle: {}", e),
        }
        if let Some(name) = config.get(SECTION, "clockwise_name") {
            if !name.trim().is_empty() {
                self.clockwise_name = name.trim().to_string();
            }
        }
        if let Some(name) = config.get(SECTION, "counterclockwise_name") {
            if !name.trim().is_empty() {
                self.counterclockwise_name = name.trim().to_string();
            }
        }

        info!(
            "Loaded rotator config: delta_angle={}, clockwise='{}', counterclockwise='{}'",
            self.delta_angle, self.clockwise_name, self.counterclockwise_name
        );
    }
}
