use std::fs;

use log::{debug, warn};
use serde::Deserialize;

use crate::player::PlayerState;
use crate::{EngineError, EngineResult};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub player: PlayerConfig,
}

#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    /// Render resolution, one ray per horizontal pixel.
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct MotionConfig {
    /// Map units per frame while a movement key is held.
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    /// Radians per frame while a rotation key is held.
    #[serde(default = "default_rot_speed")]
    pub rot_speed: f32,
}

#[derive(Debug, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_start_x")]
    pub start_x: f32,
    #[serde(default = "default_start_y")]
    pub start_y: f32,
    #[serde(default = "default_dir_x")]
    pub dir_x: f32,
    #[serde(default)]
    pub dir_y: f32,
    #[serde(default)]
    pub plane_x: f32,
    #[serde(default = "default_plane_y")]
    pub plane_y: f32,
}

fn default_width() -> usize {
    800
}
fn default_height() -> usize {
    600
}
fn default_title() -> String {
    "Gridcaster".to_string()
}
fn default_move_speed() -> f32 {
    0.1
}
fn default_rot_speed() -> f32 {
    0.05
}
fn default_start_x() -> f32 {
    22.5
}
fn default_start_y() -> f32 {
    12.5
}
fn default_dir_x() -> f32 {
    -1.0
}
fn default_plane_y() -> f32 {
    0.66
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: default_move_speed(),
            rot_speed: default_rot_speed(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: default_start_x(),
            start_y: default_start_y(),
            dir_x: default_dir_x(),
            dir_y: 0.0,
            plane_x: 0.0,
            plane_y: default_plane_y(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            motion: MotionConfig::default(),
            player: PlayerConfig::default(),
        }
    }
}

impl Config {
    /// Read and parse a config file.
    pub fn load(path: &str) -> EngineResult<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(EngineError::from)
    }

    /// Load configuration, falling back to defaults if the file is missing
    /// or unparsable. Startup never fails on configuration.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(config) => {
                debug!("loaded configuration from {path}");
                config
            }
            Err(EngineError::Io(_)) => {
                debug!("no {path} found, using default configuration");
                Config::default()
            }
            Err(e) => {
                warn!("failed to parse {path}: {e}; using default configuration");
                Config::default()
            }
        }
    }
}

impl PlayerConfig {
    /// Initial pose described by this configuration.
    pub fn pose(&self) -> PlayerState {
        PlayerState::new(
            [self.start_x, self.start_y],
            [self.dir_x, self.dir_y],
            [self.plane_x, self.plane_y],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.display.width, 800);
        assert_eq!(config.display.height, 600);
        assert_eq!(config.motion.move_speed, 0.1);
        assert_eq!(config.motion.rot_speed, 0.05);
        assert_eq!(config.player.start_x, 22.5);
        assert_eq!(config.player.plane_y, 0.66);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: Config = toml::from_str(
            "[display]\nwidth = 320\n\n[motion]\nrot_speed = 0.1\n",
        )
        .unwrap();
        assert_eq!(config.display.width, 320);
        assert_eq!(config.display.height, 600);
        assert_eq!(config.motion.rot_speed, 0.1);
        assert_eq!(config.motion.move_speed, 0.1);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("does-not-exist.toml");
        assert_eq!(config.display.width, 800);
    }

    #[test]
    fn configured_pose_reaches_the_player_state() {
        let config: Config = toml::from_str(
            "[player]\nstart_x = 3.5\nstart_y = 4.5\ndir_x = 0.0\ndir_y = 1.0\nplane_x = -0.66\nplane_y = 0.0\n",
        )
        .unwrap();
        let pose = config.player.pose();
        assert_eq!(pose.pos, [3.5, 4.5]);
        assert_eq!(pose.dir, [0.0, 1.0]);
        assert_eq!(pose.plane, [-0.66, 0.0]);
    }
}
