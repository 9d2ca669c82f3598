//! # Behaviour Configuration
//!
//! Tuning constants for the behaviour task, loadable from YAML or JSON so they
//! can change without a rebuild.
//!
//! ## Usage
//! ```rust
//! use bh_core::config::BehaviourConfig;
//!
//! let config = BehaviourConfig::default();
//! assert_eq!(config.walk_phase_frames, 60);
//! let quick = BehaviourConfig::quick();
//! assert!(quick.validate().is_ok());
//! ```

mod env_overrides;

pub use env_overrides::{ENV_NEAR_FIELD_MM, ENV_WALK_PHASE_FRAMES};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BehaviourError, Result};
use crate::types::LedTarget;

/// Behaviour task parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviourConfig {
    /// Frames spent walking before each kick/dribble attempt (default: 60)
    pub walk_phase_frames: u32,
    /// Forward ball distance below which the line-up hint is raised, mm (default: 300)
    pub near_field_threshold_mm: f32,
    /// Frame rate of the behaviour thread. Only used for reporting (default: 30)
    pub frame_rate_hz: u32,
    /// LED group used for the action indicator (default: left eye)
    pub indicator: LedTarget,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            walk_phase_frames: 60,
            near_field_threshold_mm: 300.0,
            frame_rate_hz: 30,
            indicator: LedTarget::LeftEye,
        }
    }
}

impl BehaviourConfig {
    /// Values used on the robot
    pub fn realistic() -> Self {
        Self::default()
    }

    /// Short warm-up for demos and tests
    pub fn quick() -> Self {
        let mut cfg = Self::default();
        cfg.walk_phase_frames = 5;
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.walk_phase_frames == 0 {
            return Err(BehaviourError::InvalidConfig(
                "walk_phase_frames must be at least 1".to_string(),
            ));
        }
        if self.frame_rate_hz == 0 {
            return Err(BehaviourError::InvalidConfig(
                "frame_rate_hz must be at least 1".to_string(),
            ));
        }
        if !self.near_field_threshold_mm.is_finite() || self.near_field_threshold_mm < 0.0 {
            return Err(BehaviourError::InvalidConfig(format!(
                "near_field_threshold_mm must be a non-negative number, got {}",
                self.near_field_threshold_mm
            )));
        }
        Ok(())
    }

    /// Walk phase length in seconds at the configured frame rate.
    pub fn walk_phase_secs(&self) -> f32 {
        self.walk_phase_frames as f32 / self.frame_rate_hz.max(1) as f32
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase());
        let cfg = match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text)?,
            Some("json") => Self::from_json_str(&text)?,
            _ => {
                return Err(BehaviourError::UnsupportedConfigFormat {
                    path: path.display().to_string(),
                })
            }
        };
        cfg.validate()?;
        tracing::info!(
            path = %path.display(),
            walk_phase_frames = cfg.walk_phase_frames,
            near_field_threshold_mm = cfg.near_field_threshold_mm,
            "behaviour config loaded"
        );
        Ok(cfg)
    }
}

// ========== Tests ==========
