//! Physical constants for a simulation context
//!
//! Read by the integrator at call time, so two scenes can run with
//! different constants side by side.

use serde::{Deserialize, Serialize};

/// Named sets of physical constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PhysicsPreset {
    #[default]
    Arcade,
    Realistic,
    ZeroG,
}

impl PhysicsPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhysicsPreset::Arcade => "Arcade",
            PhysicsPreset::Realistic => "Realistic",
            PhysicsPreset::ZeroG => "ZeroG",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arcade" => Some(PhysicsPreset::Arcade),
            "realistic" | "real" => Some(PhysicsPreset::Realistic),
            "zerog" | "zero-g" | "zero_g" => Some(PhysicsPreset::ZeroG),
            _ => None,
        }
    }
}

/// Constants consumed by the motion integrator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Scales `mass / distance^2` into an acceleration
    pub gravity_strength: f32,
    /// Fraction of velocity kept per second (applied as `friction^dt`)
    pub friction_factor: f32,
    /// Hard cap on body speed
    pub max_velocity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::from_preset(PhysicsPreset::Arcade)
    }
}

impl PhysicsConfig {
    /// Constants for a named preset
    pub fn from_preset(preset: PhysicsPreset) -> Self {
        match preset {
            PhysicsPreset::Arcade => Self {
                gravity_strength: 100.0,
                friction_factor: 0.98,
                max_velocity: 500.0,
            },
            PhysicsPreset::Realistic => Self {
                gravity_strength: 6.674,
                friction_factor: 1.0,
                max_velocity: 2000.0,
            },
            PhysicsPreset::ZeroG => Self {
                gravity_strength: 0.0,
                friction_factor: 0.9,
                max_velocity: 300.0,
            },
        }
    }

    /// Parse from JSON; missing fields take their default values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load from an optional JSON document, falling back to defaults
    pub fn load_or_default(json: Option<&str>) -> Self {
        if let Some(json) = json {
            match Self::from_json(json) {
                Ok(config) => {
                    log::info!("Loaded physics config");
                    return config.validated();
                }
                Err(e) => log::warn!("Invalid physics config ({e}), using defaults"),
            }
        }

        log::info!("Using default physics config");
        Self::default()
    }

    /// Copy with unusable fields replaced by defaults
    pub fn validated(&self) -> Self {
        let defaults = Self::default();
        let mut config = *self;

        if !config.gravity_strength.is_finite() {
            log::warn!("gravity_strength {} is not finite, using default", config.gravity_strength);
            config.gravity_strength = defaults.gravity_strength;
        }
        if !config.friction_factor.is_finite() {
            log::warn!("friction_factor {} is not finite, using default", config.friction_factor);
            config.friction_factor = defaults.friction_factor;
        } else if !(0.0..=1.0).contains(&config.friction_factor) {
            log::warn!("friction_factor {} outside [0, 1], clamping", config.friction_factor);
            config.friction_factor = config.friction_factor.clamp(0.0, 1.0);
        }
        if !config.max_velocity.is_finite() || config.max_velocity < 0.0 {
            log::warn!("max_velocity {} is unusable, using default", config.max_velocity);
            config.max_velocity = defaults.max_velocity;
        }

        config
    }
}
