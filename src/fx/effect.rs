//! Effect records
//!
//! An effect is a flat common header plus one family-specific payload.
//! The kind tag decides which update and draw routine runs; there is no
//! per-kind type hierarchy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::Color;

/// Effect handle, assigned from a monotonically increasing counter
pub type EffectId = u64;

/// Closed set of effect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    ShieldHit,
    ShieldRegenerate,
    EngineThrust,
    ManeuveringThrust,
    WarpCharge,
    WarpBubble,
    WeaponImpact,
    /// Generic fade-and-expand effect; also the fallback for unknown names
    Basic,
}

impl EffectKind {
    pub const ALL: [EffectKind; 8] = [
        EffectKind::ShieldHit,
        EffectKind::ShieldRegenerate,
        EffectKind::EngineThrust,
        EffectKind::ManeuveringThrust,
        EffectKind::WarpCharge,
        EffectKind::WarpBubble,
        EffectKind::WeaponImpact,
        EffectKind::Basic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::ShieldHit => "shield_hit",
            EffectKind::ShieldRegenerate => "shield_regenerate",
            EffectKind::EngineThrust => "engine_thrust",
            EffectKind::ManeuveringThrust => "maneuvering_thrust",
            EffectKind::WarpCharge => "warp_charge",
            EffectKind::WarpBubble => "warp_bubble",
            EffectKind::WeaponImpact => "weapon_impact",
            EffectKind::Basic => "basic",
        }
    }

    /// Look up a kind by name, ignoring case and `-`/`_` separators
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "shieldhit" => Some(EffectKind::ShieldHit),
            "shieldregenerate" | "shieldregen" => Some(EffectKind::ShieldRegenerate),
            "enginethrust" => Some(EffectKind::EngineThrust),
            "maneuveringthrust" => Some(EffectKind::ManeuveringThrust),
            "warpcharge" => Some(EffectKind::WarpCharge),
            "warpbubble" => Some(EffectKind::WarpBubble),
            "weaponimpact" => Some(EffectKind::WeaponImpact),
            "basic" | "generic" => Some(EffectKind::Basic),
            _ => None,
        }
    }
}

/// Stages of a warp sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarpPhase {
    Charging,
    Bubble,
    Distortion,
    Collapse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShieldState {
    pub hexagon_pattern: bool,
    /// Where the shield was struck, if anywhere
    pub ripple_center: Option<Vec2>,
    pub impact_intensity: f32,
    /// Size at creation; hits expand from here
    pub base_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Direction the ship is pushed; exhaust trails the opposite way
    pub thrust_vector: Vec2,
    pub particle_count: u32,
    pub exhaust_length: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarpState {
    pub phase: WarpPhase,
    pub bubble_radius: f32,
    pub distortion_level: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FadeState {
    pub current_size: f32,
    pub alpha: f32,
}

/// Family-specific effect data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EffectDetail {
    Shield(ShieldState),
    Engine(EngineState),
    Warp(WarpState),
    Fade(FadeState),
}

/// A transient, time-boxed visual state object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub id: EffectId,
    pub kind: EffectKind,
    pub position: Vec2,
    /// Total lifetime in seconds
    pub duration: f32,
    /// Seconds left; the effect is removed once this reaches zero
    pub time_remaining: f32,
    /// Nominally [0, 1]; not every rule clamps it
    pub intensity: f32,
    pub color: Color,
    pub size: f32,
    /// Frame counter on a fixed 60 fps clock
    pub animation_frame: f32,
    pub detail: EffectDetail,
}

impl Effect {
    /// Elapsed fraction of the lifetime, in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 || !self.duration.is_finite() {
            return 1.0;
        }
        (1.0 - self.time_remaining / self.duration).clamp(0.0, 1.0)
    }

    pub fn warp(&self) -> Option<&WarpState> {
        match &self.detail {
            EffectDetail::Warp(warp) => Some(warp),
            _ => None,
        }
    }

    pub fn shield(&self) -> Option<&ShieldState> {
        match &self.detail {
            EffectDetail::Shield(shield) => Some(shield),
            _ => None,
        }
    }

    pub fn engine(&self) -> Option<&EngineState> {
        match &self.detail {
            EffectDetail::Engine(engine) => Some(engine),
            _ => None,
        }
    }

    pub fn fade(&self) -> Option<&FadeState> {
        match &self.detail {
            EffectDetail::Fade(fade) => Some(fade),
            _ => None,
        }
    }

    /// Current warp phase, if this is a warp effect
    pub fn phase(&self) -> Option<WarpPhase> {
        self.warp().map(|w| w.phase)
    }
}
