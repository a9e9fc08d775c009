//! Per-kind default templates and caller overrides
//!
//! `create` merges an [`EffectOptions`] over the kind's template: any field
//! the caller leaves as `None` takes the template value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::effect::{
    Effect, EffectDetail, EffectId, EffectKind, EngineState, FadeState, ShieldState, WarpPhase,
    WarpState,
};
use crate::renderer::Color;

/// Upper bound on exhaust particles per effect
pub const MAX_EXHAUST_PARTICLES: u32 = 64;

/// Caller overrides for a new effect
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectOptions {
    pub duration: Option<f32>,
    pub intensity: Option<f32>,
    pub color: Option<Color>,
    pub size: Option<f32>,
    // Shield family
    pub hexagon_pattern: Option<bool>,
    pub ripple_center: Option<Vec2>,
    pub impact_intensity: Option<f32>,
    // Engine family
    pub thrust_vector: Option<Vec2>,
    pub particle_count: Option<u32>,
    pub exhaust_length: Option<f32>,
    // Warp family
    pub bubble_radius: Option<f32>,
    pub distortion_level: Option<f32>,
}

/// Common defaults for one kind
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub duration: f32,
    pub color: Color,
    pub size: f32,
    pub intensity: f32,
}

impl Template {
    pub fn for_kind(kind: EffectKind) -> Self {
        let (duration, color, size, intensity) = match kind {
            EffectKind::ShieldHit => (0.5, Color::rgb8(0x00, 0xaa, 0xff), 50.0, 1.0),
            EffectKind::ShieldRegenerate => (1.0, Color::rgb8(0x00, 0xff, 0xaa), 55.0, 0.3),
            EffectKind::EngineThrust => (0.1, Color::rgb8(0xff, 0x66, 0x00), 20.0, 0.8),
            EffectKind::ManeuveringThrust => (0.1, Color::rgb8(0xff, 0xaa, 0x00), 10.0, 0.8),
            EffectKind::WarpCharge => (2.0, Color::rgb8(0xaa, 0x00, 0xff), 80.0, 0.0),
            EffectKind::WarpBubble => (2.0, Color::rgb8(0x66, 0x00, 0xff), 80.0, 1.0),
            EffectKind::WeaponImpact => (0.3, Color::rgb8(0xff, 0xff, 0x00), 15.0, 1.0),
            EffectKind::Basic => (1.0, Color::WHITE, 20.0, 1.0),
        };
        Self {
            duration,
            color,
            size,
            intensity,
        }
    }
}

fn family_detail(kind: EffectKind, size: f32, intensity: f32, options: &EffectOptions) -> EffectDetail {
    match kind {
        EffectKind::ShieldHit | EffectKind::ShieldRegenerate => EffectDetail::Shield(ShieldState {
            hexagon_pattern: options.hexagon_pattern.unwrap_or(true),
            ripple_center: options.ripple_center,
            impact_intensity: options
                .impact_intensity
                .unwrap_or(if kind == EffectKind::ShieldHit { 1.0 } else { 0.0 }),
            base_size: size,
        }),
        EffectKind::EngineThrust | EffectKind::ManeuveringThrust => {
            let main = kind == EffectKind::EngineThrust;
            EffectDetail::Engine(EngineState {
                thrust_vector: options.thrust_vector.unwrap_or(Vec2::NEG_Y),
                particle_count: options
                    .particle_count
                    .unwrap_or(if main { 8 } else { 4 })
                    .min(MAX_EXHAUST_PARTICLES),
                exhaust_length: options.exhaust_length.unwrap_or(if main { 30.0 } else { 12.0 }),
            })
        }
        EffectKind::WarpCharge | EffectKind::WarpBubble => {
            let charging = kind == EffectKind::WarpCharge;
            EffectDetail::Warp(WarpState {
                phase: if charging {
                    WarpPhase::Charging
                } else {
                    WarpPhase::Bubble
                },
                bubble_radius: options
                    .bubble_radius
                    .unwrap_or(if charging { 10.0 } else { size }),
                distortion_level: options.distortion_level.unwrap_or(0.0),
            })
        }
        EffectKind::WeaponImpact | EffectKind::Basic => EffectDetail::Fade(FadeState {
            current_size: size,
            alpha: intensity,
        }),
    }
}

/// Build a fresh effect record from the kind's template and overrides
pub fn build(id: EffectId, kind: EffectKind, position: Vec2, options: &EffectOptions) -> Effect {
    let template = Template::for_kind(kind);
    let duration = options
        .duration
        .filter(|d| d.is_finite())
        .unwrap_or(template.duration)
        .max(0.0);
    let size = options.size.unwrap_or(template.size);
    let intensity = options.intensity.unwrap_or(template.intensity);

    Effect {
        id,
        kind,
        position,
        duration,
        time_remaining: duration,
        intensity,
        color: options.color.unwrap_or(template.color),
        size,
        animation_frame: 0.0,
        detail: family_detail(kind, size, intensity, options),
    }
}
