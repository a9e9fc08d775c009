//! Per-kind update rules
//!
//! Each rule is a function of the effect's elapsed fraction (and, for the
//! engine flicker, a random sample). Phase thresholds are fixed constants,
//! so a warp's phase only moves forward while `time_remaining` shrinks.

use super::effect::{Effect, EffectDetail, EffectKind, WarpPhase};
use super::source::RandomSource;

/// Warp charge becomes a bubble past this fraction
pub const CHARGE_TO_BUBBLE: f32 = 0.8;
/// Warp bubble starts distorting at this fraction
pub const BUBBLE_TO_DISTORTION: f32 = 0.3;
/// Warp bubble starts collapsing at this fraction
pub const DISTORTION_TO_COLLAPSE: f32 = 0.7;

/// Growth of a shield hit over its lifetime
const SHIELD_HIT_GROWTH: f32 = 30.0;

/// Run the kind-specific rule for a live effect
pub fn advance(effect: &mut Effect, rng: &mut dyn RandomSource) {
    let progress = effect.progress();

    match effect.kind {
        EffectKind::ShieldHit => {
            effect.intensity = (1.0 - progress * 2.0).max(0.0);
            if let EffectDetail::Shield(shield) = &effect.detail {
                effect.size = shield.base_size + progress * SHIELD_HIT_GROWTH;
            }
        }
        EffectKind::ShieldRegenerate => {
            effect.intensity = 0.3 + 0.2 * (effect.animation_frame * 0.1).sin();
        }
        EffectKind::EngineThrust | EffectKind::ManeuveringThrust => {
            effect.intensity = 0.8 + 0.2 * rng.next_unit();
        }
        EffectKind::WarpCharge => {
            effect.intensity = progress;
            if let EffectDetail::Warp(warp) = &mut effect.detail {
                warp.bubble_radius = 10.0 + progress * 70.0;
                if progress > CHARGE_TO_BUBBLE {
                    warp.phase = WarpPhase::Bubble;
                }
            }
        }
        EffectKind::WarpBubble => {
            if let EffectDetail::Warp(warp) = &mut effect.detail {
                if progress < BUBBLE_TO_DISTORTION {
                    warp.phase = WarpPhase::Bubble;
                    warp.distortion_level = progress * 2.0;
                } else if progress < DISTORTION_TO_COLLAPSE {
                    warp.phase = WarpPhase::Distortion;
                    warp.distortion_level = 0.6 + (progress - BUBBLE_TO_DISTORTION) * 2.0;
                } else {
                    let collapse = 1.0 - (progress - DISTORTION_TO_COLLAPSE) * 3.0;
                    warp.phase = WarpPhase::Collapse;
                    warp.bubble_radius = 80.0 * collapse;
                    effect.intensity = collapse;
                }
            }
        }
        EffectKind::WeaponImpact | EffectKind::Basic => {
            if let EffectDetail::Fade(fade) = &mut effect.detail {
                fade.current_size = effect.size * (1.0 + progress * 2.0);
                fade.alpha = effect.intensity * (1.0 - progress);
            }
        }
    }
}
