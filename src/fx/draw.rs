//! Per-kind draw routines
//!
//! Geometry and color only; every pixel goes through the [`DrawSink`].

use glam::Vec2;
use std::f32::consts::TAU;

use super::effect::{Effect, EffectDetail, EffectKind, EngineState, FadeState, ShieldState, WarpPhase, WarpState};
use super::template::MAX_EXHAUST_PARTICLES;
use crate::renderer::DrawSink;

/// Draw one effect. `now` is wall-clock seconds, used only by the warp glow.
pub fn draw<S: DrawSink + ?Sized>(effect: &Effect, sink: &mut S, now: f64) {
    match (&effect.detail, effect.kind) {
        (EffectDetail::Shield(shield), EffectKind::ShieldHit) => draw_shield_hit(effect, shield, sink),
        (EffectDetail::Shield(shield), _) => draw_shield_regenerate(effect, shield, sink),
        (EffectDetail::Engine(engine), _) => draw_exhaust(effect, engine, sink),
        (EffectDetail::Warp(warp), EffectKind::WarpCharge) => draw_warp_charge(effect, warp, sink, now),
        (EffectDetail::Warp(warp), _) => draw_warp_bubble(effect, warp, sink),
        (EffectDetail::Fade(fade), kind) => draw_fade(effect, fade, kind, sink),
    }
}

/// Closed hexagon outline
fn hexagon(center: Vec2, radius: f32, rotation: f32) -> [Vec2; 7] {
    std::array::from_fn(|i| {
        let theta = rotation + (i % 6) as f32 * TAU / 6.0;
        center + Vec2::new(theta.cos(), theta.sin()) * radius
    })
}

fn draw_shield_hit<S: DrawSink + ?Sized>(effect: &Effect, shield: &ShieldState, sink: &mut S) {
    let alpha = effect.intensity;
    sink.fill_circle(effect.position, effect.size, effect.color.with_alpha(alpha * 0.15));
    sink.stroke_circle(effect.position, effect.size, effect.color.with_alpha(alpha), 2.0);

    if shield.hexagon_pattern {
        let cells = hexagon(effect.position, effect.size * 0.9, effect.animation_frame * 0.01);
        sink.stroke_path(&cells, effect.color.with_alpha(alpha * 0.6), 1.0);
    }

    if let Some(center) = shield.ripple_center {
        let ripple = effect.size * (0.2 + 0.8 * effect.progress());
        let ripple_alpha = alpha * shield.impact_intensity.clamp(0.0, 1.0);
        sink.stroke_circle(center, ripple, effect.color.with_alpha(ripple_alpha), 1.5);
    }
}

fn draw_shield_regenerate<S: DrawSink + ?Sized>(effect: &Effect, shield: &ShieldState, sink: &mut S) {
    let alpha = effect.intensity;
    sink.stroke_circle(effect.position, effect.size, effect.color.with_alpha(alpha), 1.5);
    if shield.hexagon_pattern {
        let cells = hexagon(effect.position, effect.size, -effect.animation_frame * 0.02);
        sink.stroke_path(&cells, effect.color.with_alpha(alpha * 0.5), 1.0);
    }
}

fn draw_exhaust<S: DrawSink + ?Sized>(effect: &Effect, engine: &EngineState, sink: &mut S) {
    let mut dir = -engine.thrust_vector.normalize_or_zero();
    if dir == Vec2::ZERO {
        dir = Vec2::Y;
    }
    let perp = dir.perp();
    let alpha = effect.intensity;
    let length = engine.exhaust_length * effect.intensity;
    let tail = effect.position + dir * length;

    sink.stroke_path(
        &[effect.position, tail],
        effect.color.with_alpha(alpha),
        effect.size * 0.3,
    );

    // Fields are public, so re-apply the template cap here
    let count = engine.particle_count.min(MAX_EXHAUST_PARTICLES);
    for i in 0..count {
        let t = (i + 1) as f32 / (count + 1) as f32;
        let jitter = (effect.animation_frame * 0.7 + i as f32 * 1.3).sin() * effect.size * 0.15;
        let p = effect.position + dir * length * t + perp * jitter;
        sink.fill_circle(
            p,
            effect.size * 0.25 * (1.0 - t),
            effect.color.with_alpha(alpha * (1.0 - t)),
        );
    }
}

fn draw_warp_charge<S: DrawSink + ?Sized>(effect: &Effect, warp: &WarpState, sink: &mut S, now: f64) {
    // Glow follows wall-clock time so it pulses at the same rate at any frame rate
    let pulse = 0.75 + 0.25 * ((now * 6.0).sin() as f32);
    let alpha = effect.intensity * pulse;
    sink.fill_circle(effect.position, warp.bubble_radius, effect.color.with_alpha(alpha * 0.25));
    sink.stroke_circle(effect.position, warp.bubble_radius, effect.color.with_alpha(alpha), 2.0);

    if warp.phase != WarpPhase::Charging {
        sink.stroke_circle(
            effect.position,
            warp.bubble_radius * 1.1,
            effect.color.with_alpha(alpha * 0.5),
            1.0,
        );
    }
}

fn draw_warp_bubble<S: DrawSink + ?Sized>(effect: &Effect, warp: &WarpState, sink: &mut S) {
    let radius = warp.bubble_radius.max(0.0);
    let alpha = effect.intensity;

    match warp.phase {
        WarpPhase::Charging | WarpPhase::Bubble => {
            sink.fill_circle(effect.position, radius, effect.color.with_alpha(alpha * 0.1));
            sink.stroke_circle(effect.position, radius, effect.color.with_alpha(alpha), 3.0);
        }
        WarpPhase::Distortion => {
            for ring in 0..3 {
                let k = ring as f32;
                let wobble = (effect.animation_frame * 0.2 + k).sin() * warp.distortion_level * 0.1;
                sink.stroke_circle(
                    effect.position,
                    radius * (1.0 - k * 0.15 + wobble),
                    effect.color.with_alpha(alpha * (1.0 - k * 0.25)),
                    2.0,
                );
            }
        }
        WarpPhase::Collapse => {
            sink.fill_circle(effect.position, radius, effect.color.with_alpha(alpha * 0.5));
            sink.stroke_circle(effect.position, radius, effect.color.with_alpha(alpha), 2.0);
        }
    }
}

fn draw_fade<S: DrawSink + ?Sized>(effect: &Effect, fade: &FadeState, kind: EffectKind, sink: &mut S) {
    sink.fill_circle(effect.position, fade.current_size, effect.color.with_alpha(fade.alpha));
    if kind == EffectKind::WeaponImpact {
        sink.stroke_circle(
            effect.position,
            fade.current_size * 1.2,
            effect.color.with_alpha(fade.alpha * 0.5),
            1.0,
        );
    }
}
