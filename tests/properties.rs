//! Property-based tests for the motion integrator and effect engine.

use glam::Vec2;
use proptest::prelude::*;

use orbit_fx::fx::{EffectEngine, EffectKind, EffectOptions, FixedClock, PcgRandom};
use orbit_fx::normalize;
use orbit_fx::settings::PhysicsConfig;
use orbit_fx::sim::{Atmosphere, Body, GravitySource, apply_atmospheric_drag, apply_gravity, apply_motion, check_collision};

fn config() -> PhysicsConfig {
    PhysicsConfig {
        gravity_strength: 100.0,
        friction_factor: 0.98,
        max_velocity: 500.0,
    }
}

fn kind_strategy() -> impl Strategy<Value = EffectKind> {
    prop::sample::select(EffectKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Friction in (0, 1) never speeds a body up.
    #[test]
    fn prop_friction_never_increases_speed(
        vx in -1000.0f32..1000.0,
        vy in -1000.0f32..1000.0,
        friction in 0.01f32..0.999,
        dt in 0.0f32..100.0,
    ) {
        let mut body = Body::new(Vec2::ZERO, 1.0).with_velocity(Vec2::new(vx, vy));
        let before = body.speed();
        apply_motion(&mut body, dt, friction, &config());
        prop_assert!(body.speed() <= before + 1e-3);
    }

    /// Speed never exceeds the configured cap after any integrator call.
    #[test]
    fn prop_speed_capped_after_gravity_and_motion(
        vx in -5000.0f32..5000.0,
        vy in -5000.0f32..5000.0,
        mass in 0.0f32..1.0e6,
        sx in -300.0f32..300.0,
        sy in -300.0f32..300.0,
        dt in 0.0f32..(1.0 / 30.0),
    ) {
        let cfg = config();
        let source = GravitySource::new(Vec2::new(sx, sy), mass, 10.0);
        let mut body = Body::new(Vec2::ZERO, 1.0).with_velocity(Vec2::new(vx, vy));

        apply_gravity(&mut body, &[source], dt, &cfg);
        prop_assert!(body.speed() <= cfg.max_velocity * (1.0 + 1e-5));
        prop_assert!(body.velocity.is_finite());

        apply_motion(&mut body, dt, 1.0, &cfg);
        prop_assert!(body.speed() <= cfg.max_velocity * (1.0 + 1e-5));
    }

    /// Gravity accumulation does not depend on source order.
    #[test]
    fn prop_gravity_commutes(
        ax in -200.0f32..200.0, ay in -200.0f32..200.0, am in 0.0f32..500.0,
        bx in -200.0f32..200.0, by in -200.0f32..200.0, bm in 0.0f32..500.0,
        dt in 0.0f32..(1.0 / 30.0),
    ) {
        let a = GravitySource::new(Vec2::new(ax, ay), am, 5.0);
        let b = GravitySource::new(Vec2::new(bx, by), bm, 5.0);
        let start = Body::new(Vec2::ZERO, 1.0).with_velocity(Vec2::new(10.0, -4.0));

        let mut ab = start;
        let mut ba = start;
        apply_gravity(&mut ab, &[a, b], dt, &config());
        apply_gravity(&mut ba, &[b, a], dt, &config());
        prop_assert!((ab.velocity - ba.velocity).length() < 1e-3);
    }

    /// Drag removes at most 10% of velocity per application.
    #[test]
    fn prop_drag_bounded(
        x in -100.0f32..100.0,
        density in 0.0f32..1000.0,
        dt in 0.0f32..1.0,
    ) {
        let atmosphere = Atmosphere::new(Vec2::ZERO, 100.0, density);
        let mut body = Body::new(Vec2::new(x, 0.0), 1.0).with_velocity(Vec2::new(0.0, 50.0));
        apply_atmospheric_drag(&mut body, &atmosphere, dt);
        prop_assert!(body.speed() <= 50.0 + 1e-4);
        prop_assert!(body.speed() >= 45.0 - 1e-3);
    }

    /// Normalized non-zero vectors have unit length.
    #[test]
    fn prop_normalize_unit_length(x in -1.0e4f32..1.0e4, y in -1.0e4f32..1.0e4) {
        prop_assume!(Vec2::new(x, y).length() > 1e-3);
        prop_assert!((normalize(Vec2::new(x, y)).length() - 1.0).abs() < 1e-4);
    }

    /// Collision is symmetric.
    #[test]
    fn prop_collision_symmetric(
        x in -50.0f32..50.0, y in -50.0f32..50.0,
        ra in 0.0f32..20.0, rb in 0.0f32..20.0,
    ) {
        let a = Body::new(Vec2::ZERO, ra);
        let b = Body::new(Vec2::new(x, y), rb);
        prop_assert_eq!(check_collision(&a, &b), check_collision(&b, &a));
    }

    /// Every effect is gone once its whole duration has elapsed, and
    /// `time_remaining` only shrinks along the way.
    #[test]
    fn prop_effects_expire(
        kind in kind_strategy(),
        duration in 0.05f32..3.0,
        seed in any::<u64>(),
    ) {
        let mut fx = EffectEngine::with_sources(
            Box::new(PcgRandom::from_seed(seed)),
            Box::new(FixedClock(0.0)),
        );
        let id = fx.create(kind, Vec2::ZERO, EffectOptions {
            duration: Some(duration),
            ..Default::default()
        });

        let dt = 1.0 / 60.0;
        let ticks = (duration / dt).ceil() as u32 + 1;
        let mut last = f32::MAX;
        for _ in 0..ticks {
            if let Some(effect) = fx.get(id) {
                prop_assert!(effect.time_remaining <= last);
                prop_assert!(effect.intensity.is_finite());
                last = effect.time_remaining;
            }
            fx.update(dt);
        }
        prop_assert!(!fx.contains(id));
    }
}

#[test]
fn gravity_pulls_body_toward_source_above() {
    let source = GravitySource::new(Vec2::new(0.0, -120.0), 300.0, 20.0);
    let mut body = Body::new(Vec2::ZERO, 2.0);
    apply_gravity(&mut body, &[source], 1.0 / 60.0, &config());
    assert!(body.velocity.y < 0.0);
    assert!(body.velocity.x.abs() < 1e-6);
}
