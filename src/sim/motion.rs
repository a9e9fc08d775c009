//! Newtonian motion integrator
//!
//! Stateless functions that advance a caller-owned [`Body`] by one step.
//! None of them fail: degenerate inputs (coincident points, zero vectors)
//! are absorbed locally and always leave the body with finite numbers.
//!
//! `dt` is expected to be clamped upstream by the host loop.

use glam::Vec2;

use super::body::{Atmosphere, Body, GravitySource};
use super::collision::circles_overlap;
use crate::consts::*;
use crate::settings::PhysicsConfig;

/// Integrate position, decay velocity by `friction^dt`, then cap speed
///
/// Friction is continuous-time: two half steps decay exactly as much as
/// one full step.
pub fn apply_motion(body: &mut Body, dt: f32, friction: f32, config: &PhysicsConfig) {
    body.position += body.velocity * dt;
    body.velocity *= friction.max(0.0).powf(dt);
    clamp_velocity(body, config.max_velocity);
}

/// Rescale velocity so its magnitude does not exceed `max_velocity`
#[inline]
pub fn clamp_velocity(body: &mut Body, max_velocity: f32) {
    body.velocity = body.velocity.clamp_length_max(max_velocity.max(0.0));
}

/// Pull a body toward every source outside whose surface it sits
///
/// Each source contributes independently; acceleration is summed and the
/// tidal dampening factors multiplied before either touches the body, so
/// the result does not depend on the order of `sources`.
pub fn apply_gravity(body: &mut Body, sources: &[GravitySource], dt: f32, config: &PhysicsConfig) {
    let mut acceleration = Vec2::ZERO;
    let mut damping = 1.0;

    for source in sources {
        let offset = source.position - body.position;
        let distance = offset.length();
        if distance < MIN_DISTANCE || distance <= source.radius {
            continue;
        }

        let force = source.mass * config.gravity_strength / (distance * distance);
        acceleration += offset / distance * force;

        let tidal_range = source.radius * TIDAL_RANGE_FACTOR;
        if distance < tidal_range {
            let proximity = 1.0 - distance / tidal_range;
            damping *= (1.0 - proximity * TIDAL_DAMPING * dt).max(0.0);
        }
    }

    body.velocity = body.velocity * damping + acceleration * dt;
    clamp_velocity(body, config.max_velocity);
}

/// Slow a body proportionally to how deep it is inside an atmosphere
///
/// The per-call velocity multiplier never drops below
/// [`DRAG_MULTIPLIER_FLOOR`], so one long step cannot stop a body dead.
pub fn apply_atmospheric_drag(body: &mut Body, atmosphere: &Atmosphere, dt: f32) {
    if atmosphere.radius <= 0.0 {
        return;
    }
    let distance = body.position.distance(atmosphere.position);
    if distance >= atmosphere.radius {
        return;
    }

    let depth = 1.0 - distance / atmosphere.radius;
    let drag = depth * atmosphere.density;
    let multiplier = (1.0 - drag * dt).clamp(DRAG_MULTIPLIER_FLOOR, 1.0);
    body.velocity *= multiplier;
}

/// True iff the two bodies overlap (touching circles do not count)
#[inline]
pub fn check_collision(a: &Body, b: &Body) -> bool {
    circles_overlap(a.position, a.radius, b.position, b.radius)
}

/// Speed needed to escape a source's pull from its surface: `sqrt(2GM/r)`
pub fn calculate_escape_velocity(mass: f32, radius: f32, config: &PhysicsConfig) -> f32 {
    let r = radius.max(MIN_DISTANCE);
    (2.0 * config.gravity_strength * mass / r).max(0.0).sqrt()
}

/// Speed of a circular orbit at `distance` from a source: `sqrt(GM/d)`
pub fn calculate_orbital_velocity(mass: f32, distance: f32, config: &PhysicsConfig) -> f32 {
    let d = distance.max(MIN_DISTANCE);
    (config.gravity_strength * mass / d).max(0.0).sqrt()
}

/// The static objects a set of bodies moves through
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub sources: Vec<GravitySource>,
    pub atmospheres: Vec<Atmosphere>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(&mut self, source: GravitySource) {
        self.sources.push(source);
    }

    pub fn add_atmosphere(&mut self, atmosphere: Atmosphere) {
        self.atmospheres.push(atmosphere);
    }

    /// Advance one body by `dt`: gravity, then drag, then motion
    pub fn integrate(&self, body: &mut Body, dt: f32, config: &PhysicsConfig) {
        apply_gravity(body, &self.sources, dt, config);
        for atmosphere in &self.atmospheres {
            apply_atmospheric_drag(body, atmosphere, dt);
        }
        apply_motion(body, dt, config.friction_factor, config);
    }

    /// Index of the first source whose surface the body overlaps
    pub fn colliding_source(&self, body: &Body) -> Option<usize> {
        self.sources
            .iter()
            .position(|s| circles_overlap(body.position, body.radius, s.position, s.radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PhysicsConfig {
        PhysicsConfig {
            gravity_strength: 100.0,
            friction_factor: 0.98,
            max_velocity: 500.0,
        }
    }

    #[test]
    fn test_motion_integrates_position() {
        let mut body = Body::new(Vec2::ZERO, 1.0).with_velocity(Vec2::new(10.0, 0.0));
        apply_motion(&mut body, 0.5, 1.0, &config());
        assert!((body.position.x - 5.0).abs() < 1e-5);
        assert!((body.velocity.x - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_friction_is_continuous_time() {
        let mut whole = Body::new(Vec2::ZERO, 1.0).with_velocity(Vec2::new(100.0, 0.0));
        let mut halves = whole;
        apply_motion(&mut whole, 1.0, 0.5, &config());
        apply_motion(&mut halves, 0.5, 0.5, &config());
        apply_motion(&mut halves, 0.5, 0.5, &config());
        assert!((whole.velocity.x - 50.0).abs() < 1e-3);
        assert!((halves.velocity.x - whole.velocity.x).abs() < 1e-3);
    }

    #[test]
    fn test_velocity_clamped_to_max() {
        let mut body = Body::new(Vec2::ZERO, 1.0).with_velocity(Vec2::new(600.0, 0.0));
        apply_motion(&mut body, 1.0 / 60.0, 1.0, &config());
        assert!((body.speed() - 500.0).abs() < 1e-3);
        assert!(body.velocity.y.abs() < 1e-6);
    }

    #[test]
    fn test_gravity_pulls_toward_source() {
        let source = GravitySource::new(Vec2::new(0.0, 100.0), 50.0, 10.0);
        let mut body = Body::new(Vec2::ZERO, 1.0);
        apply_gravity(&mut body, &[source], 0.1, &config());
        assert!(body.velocity.y > 0.0);
        assert!(body.velocity.x.abs() < 1e-6);
    }

    #[test]
    fn test_gravity_ignores_bodies_inside_surface() {
        let source = GravitySource::new(Vec2::new(5.0, 0.0), 1000.0, 10.0);
        let mut body = Body::new(Vec2::ZERO, 1.0);
        apply_gravity(&mut body, &[source], 0.1, &config());
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_gravity_zero_distance_is_guarded() {
        let source = GravitySource::new(Vec2::ZERO, 1000.0, 0.0);
        let mut body = Body::new(Vec2::ZERO, 1.0);
        apply_gravity(&mut body, &[source], 0.1, &config());
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(body.velocity.is_finite());
    }

    #[test]
    fn test_gravity_order_independent() {
        let a = GravitySource::new(Vec2::new(100.0, 0.0), 80.0, 40.0);
        let b = GravitySource::new(Vec2::new(-30.0, 90.0), 120.0, 35.0);
        let start = Body::new(Vec2::ZERO, 1.0).with_velocity(Vec2::new(3.0, -7.0));

        let mut ab = start;
        let mut ba = start;
        apply_gravity(&mut ab, &[a, b], 0.016, &config());
        apply_gravity(&mut ba, &[b, a], 0.016, &config());
        assert!((ab.velocity - ba.velocity).length() < 1e-5);
    }

    #[test]
    fn test_tidal_dampening_near_surface() {
        // Zero gravity isolates the dampening term
        let cfg = PhysicsConfig {
            gravity_strength: 0.0,
            ..config()
        };
        let source = GravitySource::new(Vec2::new(20.0, 0.0), 100.0, 10.0);
        let mut body = Body::new(Vec2::ZERO, 1.0).with_velocity(Vec2::new(0.0, 100.0));
        apply_gravity(&mut body, &[source], 1.0, &cfg);
        assert!(body.speed() < 100.0);
        assert!(body.speed() > 90.0);
    }

    #[test]
    fn test_drag_only_inside_atmosphere() {
        let atmosphere = Atmosphere::new(Vec2::ZERO, 50.0, 0.5);
        let mut outside = Body::new(Vec2::new(60.0, 0.0), 1.0).with_velocity(Vec2::new(10.0, 0.0));
        apply_atmospheric_drag(&mut outside, &atmosphere, 0.1);
        assert_eq!(outside.velocity.x, 10.0);

        let mut inside = Body::new(Vec2::new(25.0, 0.0), 1.0).with_velocity(Vec2::new(10.0, 0.0));
        apply_atmospheric_drag(&mut inside, &atmosphere, 0.1);
        // depth 0.5 * density 0.5 * dt 0.1 = 0.025
        assert!((inside.velocity.x - 9.75).abs() < 1e-4);
    }

    #[test]
    fn test_drag_multiplier_floor() {
        let atmosphere = Atmosphere::new(Vec2::ZERO, 50.0, 1000.0);
        let mut body = Body::new(Vec2::ZERO, 1.0).with_velocity(Vec2::new(10.0, 0.0));
        apply_atmospheric_drag(&mut body, &atmosphere, 1.0);
        assert!((body.velocity.x - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_collision_is_strict() {
        let a = Body::new(Vec2::ZERO, 4.0);
        let near = Body::new(Vec2::new(7.0, 0.0), 4.0);
        let touching = Body::new(Vec2::new(8.0, 0.0), 4.0);
        assert!(check_collision(&a, &near));
        assert!(!check_collision(&a, &touching));
    }

    #[test]
    fn test_escape_and_orbital_velocity() {
        let cfg = config();
        let escape = calculate_escape_velocity(50.0, 25.0, &cfg);
        let orbital = calculate_orbital_velocity(50.0, 25.0, &cfg);
        assert!((escape - 20.0).abs() < 1e-4);
        assert!((escape - orbital * 2.0_f32.sqrt()).abs() < 1e-3);
        assert!(calculate_escape_velocity(50.0, 0.0, &cfg).is_finite());
    }

    #[test]
    fn test_scene_integrate_and_collide() {
        let mut scene = Scene::new();
        scene.add_source(GravitySource::new(Vec2::new(0.0, -200.0), 500.0, 50.0));
        scene.add_atmosphere(Atmosphere::new(Vec2::new(0.0, -200.0), 90.0, 0.3));

        let mut body = Body::new(Vec2::ZERO, 5.0);
        let cfg = config();
        for _ in 0..30 {
            scene.integrate(&mut body, 1.0 / 60.0, &cfg);
        }
        assert!(body.velocity.y < 0.0);
        assert!(body.position.y < 0.0);
        assert!(body.speed() <= cfg.max_velocity);
        assert_eq!(scene.colliding_source(&body), None);

        let landed = Body::new(Vec2::new(0.0, -150.0), 5.0);
        assert_eq!(scene.colliding_source(&landed), Some(0));
    }
}
