//! Orbit FX - per-frame simulation core for 2D space games
//!
//! Core modules:
//! - `sim`: Motion integrator (gravity, drag, friction, collisions)
//! - `fx`: Time-boxed visual effect lifecycle engine
//! - `renderer`: Draw sink contract and a vertex tessellating sink
//! - `settings`: Physical constants supplied at call time

pub mod fx;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use fx::{EffectEngine, EffectId, EffectKind, EffectOptions};
pub use renderer::DrawSink;
pub use settings::{PhysicsConfig, PhysicsPreset};

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Largest frame delta the demo host feeds the core (hitch guard)
    pub const MAX_DT: f32 = 1.0 / 30.0;

    /// Gravity is ignored below this separation to avoid dividing by ~0
    pub const MIN_DISTANCE: f32 = 1.0e-3;
    /// Tidal dampening kicks in inside this multiple of a source's radius
    pub const TIDAL_RANGE_FACTOR: f32 = 3.0;
    /// Fraction of velocity bled per second at a source's surface
    pub const TIDAL_DAMPING: f32 = 0.1;

    /// Atmospheric drag never removes more than 10% of velocity per call
    pub const DRAG_MULTIPLIER_FLOOR: f32 = 0.9;

    /// Effect animation clock rate, independent of the real tick rate
    pub const ANIMATION_FPS: f32 = 60.0;
    /// Lifetimes at or below this count as spent; absorbs summed-dt rounding
    pub const EXPIRY_EPSILON: f32 = 1.0e-5;
}

/// Normalize a vector, mapping the zero vector to itself
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Clamp a scalar into [min, max]
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linear interpolation from `a` to `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians.to_degrees()
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if !angle.is_finite() {
        return 0.0;
    }
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped >= PI { -PI } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
