//! Circle-circle collision detection and response
//!
//! Everything here is strict: circles that merely touch are not colliding.

use glam::Vec2;

use super::body::Body;
use crate::consts::MIN_DISTANCE;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Contact point on the surface of the second circle
    pub point: Vec2,
    /// Unit normal pointing from the second circle toward the first
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// True iff `distance(a, b) < ra + rb`
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Contact information for two overlapping bodies
///
/// Concentric bodies have no defined normal; +X is used so the result
/// is still usable for separation.
pub fn body_collision(a: &Body, b: &Body) -> CollisionResult {
    if !circles_overlap(a.position, a.radius, b.position, b.radius) {
        return CollisionResult::miss();
    }

    let offset = a.position - b.position;
    let distance = offset.length();
    let normal = if distance < MIN_DISTANCE {
        Vec2::X
    } else {
        offset / distance
    };

    CollisionResult {
        hit: true,
        point: b.position + normal * b.radius,
        normal,
        penetration: a.radius + b.radius - distance,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Push `body` out of `obstacle` and bounce it with the given restitution
///
/// Returns the collision that was resolved, or a miss.
pub fn resolve_against(body: &mut Body, obstacle: &Body, restitution: f32) -> CollisionResult {
    let result = body_collision(body, obstacle);
    if !result.hit {
        return result;
    }

    body.position += result.normal * result.penetration;
    if body.velocity.dot(result.normal) < 0.0 {
        body.velocity = reflect_velocity(body.velocity, result.normal) * restitution.clamp(0.0, 1.0);
    }
    result
}
