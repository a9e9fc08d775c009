//! Bodies and the scene objects that act on them
//!
//! Bodies are owned by whatever game entity embeds them; the integrator
//! only ever borrows them mutably for the duration of one call.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A simulated circle with position and velocity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// A mass-bearing point that attracts bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravitySource {
    pub position: Vec2,
    pub mass: f32,
    /// Surface radius; no pull is applied inside it
    pub radius: f32,
}

impl GravitySource {
    pub fn new(position: Vec2, mass: f32, radius: f32) -> Self {
        Self {
            position,
            mass,
            radius,
        }
    }
}

/// A circular region that slows bodies passing through it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    pub position: Vec2,
    pub radius: f32,
    /// Drag per second at the center
    pub density: f32,
}

impl Atmosphere {
    pub fn new(position: Vec2, radius: f32, density: f32) -> Self {
        Self {
            position,
            radius,
            density,
        }
    }
}
