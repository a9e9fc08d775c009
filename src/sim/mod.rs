//! Motion simulation module
//!
//! Pure numeric state, no rendering or platform dependencies:
//! - Bodies are borrowed, never owned or allocated here
//! - Physical constants come from a caller-supplied `PhysicsConfig`
//! - Every function produces finite results for degenerate input

pub mod body;
pub mod collision;
pub mod motion;

pub use body::{Atmosphere, Body, GravitySource};
pub use collision::{CollisionResult, body_collision, circles_overlap, reflect_velocity, resolve_against};
pub use motion::{
    Scene, apply_atmospheric_drag, apply_gravity, apply_motion, calculate_escape_velocity,
    calculate_orbital_velocity, check_collision, clamp_velocity,
};
