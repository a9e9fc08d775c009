//! Time-boxed visual effects
//!
//! Effects never influence motion. A host decides when to `create` one
//! (a collision, a thruster firing), then calls `update` and `render` once
//! per tick.

pub mod draw;
pub mod effect;
pub mod engine;
pub mod source;
pub mod template;
pub mod update;

pub use effect::{
    Effect, EffectDetail, EffectId, EffectKind, EngineState, FadeState, ShieldState, WarpPhase,
    WarpState,
};
pub use engine::EffectEngine;
pub use source::{FixedClock, FixedRandom, PcgRandom, RandomSource, SystemClock, TimeSource};
pub use template::{EffectOptions, Template};
