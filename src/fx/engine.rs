//! Effect lifecycle engine
//!
//! Owns every live effect. Callers hold ids, never references across
//! ticks. Each engine instance is independent, so several simulation
//! contexts can run side by side.

use std::collections::BTreeMap;

use glam::Vec2;

use super::draw;
use super::effect::{Effect, EffectId, EffectKind};
use super::source::{PcgRandom, RandomSource, SystemClock, TimeSource};
use super::template::{self, EffectOptions};
use super::update;
use crate::consts::{ANIMATION_FPS, EXPIRY_EPSILON};
use crate::renderer::DrawSink;

/// Registry of live effects plus the sources their cosmetic rules read
#[derive(Debug)]
pub struct EffectEngine {
    /// Keyed by id, so iteration follows creation order
    effects: BTreeMap<EffectId, Effect>,
    next_id: EffectId,
    rng: Box<dyn RandomSource>,
    clock: Box<dyn TimeSource>,
}

impl Default for EffectEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectEngine {
    /// Engine with an entropy-seeded RNG and the system clock
    pub fn new() -> Self {
        Self::with_sources(Box::new(PcgRandom::from_entropy()), Box::new(SystemClock::new()))
    }

    /// Engine with a reproducible RNG and the system clock
    pub fn seeded(seed: u64) -> Self {
        Self::with_sources(Box::new(PcgRandom::from_seed(seed)), Box::new(SystemClock::new()))
    }

    pub fn with_sources(rng: Box<dyn RandomSource>, clock: Box<dyn TimeSource>) -> Self {
        Self {
            effects: BTreeMap::new(),
            next_id: 1,
            rng,
            clock,
        }
    }

    /// Create an effect from the kind's template and return its id
    pub fn create(&mut self, kind: EffectKind, position: Vec2, options: EffectOptions) -> EffectId {
        let id = self.next_id;
        self.next_id += 1;

        let effect = template::build(id, kind, position, &options);
        log::trace!(
            "Effect {} created: {} at ({:.1}, {:.1}) for {:.2}s",
            id,
            kind.name(),
            position.x,
            position.y,
            effect.duration
        );
        self.effects.insert(id, effect);
        id
    }

    /// Create by kind name; unknown names get a basic effect
    pub fn create_named(&mut self, name: &str, position: Vec2, options: EffectOptions) -> EffectId {
        let kind = EffectKind::from_name(name).unwrap_or_else(|| {
            log::debug!("Unknown effect kind '{}', using basic", name);
            EffectKind::Basic
        });
        self.create(kind, position, options)
    }

    /// Shield flash with a ripple spreading from the impact point
    pub fn shield_hit(&mut self, position: Vec2, impact_point: Vec2) -> EffectId {
        self.create(
            EffectKind::ShieldHit,
            position,
            EffectOptions {
                ripple_center: Some(impact_point),
                ..Default::default()
            },
        )
    }

    pub fn engine_thrust(&mut self, position: Vec2, thrust_vector: Vec2) -> EffectId {
        self.create(
            EffectKind::EngineThrust,
            position,
            EffectOptions {
                thrust_vector: Some(thrust_vector),
                ..Default::default()
            },
        )
    }

    pub fn maneuvering_thrust(&mut self, position: Vec2, thrust_vector: Vec2) -> EffectId {
        self.create(
            EffectKind::ManeuveringThrust,
            position,
            EffectOptions {
                thrust_vector: Some(thrust_vector),
                ..Default::default()
            },
        )
    }

    pub fn weapon_impact(&mut self, position: Vec2) -> EffectId {
        self.create(EffectKind::WeaponImpact, position, EffectOptions::default())
    }

    pub fn warp_charge(&mut self, position: Vec2) -> EffectId {
        self.create(EffectKind::WarpCharge, position, EffectOptions::default())
    }

    pub fn warp_bubble(&mut self, position: Vec2) -> EffectId {
        self.create(EffectKind::WarpBubble, position, EffectOptions::default())
    }

    /// Advance every effect by `dt`, then drop the ones that ran out
    ///
    /// Expired ids are collected during the pass and removed after it.
    /// Negative or non-finite `dt` is treated as zero so lifetimes never
    /// grow back.
    pub fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut expired = Vec::new();

        for effect in self.effects.values_mut() {
            effect.time_remaining -= dt;
            effect.animation_frame += dt * ANIMATION_FPS;

            if effect.time_remaining > EXPIRY_EPSILON {
                update::advance(effect, self.rng.as_mut());
            } else {
                expired.push(effect.id);
            }
        }

        for id in &expired {
            self.effects.remove(id);
        }
        if !expired.is_empty() {
            log::trace!("{} effects expired, {} live", expired.len(), self.effects.len());
        }
    }

    /// Draw every live effect, oldest first
    pub fn render<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        let now = self.clock.now_seconds();
        for effect in self.effects.values() {
            draw::draw(effect, sink, now);
        }
    }

    /// Remove an effect; returns false if it was already gone
    pub fn remove_effect(&mut self, id: EffectId) -> bool {
        self.effects.remove(&id).is_some()
    }

    pub fn clear_all(&mut self) {
        if !self.effects.is_empty() {
            log::debug!("Clearing {} effects", self.effects.len());
        }
        self.effects.clear();
    }

    /// Move a live effect (e.g. exhaust following its ship)
    pub fn set_position(&mut self, id: EffectId, position: Vec2) -> bool {
        match self.effects.get_mut(&id) {
            Some(effect) => {
                effect.position = position;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: EffectId) -> Option<&Effect> {
        self.effects.get(&id)
    }

    pub fn contains(&self, id: EffectId) -> bool {
        self.effects.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Live effects in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.values()
    }

    pub fn count_of(&self, kind: EffectKind) -> usize {
        self.effects.values().filter(|e| e.kind == kind).count()
    }
}
