//! Orbit FX demo host
//!
//! Runs a short headless scene: a ship falls toward a planet through its
//! atmosphere, firing thrusters, while the effect engine animates and the
//! mesh sink tessellates every frame.

use glam::Vec2;

use orbit_fx::consts::MAX_DT;
use orbit_fx::fx::EffectEngine;
use orbit_fx::renderer::{MeshSink, vertex};
use orbit_fx::settings::PhysicsConfig;
use orbit_fx::sim::{Atmosphere, Body, GravitySource, Scene, calculate_orbital_velocity, resolve_against};

/// Simulated frame rate of the demo loop
const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 600;

fn main() {
    env_logger::init();
    log::info!("Orbit FX demo starting...");

    let config = PhysicsConfig::load_or_default(std::env::var("ORBIT_FX_PHYSICS").ok().as_deref());

    let planet = GravitySource::new(Vec2::ZERO, 400.0, 60.0);
    let mut scene = Scene::new();
    scene.add_source(planet);
    scene.add_atmosphere(Atmosphere::new(planet.position, 110.0, 0.4));

    // Start just under orbital speed so the orbit decays into the atmosphere
    let start = Vec2::new(0.0, 180.0);
    let orbital = calculate_orbital_velocity(planet.mass, start.length(), &config);
    let mut ship = Body::new(start, 8.0).with_velocity(Vec2::new(orbital * 0.8, 0.0));
    let surface = Body::new(planet.position, planet.radius);

    let mut effects = EffectEngine::new();
    let mut mesh = MeshSink::new();
    let mut impacts = 0;

    effects.warp_charge(ship.position);

    for frame in 0..FRAMES {
        let dt = FRAME_DT.min(MAX_DT);

        scene.integrate(&mut ship, dt, &config);

        let hit = resolve_against(&mut ship, &surface, 0.4);
        if hit.hit {
            impacts += 1;
            effects.weapon_impact(hit.point);
            effects.shield_hit(ship.position, hit.point);
        }

        if frame % 6 == 0 {
            let heading = ship.velocity.normalize_or_zero();
            effects.engine_thrust(ship.position, heading);
        }

        effects.update(dt);

        mesh.clear();
        effects.render(&mut mesh);

        if frame % 120 == 0 {
            log::info!(
                "frame {:>3}: ship ({:>7.1}, {:>7.1}) speed {:>6.1}, {} effects, {} triangles ({} bytes)",
                frame,
                ship.position.x,
                ship.position.y,
                ship.speed(),
                effects.len(),
                mesh.triangle_count(),
                vertex::as_bytes(&mesh.vertices).len()
            );
        }
    }

    log::info!("Finished {} frames with {} surface impacts", FRAMES, impacts);
}
