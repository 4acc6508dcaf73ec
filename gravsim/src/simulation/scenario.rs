//! Move body sets between a running `Engine` and a `ScenarioConfig`
//!
//! Loading maps each `BodyConfig` to a runtime body (fresh id, empty trail)
//! in record order and copies the global settings. Exporting does the
//! reverse, so a saved record reloads to the same state minus the trails.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, NewBody};

impl Engine {
    /// Build a fresh, stopped engine from a record
    pub fn from_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        let mut engine = Engine::new(Parameters::default());
        engine.load_scenario(cfg)?;
        Ok(engine)
    }

    /// Replace the body set and globals with the record's.
    /// The engine is left untouched if the record is invalid.
    pub fn load_scenario(&mut self, cfg: &ScenarioConfig) -> Result<(), ConfigError> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `NewBody` using nalgebra vectors
        let bodies: Vec<NewBody> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                NewBody::new(NVec2::new(bc.x, bc.y), NVec2::new(bc.vx, bc.vy), bc.mass, bc.color)
                    .with_trail_length(bc.max_trail_length)
            })
            .collect();

        let params = self.params_mut();
        params.time_scale = cfg.time_scale;
        params.gravity_strength = cfg.gravity_strength;
        params.collision_enabled = cfg.collision_enabled;
        self.set_show_trails(cfg.show_trails);

        log::debug!("loading scenario with {} bodies", bodies.len());
        self.replace_bodies(bodies);
        Ok(())
    }

    /// Record the current bodies and globals
    pub fn export_scenario(&self) -> ScenarioConfig {
        let bodies = self
            .store()
            .iter()
            .map(|b| BodyConfig {
                x: b.x.x,
                y: b.x.y,
                vx: b.v.x,
                vy: b.v.y,
                mass: b.m,
                color: b.color,
                max_trail_length: b.max_trail_length,
            })
            .collect();

        let params = self.params();
        ScenarioConfig {
            bodies,
            time_scale: params.time_scale,
            show_trails: self.show_trails(),
            gravity_strength: params.gravity_strength,
            collision_enabled: params.collision_enabled,
        }
    }
}
