//! Simulation controller
//!
//! `Engine` owns the body store and the parameters, sequences one step
//! (force pass, merges, integration) and exposes everything a UI or server
//! loop needs: placement, selection queries, setters and snapshots.

use crate::simulation::collision::{self, MergeEvent};
use crate::simulation::forces::accumulate_forces;
use crate::simulation::integrator::{effective_dt, euler_integrator};
use crate::simulation::params::{non_negative, Parameters};
use crate::simulation::states::{
    sanitize_mass, Body, BodyId, BodySnapshot, NVec2, NewBody, Rgb, BODY_COLORS,
    DEFAULT_TRAIL_LENGTH,
};
use crate::simulation::store::BodyStore;

/// Smallest on-screen hit radius for selecting a body, in pixels
pub const HIT_RADIUS_FLOOR: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    Paused,
}

/// Values applied to bodies placed with [`Engine::place_body`]
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementDefaults {
    pub mass: f64,
    pub velocity: NVec2,
    pub trail_length: usize,
}

impl Default for PlacementDefaults {
    fn default() -> Self {
        Self {
            mass: 50.0,
            velocity: NVec2::zeros(),
            trail_length: DEFAULT_TRAIL_LENGTH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    store: BodyStore,
    params: Parameters,
    defaults: PlacementDefaults,
    state: RunState,
    show_trails: bool,
    color_index: usize,
    t: f64, // simulated time
    steps: u64,
    last_merges: Vec<MergeEvent>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}

impl Engine {
    /// Build a stopped engine. Fixed constants in `params` are restored and
    /// out-of-range multipliers clamped.
    pub fn new(params: Parameters) -> Self {
        Self {
            store: BodyStore::new(),
            params: params.validated(),
            defaults: PlacementDefaults::default(),
            state: RunState::Stopped,
            show_trails: true,
            color_index: 0,
            t: 0.0,
            steps: 0,
            last_merges: Vec::new(),
        }
    }

    // stepping ===========================================================================

    /// Advance by `raw_dt` seconds of wall time. No-op unless running.
    pub fn step(&mut self, raw_dt: f64) {
        self.last_merges.clear();
        if self.state != RunState::Running {
            return;
        }

        let dt = effective_dt(raw_dt, &self.params);

        let pairs = accumulate_forces(self.store.bodies_mut(), &self.params);
        if !pairs.is_empty() {
            self.last_merges = collision::resolve(&mut self.store, &pairs);
        }

        euler_integrator(self.store.bodies_mut(), dt);

        self.t += dt;
        self.steps += 1;
    }

    pub fn start(&mut self) {
        if self.state != RunState::Running {
            log::info!("simulation running with {} bodies", self.store.len());
        }
        self.state = RunState::Running;
    }

    /// Flip between running and paused; a stopped engine stays stopped
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::Stopped => RunState::Stopped,
        };
        log::info!("simulation {:?}", self.state);
    }

    /// Stop, zero all velocities and forces, and drop trails. Bodies stay put.
    pub fn reset(&mut self) {
        for b in self.store.bodies_mut() {
            b.v = NVec2::zeros();
            b.f = NVec2::zeros();
            b.trail.clear();
        }
        self.stop();
    }

    /// Remove every body and restart ids from zero
    pub fn clear(&mut self) {
        self.store.clear();
        self.color_index = 0;
        self.stop();
    }

    fn stop(&mut self) {
        self.state = RunState::Stopped;
        self.last_merges.clear();
        self.t = 0.0;
        self.steps = 0;
        log::info!("simulation stopped");
    }

    // bodies =============================================================================

    /// Add a body with the next palette color
    pub fn add_body(&mut self, x: NVec2, v: NVec2, m: f64) -> BodyId {
        let color = self.next_color();
        self.add_body_with(NewBody::new(x, v, m, color).with_trail_length(self.defaults.trail_length))
    }

    /// Add a body at `x` using the placement defaults
    pub fn place_body(&mut self, x: NVec2) -> BodyId {
        self.add_body(x, self.defaults.velocity, self.defaults.mass)
    }

    /// Add a fully described body. Invalid masses are clamped by the store.
    pub fn add_body_with(&mut self, new: NewBody) -> BodyId {
        self.store.insert(new)
    }

    pub fn remove_body(&mut self, id: BodyId) {
        self.store.remove(id);
    }

    /// Topmost body under `point`, with the hit circle sized for `zoom`
    pub fn find_body_at(&self, point: NVec2, zoom: f64) -> Option<BodyId> {
        let zoom = if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 };
        self.store
            .find_at(point, |b| b.display_radius().max(HIT_RADIUS_FLOOR) / zoom)
    }

    /// Drag a body to `x`, dropping its trail
    pub fn move_body(&mut self, id: BodyId, x: NVec2) -> bool {
        self.with_body(id, |b| {
            b.x = x;
            b.trail.clear();
        })
    }

    pub fn set_body_velocity(&mut self, id: BodyId, v: NVec2) -> bool {
        self.with_body(id, |b| b.v = v)
    }

    pub fn set_body_mass(&mut self, id: BodyId, m: f64) -> bool {
        let m = sanitize_mass(m);
        self.with_body(id, |b| b.m = m)
    }

    pub fn set_body_trail_length(&mut self, id: BodyId, len: usize) -> bool {
        self.with_body(id, |b| b.set_max_trail_length(len))
    }

    fn with_body<F: FnOnce(&mut Body)>(&mut self, id: BodyId, f: F) -> bool {
        match self.store.get_mut(id) {
            Some(b) => {
                f(b);
                true
            }
            None => false,
        }
    }

    fn next_color(&mut self) -> Rgb {
        let color = BODY_COLORS[self.color_index % BODY_COLORS.len()];
        self.color_index += 1;
        color
    }

    // parameters =========================================================================

    pub fn set_gravity_strength(&mut self, value: f64) {
        match non_negative(value) {
            Some(v) => self.params.gravity_strength = v,
            None => log::warn!("ignoring gravity strength {value}"),
        }
    }

    pub fn set_time_scale(&mut self, value: f64) {
        match non_negative(value) {
            Some(v) => self.params.time_scale = v,
            None => log::warn!("ignoring time scale {value}"),
        }
    }

    pub fn set_collision_enabled(&mut self, enabled: bool) {
        self.params.collision_enabled = enabled;
    }

    pub fn set_show_trails(&mut self, show: bool) {
        self.show_trails = show;
    }

    pub fn set_default_mass(&mut self, m: f64) {
        self.defaults.mass = sanitize_mass(m);
    }

    pub fn set_default_velocity(&mut self, v: NVec2) {
        self.defaults.velocity = v;
    }

    pub fn set_default_trail_length(&mut self, len: usize) {
        self.defaults.trail_length = len;
    }

    // queries ============================================================================

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn defaults(&self) -> &PlacementDefaults {
        &self.defaults
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn show_trails(&self) -> bool {
        self.show_trails
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn store(&self) -> &BodyStore {
        &self.store
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.store.get(id)
    }

    pub fn body_count(&self) -> usize {
        self.store.len()
    }

    /// Merges performed by the most recent step
    pub fn last_merges(&self) -> &[MergeEvent] {
        &self.last_merges
    }

    /// Where `id` ended up after the most recent step's merges.
    /// Returns `None` if the body is gone for another reason.
    pub fn merged_into(&self, id: BodyId) -> Option<BodyId> {
        let mut current = id;
        for event in &self.last_merges {
            if event.consumed.contains(&current) {
                current = event.merged;
            }
        }
        self.store.contains(current).then_some(current)
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.store.iter().map(BodySnapshot::from).collect()
    }

    /// Mass-weighted mean position, or the origin when there is no mass
    pub fn center_of_mass(&self) -> NVec2 {
        let total = self.total_mass();
        if total <= 0.0 {
            return NVec2::zeros();
        }
        let weighted: NVec2 = self.store.iter().map(|b| b.x * b.m).sum();
        weighted / total
    }

    pub fn total_mass(&self) -> f64 {
        self.store.iter().map(|b| b.m).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.store.iter().map(Body::momentum).sum()
    }

    // used by scenario loading
    pub(crate) fn replace_bodies(&mut self, bodies: Vec<NewBody>) {
        self.store.clear();
        self.color_index = 0;
        for new in bodies {
            self.store.insert(new);
        }
        self.stop();
    }

    pub(crate) fn params_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }
}
