//! Core state types for the gravity simulation.
//!
//! Defines the body record and its identifiers:
//! - `Body`     one live point mass, owned by the `BodyStore`
//! - `NewBody`  everything needed to place a body (no id, no trail yet)
//! - `BodyId`   stable handle that survives reordering of the store
//!
//! Positions and velocities are 2D `NVec2` vectors.

use std::collections::VecDeque;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

pub type NVec2 = Vector2<f64>;
pub type Rgb = [u8; 3];

/// Trail length given to bodies placed without an explicit one
pub const DEFAULT_TRAIL_LENGTH: usize = 50;

/// Smallest mass a body may carry, substituted for invalid input
pub const MIN_MASS: f64 = 1.0;

/// Colors handed out to newly placed bodies, in order
pub const BODY_COLORS: [Rgb; 7] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
    [255, 165, 0],
];

/// Identifier of a body, unique for the lifetime of its store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub f: NVec2, // accumulated force, recomputed every step
    pub color: Rgb,
    pub trail: VecDeque<NVec2>, // oldest first
    pub max_trail_length: usize,
}

impl Body {
    /// Radius used for drawing and hit testing, in screen pixels at zoom 1
    pub fn display_radius(&self) -> f64 {
        ((self.m / 5.0).sqrt() + 2.0).floor().max(3.0)
    }

    /// Append the current position, evicting the oldest entries past the cap
    pub fn record_trail(&mut self) {
        self.trail.push_back(self.x);
        while self.trail.len() > self.max_trail_length {
            self.trail.pop_front();
        }
    }

    pub fn set_max_trail_length(&mut self, len: usize) {
        self.max_trail_length = len;
        while self.trail.len() > len {
            self.trail.pop_front();
        }
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }
}

/// Placement request for a body that does not exist yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewBody {
    pub x: NVec2,
    pub v: NVec2,
    pub m: f64,
    pub color: Rgb,
    pub max_trail_length: usize,
}

impl NewBody {
    pub fn new(x: NVec2, v: NVec2, m: f64, color: Rgb) -> Self {
        Self {
            x,
            v,
            m,
            color,
            max_trail_length: DEFAULT_TRAIL_LENGTH,
        }
    }

    pub fn with_trail_length(mut self, len: usize) -> Self {
        self.max_trail_length = len;
        self
    }

    pub(crate) fn into_body(self, id: BodyId) -> Body {
        Body {
            id,
            x: self.x,
            v: self.v,
            m: self.m,
            f: NVec2::zeros(),
            color: self.color,
            trail: VecDeque::with_capacity(self.max_trail_length),
            max_trail_length: self.max_trail_length,
        }
    }
}

/// Read-only view of one live body, handed to renderers and exporters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub x: [f64; 2],
    pub v: [f64; 2],
    pub m: f64,
    pub color: Rgb,
    pub radius: f64,
    pub trail: Vec<[f64; 2]>,
    pub active: bool,
}

impl From<&Body> for BodySnapshot {
    fn from(b: &Body) -> Self {
        Self {
            id: b.id,
            x: [b.x.x, b.x.y],
            v: [b.v.x, b.v.y],
            m: b.m,
            color: b.color,
            radius: b.display_radius(),
            trail: b.trail.iter().map(|p| [p.x, p.y]).collect(),
            active: true,
        }
    }
}

/// Clamp a requested mass into the valid range
pub fn sanitize_mass(m: f64) -> f64 {
    if m.is_finite() && m > 0.0 {
        m
    } else {
        log::warn!("rejecting mass {m}, using {MIN_MASS}");
        MIN_MASS
    }
}
