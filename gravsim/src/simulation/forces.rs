//! Pairwise gravity and close-approach detection
//!
//! One force pass runs in two phases over the bodies in insertion order:
//! 1. collision scan: pairs closer than the collision threshold are claimed
//!    for merging, each body by at most one pair
//! 2. gravity: every unordered pair of unclaimed bodies exchanges an equal and
//!    opposite force, accumulated into `Body::f`
//!
//! Claimed bodies are left with zero force; the collision resolver replaces
//! them before integration.

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, NVec2};

/// Two bodies to merge, left operand first in insertion order
pub type MergePair = (BodyId, BodyId);

/// Newtonian gravity with a floor on the separation distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub strength: f64, // user multiplier
    pub min_distance: f64, // separation floor
}

impl NewtonianGravity {
    pub fn from_params(params: &Parameters) -> Self {
        Self {
            g: params.g,
            strength: params.gravity_strength,
            min_distance: params.min_distance,
        }
    }

    /// Force on body i (at `xi`, mass `mi`) due to body j.
    /// The force on body j is exactly the negation.
    pub fn pair_force(&self, xi: NVec2, mi: f64, xj: NVec2, mj: f64) -> NVec2 {
        // r points from i to j, so i is pulled along +r
        let r = xj - xi;
        let r2 = r.norm_squared();
        if r2 == 0.0 {
            // coincident bodies have no direction to pull along
            return NVec2::zeros();
        }

        let d2 = r2.max(self.min_distance * self.min_distance);
        let magnitude = self.g * self.strength * mi * mj / d2;

        // scale the unit displacement r / |r| by the clamped magnitude
        r * (magnitude / r2.sqrt())
    }

    /// Add gravity between every unordered pair not marked in `skip`.
    /// Indices past the end of `skip` are not skipped.
    pub fn accumulate(&self, bodies: &mut [Body], skip: &[bool]) {
        let skipped = |k: usize| skip.get(k).copied().unwrap_or(false);
        let n = bodies.len();
        for i in 0..n {
            if skipped(i) {
                continue;
            }
            let xi = bodies[i].x;
            let mi = bodies[i].m;

            for j in (i + 1)..n {
                if skipped(j) {
                    continue;
                }
                let f = self.pair_force(xi, mi, bodies[j].x, bodies[j].m);

                bodies[i].f += f;
                bodies[j].f -= f;
            }
        }
    }
}

/// Claim colliding pairs greedily in scan order.
/// Returns the pairs plus a per-index flag of which bodies were claimed.
pub fn detect_collisions(bodies: &[Body], threshold: f64) -> (Vec<MergePair>, Vec<bool>) {
    let n = bodies.len();
    let threshold2 = threshold * threshold;
    let mut claimed = vec![false; n];
    let mut pairs = Vec::new();

    for i in 0..n {
        if claimed[i] {
            continue;
        }
        for j in (i + 1)..n {
            if claimed[j] {
                continue;
            }
            let r2 = (bodies[j].x - bodies[i].x).norm_squared();
            if r2 < threshold2 {
                claimed[i] = true;
                claimed[j] = true;
                pairs.push((bodies[i].id, bodies[j].id));
                break;
            }
        }
    }

    (pairs, claimed)
}

/// Full force pass: zero forces, find collisions, then accumulate gravity.
/// Returns the pairs the collision resolver should merge.
pub fn accumulate_forces(bodies: &mut [Body], params: &Parameters) -> Vec<MergePair> {
    for b in bodies.iter_mut() {
        b.f = NVec2::zeros();
    }

    let n = bodies.len();
    if n < 2 {
        return Vec::new();
    }

    let (pairs, claimed) = if params.collision_enabled {
        detect_collisions(bodies, params.collision_threshold)
    } else {
        (Vec::new(), vec![false; n])
    };

    NewtonianGravity::from_params(params).accumulate(bodies, &claimed);

    pairs
}
