//! Momentum-conserving merges of colliding bodies

use serde::Serialize;

use super::forces::MergePair;
use super::states::{Body, BodyId, NewBody};
use super::store::BodyStore;

/// Record of one merge, so callers can retarget references to the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeEvent {
    pub consumed: [BodyId; 2],
    pub merged: BodyId,
}

/// Combine two bodies into one at their center of mass.
///
/// Mass and momentum are conserved. The heavier body's color survives, with
/// `a` winning an exact tie. The trail starts empty.
pub fn merge(a: &Body, b: &Body) -> NewBody {
    let m = a.m + b.m;
    let v = (a.v * a.m + b.v * b.m) / m;
    let x = (a.x * a.m + b.x * b.m) / m;
    let color = if a.m >= b.m { a.color } else { b.color };

    NewBody::new(x, v, m, color).with_trail_length(a.max_trail_length.max(b.max_trail_length))
}

/// Apply merges found by the force pass. Pairs whose bodies are no longer
/// both present are skipped.
pub fn resolve(store: &mut BodyStore, pairs: &[MergePair]) -> Vec<MergeEvent> {
    let mut events = Vec::with_capacity(pairs.len());

    for &(a_id, b_id) in pairs {
        let merged = match (store.get(a_id), store.get(b_id)) {
            (Some(a), Some(b)) => merge(a, b),
            _ => continue,
        };
        store.remove(a_id);
        store.remove(b_id);
        let merged_id = store.insert(merged);

        log::debug!("merged bodies {} and {} into {}", a_id.0, b_id.0, merged_id.0);
        events.push(MergeEvent {
            consumed: [a_id, b_id],
            merged: merged_id,
        });
    }

    events
}
