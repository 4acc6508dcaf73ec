//! Ordered storage of live bodies
//!
//! Insertion order is kept stable across removals since the collision pass
//! breaks ties by it. Ids count up from zero and are only recycled by `clear`.

use super::states::{sanitize_mass, Body, BodyId, NVec2, NewBody, Rgb};

#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    bodies: Vec<Body>,
    next_id: u64,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body with the default trail length
    pub fn add(&mut self, x: NVec2, v: NVec2, m: f64, color: Rgb) -> BodyId {
        self.insert(NewBody::new(x, v, m, color))
    }

    /// Append a fully described body, returning its fresh id.
    /// Non-positive or non-finite masses are replaced by `MIN_MASS`.
    pub fn insert(&mut self, mut new: NewBody) -> BodyId {
        new.m = sanitize_mass(new.m);
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(new.into_body(id));
        id
    }

    /// Remove a body; stale ids are ignored
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.index_of(id)?;
        Some(self.bodies.remove(idx))
    }

    /// Topmost body (most recently added) whose hit circle contains `point`.
    /// `hit_radius` gives the radius in world units for a body.
    pub fn find_at<F>(&self, point: NVec2, hit_radius: F) -> Option<BodyId>
    where
        F: Fn(&Body) -> f64,
    {
        self.bodies
            .iter()
            .rev()
            .find(|b| {
                let r = hit_radius(b);
                (point - b.x).norm_squared() <= r * r
            })
            .map(|b| b.id)
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 0;
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> NVec2 {
        NVec2::new(x, y)
    }

    #[test]
    fn ids_increase_and_are_not_reused() {
        let mut store = BodyStore::new();
        let a = store.add(at(0.0, 0.0), NVec2::zeros(), 10.0, [1, 2, 3]);
        let b = store.add(at(1.0, 0.0), NVec2::zeros(), 10.0, [1, 2, 3]);
        store.remove(b);
        let c = store.add(at(2.0, 0.0), NVec2::zeros(), 10.0, [1, 2, 3]);

        assert_eq!(a, BodyId(0));
        assert_eq!(b, BodyId(1));
        assert_eq!(c, BodyId(2));
    }

    #[test]
    fn clear_resets_id_counter() {
        let mut store = BodyStore::new();
        store.add(at(0.0, 0.0), NVec2::zeros(), 10.0, [0, 0, 0]);
        store.add(at(5.0, 0.0), NVec2::zeros(), 10.0, [0, 0, 0]);
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.add(at(0.0, 0.0), NVec2::zeros(), 1.0, [0, 0, 0]), BodyId(0));
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut store = BodyStore::new();
        let a = store.add(at(0.0, 0.0), NVec2::zeros(), 10.0, [0, 0, 0]);
        assert!(store.remove(BodyId(42)).is_none());
        assert!(store.remove(a).is_some());
        assert!(store.remove(a).is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn new_bodies_start_clean() {
        let mut store = BodyStore::new();
        let id = store.add(at(3.0, 4.0), at(1.0, -1.0), 7.0, [9, 9, 9]);
        let b = store.get(id).unwrap();
        assert!(b.trail.is_empty());
        assert_eq!(b.f, NVec2::zeros());
        assert_eq!(b.max_trail_length, crate::simulation::states::DEFAULT_TRAIL_LENGTH);
    }

    #[test]
    fn invalid_masses_are_clamped_on_add() {
        use crate::simulation::states::MIN_MASS;

        let mut store = BodyStore::new();
        let zero = store.add(at(0.0, 0.0), NVec2::zeros(), 0.0, [0, 0, 0]);
        let negative = store.add(at(100.0, 0.0), NVec2::zeros(), -5.0, [0, 0, 0]);
        let nan = store.insert(NewBody::new(at(200.0, 0.0), NVec2::zeros(), f64::NAN, [0, 0, 0]));

        for id in [zero, negative, nan] {
            assert_eq!(store.get(id).unwrap().m, MIN_MASS);
        }
    }

    #[test]
    fn find_at_prefers_most_recent() {
        let mut store = BodyStore::new();
        let _bottom = store.add(at(0.0, 0.0), NVec2::zeros(), 10.0, [0, 0, 0]);
        let top = store.add(at(2.0, 0.0), NVec2::zeros(), 10.0, [0, 0, 0]);

        assert_eq!(store.find_at(at(1.0, 0.0), |_| 5.0), Some(top));
        assert_eq!(store.find_at(at(100.0, 0.0), |_| 5.0), None);
    }

    #[test]
    fn insertion_order_survives_removal() {
        let mut store = BodyStore::new();
        let a = store.add(at(0.0, 0.0), NVec2::zeros(), 1.0, [0, 0, 0]);
        let b = store.add(at(1.0, 0.0), NVec2::zeros(), 1.0, [0, 0, 0]);
        let c = store.add(at(2.0, 0.0), NVec2::zeros(), 1.0, [0, 0, 0]);
        store.remove(b);

        let ids: Vec<BodyId> = store.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![a, c]);
    }
}
