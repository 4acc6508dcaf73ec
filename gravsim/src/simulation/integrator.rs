//! Fixed-order time integration for the body set
//!
//! Semi-implicit Euler driven by the forces left in `Body::f` by the force
//! pass: velocity is kicked first, then position drifts with the new velocity.

use super::params::{Parameters, MAX_DT};
use super::states::Body;

/// Scale wall time by `time_scale` and cap it at `max_dt`.
/// Negative or non-finite products give a zero step.
pub fn effective_dt(raw_dt: f64, params: &Parameters) -> f64 {
    let dt = raw_dt * params.time_scale;
    let cap = if params.max_dt.is_finite() && params.max_dt > 0.0 {
        params.max_dt
    } else {
        MAX_DT
    };
    if dt.is_finite() {
        dt.max(0.0).min(cap)
    } else {
        0.0
    }
}

/// Advance every body by `dt` and record the new position in its trail
pub fn euler_integrator(bodies: &mut [Body], dt: f64) {
    for b in bodies.iter_mut() {
        // Kick: v_n+1 = v_n + dt * F / m
        let a = b.f / b.m;
        b.v += a * dt;

        // Drift: x_n+1 = x_n + dt * v_n+1
        b.x += b.v * dt;

        b.record_trail();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{BodyId, NVec2, NewBody};

    fn body(x: NVec2, v: NVec2, m: f64, trail: usize) -> Body {
        NewBody::new(x, v, m, [0, 0, 0])
            .with_trail_length(trail)
            .into_body(BodyId(0))
    }

    #[test]
    fn dt_is_scaled_and_capped() {
        let mut p = Parameters::default();
        assert!((effective_dt(1.0 / 60.0, &p) - 1.0 / 60.0).abs() < 1e-15);

        p.time_scale = 2.0;
        assert!((effective_dt(1.0 / 60.0, &p) - 1.0 / 30.0).abs() < 1e-15);

        p.time_scale = 1.0;
        assert_eq!(effective_dt(0.5, &p), p.max_dt);
        assert_eq!(effective_dt(-1.0, &p), 0.0);
        assert_eq!(effective_dt(f64::NAN, &p), 0.0);
    }

    #[test]
    fn bad_cap_falls_back_to_default() {
        for cap in [f64::NAN, -1.0, 0.0, f64::INFINITY] {
            let p = Parameters { max_dt: cap, ..Parameters::default() };
            assert_eq!(effective_dt(1.0, &p), MAX_DT, "cap {cap}");
            assert_eq!(effective_dt(-1.0, &p), 0.0, "cap {cap}");
        }
    }

    #[test]
    fn velocity_is_updated_before_position() {
        let mut bodies = vec![body(NVec2::zeros(), NVec2::zeros(), 2.0, 10)];
        bodies[0].f = NVec2::new(4.0, 0.0);

        euler_integrator(&mut bodies, 0.5);

        // a = 2, v = 1, x = v * dt = 0.5 (explicit Euler would leave x at 0)
        assert!((bodies[0].v.x - 1.0).abs() < 1e-12);
        assert!((bodies[0].x.x - 0.5).abs() < 1e-12);
    }

    #[test]
    fn trail_is_bounded_and_oldest_first() {
        let mut bodies = vec![body(NVec2::zeros(), NVec2::new(1.0, 0.0), 1.0, 3)];

        for _ in 0..10 {
            euler_integrator(&mut bodies, 1.0);
        }

        let xs: Vec<f64> = bodies[0].trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![8.0, 9.0, 10.0]);
    }

    #[test]
    fn zero_trail_length_keeps_no_history() {
        let mut bodies = vec![body(NVec2::zeros(), NVec2::new(1.0, 0.0), 1.0, 0)];
        euler_integrator(&mut bodies, 1.0);
        assert!(bodies[0].trail.is_empty());
    }
}
