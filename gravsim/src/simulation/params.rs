//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - the fixed force-law constants (`g`, `min_distance`, `collision_threshold`),
//! - the user-tunable multipliers (`gravity_strength`, `time_scale`),
//! - the collision toggle and the per-step time cap (`max_dt`)

pub const G: f64 = 100.0;
pub const MIN_DISTANCE: f64 = 20.0;
pub const COLLISION_THRESHOLD: f64 = 15.0;
pub const MAX_DT: f64 = 1.0 / 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub gravity_strength: f64, // multiplier on g, >= 0
    pub time_scale: f64, // multiplier on wall time, >= 0
    pub collision_enabled: bool,
    pub min_distance: f64, // force-law distance floor
    pub collision_threshold: f64, // merge distance
    pub max_dt: f64, // stability cap on the effective step
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: G,
            gravity_strength: 1.0,
            time_scale: 1.0,
            collision_enabled: true,
            min_distance: MIN_DISTANCE,
            collision_threshold: COLLISION_THRESHOLD,
            max_dt: MAX_DT,
        }
    }
}

impl Parameters {
    /// Restore the fixed constants and clamp the multipliers into range.
    /// Anything replaced is logged at `warn`.
    pub fn validated(self) -> Self {
        let defaults = Self::default();
        Self {
            g: fixed("g", self.g, defaults.g),
            gravity_strength: non_negative(self.gravity_strength).unwrap_or_else(|| {
                log::warn!("ignoring gravity strength {}", self.gravity_strength);
                defaults.gravity_strength
            }),
            time_scale: non_negative(self.time_scale).unwrap_or_else(|| {
                log::warn!("ignoring time scale {}", self.time_scale);
                defaults.time_scale
            }),
            collision_enabled: self.collision_enabled,
            min_distance: fixed("min_distance", self.min_distance, defaults.min_distance),
            collision_threshold: fixed(
                "collision_threshold",
                self.collision_threshold,
                defaults.collision_threshold,
            ),
            max_dt: fixed("max_dt", self.max_dt, defaults.max_dt),
        }
    }
}

// design constants are not tunable
fn fixed(name: &str, value: f64, constant: f64) -> f64 {
    if value != constant {
        log::warn!("{name} is fixed at {constant}, ignoring {value}");
    }
    constant
}

/// Clamp a user-facing multiplier to a finite, non-negative value.
/// Returns `None` when the input cannot be interpreted at all.
pub(crate) fn non_negative(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else if value.is_infinite() {
        if value > 0.0 { None } else { Some(0.0) }
    } else {
        Some(value.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_restores_constants() {
        let p = Parameters {
            g: 1.0,
            min_distance: 0.0,
            collision_threshold: -3.0,
            max_dt: f64::NAN,
            ..Parameters::default()
        }
        .validated();

        assert_eq!(p, Parameters::default());
    }

    #[test]
    fn validated_clamps_multipliers() {
        let p = Parameters {
            gravity_strength: -2.0,
            time_scale: f64::NAN,
            collision_enabled: false,
            ..Parameters::default()
        }
        .validated();

        assert_eq!(p.gravity_strength, 0.0);
        assert_eq!(p.time_scale, 1.0);
        assert!(!p.collision_enabled);
    }
}
