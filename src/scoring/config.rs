use serde::{Deserialize, Serialize};

/// Coefficients of the route score. Lower scores win, so a larger weight
/// penalizes that metric harder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Per meter of route length.
    pub distance: f64,
    /// Per T-junction on the route.
    pub t_junctions: f64,
    /// Per percentage point of vehicle intensity.
    pub vehicle_intensity: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            distance: 0.1,
            t_junctions: 0.6,
            vehicle_intensity: 0.3,
        }
    }
}
