use std::sync::Arc;

use serde::Serialize;

use crate::{
    scoring::Score,
    shared::{Distance, Intensity},
};

pub type RouteId = u32;

/// Immutable reference data a [`Route`] is materialized from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteTemplate {
    pub id: RouteId,
    pub name: &'static str,
    pub distance: Distance,
    pub t_junctions: u32,
}

impl RouteTemplate {
    pub const fn new(id: RouteId, name: &'static str, meters: f64, t_junctions: u32) -> Self {
        Self {
            id,
            name,
            distance: Distance::from_meters(meters),
            t_junctions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub id: RouteId,
    pub name: Arc<str>,
    pub distance: Distance,
    pub t_junctions: u32,
    pub vehicle_intensity: Option<Intensity>,
    pub score: Option<Score>,
}

impl From<&RouteTemplate> for Route {
    fn from(value: &RouteTemplate) -> Self {
        Self {
            id: value.id,
            name: value.name.into(),
            distance: value.distance,
            t_junctions: value.t_junctions,
            vehicle_intensity: None,
            score: None,
        }
    }
}

impl Route {
    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }

    /// Drops any previous evaluation.
    pub fn clear_evaluation(&mut self) {
        self.vehicle_intensity = None;
        self.score = None;
    }
}
