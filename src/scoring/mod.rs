mod config;
pub use config::*;

use std::{cmp, collections::HashMap, fmt::Display};

use serde::Serialize;
use tracing::debug;

use crate::{
    catalog::{Route, RouteId},
    shared::{Distance, Intensity},
};

/// Weighted cost of a route. Lower is better.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Score {
    pub const fn as_f64(&self) -> f64 {
        self.0
    }
}

/// Routes after an evaluation pass together with the winner, if any route
/// could be scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Evaluation {
    pub routes: Vec<Route>,
    pub best: Option<Route>,
}

impl Weights {
    pub fn score(&self, distance: Distance, t_junctions: u32, intensity: Intensity) -> Score {
        Score(self.raw_score(
            distance.as_meters(),
            f64::from(t_junctions),
            intensity.as_f64(),
        ))
    }

    pub fn raw_score(&self, distance: f64, t_junctions: f64, vehicle_intensity: f64) -> f64 {
        (distance * self.distance)
            + (t_junctions * self.t_junctions)
            + (vehicle_intensity * self.vehicle_intensity)
    }

    /// Re-scores every route from the raw field text in `inputs` and picks
    /// the cheapest one. Nothing carries over from earlier passes: a route
    /// whose text is missing or invalid ends up unscored.
    pub fn evaluate(&self, routes: &[Route], inputs: &HashMap<RouteId, String>) -> Evaluation {
        let routes: Vec<Route> = routes
            .iter()
            .map(|route| {
                let mut route = route.clone();
                route.clear_evaluation();
                let Some(raw) = inputs.get(&route.id) else {
                    return route;
                };
                match Intensity::parse(raw) {
                    Ok(intensity) => {
                        route.vehicle_intensity = Some(intensity);
                        route.score =
                            Some(self.score(route.distance, route.t_junctions, intensity));
                    }
                    Err(err) => debug!("Route {} not scored: {err}", route.id),
                }
                route
            })
            .collect();

        let best = select_best(&routes).cloned();
        match &best {
            Some(route) => debug!(
                "Best route is {} with score {}",
                route.id,
                route.score.unwrap_or_default()
            ),
            None => debug!("No route could be scored"),
        }
        Evaluation { routes, best }
    }
}

/// Lowest scored route. On equal scores the earliest route wins.
pub fn select_best(routes: &[Route]) -> Option<&Route> {
    let mut best: Option<(&Route, Score)> = None;
    for route in routes {
        let Some(score) = route.score else {
            continue;
        };
        match best {
            Some((_, best_score)) if best_score <= score => {}
            _ => best = Some((route, score)),
        }
    }
    best.map(|(route, _)| route)
}

/// `0.1 * distance + 0.6 * t_junctions + 0.3 * vehicle_intensity`
pub fn compute_score(distance: f64, t_junctions: f64, vehicle_intensity: f64) -> f64 {
    Weights::default().raw_score(distance, t_junctions, vehicle_intensity)
}

/// [`Weights::evaluate`] with the default weights.
pub fn evaluate_and_select_best(routes: &[Route], inputs: &HashMap<RouteId, String>) -> Evaluation {
    Weights::default().evaluate(routes, inputs)
}
