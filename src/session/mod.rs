use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    catalog::{Catalog, Route, RouteId},
    scoring::{Evaluation, Weights},
};

/// What the form currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Stage {
    /// Nothing submitted yet, or the form was reset.
    #[default]
    Idle,
    /// Candidate routes are listed without a best route.
    RoutesShown,
    /// Candidate routes are listed and a best route was found.
    ResultsShown,
}

/// State of one user's form. Every action runs to completion on `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    weights: Weights,
    area_input: String,
    routes: Vec<Route>,
    intensity_inputs: HashMap<RouteId, String>,
    best: Option<Route>,
    stage: Stage,
}

impl Session {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn set_area_input(&mut self, text: impl Into<String>) {
        self.area_input = text.into();
    }

    pub fn area_input(&self) -> &str {
        &self.area_input
    }

    pub fn can_submit(&self) -> bool {
        !self.area_input.trim().is_empty()
    }

    /// Lists the candidate routes for the entered area, discarding every
    /// earlier intensity and result. Returns false and changes nothing when
    /// no area was entered.
    pub fn submit_area(&mut self) -> bool {
        if !self.can_submit() {
            debug!("Ignoring submit without an area");
            return false;
        }
        self.routes = self.catalog.generate_routes(&self.area_input);
        self.intensity_inputs.clear();
        self.best = None;
        self.stage = Stage::RoutesShown;
        info!(
            "Showing {} routes for area input {:?}",
            self.routes.len(),
            self.area_input
        );
        true
    }

    /// Stores the raw text typed for a route. Nothing is scored until
    /// [`Session::recompute`].
    pub fn set_intensity_input(&mut self, id: RouteId, text: impl Into<String>) {
        self.intensity_inputs.insert(id, text.into());
    }

    pub fn intensity_input(&self, id: RouteId) -> &str {
        self.intensity_inputs
            .get(&id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn intensity_inputs(&self) -> &HashMap<RouteId, String> {
        &self.intensity_inputs
    }

    /// Scores every listed route from the typed text and picks the best one.
    /// Does nothing while no routes are listed.
    pub fn recompute(&mut self) -> Option<&Route> {
        if self.routes.is_empty() {
            return None;
        }
        let Evaluation { routes, best } = self.weights.evaluate(&self.routes, &self.intensity_inputs);
        self.routes = routes;
        self.best = best;
        self.stage = if self.best.is_some() {
            Stage::ResultsShown
        } else {
            Stage::RoutesShown
        };
        if let Some(best) = &self.best {
            info!("{} is the best route", best.name);
        }
        self.best.as_ref()
    }

    pub fn reset(&mut self) {
        self.area_input.clear();
        self.routes.clear();
        self.intensity_inputs.clear();
        self.best = None;
        self.stage = Stage::Idle;
        debug!("Session reset");
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn best(&self) -> Option<&Route> {
        self.best.as_ref()
    }

    pub fn is_best(&self, id: RouteId) -> bool {
        self.best.as_ref().is_some_and(|best| best.id == id)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn shows_routes(&self) -> bool {
        self.stage != Stage::Idle
    }

    pub fn shows_results(&self) -> bool {
        self.stage == Stage::ResultsShown
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }
}
