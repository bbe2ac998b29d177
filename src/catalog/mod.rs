mod models;
pub use models::*;

use std::{fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::debug;

use crate::shared::{self, parse_leading_int};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Area code {0} does not match any area")]
    UnknownArea(i64),
    #[error("Area code could not be read: {0}")]
    Parse(#[from] shared::Error),
}

// Top rows A-C
static AREA_2_ROUTES: [RouteTemplate; 4] = [
    RouteTemplate::new(1, "Path 1", 85.0, 2),
    RouteTemplate::new(2, "Path 2", 120.0, 4),
    RouteTemplate::new(3, "Path 3", 145.0, 6),
    RouteTemplate::new(4, "Path 4", 165.0, 8),
];

// Middle rows D-F
static AREA_3_ROUTES: [RouteTemplate; 3] = [
    RouteTemplate::new(1, "Path 1", 75.0, 1),
    RouteTemplate::new(2, "Path 2", 100.0, 3),
    RouteTemplate::new(3, "Path 3", 130.0, 5),
];

// Bottom rows G-H
static AREA_4_ROUTES: [RouteTemplate; 4] = [
    RouteTemplate::new(1, "Path 1", 65.0, 2),
    RouteTemplate::new(2, "Path 2", 90.0, 3),
    RouteTemplate::new(3, "Path 3", 115.0, 4),
    RouteTemplate::new(4, "Path 4", 140.0, 6),
];

/// A parking area with a known candidate route set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AreaCode {
    Two,
    #[default]
    Three,
    Four,
}

impl FromStr for AreaCode {
    type Err = self::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_leading_int(s)? {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(self::Error::UnknownArea(other)),
        }
    }
}

impl Display for AreaCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_number())
    }
}

impl AreaCode {
    pub const ALL: [AreaCode; 3] = [Self::Two, Self::Three, Self::Four];

    /// Maps any user text to an area. Text that does not name a known area
    /// lands in the default area.
    pub fn resolve(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err| {
            debug!("Falling back to area {}: {err}", Self::default());
            Self::default()
        })
    }

    pub const fn as_number(&self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

/// The fixed candidate route sets for every known area.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    area_2: &'static [RouteTemplate],
    area_3: &'static [RouteTemplate],
    area_4: &'static [RouteTemplate],
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            area_2: &AREA_2_ROUTES,
            area_3: &AREA_3_ROUTES,
            area_4: &AREA_4_ROUTES,
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the candidate set of one area.
    pub fn with_area(mut self, area: AreaCode, templates: &'static [RouteTemplate]) -> Self {
        match area {
            AreaCode::Two => self.area_2 = templates,
            AreaCode::Three => self.area_3 = templates,
            AreaCode::Four => self.area_4 = templates,
        }
        self
    }

    pub fn templates(&self, area: AreaCode) -> &'static [RouteTemplate] {
        match area {
            AreaCode::Two => self.area_2,
            AreaCode::Three => self.area_3,
            AreaCode::Four => self.area_4,
        }
    }

    /// Materializes fresh, unscored routes for the area named by `raw`.
    /// Blank text yields no routes.
    pub fn generate_routes(&self, raw: &str) -> Vec<Route> {
        if raw.trim().is_empty() {
            return Vec::new();
        }
        let area = AreaCode::resolve(raw);
        let routes: Vec<Route> = self.templates(area).iter().map(Route::from).collect();
        debug!("Generated {} routes for area {area}", routes.len());
        routes
    }
}

/// [`Catalog::generate_routes`] on the built in catalog.
pub fn generate_routes(raw: &str) -> Vec<Route> {
    Catalog::new().generate_routes(raw)
}
