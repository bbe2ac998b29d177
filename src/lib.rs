pub mod catalog;
pub mod scoring;
pub mod session;
pub mod shared;

pub mod prelude {
    pub use crate::catalog::{AreaCode, Catalog, Route, RouteId, RouteTemplate, generate_routes};
    pub use crate::scoring::{Evaluation, Score, Weights, compute_score, evaluate_and_select_best};
    pub use crate::session::{Session, Stage};
    pub use crate::shared::{Distance, Intensity, IntensityLevel};
}
