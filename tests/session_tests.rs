use parkpath::{
    catalog::{AreaCode, Catalog, RouteTemplate},
    scoring::Weights,
    session::{Session, Stage},
};

fn session_with_area(area: &str) -> Session {
    let mut session = Session::new();
    session.set_area_input(area);
    assert!(session.submit_area());
    session
}

#[test]
fn starts_idle() {
    let session = Session::new();
    assert_eq!(session.stage(), Stage::Idle);
    assert!(session.routes().is_empty());
    assert!(session.best().is_none());
    assert!(!session.shows_routes());
    assert!(!session.shows_results());
    assert!(!session.can_submit());
}

#[test]
fn submit_without_area_is_ignored() {
    let mut session = Session::new();
    assert!(!session.submit_area());
    session.set_area_input("  ");
    assert!(!session.submit_area());
    assert_eq!(session.stage(), Stage::Idle);
    assert!(session.routes().is_empty());
}

#[test]
fn submit_shows_routes() {
    let session = session_with_area("2");
    assert_eq!(session.stage(), Stage::RoutesShown);
    assert_eq!(session.routes().len(), 4);
    assert!(session.shows_routes());
    assert!(!session.shows_results());
}

#[test]
fn submit_unknown_area_shows_default_routes() {
    let session = session_with_area("banana");
    assert_eq!(session.routes().len(), 3);
}

#[test]
fn editing_does_not_score() {
    let mut session = session_with_area("3");
    session.set_intensity_input(1, "20");
    assert_eq!(session.intensity_input(1), "20");
    assert_eq!(session.intensity_input(2), "");
    assert!(session.routes().iter().all(|route| route.score.is_none()));
    assert_eq!(session.stage(), Stage::RoutesShown);
}

#[test]
fn recompute_selects_best() {
    let mut session = session_with_area("2");
    for (id, text) in [(1, "30"), (2, "10"), (3, "0"), (4, "0")] {
        session.set_intensity_input(id, text);
    }
    let best = session.recompute().map(|route| route.id);
    assert_eq!(best, Some(2));
    assert_eq!(session.stage(), Stage::ResultsShown);
    assert!(session.is_best(2));
    assert!(!session.is_best(1));
    assert!(session.routes().iter().all(|route| route.is_scored()));
}

#[test]
fn recompute_without_valid_inputs_hides_results() {
    let mut session = session_with_area("4");
    session.set_intensity_input(1, "abc");
    assert!(session.recompute().is_none());
    assert_eq!(session.stage(), Stage::RoutesShown);
    assert!(!session.shows_results());
}

#[test]
fn stale_best_is_cleared() {
    let mut session = session_with_area("3");
    session.set_intensity_input(1, "10");
    assert!(session.recompute().is_some());

    session.set_intensity_input(1, "250");
    assert!(session.recompute().is_none());
    assert!(session.best().is_none());
    assert!(!session.is_best(1));
    assert_eq!(session.stage(), Stage::RoutesShown);
    // Typed text survives a recompute, even when invalid
    assert_eq!(session.intensity_input(1), "250");
}

#[test]
fn recompute_is_repeatable() {
    let mut session = session_with_area("2");
    session.set_intensity_input(1, "30");
    session.set_intensity_input(3, "x");
    session.recompute();
    let routes = session.routes().to_vec();
    let best = session.best().cloned();
    session.recompute();
    assert_eq!(session.routes(), routes.as_slice());
    assert_eq!(session.best().cloned(), best);
}

#[test]
fn recompute_without_routes_is_noop() {
    let mut session = Session::new();
    session.set_intensity_input(1, "10");
    assert!(session.recompute().is_none());
    assert_eq!(session.stage(), Stage::Idle);
}

#[test]
fn new_area_discards_inputs_and_results() {
    let mut session = session_with_area("2");
    session.set_intensity_input(1, "10");
    session.recompute();
    assert!(session.shows_results());

    session.set_area_input("4");
    assert!(session.submit_area());
    assert_eq!(session.stage(), Stage::RoutesShown);
    assert!(session.intensity_inputs().is_empty());
    assert!(session.best().is_none());
    assert!(session.routes().iter().all(|route| route.score.is_none()));
    assert_eq!(session.routes()[0].distance.as_meters(), 65.0);
}

#[test]
fn reset_clears_everything() {
    let mut session = session_with_area("2");
    session.set_intensity_input(1, "10");
    session.set_intensity_input(2, "bad");
    session.recompute();

    session.reset();
    assert_eq!(session.stage(), Stage::Idle);
    assert_eq!(session.area_input(), "");
    assert!(session.routes().is_empty());
    assert!(session.intensity_inputs().is_empty());
    assert!(session.best().is_none());
}

#[test]
fn reset_from_idle() {
    let mut session = Session::new();
    session.reset();
    assert_eq!(session.stage(), Stage::Idle);
}

#[test]
fn custom_weights() {
    // Only traffic counts, so the emptiest route wins regardless of length
    let weights = Weights {
        distance: 0.0,
        t_junctions: 0.0,
        vehicle_intensity: 1.0,
    };
    let mut session = Session::new().with_weights(weights);
    session.set_area_input("2");
    session.submit_area();
    session.set_intensity_input(1, "40");
    session.set_intensity_input(4, "5");
    assert_eq!(session.recompute().map(|route| route.id), Some(4));
    assert_eq!(session.weights(), &weights);
}

static LOT: [RouteTemplate; 2] = [
    RouteTemplate::new(1, "Gate", 50.0, 1),
    RouteTemplate::new(2, "Service lane", 50.0, 1),
];

#[test]
fn custom_catalog() {
    let catalog = Catalog::new().with_area(AreaCode::Three, &LOT);
    let mut session = Session::new().with_catalog(catalog);
    session.set_area_input("unknown");
    session.submit_area();
    session.set_intensity_input(1, "15");
    session.set_intensity_input(2, "15");
    assert_eq!(session.routes().len(), 2);
    assert_eq!(session.recompute().map(|route| route.id), Some(1));
}
