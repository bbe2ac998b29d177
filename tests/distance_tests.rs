use parkpath::{catalog::generate_routes, shared::Distance};

#[test]
fn route_distance_in_meters() {
    let routes = generate_routes("2");
    assert_eq!(routes[0].distance, Distance::from_meters(85.0));
    assert_eq!(routes[0].distance.as_meters(), 85.0);
}

#[test]
fn route_distances_grow_along_the_set() {
    let routes = generate_routes("4");
    assert!(
        routes
            .windows(2)
            .all(|pair| pair[0].distance < pair[1].distance)
    );
}

#[test]
fn distance_display() {
    assert_eq!(Distance::from_meters(85.0).to_string(), "85m");
    assert_eq!(Distance::from_meters(12.5).to_string(), "12.5m");
}
