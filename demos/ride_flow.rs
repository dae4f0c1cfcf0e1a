//! Walkthrough of a full ride: pick a location, run the trip, reset.
//!
//! Run with `RUST_LOG=curbside=debug` to see the stores' mutation events.

use curbside::{Coordinates, DevicePosition, Driver, GeocodedPlace, LocationStore, TripStore};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Ride Flow Example ===\n");

    let locations = LocationStore::new();
    let trip = TripStore::new();

    println!("1. Device reports the rider's position");
    locations.set_current_location(Some(DevicePosition::new(52.5200, 13.4050)));

    println!("2. Rider picks a destination from geocoder results");
    locations.set_selected_location(&GeocodedPlace {
        display_name: Some("Potsdamer Platz, Berlin".to_string()),
        lat: Some(52.5096),
        lon: Some(13.3759),
    });
    locations.selected_location().with(|selected| {
        println!(
            "   selected: {} at ({:?}, {:?})",
            selected.name.as_deref().unwrap_or("<none>"),
            selected.geometry.lat,
            selected.geometry.lng
        );
    });

    println!("\n3. Booking creates the trip from the selection");
    let selected = locations.selected_location().get();
    trip.id.set(Some(501));
    trip.user_id.set(Some(42));
    trip.destination.set(selected.geometry);
    trip.destination_name.set(selected.name);
    trip.driver.set(Driver {
        id: Some(17),
        year: Some(2020),
        make: Some("Skoda".to_string()),
        model: Some("Octavia".to_string()),
        license_plate: Some("B-KR 7180".to_string()),
        user_name: Some("Jonas".to_string()),
    });

    println!("\n4. Watching the driver's position");
    let _guard = trip.driver_location.watch(|position| {
        println!("   driver at ({:?}, {:?})", position.lat, position.lng);
    });

    println!("\n5. Trip starts");
    trip.is_started.set(true);
    println!("   in progress: {}", trip.in_progress().get());

    trip.driver_location.set(Coordinates::new(52.5150, 13.3900));
    trip.driver_location.set(Coordinates::new(52.5110, 13.3820));

    println!("\n6. Trip completes");
    trip.is_complete.set(true);
    println!("   in progress: {}", trip.in_progress().get());

    println!("\n7. Reset both stores for the next ride");
    trip.reset();
    locations.reset();
    println!(
        "   trip id: {:?}, selected name: {:?}",
        trip.id.get(),
        locations.selected_location().get().name
    );

    println!("\n✓ Example complete!");
}
