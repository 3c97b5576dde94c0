use crate::models::Trip;

/// Parse the embedded saved-trips table.
///
/// The table is the mock input normally supplied by the surrounding app;
/// a malformed table yields an empty trip list rather than a crash.
#[must_use]
pub fn sample_trips() -> Vec<Trip> {
    let json = include_str!("../trips.json");
    parse_trips(json)
}

#[must_use]
pub fn parse_trips(json: &str) -> Vec<Trip> {
    match serde_json::from_str(json) {
        Ok(trips) => trips,
        Err(err) => {
            leptos::logging::warn!("Failed to parse embedded trips: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::{LocationResolver, StaticGazetteer};

    #[test]
    fn test_sample_trips_parse() {
        let trips = sample_trips();
        assert!(!trips.is_empty());

        for trip in &trips {
            assert!(!trip.name.is_empty());
            assert!(!trip.stops.is_empty());
            assert!(trip.start_date <= trip.end_date);
        }
    }

    #[test]
    fn test_sample_trip_ids_are_unique() {
        let trips = sample_trips();
        for (i, a) in trips.iter().enumerate() {
            for b in &trips[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate trip id in embedded table");
            }
        }
    }

    // Mock-data integrity: every embedded stop must resolve in the
    // gazetteer, or pins would silently go missing from the demo trips
    #[test]
    fn test_sample_stops_all_resolve() {
        for trip in sample_trips() {
            for stop in &trip.stops {
                assert!(
                    StaticGazetteer.resolve(&stop.location).is_some(),
                    "unresolvable stop {:?} in trip {:?}",
                    stop.location,
                    trip.name
                );
            }
        }
    }

    #[test]
    fn test_malformed_table_yields_empty_list() {
        assert!(parse_trips("not json").is_empty());
        assert!(parse_trips("{}").is_empty());
    }
}
