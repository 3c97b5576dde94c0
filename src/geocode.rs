use indexmap::IndexMap;
use std::sync::LazyLock;

use crate::models::{GeoPoint, ResolvedStop, Stop};

/// Read-only capability for turning free-text location strings into
/// coordinates. The map core only ever talks to this trait, so the embedded
/// gazetteer can be swapped for a real geocoding service without touching
/// the projector or renderer.
pub trait LocationResolver {
    fn resolve(&self, location: &str) -> Option<GeoPoint>;
}

/// Embedded gazetteer keyed by canonical "City, Country" strings.
///
/// Insertion order is the tie-breaker for substring matches: when a query
/// like "France" matches several entries, the first one declared below wins.
/// Keep entries for the same country ordered most-notable-first.
static GAZETTEER: LazyLock<IndexMap<&'static str, GeoPoint>> = LazyLock::new(|| {
    IndexMap::from([
        ("Paris, France", GeoPoint::new(48.8566, 2.3522)),
        ("Nice, France", GeoPoint::new(43.7102, 7.2620)),
        ("Lyon, France", GeoPoint::new(45.7640, 4.8357)),
        ("Rome, Italy", GeoPoint::new(41.9028, 12.4964)),
        ("Florence, Italy", GeoPoint::new(43.7696, 11.2558)),
        ("Venice, Italy", GeoPoint::new(45.4408, 12.3155)),
        ("Milan, Italy", GeoPoint::new(45.4642, 9.1900)),
        ("Barcelona, Spain", GeoPoint::new(41.3851, 2.1734)),
        ("Madrid, Spain", GeoPoint::new(40.4168, -3.7038)),
        ("Seville, Spain", GeoPoint::new(37.3891, -5.9845)),
        ("Lisbon, Portugal", GeoPoint::new(38.7223, -9.1393)),
        ("Porto, Portugal", GeoPoint::new(41.1579, -8.6291)),
        ("London, United Kingdom", GeoPoint::new(51.5074, -0.1278)),
        ("Edinburgh, United Kingdom", GeoPoint::new(55.9533, -3.1883)),
        ("Dublin, Ireland", GeoPoint::new(53.3498, -6.2603)),
        ("Amsterdam, Netherlands", GeoPoint::new(52.3676, 4.9041)),
        ("Brussels, Belgium", GeoPoint::new(50.8503, 4.3517)),
        ("Berlin, Germany", GeoPoint::new(52.5200, 13.4050)),
        ("Munich, Germany", GeoPoint::new(48.1351, 11.5820)),
        ("Vienna, Austria", GeoPoint::new(48.2082, 16.3738)),
        ("Prague, Czech Republic", GeoPoint::new(50.0755, 14.4378)),
        ("Budapest, Hungary", GeoPoint::new(47.4979, 19.0402)),
        ("Zurich, Switzerland", GeoPoint::new(47.3769, 8.5417)),
        ("Geneva, Switzerland", GeoPoint::new(46.2044, 6.1432)),
        ("Athens, Greece", GeoPoint::new(37.9838, 23.7275)),
        ("Santorini, Greece", GeoPoint::new(36.3932, 25.4615)),
        ("Istanbul, Turkey", GeoPoint::new(41.0082, 28.9784)),
        ("Dubrovnik, Croatia", GeoPoint::new(42.6507, 18.0944)),
        ("Copenhagen, Denmark", GeoPoint::new(55.6761, 12.5683)),
        ("Stockholm, Sweden", GeoPoint::new(59.3293, 18.0686)),
        ("Oslo, Norway", GeoPoint::new(59.9139, 10.7522)),
        ("Reykjavik, Iceland", GeoPoint::new(64.1466, -21.9426)),
        ("New York, United States", GeoPoint::new(40.7128, -74.0060)),
        ("San Francisco, United States", GeoPoint::new(37.7749, -122.4194)),
        ("Chicago, United States", GeoPoint::new(41.8781, -87.6298)),
        ("Vancouver, Canada", GeoPoint::new(49.2827, -123.1207)),
        ("Toronto, Canada", GeoPoint::new(43.6532, -79.3832)),
        ("Mexico City, Mexico", GeoPoint::new(19.4326, -99.1332)),
        ("Rio de Janeiro, Brazil", GeoPoint::new(-22.9068, -43.1729)),
        ("Buenos Aires, Argentina", GeoPoint::new(-34.6037, -58.3816)),
        ("Tokyo, Japan", GeoPoint::new(35.6762, 139.6503)),
        ("Kyoto, Japan", GeoPoint::new(35.0116, 135.7681)),
        ("Seoul, South Korea", GeoPoint::new(37.5665, 126.9780)),
        ("Hong Kong, China", GeoPoint::new(22.3193, 114.1694)),
        ("Singapore, Singapore", GeoPoint::new(1.3521, 103.8198)),
        ("Bangkok, Thailand", GeoPoint::new(13.7563, 100.5018)),
        ("Bali, Indonesia", GeoPoint::new(-8.3405, 115.0920)),
        ("Sydney, Australia", GeoPoint::new(-33.8688, 151.2093)),
        ("Auckland, New Zealand", GeoPoint::new(-36.8485, 174.7633)),
        ("Cairo, Egypt", GeoPoint::new(30.0444, 31.2357)),
        ("Marrakech, Morocco", GeoPoint::new(31.6295, -7.9811)),
        ("Cape Town, South Africa", GeoPoint::new(-33.9249, 18.4241)),
        ("Dubai, United Arab Emirates", GeoPoint::new(25.2048, 55.2708)),
        ("Mumbai, India", GeoPoint::new(19.0760, 72.8777)),
    ])
});

/// Resolver backed by the embedded gazetteer table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticGazetteer;

impl LocationResolver for StaticGazetteer {
    /// Resolve a location string against the gazetteer.
    ///
    /// Exact (case-sensitive) key matches win. Failing that, the first
    /// entry in table order whose key contains the query, or whose key is
    /// contained in the query, wins (case-insensitive in both directions).
    fn resolve(&self, location: &str) -> Option<GeoPoint> {
        if let Some(point) = GAZETTEER.get(location) {
            return Some(*point);
        }

        let query = location.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        GAZETTEER.iter().find_map(|(key, point)| {
            let key_lower = key.to_lowercase();
            if key_lower.contains(&query) || query.contains(&key_lower) {
                Some(*point)
            } else {
                None
            }
        })
    }
}

/// Resolve an ordered stop list, dropping stops the resolver cannot place.
///
/// Indices are 1-based over the resolved sequence, so the numbers painted
/// on the pins stay contiguous even when some stops fail to resolve.
#[must_use]
pub fn resolve_stops(resolver: &dyn LocationResolver, stops: &[Stop]) -> Vec<ResolvedStop> {
    let mut resolved = Vec::new();

    for stop in stops {
        let Some(point) = resolver.resolve(&stop.location) else {
            continue;
        };
        let index = resolved.len() + 1;
        resolved.push(ResolvedStop::new(point, stop.location.clone(), index));
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let point = StaticGazetteer.resolve("Paris, France").expect("resolves");
        assert_eq!(point, GeoPoint::new(48.8566, 2.3522));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let first = StaticGazetteer.resolve("Rome, Italy");
        let second = StaticGazetteer.resolve("Rome, Italy");
        assert_eq!(first, second);
    }

    #[test]
    fn test_substring_query_in_key() {
        let point = StaticGazetteer.resolve("Rome").expect("resolves");
        assert_eq!(point, GeoPoint::new(41.9028, 12.4964));
    }

    #[test]
    fn test_substring_key_in_query() {
        let point = StaticGazetteer
            .resolve("Weekend in Florence, Italy with friends")
            .expect("resolves");
        assert_eq!(point, GeoPoint::new(43.7696, 11.2558));
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let point = StaticGazetteer.resolve("paris, france").expect("resolves");
        assert_eq!(point, GeoPoint::new(48.8566, 2.3522));
    }

    #[test]
    fn test_ambiguous_substring_takes_first_table_entry() {
        // Three French entries match; Paris is declared first
        let point = StaticGazetteer.resolve("France").expect("resolves");
        assert_eq!(point, GeoPoint::new(48.8566, 2.3522));
    }

    #[test]
    fn test_unknown_location() {
        assert_eq!(StaticGazetteer.resolve("Atlantis"), None);
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(StaticGazetteer.resolve(""), None);
        assert_eq!(StaticGazetteer.resolve("   "), None);
    }

    #[test]
    fn test_resolve_stops_drops_misses_and_reindexes() {
        let stops = vec![
            Stop::new("Rome, Italy"),
            Stop::new("Atlantis"),
            Stop::new("Florence, Italy"),
        ];
        let resolved = resolve_stops(&StaticGazetteer, &stops);

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].location, "Rome, Italy");
        assert_eq!(resolved[0].index, 1);
        assert_eq!(resolved[1].location, "Florence, Italy");
        assert_eq!(resolved[1].index, 2);
    }

    #[test]
    fn test_resolve_stops_all_unresolvable() {
        let stops = vec![Stop::new("Atlantis"), Stop::new("El Dorado")];
        assert!(resolve_stops(&StaticGazetteer, &stops).is_empty());
    }
}
