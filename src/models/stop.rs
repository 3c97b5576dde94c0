use serde::{Deserialize, Serialize};

/// One itinerary waypoint, identified by a free-text location string.
///
/// Stop order is itinerary order: it determines route-line order and
/// start/end pin coloring on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub location: String,
}

impl Stop {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}
