use crate::constants::PIN_HIT_RADIUS;
use crate::models::ResolvedStop;
use crate::projection::{GeoBounds, Projector, Viewport};

/// Find the stop whose projected pin center is within the hit radius of
/// the pointer, if any. Returns an index into the resolved-stop slice;
/// the first qualifying stop in itinerary order wins.
///
/// The bounding box is derived fresh from the stop set on every call, so
/// this path cannot drift from the draw path even though it runs on a
/// different event.
#[must_use]
pub fn find_stop_at_position(
    x: f64,
    y: f64,
    stops: &[ResolvedStop],
    viewport: Viewport,
    width: f64,
    height: f64,
) -> Option<usize> {
    let bounds = GeoBounds::from_stops(stops)?;
    let projector = Projector::new(bounds, viewport, width, height);

    stops.iter().position(|stop| {
        let (pin_x, pin_y) = projector.project(stop);
        let dx = pin_x - x;
        let dy = pin_y - y;
        (dx * dx + dy * dy).sqrt() <= PIN_HIT_RADIUS
    })
}
