use crate::constants::{
    BOUNDS_PAD_FRACTION, DEGENERATE_PAD_DEGREES, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
use crate::models::ResolvedStop;

/// Padded geographic bounding box over a resolved-stop set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    /// Compute the padded bounding box for a set of resolved stops.
    ///
    /// Each axis is padded by 30% of its span; an axis with zero span (a
    /// single stop, or all stops at identical coordinates) gets a fixed
    /// degree pad instead so the box never collapses to zero area.
    ///
    /// Returns `None` for an empty stop set; callers render the
    /// placeholder instead of projecting.
    #[must_use]
    pub fn from_stops(stops: &[ResolvedStop]) -> Option<Self> {
        let first = stops.first()?;

        let mut min_lat = first.lat;
        let mut max_lat = first.lat;
        let mut min_lng = first.lng;
        let mut max_lng = first.lng;

        for stop in &stops[1..] {
            min_lat = min_lat.min(stop.lat);
            max_lat = max_lat.max(stop.lat);
            min_lng = min_lng.min(stop.lng);
            max_lng = max_lng.max(stop.lng);
        }

        let (min_lat, max_lat) = pad_axis(min_lat, max_lat);
        let (min_lng, max_lng) = pad_axis(min_lng, max_lng);

        Some(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[must_use]
    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }
}

fn pad_axis(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span == 0.0 {
        (min - DEGENERATE_PAD_DEGREES, max + DEGENERATE_PAD_DEGREES)
    } else {
        let pad = span * BOUNDS_PAD_FRACTION;
        (min - pad, max + pad)
    }
}

/// Component-local view state: zoom factor and pan offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

/// One zoom-in step, clamped to the viewport's zoom range
#[must_use]
pub fn zoom_in_level(zoom: f64) -> f64 {
    (zoom * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM)
}

/// One zoom-out step, clamped to the viewport's zoom range
#[must_use]
pub fn zoom_out_level(zoom: f64) -> f64 {
    (zoom / ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM)
}

/// The lat/lng to pixel transform for one frame.
///
/// Both the draw path and the hit-test path construct this from the same
/// inputs, so pins are always detected exactly where they were painted.
/// Transform order is fixed: normalize into the padded bounds, scale to the
/// surface, scale around the surface center by zoom, then add the pan
/// offset. Higher latitudes render higher on screen.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    bounds: GeoBounds,
    viewport: Viewport,
    width: f64,
    height: f64,
}

impl Projector {
    #[must_use]
    pub fn new(bounds: GeoBounds, viewport: Viewport, width: f64, height: f64) -> Self {
        Self {
            bounds,
            viewport,
            width,
            height,
        }
    }

    #[must_use]
    pub fn screen_x(&self, lng: f64) -> f64 {
        let normalized = (lng - self.bounds.min_lng) / self.bounds.lng_span();
        let base = normalized * self.width;
        let center = self.width / 2.0;
        (base - center) * self.viewport.zoom + center + self.viewport.pan_x
    }

    #[must_use]
    pub fn screen_y(&self, lat: f64) -> f64 {
        let normalized = (lat - self.bounds.min_lat) / self.bounds.lat_span();
        let base = self.height - normalized * self.height;
        let center = self.height / 2.0;
        (base - center) * self.viewport.zoom + center + self.viewport.pan_y
    }

    #[must_use]
    pub fn project(&self, stop: &ResolvedStop) -> (f64, f64) {
        (self.screen_x(stop.lng), self.screen_y(stop.lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    fn stop(lat: f64, lng: f64, index: usize) -> ResolvedStop {
        ResolvedStop::new(GeoPoint::new(lat, lng), format!("Stop {index}"), index)
    }

    #[test]
    fn test_bounds_empty() {
        assert_eq!(GeoBounds::from_stops(&[]), None);
    }

    #[test]
    fn test_bounds_single_stop_uses_degree_pad() {
        let bounds = GeoBounds::from_stops(&[stop(48.0, 2.0, 1)]).expect("bounds");
        assert_eq!(bounds.min_lat, 43.0);
        assert_eq!(bounds.max_lat, 53.0);
        assert_eq!(bounds.min_lng, -3.0);
        assert_eq!(bounds.max_lng, 7.0);
    }

    #[test]
    fn test_bounds_pads_span_by_fraction() {
        let stops = [stop(40.0, 10.0, 1), stop(50.0, 20.0, 2)];
        let bounds = GeoBounds::from_stops(&stops).expect("bounds");
        assert_eq!(bounds.min_lat, 37.0);
        assert_eq!(bounds.max_lat, 53.0);
        assert_eq!(bounds.min_lng, 7.0);
        assert_eq!(bounds.max_lng, 23.0);
    }

    #[test]
    fn test_bounds_identical_stops_use_degree_pad() {
        let stops = [stop(41.9, 12.5, 1), stop(41.9, 12.5, 2)];
        let bounds = GeoBounds::from_stops(&stops).expect("bounds");
        assert_eq!(bounds.lat_span(), 2.0 * DEGENERATE_PAD_DEGREES);
        assert_eq!(bounds.lng_span(), 2.0 * DEGENERATE_PAD_DEGREES);
    }

    #[test]
    fn test_single_stop_projects_to_surface_center() {
        let stops = [stop(48.8566, 2.3522, 1)];
        let bounds = GeoBounds::from_stops(&stops).expect("bounds");
        let projector = Projector::new(bounds, Viewport::default(), 800.0, 600.0);

        let (x, y) = projector.project(&stops[0]);
        assert!((x - 400.0).abs() < 1e-9);
        assert!((y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_higher_latitude_renders_higher_on_screen() {
        let stops = [stop(40.0, 10.0, 1), stop(50.0, 10.0, 2)];
        let bounds = GeoBounds::from_stops(&stops).expect("bounds");
        let projector = Projector::new(bounds, Viewport::default(), 800.0, 600.0);

        let y_south = projector.screen_y(40.0);
        let y_north = projector.screen_y(50.0);
        assert!(y_north < y_south);
    }

    #[test]
    fn test_zoom_scales_around_surface_center() {
        let stops = [stop(48.8566, 2.3522, 1)];
        let bounds = GeoBounds::from_stops(&stops).expect("bounds");
        let viewport = Viewport {
            zoom: 2.0,
            pan_x: 0.0,
            pan_y: 0.0,
        };
        let projector = Projector::new(bounds, viewport, 800.0, 600.0);

        // A point at the surface center is a fixed point of the zoom
        let (x, y) = projector.project(&stops[0]);
        assert!((x - 400.0).abs() < 1e-9);
        assert!((y - 300.0).abs() < 1e-9);

        // Off-center points move away from the center under zoom
        let x_east = projector.screen_x(bounds.max_lng);
        assert!((x_east - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_pan_translates_after_zoom() {
        let stops = [stop(48.8566, 2.3522, 1)];
        let bounds = GeoBounds::from_stops(&stops).expect("bounds");
        let viewport = Viewport {
            zoom: 2.0,
            pan_x: 30.0,
            pan_y: -45.0,
        };
        let projector = Projector::new(bounds, viewport, 800.0, 600.0);

        let (x, y) = projector.project(&stops[0]);
        assert!((x - 430.0).abs() < 1e-9);
        assert!((y - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_in_converges_to_max() {
        let mut zoom = 1.0;
        for _ in 0..20 {
            zoom = zoom_in_level(zoom);
            assert!(zoom <= MAX_ZOOM);
        }
        assert_eq!(zoom, MAX_ZOOM);
    }

    #[test]
    fn test_zoom_out_converges_to_min() {
        let mut zoom = 1.0;
        for _ in 0..20 {
            zoom = zoom_out_level(zoom);
            assert!(zoom >= MIN_ZOOM);
        }
        assert_eq!(zoom, MIN_ZOOM);
    }

    #[test]
    fn test_zoom_step_is_multiplicative() {
        assert!((zoom_in_level(1.0) - 1.2).abs() < 1e-12);
        assert!((zoom_out_level(1.2) - 1.0).abs() < 1e-12);
    }
}
