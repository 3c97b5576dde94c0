use web_sys::CanvasRenderingContext2d;

use crate::models::ResolvedStop;
use crate::projection::Projector;

const PIN_RADIUS: f64 = 10.0;
const HOVERED_PIN_SCALE: f64 = 1.2;
const PIN_OUTLINE_WIDTH: f64 = 2.0;
const PIN_START_COLOR: &str = "#22c55e";
const PIN_END_COLOR: &str = "#ef4444";
const PIN_WAYPOINT_COLOR: &str = "#4a9eff";
const PIN_OUTLINE_COLOR: &str = "#ffffff";
const PIN_LABEL_COLOR: &str = "#ffffff";
const PIN_LABEL_FONT: &str = "bold 11px sans-serif";

const HOVER_LABEL_FONT: &str = "12px sans-serif";
const HOVER_LABEL_PADDING_X: f64 = 10.0;
const HOVER_LABEL_HEIGHT: f64 = 22.0;
const HOVER_LABEL_GAP: f64 = 8.0;
const HOVER_LABEL_RADIUS: f64 = 6.0;
const HOVER_LABEL_BG: &str = "rgba(17, 24, 39, 0.92)";
const HOVER_LABEL_TEXT_COLOR: &str = "#ffffff";
const CHAR_WIDTH_ESTIMATE: f64 = 7.0;

/// Role a pin plays in the itinerary, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinKind {
    Start,
    End,
    Waypoint,
}

/// Classify a pin by its position in the resolved sequence. For a
/// single-stop trip the start classification wins.
#[must_use]
pub fn pin_kind(index: usize, count: usize) -> PinKind {
    if index == 0 {
        PinKind::Start
    } else if index + 1 == count {
        PinKind::End
    } else {
        PinKind::Waypoint
    }
}

fn pin_color(kind: PinKind) -> &'static str {
    match kind {
        PinKind::Start => PIN_START_COLOR,
        PinKind::End => PIN_END_COLOR,
        PinKind::Waypoint => PIN_WAYPOINT_COLOR,
    }
}

/// Draw every pin with its 1-based index label. The hovered pin is drawn
/// larger; its text label is a separate pass so it stays on top of
/// neighboring pins.
pub fn draw_pins(
    ctx: &CanvasRenderingContext2d,
    stops: &[ResolvedStop],
    projector: &Projector,
    hovered: Option<usize>,
) {
    for (i, stop) in stops.iter().enumerate() {
        let (x, y) = projector.project(stop);

        let radius = if hovered == Some(i) {
            PIN_RADIUS * HOVERED_PIN_SCALE
        } else {
            PIN_RADIUS
        };

        ctx.set_fill_style_str(pin_color(pin_kind(i, stops.len())));
        ctx.begin_path();
        let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();

        ctx.set_stroke_style_str(PIN_OUTLINE_COLOR);
        ctx.set_line_width(PIN_OUTLINE_WIDTH);
        ctx.stroke();

        ctx.set_fill_style_str(PIN_LABEL_COLOR);
        ctx.set_font(PIN_LABEL_FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text(&stop.index.to_string(), x, y);
    }
}

/// Draw the full location string in a rounded dark pill directly above
/// the hovered pin, sized to the measured text width.
pub fn draw_hover_label(ctx: &CanvasRenderingContext2d, stop: &ResolvedStop, projector: &Projector) {
    let (x, y) = projector.project(stop);

    ctx.set_font(HOVER_LABEL_FONT);
    let text_width = measured_text_width(ctx, &stop.location);

    let pill_width = text_width + 2.0 * HOVER_LABEL_PADDING_X;
    let pill_x = x - pill_width / 2.0;
    let pill_y = y - PIN_RADIUS * HOVERED_PIN_SCALE - HOVER_LABEL_GAP - HOVER_LABEL_HEIGHT;

    ctx.set_fill_style_str(HOVER_LABEL_BG);
    rounded_rect_path(ctx, pill_x, pill_y, pill_width, HOVER_LABEL_HEIGHT, HOVER_LABEL_RADIUS);
    ctx.fill();

    ctx.set_fill_style_str(HOVER_LABEL_TEXT_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(&stop.location, x, pill_y + HOVER_LABEL_HEIGHT / 2.0);
}

fn measured_text_width(ctx: &CanvasRenderingContext2d, text: &str) -> f64 {
    match ctx.measure_text(text) {
        Ok(metrics) => metrics.width(),
        #[allow(clippy::cast_precision_loss)]
        Err(_) => text.len() as f64 * CHAR_WIDTH_ESTIMATE,
    }
}

fn rounded_rect_path(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
) {
    let r = radius.min(width / 2.0).min(height / 2.0);

    ctx.begin_path();
    ctx.move_to(x + r, y);
    let _ = ctx.arc_to(x + width, y, x + width, y + height, r);
    let _ = ctx.arc_to(x + width, y + height, x, y + height, r);
    let _ = ctx.arc_to(x, y + height, x, y, r);
    let _ = ctx.arc_to(x, y, x + width, y, r);
    ctx.close_path();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_stop_is_start() {
        assert_eq!(pin_kind(0, 5), PinKind::Start);
    }

    #[test]
    fn test_last_stop_is_end() {
        assert_eq!(pin_kind(4, 5), PinKind::End);
    }

    #[test]
    fn test_middle_stops_are_waypoints() {
        assert_eq!(pin_kind(1, 5), PinKind::Waypoint);
        assert_eq!(pin_kind(3, 5), PinKind::Waypoint);
    }

    #[test]
    fn test_two_stop_trip_has_start_and_end() {
        assert_eq!(pin_kind(0, 2), PinKind::Start);
        assert_eq!(pin_kind(1, 2), PinKind::End);
    }

    #[test]
    fn test_single_stop_start_color_wins() {
        assert_eq!(pin_kind(0, 1), PinKind::Start);
    }

    #[test]
    fn test_two_city_trip_resolves_to_start_and_end_pins() {
        use crate::geocode::{resolve_stops, StaticGazetteer};
        use crate::models::Stop;

        let stops = resolve_stops(
            &StaticGazetteer,
            &[Stop::new("Rome, Italy"), Stop::new("Florence, Italy")],
        );

        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].index, 1);
        assert_eq!(stops[1].index, 2);
        assert_eq!(pin_kind(0, stops.len()), PinKind::Start);
        assert_eq!(pin_kind(1, stops.len()), PinKind::End);
    }
}
