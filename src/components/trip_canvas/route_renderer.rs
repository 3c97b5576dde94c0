use web_sys::CanvasRenderingContext2d;

use crate::models::ResolvedStop;
use crate::projection::Projector;
use crate::theme::Theme;

const ROUTE_LINE_WIDTH: f64 = 2.0;
const ROUTE_DASH_LENGTH: f64 = 8.0;
const ROUTE_GAP_LENGTH: f64 = 6.0;

fn route_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rgba(122, 176, 255, 0.8)",
        Theme::Light => "rgba(37, 99, 235, 0.7)",
    }
}

/// Draw the dashed polyline connecting resolved stops in itinerary order.
/// Trips with fewer than two resolved stops get no route line.
pub fn draw_route(
    ctx: &CanvasRenderingContext2d,
    stops: &[ResolvedStop],
    projector: &Projector,
    theme: Theme,
) {
    if stops.len() < 2 {
        return;
    }

    let dash_array = js_sys::Array::new();
    dash_array.push(&ROUTE_DASH_LENGTH.into());
    dash_array.push(&ROUTE_GAP_LENGTH.into());
    let _ = ctx.set_line_dash(&dash_array);

    ctx.set_stroke_style_str(route_color(theme));
    ctx.set_line_width(ROUTE_LINE_WIDTH);
    ctx.begin_path();

    let (start_x, start_y) = projector.project(&stops[0]);
    ctx.move_to(start_x, start_y);

    for stop in &stops[1..] {
        let (x, y) = projector.project(stop);
        ctx.line_to(x, y);
    }

    ctx.stroke();
    let _ = ctx.set_line_dash(&js_sys::Array::new());
}
