use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

use crate::constants::GRID_SPACING;
use crate::models::ResolvedStop;
use crate::projection::{GeoBounds, Projector, Viewport};
use crate::theme::Theme;
use super::{pin_renderer, route_renderer};

const PLACEHOLDER_FONT: &str = "14px sans-serif";
const PLACEHOLDER_MESSAGE: &str = "Map preview unavailable";

struct Palette {
    background_top: &'static str,
    background_bottom: &'static str,
    grid: &'static str,
    placeholder_text: &'static str,
}

const DARK_PALETTE: Palette = Palette {
    background_top: "#0f172a",
    background_bottom: "#1e293b",
    grid: "rgba(255, 255, 255, 0.05)",
    placeholder_text: "#94a3b8",
};

const LIGHT_PALETTE: Palette = Palette {
    background_top: "#dbeafe",
    background_bottom: "#eff6ff",
    grid: "rgba(30, 64, 175, 0.06)",
    placeholder_text: "#64748b",
};

fn get_palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK_PALETTE,
        Theme::Light => &LIGHT_PALETTE,
    }
}

/// Full repaint of the map surface from current state.
///
/// The 2D context is acquired here on every call and never stored; the
/// canvas element is exclusively owned by the `TripMap` component. Draw
/// order is background, grid, route line, pins, hover label.
pub fn render_map(
    canvas: &web_sys::HtmlCanvasElement,
    stops: &[ResolvedStop],
    viewport: Viewport,
    hovered: Option<usize>,
    theme: Theme,
) {
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    let Ok(Some(context)) = canvas.get_context("2d") else {
        leptos::logging::warn!("Failed to get 2D context");
        return;
    };

    let Ok(ctx) = context.dyn_into::<CanvasRenderingContext2d>() else {
        leptos::logging::warn!("Failed to cast to 2D rendering context");
        return;
    };

    ctx.clear_rect(0.0, 0.0, width, height);
    draw_background(&ctx, width, height, theme);

    let Some(bounds) = GeoBounds::from_stops(stops) else {
        // Nothing resolvable in this trip
        draw_placeholder(&ctx, width, height, theme);
        return;
    };

    draw_grid(&ctx, width, height, theme);

    let projector = Projector::new(bounds, viewport, width, height);

    route_renderer::draw_route(&ctx, stops, &projector, theme);
    pin_renderer::draw_pins(&ctx, stops, &projector, hovered);

    // Hover label last so no pin ever occludes it
    if let Some(stop) = hovered.and_then(|i| stops.get(i)) {
        pin_renderer::draw_hover_label(&ctx, stop, &projector);
    }
}

fn draw_background(ctx: &CanvasRenderingContext2d, width: f64, height: f64, theme: Theme) {
    let palette = get_palette(theme);

    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
    let _ = gradient.add_color_stop(0.0, palette.background_top);
    let _ = gradient.add_color_stop(1.0, palette.background_bottom);
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, width, height);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_grid(ctx: &CanvasRenderingContext2d, width: f64, height: f64, theme: Theme) {
    let palette = get_palette(theme);

    ctx.set_stroke_style_str(palette.grid);
    ctx.set_line_width(1.0);
    ctx.begin_path();

    let columns = (width / GRID_SPACING).ceil() as u32;
    for i in 1..=columns {
        let x = f64::from(i) * GRID_SPACING;
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
    }

    let rows = (height / GRID_SPACING).ceil() as u32;
    for i in 1..=rows {
        let y = f64::from(i) * GRID_SPACING;
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
    }

    ctx.stroke();
}

fn draw_placeholder(ctx: &CanvasRenderingContext2d, width: f64, height: f64, theme: Theme) {
    let palette = get_palette(theme);

    ctx.set_fill_style_str(palette.placeholder_text);
    ctx.set_font(PLACEHOLDER_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(PLACEHOLDER_MESSAGE, width / 2.0, height / 2.0);
}
