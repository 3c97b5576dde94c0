use leptos::*;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::MouseEvent;

use crate::components::map_viewport::{self, ViewportSignals};
use crate::components::trip_canvas::{hit_detection, render_map};
use crate::geocode::{self, LocationResolver, StaticGazetteer};
use crate::log;
use crate::models::{ResolvedStop, Stop};
use crate::projection::Viewport;
use crate::theme::{use_theme, Theme};

fn setup_render_effect(
    canvas_ref: NodeRef<html::Canvas>,
    resolved_stops: Memo<Vec<ResolvedStop>>,
    viewport: &ViewportSignals,
    hovered_stop: ReadSignal<Option<usize>>,
    theme: ReadSignal<Theme>,
) {
    let (render_requested, set_render_requested) = create_signal(false);
    let zoom = viewport.zoom;
    let pan_x = viewport.pan_x;
    let pan_y = viewport.pan_y;

    create_effect(move |_| {
        // Track all dependencies
        let _ = resolved_stops.get();
        let _ = zoom.get();
        let _ = pan_x.get();
        let _ = pan_y.get();
        let _ = hovered_stop.get();
        let _ = theme.get();

        // Coalesce bursts of state changes into one repaint per frame
        if !render_requested.get_untracked() {
            set_render_requested.set(true);

            let window = web_sys::window().expect("window");
            let callback = Closure::once(move || {
                set_render_requested.set(false);

                let stops = resolved_stops.get_untracked();
                let Some(canvas) = canvas_ref.get_untracked() else { return };
                let canvas_elem: &web_sys::HtmlCanvasElement = &canvas;

                // Browser dimensions are always non-negative
                #[allow(clippy::cast_sign_loss)]
                let container_width = canvas_elem.client_width() as u32;
                #[allow(clippy::cast_sign_loss)]
                let container_height = canvas_elem.client_height() as u32;

                if container_width > 0 && container_height > 0 {
                    canvas_elem.set_width(container_width);
                    canvas_elem.set_height(container_height);
                }

                let current = Viewport {
                    zoom: zoom.get_untracked(),
                    pan_x: pan_x.get_untracked(),
                    pan_y: pan_y.get_untracked(),
                };
                render_map(
                    canvas_elem,
                    &stops,
                    current,
                    hovered_stop.get_untracked(),
                    theme.get_untracked(),
                );
            });

            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
            callback.forget();
        }
    });
}

/// Canvas map of a trip itinerary: numbered pins connected by a dashed
/// route line, with drag-to-pan, stepped zoom, and pin hover labels.
///
/// The component owns its canvas exclusively; everything it draws is a
/// pure function of the resolved stop list, the viewport, and the hover
/// state. Stops whose location cannot be resolved are left off the map.
#[component]
#[must_use]
pub fn TripMap(
    #[prop(into)] stops: Signal<Vec<Stop>>,
    #[prop(optional)] resolver: Option<Rc<dyn LocationResolver>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hovered_stop, set_hovered_stop) = create_signal(None::<usize>);
    let theme = use_theme();

    let resolver: Rc<dyn LocationResolver> =
        resolver.unwrap_or_else(|| Rc::new(StaticGazetteer));
    let resolved_stops = create_memo(move |_| {
        let stop_list = stops.get();
        let resolved = geocode::resolve_stops(resolver.as_ref(), &stop_list);
        log!("Resolved {} of {} stops", resolved.len(), stop_list.len());
        resolved
    });

    let viewport = map_viewport::create_viewport_signals();
    let is_panning = viewport.is_panning;

    setup_render_effect(canvas_ref, resolved_stops, &viewport, hovered_stop, theme);

    let handle_mouse_down = move |ev: MouseEvent| {
        if let Some(canvas_elem) = canvas_ref.get() {
            let canvas: &web_sys::HtmlCanvasElement = &canvas_elem;
            let rect = canvas.get_bounding_client_rect();
            let x = f64::from(ev.client_x()) - rect.left();
            let y = f64::from(ev.client_y()) - rect.top();

            map_viewport::handle_pan_start(x, y, &viewport);
        }
    };

    let handle_mouse_move = move |ev: MouseEvent| {
        if let Some(canvas_elem) = canvas_ref.get() {
            let canvas: &web_sys::HtmlCanvasElement = &canvas_elem;
            let rect = canvas.get_bounding_client_rect();
            let x = f64::from(ev.client_x()) - rect.left();
            let y = f64::from(ev.client_y()) - rect.top();

            if is_panning.get() {
                map_viewport::handle_pan_move(x, y, &viewport);
            }

            // Hover is recomputed on every move, panning or not
            let stops_now = resolved_stops.get();
            let hovered = hit_detection::find_stop_at_position(
                x,
                y,
                &stops_now,
                map_viewport::current_viewport(&viewport),
                f64::from(canvas.width()),
                f64::from(canvas.height()),
            );
            if hovered != hovered_stop.get() {
                set_hovered_stop.set(hovered);
            }
        }
    };

    let handle_mouse_up = move |_ev: MouseEvent| {
        map_viewport::handle_pan_end(&viewport);
    };

    let handle_mouse_leave = move |_ev: MouseEvent| {
        map_viewport::handle_pan_end(&viewport);
        set_hovered_stop.set(None);
    };

    view! {
        <div class="map-container" style="position: relative;">
            <canvas
                node_ref=canvas_ref
                on:mousedown=handle_mouse_down
                on:mousemove=handle_mouse_move
                on:mouseup=handle_mouse_up
                on:mouseleave=handle_mouse_leave
                style=move || {
                    if is_panning.get() { "cursor: grabbing;" } else { "cursor: grab;" }
                }
            ></canvas>

            <div class="map-controls">
                <button
                    class="zoom-button"
                    title="Zoom in"
                    on:click=move |_| map_viewport::zoom_in(&viewport)
                >
                    "+"
                </button>
                <button
                    class="zoom-button"
                    title="Zoom out"
                    on:click=move |_| map_viewport::zoom_out(&viewport)
                >
                    "-"
                </button>
            </div>

            <div class="stop-badge">
                {move || {
                    let count = resolved_stops.get().len();
                    if count == 1 {
                        "1 stop".to_string()
                    } else {
                        format!("{count} stops")
                    }
                }}
            </div>

            <div class="map-caption">"Drag to pan, use the buttons to zoom"</div>
        </div>
    }
}
