use leptos::{batch, create_signal, ReadSignal, WriteSignal, SignalGet, SignalSet};

use crate::projection::{zoom_in_level, zoom_out_level, Viewport};

/// Signal bundle for the map's zoom/pan state and the in-flight drag.
///
/// `drag_anchor` is the point, in pan-offset space, the drag started from:
/// `(pointer_x - pan_x, pointer_y - pan_y)` at mouse-down. While dragging,
/// the pan offset is simply pointer minus anchor.
#[derive(Clone, Copy)]
pub struct ViewportSignals {
    pub zoom: ReadSignal<f64>,
    pub set_zoom: WriteSignal<f64>,
    pub pan_x: ReadSignal<f64>,
    pub set_pan_x: WriteSignal<f64>,
    pub pan_y: ReadSignal<f64>,
    pub set_pan_y: WriteSignal<f64>,
    pub is_panning: ReadSignal<bool>,
    pub set_is_panning: WriteSignal<bool>,
    pub drag_anchor: ReadSignal<(f64, f64)>,
    pub set_drag_anchor: WriteSignal<(f64, f64)>,
}

#[must_use]
pub fn create_viewport_signals() -> ViewportSignals {
    let (zoom, set_zoom) = create_signal(1.0);
    let (pan_x, set_pan_x) = create_signal(0.0);
    let (pan_y, set_pan_y) = create_signal(0.0);
    let (is_panning, set_is_panning) = create_signal(false);
    let (drag_anchor, set_drag_anchor) = create_signal((0.0, 0.0));

    ViewportSignals {
        zoom,
        set_zoom,
        pan_x,
        set_pan_x,
        pan_y,
        set_pan_y,
        is_panning,
        set_is_panning,
        drag_anchor,
        set_drag_anchor,
    }
}

/// Snapshot the current viewport for the render and hit-test paths
#[must_use]
pub fn current_viewport(viewport: &ViewportSignals) -> Viewport {
    Viewport {
        zoom: viewport.zoom.get(),
        pan_x: viewport.pan_x.get(),
        pan_y: viewport.pan_y.get(),
    }
}

pub fn handle_pan_start(x: f64, y: f64, viewport: &ViewportSignals) {
    let anchor = (x - viewport.pan_x.get(), y - viewport.pan_y.get());

    batch(move || {
        viewport.set_is_panning.set(true);
        viewport.set_drag_anchor.set(anchor);
    });
}

pub fn handle_pan_move(x: f64, y: f64, viewport: &ViewportSignals) {
    if !viewport.is_panning.get() {
        return;
    }

    let (anchor_x, anchor_y) = viewport.drag_anchor.get();

    batch(move || {
        viewport.set_pan_x.set(x - anchor_x);
        viewport.set_pan_y.set(y - anchor_y);
    });
}

pub fn handle_pan_end(viewport: &ViewportSignals) {
    viewport.set_is_panning.set(false);
}

/// One discrete zoom-in step, anchored at the surface center
pub fn zoom_in(viewport: &ViewportSignals) {
    viewport.set_zoom.set(zoom_in_level(viewport.zoom.get()));
}

/// One discrete zoom-out step, anchored at the surface center
pub fn zoom_out(viewport: &ViewportSignals) {
    viewport.set_zoom.set(zoom_out_level(viewport.zoom.get()));
}
