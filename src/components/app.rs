use leptos::*;
use leptos_meta::*;

use crate::components::trip_map::TripMap;
use crate::data;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let trips = data::sample_trips();
    let (selected_trip, set_selected_trip) = create_signal(trips.first().map(|t| t.id));

    let trips_for_stops = trips.clone();
    let stops = Signal::derive(move || {
        let selected = selected_trip.get();
        trips_for_stops
            .iter()
            .find(|trip| Some(trip.id) == selected)
            .map(|trip| trip.stops.clone())
            .unwrap_or_default()
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/trip_map.css"/>
        <Title text="Trip Map"/>

        <div class="app">
            <div class="sidebar">
                <div class="sidebar-header">
                    <h2>"Saved Trips"</h2>
                </div>
                <div class="trip-list">
                    {trips
                        .iter()
                        .map(|trip| {
                            let id = trip.id;
                            let stop_count = trip.stops.len();
                            view! {
                                <button
                                    class="trip-entry"
                                    class:selected=move || selected_trip.get() == Some(id)
                                    on:click=move |_| set_selected_trip.set(Some(id))
                                >
                                    <span class="trip-name">{trip.name.clone()}</span>
                                    <span class="trip-dates">{trip.date_range()}</span>
                                    <span class="trip-stop-count">
                                        {format!("{stop_count} stops")}
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="main-content">
                <TripMap stops=stops />
            </div>
        </div>
    }
}
