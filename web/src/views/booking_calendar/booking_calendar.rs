use super::{BookingModal, CreateBookingModal, WeekGrid};
use crate::server_bookings::{get_resource_availability, list_bookings, list_resources};
use crate::utils::schedule::{week_days, week_start};
use crate::utils::storage::{calendar_resource_key, local_get, local_remove, local_set};
use chrono::{Duration, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{AvailabilitySlot, Booking, BookingResource};
use thaw::*;

/// Scope half of the persisted resource-filter key; the admin dashboard has
/// a single calendar.
const CALENDAR_SCOPE: &str = "admin";

#[component]
pub fn BookingCalendar() -> impl IntoView {
    let anchor = RwSignal::new(week_start(Utc::now().date_naive()));
    let resource_filter = RwSignal::new(Option::<i64>::None);
    let resources = RwSignal::new(Vec::<BookingResource>::new());
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let slots = RwSignal::new(Vec::<AvailabilitySlot>::new());
    let loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);

    let load = move || {
        let start = anchor.get_untracked();
        let end = start + Duration::days(6);
        let resource = resource_filter.get_untracked();
        loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match list_bookings(resource, start, end).await {
                Ok(list) => bookings.set(list),
                Err(e) => error_message.set(Some(e.to_string())),
            }
            loading.set(false);
        });

        // Availability only exists per resource; without a filter the grid
        // shows bookings alone.
        match resource {
            Some(resource) => {
                spawn_local(async move {
                    match get_resource_availability(resource, start, end).await {
                        Ok(list) => slots.set(list),
                        Err(_) => slots.set(Vec::new()),
                    }
                });
            }
            None => slots.set(Vec::new()),
        }
    };

    Effect::new(move |_| {
        anchor.track();
        resource_filter.track();
        load();
    });

    // Resource list plus the persisted filter, restored after hydration.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = list_resources().await {
                resources.set(list);
            }
        });
        if let Some(saved) = local_get(&calendar_resource_key(CALENDAR_SCOPE)) {
            if let Ok(id) = saved.parse::<i64>() {
                resource_filter.set(Some(id));
            }
        }
    });

    let select_resource = move |value: String| {
        match value.parse::<i64>() {
            Ok(id) => {
                local_set(&calendar_resource_key(CALENDAR_SCOPE), &id.to_string());
                resource_filter.set(Some(id));
            }
            Err(_) => {
                local_remove(&calendar_resource_key(CALENDAR_SCOPE));
                resource_filter.set(None);
            }
        }
    };

    let selected_resource = Memo::new(move |_| {
        let id = resource_filter.get()?;
        resources.get().into_iter().find(|r| r.id == id)
    });

    let create_open = RwSignal::new(false);
    let selected_slot = RwSignal::new(Option::<AvailabilitySlot>::None);
    let details_open = RwSignal::new(false);
    let selected_booking = RwSignal::new(Option::<Booking>::None);

    let on_slot_click = move |slot: AvailabilitySlot| {
        selected_slot.set(Some(slot));
        create_open.set(true);
    };
    let on_booking_click = move |booking: Booking| {
        selected_booking.set(Some(booking));
        details_open.set(true);
    };

    let week_label = move || {
        let start = anchor.get();
        let end = week_days(start)[6];
        format!("{} - {}", start.format("%-d %b"), end.format("%-d %b %Y"))
    };

    view! {
        <div class="manager booking-calendar">
            <div class="manager-header">
                <h1>"Bookings"</h1>
                <select
                    class="filter-select"
                    prop:value=move || {
                        resource_filter
                            .get()
                            .map(|id| id.to_string())
                            .unwrap_or_default()
                    }
                    on:change=move |ev| select_resource(event_target_value(&ev))
                >
                    <option value="">"All resources"</option>
                    <For
                        each=move || resources.get()
                        key=|r| r.id
                        children=|r: BookingResource| {
                            view! { <option value=r.id.to_string()>{r.name.clone()}</option> }
                        }
                    />
                </select>
            </div>

            <div class="week-navigation">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| anchor.update(|d| *d -= Duration::days(7))
                >
                    "← Previous"
                </Button>
                <h2 class="week-label">{week_label}</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| anchor.set(week_start(Utc::now().date_naive()))
                >
                    "Today"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| anchor.update(|d| *d += Duration::days(7))
                >
                    "Next →"
                </Button>
            </div>

            <Show when=move || error_message.get().is_some()>
                <MessageBar intent=MessageBarIntent::Error>
                    {move || error_message.get().unwrap_or_default()}
                </MessageBar>
            </Show>

            <Show when=move || loading.get()>
                <div class="manager-loading">
                    <Spinner />
                </div>
            </Show>

            <WeekGrid
                anchor=anchor
                bookings=bookings
                slots=slots
                on_slot_click=on_slot_click
                on_booking_click=on_booking_click
            />

            <div class="calendar-legend">
                <div class="legend-item">
                    <span class="legend-color legend-color--free"></span>
                    <span>"Available"</span>
                </div>
                <div class="legend-item">
                    <span class="legend-color legend-color--booked"></span>
                    <span>"Booked"</span>
                </div>
                <div class="legend-item">
                    <span class="legend-color legend-color--pending"></span>
                    <span>"Pending approval"</span>
                </div>
            </div>

            <CreateBookingModal
                open=create_open
                slot=selected_slot
                resource=selected_resource
                on_created=load
            />

            <BookingModal
                open=details_open
                booking=selected_booking
                on_changed=load
            />
        </div>
    }
}
