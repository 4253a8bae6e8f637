use crate::utils::format::time_of_day;
use crate::utils::schedule::{
    height_px, offset_px, on_day, slot_is_booked, week_days, GRID_END_HOUR, GRID_ROWS,
    GRID_START_HOUR, ROW_HEIGHT_PX,
};
use chrono::NaiveDate;
use leptos::prelude::*;
use shared_types::{AvailabilitySlot, Booking, BookingStatus};

/// Monday-to-Sunday grid with one column per day and an hourly ruler from
/// 08:00 to 22:00. Slots and bookings are absolutely positioned from their
/// minute offsets; anything outside the window simply renders above or
/// below the visible rows.
#[component]
pub fn WeekGrid(
    anchor: RwSignal<NaiveDate>,
    bookings: RwSignal<Vec<Booking>>,
    slots: RwSignal<Vec<AvailabilitySlot>>,
    on_slot_click: impl Fn(AvailabilitySlot) + 'static + Copy + Send + Sync,
    on_booking_click: impl Fn(Booking) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let column_height = GRID_ROWS as f64 * ROW_HEIGHT_PX;

    let booking_class = |status: BookingStatus| match status {
        BookingStatus::Approved => "grid-booking grid-booking--approved",
        BookingStatus::Pending => "grid-booking grid-booking--pending",
        BookingStatus::Rejected => "grid-booking grid-booking--rejected",
        BookingStatus::Cancelled => "grid-booking grid-booking--cancelled",
    };

    view! {
        <div class="week-grid">
            <div class="hour-ruler">
                {(GRID_START_HOUR..=GRID_END_HOUR)
                    .map(|hour| {
                        view! {
                            <div
                                class="hour-label"
                                style=format!("height: {}px", ROW_HEIGHT_PX)
                            >
                                {format!("{:02}:00", hour)}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                week_days(anchor.get())
                    .into_iter()
                    .map(|day| {
                        let day_bookings: Vec<Booking> = bookings
                            .get()
                            .into_iter()
                            .filter(|b| on_day(b.start_time, day))
                            .collect();
                        let all_bookings = bookings.get();
                        let day_slots: Vec<AvailabilitySlot> = slots
                            .get()
                            .into_iter()
                            .filter(|s| on_day(s.start_time, day))
                            .collect();

                        view! {
                            <div class="day-column">
                                <div class="day-header">
                                    {day.format("%a %-d").to_string()}
                                </div>
                                <div
                                    class="day-body"
                                    style=format!("height: {}px", column_height)
                                >
                                    {day_slots
                                        .into_iter()
                                        .map(|slot| {
                                            let booked = slot_is_booked(&slot, &all_bookings);
                                            let top = offset_px(slot.start_time);
                                            let height =
                                                height_px(slot.start_time, slot.end_time);
                                            let click_slot = slot.clone();
                                            view! {
                                                <div
                                                    class=if booked {
                                                        "grid-slot grid-slot--booked"
                                                    } else {
                                                        "grid-slot grid-slot--free"
                                                    }
                                                    style=format!(
                                                        "top: {}px; height: {}px",
                                                        top,
                                                        height,
                                                    )
                                                    on:click=move |_| {
                                                        if !booked {
                                                            on_slot_click(click_slot.clone());
                                                        }
                                                    }
                                                >
                                                    {format!(
                                                        "{} - {}",
                                                        time_of_day(slot.start_time),
                                                        time_of_day(slot.end_time),
                                                    )}
                                                </div>
                                            }
                                        })
                                        .collect_view()}

                                    {day_bookings
                                        .into_iter()
                                        .map(|booking| {
                                            let top = offset_px(booking.start_time);
                                            let height = height_px(
                                                booking.start_time,
                                                booking.end_time,
                                            );
                                            let class = booking_class(booking.status);
                                            let label = booking
                                                .user_details
                                                .as_ref()
                                                .map(|u| u.name.clone())
                                                .unwrap_or_else(|| {
                                                    format!("Booking #{}", booking.id)
                                                });
                                            let click_booking = booking.clone();
                                            view! {
                                                <div
                                                    class=class
                                                    style=format!(
                                                        "top: {}px; height: {}px",
                                                        top,
                                                        height,
                                                    )
                                                    on:click=move |_| {
                                                        on_booking_click(click_booking.clone())
                                                    }
                                                >
                                                    <span class="booking-time">
                                                        {format!(
                                                            "{} - {}",
                                                            time_of_day(booking.start_time),
                                                            time_of_day(booking.end_time),
                                                        )}
                                                    </span>
                                                    <span class="booking-label">{label}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
