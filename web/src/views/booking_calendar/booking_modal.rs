use crate::components::toast::use_toaster;
use crate::server_bookings::{approve_booking, cancel_booking, reject_booking};
use crate::utils::format::{short_date, time_of_day};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{Booking, BookingStatus, CancelScope, RecurringType};
use thaw::*;

/// Details for a clicked booking: approve/reject while pending, and a
/// two-step cancel. For recurring bookings the second step asks whether to
/// cancel just this occurrence or the rest of the series.
#[component]
pub fn BookingModal(
    open: RwSignal<bool>,
    booking: RwSignal<Option<Booking>>,
    on_changed: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let toaster = use_toaster();
    let cancelling = RwSignal::new(false);
    let busy = RwSignal::new(false);

    Effect::new(move |_| {
        if open.get() {
            cancelling.set(false);
        }
    });

    let run_action = move |action: &'static str, id: i64, scope: Option<CancelScope>| {
        busy.set(true);
        spawn_local(async move {
            let result = match (action, scope) {
                ("approve", _) => approve_booking(id).await,
                ("reject", _) => reject_booking(id).await,
                (_, Some(scope)) => cancel_booking(id, scope).await,
                _ => return,
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    toaster.success(match action {
                        "approve" => "Booking approved",
                        "reject" => "Booking rejected",
                        _ => "Booking cancelled",
                    });
                    open.set(false);
                    on_changed();
                }
                Err(e) => toaster.error(e.to_string()),
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <div class="modal-container" on:click=|ev| ev.stop_propagation()>
                    {move || {
                        booking
                            .get()
                            .map(|booking| {
                                let id = booking.id;
                                let member = booking
                                    .user_details
                                    .as_ref()
                                    .map(|u| u.name.clone())
                                    .unwrap_or_else(|| format!("Member #{}", booking.user));
                                let resource = booking
                                    .resource_details
                                    .as_ref()
                                    .map(|r| r.name.clone())
                                    .unwrap_or_else(|| format!("Resource #{}", booking.resource));
                                let recurrence = if booking.is_recurring {
                                    match (booking.recurring_type, booking.recurring_weeks) {
                                        (Some(RecurringType::Forever), _) => {
                                            "Weekly until cancelled".to_string()
                                        }
                                        (Some(RecurringType::Weeks), Some(weeks)) => {
                                            format!("Weekly for {} weeks", weeks)
                                        }
                                        _ => "Weekly".to_string(),
                                    }
                                } else {
                                    "One-off".to_string()
                                };
                                let is_pending = booking.status == BookingStatus::Pending;
                                let is_recurring = booking.is_recurring;
                                let can_cancel = matches!(
                                    booking.status,
                                    BookingStatus::Pending | BookingStatus::Approved
                                );
                                let participant_count = booking.participants.len();

                                view! {
                                    <div class="modal-header">
                                        <h2>"Booking Details"</h2>
                                    </div>
                                    <div class="modal-body booking-details">
                                        <p>
                                            <strong>"Member: "</strong>
                                            {member}
                                        </p>
                                        <p>
                                            <strong>"Resource: "</strong>
                                            {resource}
                                        </p>
                                        <p>
                                            <strong>"Date: "</strong>
                                            {short_date(booking.start_time)}
                                        </p>
                                        <p>
                                            <strong>"Time: "</strong>
                                            {format!(
                                                "{} - {}",
                                                time_of_day(booking.start_time),
                                                time_of_day(booking.end_time),
                                            )}
                                        </p>
                                        <p>
                                            <strong>"Status: "</strong>
                                            {booking.status.label()}
                                        </p>
                                        <p>
                                            <strong>"Recurrence: "</strong>
                                            {recurrence}
                                        </p>
                                        <Show when=move || { participant_count > 0 }>
                                            <p>
                                                <strong>"Participants: "</strong>
                                                {participant_count}
                                            </p>
                                        </Show>
                                    </div>
                                    <div class="modal-actions">
                                        <Show when=move || is_pending && !cancelling.get()>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                disabled=busy
                                                on_click=move |_| run_action("approve", id, None)
                                            >
                                                "Approve"
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                disabled=busy
                                                on_click=move |_| run_action("reject", id, None)
                                            >
                                                "Reject"
                                            </Button>
                                        </Show>

                                        <Show when=move || can_cancel && !cancelling.get()>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                disabled=busy
                                                on_click=move |_| cancelling.set(true)
                                            >
                                                "Cancel booking"
                                            </Button>
                                        </Show>

                                        <Show when=move || cancelling.get()>
                                            {if is_recurring {
                                                view! {
                                                    <div class="cancel-choice">
                                                        <p>"This booking repeats weekly."</p>
                                                        <Button
                                                            appearance=ButtonAppearance::Primary
                                                            disabled=busy
                                                            on_click=move |_| {
                                                                run_action(
                                                                    "cancel",
                                                                    id,
                                                                    Some(CancelScope::Single),
                                                                )
                                                            }
                                                        >
                                                            "Only this occurrence"
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Primary
                                                            disabled=busy
                                                            on_click=move |_| {
                                                                run_action(
                                                                    "cancel",
                                                                    id,
                                                                    Some(CancelScope::ThisAndFuture),
                                                                )
                                                            }
                                                        >
                                                            "This and all future"
                                                        </Button>
                                                    </div>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <div class="cancel-choice">
                                                        <p>"Cancel this booking?"</p>
                                                        <Button
                                                            appearance=ButtonAppearance::Primary
                                                            disabled=busy
                                                            on_click=move |_| {
                                                                run_action(
                                                                    "cancel",
                                                                    id,
                                                                    Some(CancelScope::Single),
                                                                )
                                                            }
                                                        >
                                                            "Confirm cancellation"
                                                        </Button>
                                                    </div>
                                                }
                                                    .into_any()
                                            }}
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                on_click=move |_| cancelling.set(false)
                                            >
                                                "Keep booking"
                                            </Button>
                                        </Show>

                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| open.set(false)
                                        >
                                            "Close"
                                        </Button>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </Show>
    }
}
