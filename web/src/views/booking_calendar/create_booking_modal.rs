use crate::components::toast::use_toaster;
use crate::server::search_users;
use crate::server_bookings::create_booking;
use crate::utils::format::{short_date, time_of_day};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{AvailabilitySlot, BookingResource, NewBooking, RecurringType, User};
use std::time::Duration;
use thaw::*;

const MEMBER_SEARCH_DEBOUNCE_MS: u64 = 300;
const DEFAULT_RECURRING_WEEKS: u32 = 4;

/// Week count for the recurrence the operator configured, or a message when
/// the input cannot be sent. "Until cancelled" and one-off bookings carry no
/// count.
fn validate_recurrence(
    recurring: bool,
    recurring_type: RecurringType,
    weeks_input: &str,
) -> Result<Option<u32>, &'static str> {
    if !recurring || recurring_type == RecurringType::Forever {
        return Ok(None);
    }
    match weeks_input.trim().parse::<u32>() {
        Ok(weeks) if weeks >= 1 => Ok(Some(weeks)),
        _ => Err("Enter how many weeks the booking repeats"),
    }
}

/// Books the clicked availability slot. Resource, date and time come from
/// the slot and are shown read-only; the operator picks the member and an
/// optional weekly recurrence.
#[component]
pub fn CreateBookingModal(
    open: RwSignal<bool>,
    slot: RwSignal<Option<AvailabilitySlot>>,
    #[prop(into)] resource: Signal<Option<BookingResource>>,
    on_created: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let toaster = use_toaster();

    let search_text = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<User>::new());
    let member = RwSignal::new(Option::<User>::None);
    let participants = RwSignal::new(Vec::<User>::new());
    let is_recurring = RwSignal::new(false);
    let recurring_type = RwSignal::new(RecurringType::Weeks);
    let weeks = RwSignal::new(DEFAULT_RECURRING_WEEKS.to_string());
    let saving = RwSignal::new(false);
    let pending_search = StoredValue::new_local(None::<TimeoutHandle>);

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        search_text.set(String::new());
        results.set(Vec::new());
        member.set(None);
        participants.set(Vec::new());
        is_recurring.set(false);
        recurring_type.set(RecurringType::Weeks);
        weeks.set(DEFAULT_RECURRING_WEEKS.to_string());
    });

    let handle_search = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        search_text.set(text.clone());

        if let Some(handle) = pending_search.get_value() {
            handle.clear();
        }
        if text.trim().is_empty() {
            results.set(Vec::new());
            return;
        }
        let handle = set_timeout_with_handle(
            move || {
                spawn_local(async move {
                    if let Ok(users) = search_users(text.clone()).await {
                        results.set(users);
                    }
                });
            },
            Duration::from_millis(MEMBER_SEARCH_DEBOUNCE_MS),
        )
        .ok();
        pending_search.set_value(handle);
    };

    let submit = move |_| {
        let Some(slot) = slot.get_untracked() else {
            return;
        };
        let Some(user) = member.get_untracked() else {
            toaster.error("Pick a member for the booking");
            return;
        };

        let recurring = is_recurring.get_untracked();
        let rec_type = recurring.then(|| recurring_type.get_untracked());
        // Invalid recurrence never reaches the backend.
        let rec_weeks = match validate_recurrence(
            recurring,
            recurring_type.get_untracked(),
            &weeks.get_untracked(),
        ) {
            Ok(weeks) => weeks,
            Err(message) => {
                toaster.error(message);
                return;
            }
        };

        let payload = NewBooking {
            resource: slot.resource,
            user: user.id,
            start_time: slot.start_time,
            end_time: slot.end_time,
            is_recurring: recurring,
            recurring_type: rec_type,
            recurring_weeks: rec_weeks,
            participants: participants
                .get_untracked()
                .iter()
                .map(|p| p.id)
                .collect(),
        };

        saving.set(true);
        spawn_local(async move {
            match create_booking(payload).await {
                Ok(_) => {
                    saving.set(false);
                    toaster.success(format!("Booked for {}", user.full_name()));
                    open.set(false);
                    on_created();
                }
                Err(e) => {
                    saving.set(false);
                    toaster.error(e.to_string());
                }
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <div class="modal-container" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"New Booking"</h2>
                    </div>
                    <div class="modal-body">
                        {move || {
                            slot.get()
                                .map(|slot| {
                                    let resource_name = resource
                                        .get()
                                        .map(|r| r.name)
                                        .unwrap_or_else(|| format!("Resource #{}", slot.resource));
                                    view! {
                                        <div class="booking-summary">
                                            <p>
                                                <strong>"Resource: "</strong>
                                                {resource_name}
                                            </p>
                                            <p>
                                                <strong>"Date: "</strong>
                                                {short_date(slot.start_time)}
                                            </p>
                                            <p>
                                                <strong>"Time: "</strong>
                                                {format!(
                                                    "{} - {}",
                                                    time_of_day(slot.start_time),
                                                    time_of_day(slot.end_time),
                                                )}
                                            </p>
                                        </div>
                                    }
                                })
                        }}

                        <label>
                            "Member"
                            <input
                                type="text"
                                placeholder="Search members..."
                                prop:value=move || search_text.get()
                                on:input=handle_search
                            />
                        </label>

                        <Show when=move || member.get().is_some()>
                            <div class="selected-member">
                                {move || {
                                    member
                                        .get()
                                        .map(|u| u.full_name())
                                        .unwrap_or_default()
                                }}
                                <button
                                    class="row-action"
                                    on:click=move |_| member.set(None)
                                >
                                    "Change"
                                </button>
                            </div>
                        </Show>

                        <Show when=move || member.get().is_none() && !results.get().is_empty()>
                            <div class="member-results">
                                <For
                                    each=move || results.get()
                                    key=|user| user.id
                                    children=move |user: User| {
                                        let pick = user.clone();
                                        let add = user.clone();
                                        view! {
                                            <div class="member-result">
                                                <span>{user.full_name()}</span>
                                                <button
                                                    class="row-action"
                                                    on:click=move |_| {
                                                        member.set(Some(pick.clone()));
                                                        results.set(Vec::new());
                                                    }
                                                >
                                                    "Select"
                                                </button>
                                                <button
                                                    class="row-action"
                                                    on:click=move |_| {
                                                        let participant = add.clone();
                                                        participants
                                                            .update(|list| {
                                                                if !list
                                                                    .iter()
                                                                    .any(|p| p.id == participant.id)
                                                                {
                                                                    list.push(participant);
                                                                }
                                                            });
                                                    }
                                                >
                                                    "Add participant"
                                                </button>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </Show>

                        <Show when=move || !participants.get().is_empty()>
                            <div class="participant-list">
                                <span>"Participants"</span>
                                <For
                                    each=move || participants.get()
                                    key=|user| user.id
                                    children=move |user: User| {
                                        let id = user.id;
                                        view! {
                                            <div class="participant-row">
                                                <span>{user.full_name()}</span>
                                                <button
                                                    class="row-action row-action--danger"
                                                    on:click=move |_| {
                                                        participants
                                                            .update(|list| {
                                                                list.retain(|p| p.id != id)
                                                            });
                                                    }
                                                >
                                                    "Remove"
                                                </button>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </Show>

                        <label class="filter-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || is_recurring.get()
                                on:change=move |ev| is_recurring.set(event_target_checked(&ev))
                            />
                            "Repeat weekly"
                        </label>

                        <Show when=move || is_recurring.get()>
                            <div class="recurrence-options">
                                <label class="filter-checkbox">
                                    <input
                                        type="radio"
                                        name="recurring-type"
                                        prop:checked=move || {
                                            recurring_type.get() == RecurringType::Weeks
                                        }
                                        on:change=move |_| {
                                            recurring_type.set(RecurringType::Weeks)
                                        }
                                    />
                                    "For a number of weeks"
                                </label>
                                <Show when=move || recurring_type.get() == RecurringType::Weeks>
                                    <input
                                        type="number"
                                        min="1"
                                        prop:value=move || weeks.get()
                                        on:input=move |ev| weeks.set(event_target_value(&ev))
                                    />
                                </Show>
                                <label class="filter-checkbox">
                                    <input
                                        type="radio"
                                        name="recurring-type"
                                        prop:checked=move || {
                                            recurring_type.get() == RecurringType::Forever
                                        }
                                        on:change=move |_| {
                                            recurring_type.set(RecurringType::Forever)
                                        }
                                    />
                                    "Until cancelled"
                                </label>
                            </div>
                        </Show>
                    </div>
                    <div class="modal-actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=saving
                            on_click=submit
                        >
                            {move || if saving.get() { "Booking..." } else { "Book" }}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_recurrence_needs_a_positive_count() {
        assert_eq!(
            validate_recurrence(true, RecurringType::Weeks, "4"),
            Ok(Some(4))
        );
        assert!(validate_recurrence(true, RecurringType::Weeks, "0").is_err());
        assert!(validate_recurrence(true, RecurringType::Weeks, "").is_err());
        assert!(validate_recurrence(true, RecurringType::Weeks, "abc").is_err());
    }

    #[test]
    fn forever_and_one_off_carry_no_count() {
        assert_eq!(
            validate_recurrence(true, RecurringType::Forever, ""),
            Ok(None)
        );
        assert_eq!(
            validate_recurrence(false, RecurringType::Weeks, "0"),
            Ok(None)
        );
    }
}
