use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::server;
use shared_types::{AvailabilitySlot, Booking, BookingResource, CancelScope, NewBooking};

#[cfg(feature = "ssr")]
use crate::api::client;

#[server]
pub async fn list_resources() -> Result<Vec<BookingResource>, ServerFnError> {
    client::list_all::<BookingResource>("/bookings/resources/", &[])
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch resources: {}", e)))
}

/// Availability windows for one resource over a date range. The backend owns
/// the actual availability computation; this just renders what it returns.
#[server]
pub async fn get_resource_availability(
    resource_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<AvailabilitySlot>, ServerFnError> {
    let params = vec![
        ("start_date", start_date.to_string()),
        ("end_date", end_date.to_string()),
    ];
    client::list_all::<AvailabilitySlot>(
        &format!("/bookings/resources/{}/availability/", resource_id),
        &params,
    )
    .await
    .map_err(|e| ServerFnError::new(format!("Failed to fetch availability: {}", e)))
}

#[server]
pub async fn list_bookings(
    resource: Option<i64>,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<Booking>, ServerFnError> {
    let mut params = vec![
        ("start_date", start_date.to_string()),
        ("end_date", end_date.to_string()),
    ];
    if let Some(resource) = resource {
        params.push(("resource", resource.to_string()));
    }
    client::list_all::<Booking>("/bookings/bookings/", &params)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch bookings: {}", e)))
}

#[server]
pub async fn create_booking(payload: NewBooking) -> Result<Booking, ServerFnError> {
    client::create::<Booking, _>("/bookings/bookings/", &payload)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to create booking: {}", e)))
}

#[server]
pub async fn approve_booking(booking_id: i64) -> Result<(), ServerFnError> {
    client::post_action(&format!("/bookings/bookings/{}/approve/", booking_id), None)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to approve booking: {}", e)))
}

#[server]
pub async fn reject_booking(booking_id: i64) -> Result<(), ServerFnError> {
    client::post_action(&format!("/bookings/bookings/{}/reject/", booking_id), None)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to reject booking: {}", e)))
}

/// Cancels one instance of a booking, or the instance plus all future
/// instances when the operator chose to end a recurring series.
#[server]
pub async fn cancel_booking(booking_id: i64, scope: CancelScope) -> Result<(), ServerFnError> {
    let body = serde_json::json!({ "scope": scope });
    client::post_action(
        &format!("/bookings/bookings/{}/cancel/", booking_id),
        Some(body),
    )
    .await
    .map_err(|e| ServerFnError::new(format!("Failed to cancel booking: {}", e)))
}
