use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use shared_types::{AvailabilitySlot, Booking, BookingStatus};

/// The week grid shows a fixed 08:00-22:00 window as hourly rows.
pub const GRID_START_HOUR: u32 = 8;
pub const GRID_END_HOUR: u32 = 22;
pub const GRID_ROWS: u32 = GRID_END_HOUR - GRID_START_HOUR + 1;
pub const ROW_HEIGHT_PX: f64 = 60.0;

const WINDOW_START_MINUTES: f64 = (GRID_START_HOUR * 60) as f64;

/// Monday of the week containing `anchor`.
pub fn week_start(anchor: NaiveDate) -> NaiveDate {
    anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64)
}

/// The seven days of the week starting at `start` (a Monday).
pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Vertical offset of a timestamp within the grid. Items before 08:00 get a
/// negative offset and items after 22:00 run past the last row; neither is
/// clipped or re-scaled.
pub fn offset_px(start: DateTime<Utc>) -> f64 {
    let minutes = (start.hour() * 60 + start.minute()) as f64;
    (minutes - WINDOW_START_MINUTES) / 60.0 * ROW_HEIGHT_PX
}

/// Rendered height of a `[start, end)` interval.
pub fn height_px(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let duration_minutes = (end - start).num_minutes().max(0) as f64;
    duration_minutes / 60.0 * ROW_HEIGHT_PX
}

/// Day bucketing: calendar-date equality, nothing smarter.
pub fn on_day(ts: DateTime<Utc>, day: NaiveDate) -> bool {
    ts.date_naive() == day
}

/// Half-open interval overlap.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// An availability slot renders as booked only when an APPROVED booking
/// overlaps it. Pending bookings stay visible on the grid but never block a
/// slot, and cancelled/rejected bookings never block rebooking.
pub fn slot_is_booked(slot: &AvailabilitySlot, bookings: &[Booking]) -> bool {
    bookings.iter().any(|booking| {
        booking.status == BookingStatus::Approved
            && overlaps(
                slot.start_time,
                slot.end_time,
                booking.start_time,
                booking.end_time,
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared_types::RecurringType;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, minute, 0).unwrap()
    }

    fn booking(id: i64, status: BookingStatus, start: DateTime<Utc>, end: DateTime<Utc>) -> Booking {
        Booking {
            id,
            resource: 1,
            resource_details: None,
            user: 1,
            user_details: None,
            start_time: start,
            end_time: end,
            status,
            is_recurring: false,
            recurring_type: None::<RecurringType>,
            recurring_weeks: None,
            participants: vec![],
            created_at: None,
        }
    }

    fn slot(start: DateTime<Utc>, end: DateTime<Utc>) -> AvailabilitySlot {
        AvailabilitySlot {
            id: 1,
            resource: 1,
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn week_starts_on_monday() {
        // 2024-03-13 is a Wednesday.
        let wednesday = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(week_start(wednesday), monday);
        assert_eq!(week_start(monday), monday);

        let days = week_days(monday);
        assert_eq!(days[0], monday);
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2024, 3, 17).unwrap());
    }

    #[test]
    fn pixel_mapping_is_linear_from_eight_oclock() {
        assert_eq!(offset_px(at(13, 8, 0)), 0.0);
        assert_eq!(offset_px(at(13, 10, 30)), 150.0);
        // Before the window: negative offset, not clipped.
        assert_eq!(offset_px(at(13, 7, 0)), -60.0);

        assert_eq!(height_px(at(13, 10, 0), at(13, 11, 30)), 90.0);
        assert_eq!(height_px(at(13, 10, 0), at(13, 10, 0)), 0.0);
    }

    #[test]
    fn bucketing_is_same_calendar_date() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        assert!(on_day(at(13, 23, 59), day));
        assert!(!on_day(at(14, 0, 0), day));
    }

    #[test]
    fn only_approved_bookings_block_slots() {
        let bookings = vec![
            booking(1, BookingStatus::Approved, at(13, 10, 0), at(13, 11, 0)),
            booking(2, BookingStatus::Cancelled, at(13, 13, 0), at(13, 14, 0)),
            booking(3, BookingStatus::Rejected, at(13, 15, 0), at(13, 16, 0)),
            booking(4, BookingStatus::Pending, at(13, 17, 0), at(13, 18, 0)),
        ];

        assert!(slot_is_booked(&slot(at(13, 10, 0), at(13, 11, 0)), &bookings));
        assert!(!slot_is_booked(&slot(at(13, 13, 0), at(13, 14, 0)), &bookings));
        assert!(!slot_is_booked(&slot(at(13, 15, 0), at(13, 16, 0)), &bookings));
        assert!(!slot_is_booked(&slot(at(13, 17, 0), at(13, 18, 0)), &bookings));
    }

    #[test]
    fn overlap_is_half_open() {
        // Back-to-back intervals do not overlap.
        assert!(!overlaps(at(13, 11, 0), at(13, 12, 0), at(13, 10, 0), at(13, 11, 0)));
        // Partial overlap on either side does.
        assert!(overlaps(at(13, 10, 30), at(13, 11, 30), at(13, 10, 0), at(13, 11, 0)));
        assert!(overlaps(at(13, 9, 30), at(13, 10, 30), at(13, 10, 0), at(13, 11, 0)));
        // Containment does.
        assert!(overlaps(at(13, 10, 15), at(13, 10, 45), at(13, 10, 0), at(13, 11, 0)));
    }
}
