mod booking_calendar;
mod booking_modal;
mod create_booking_modal;
mod week_grid;

pub use booking_calendar::BookingCalendar;
pub use booking_modal::BookingModal;
pub use create_booking_modal::CreateBookingModal;
pub use week_grid::WeekGrid;
