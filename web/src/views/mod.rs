pub mod booking_calendar;
pub mod checkin;
pub mod clubs;
pub mod home;
pub mod municipalities;
pub mod not_found;
pub mod post_editor;
pub mod posts;
pub mod tags;
pub mod users;
pub mod visits;
