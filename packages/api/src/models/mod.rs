//! Wire models shared by the endpoint wrappers and the UI.

mod booking;
mod schedule;
mod user;

pub use booking::{AvailableSlot, Booking, BookingStatus, OwnerBlock, Service};
pub use schedule::{weekday_name, DisabledSlot, OwnerSchedule};
pub use user::{Barbershop, Gender, NotificationChannel, Role, User};
