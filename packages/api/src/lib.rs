//! # API crate: typed REST client for the Barber Club backend
//!
//! Every screen in the web client talks to the booking backend through this crate.
//! The backend owns all scheduling logic (slot computation, conflicts, schedules);
//! this crate only describes the wire payloads and wraps each endpoint in a typed
//! `async fn`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, bearer token attachment, `{success, data}` envelope unwrapping, error decoding |
//! | [`auth`] | Login, registration, email/phone verification, password reset, and the [`AuthApi`] seam used by the session store |
//! | [`users`] | Profile, password, and barbershop updates |
//! | [`bookings`] | Available slots, client bookings, owner bookings, services, owner blocks |
//! | [`schedule`] | Day view, disabled slots, weekly schedule |
//! | [`stats`] | Owner revenue and usage statistics |
//! | [`models`] | Wire models (`User`, `Role`, `Booking`, ...) |
//! | [`format`] | Display helpers for times, dates and money |
//!
//! Transport failures and non-2xx responses are surfaced as [`ApiError`].

pub mod auth;
pub mod bookings;
pub mod client;
pub mod error;
pub mod format;
pub mod models;
pub mod schedule;
pub mod stats;
pub mod users;

pub use auth::{
    AuthApi, AuthResponse, EmailVerificationResponse, LoginRequest, MessageResponse,
    RegisterRequest, RegisterResponse,
};
pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    AvailableSlot, Barbershop, Booking, BookingStatus, DisabledSlot, Gender, NotificationChannel,
    OwnerBlock, OwnerSchedule, Role, Service, User,
};
