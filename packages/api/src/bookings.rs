//! # Booking endpoints
//!
//! Client side: available slots, creating a booking, listing one's own bookings.
//! Owner side: listing/filtering all bookings, moving a booking through its status
//! lifecycle, and blocking out time on a given day.
//!
//! Several list endpoints wrap their payload in a named field (`{ "slots": [...] }`,
//! `{ "bookings": [...] }`); the wrappers here peel that off so callers get a `Vec`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AvailableSlot, Booking, BookingStatus, OwnerBlock, Service};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub service_id: String,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateBookingRequest {
    /// Blank notes are not sent.
    pub fn new(service_id: impl Into<String>, start_time: DateTime<Utc>, notes: &str) -> Self {
        let notes = notes.trim();
        Self {
            service_id: service_id.into(),
            start_time,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }
}

/// Query filters for the owner's booking list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OwnerBookingsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

/// Block out time on a day. A full-day block carries no start/end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlockRequest {
    pub date: NaiveDate,
    pub full_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CreateBlockRequest {
    pub fn full_day(date: NaiveDate, reason: &str) -> Self {
        Self {
            date,
            full_day: true,
            start_time: None,
            end_time: None,
            reason: non_blank(reason),
        }
    }

    /// A partial-day block between two `HH:MM` times. Start must come before end.
    pub fn between(date: NaiveDate, start: &str, end: &str, reason: &str) -> Result<Self, String> {
        let parse = |t: &str| {
            NaiveTime::parse_from_str(t.trim(), "%H:%M")
                .map_err(|_| format!("Invalid time: {t}"))
        };
        let (from, to) = (parse(start)?, parse(end)?);
        if from >= to {
            return Err("Start time must be before end time".to_string());
        }
        Ok(Self {
            date,
            full_day: false,
            start_time: Some(from.format("%H:%M").to_string()),
            end_time: Some(to.format("%H:%M").to_string()),
            reason: non_blank(reason),
        })
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Service offered when the backend has no services endpoint.
pub fn default_services() -> Vec<Service> {
    vec![Service {
        id: "service-1".to_string(),
        name: "Haircut".to_string(),
        description: Some("Classic haircut".to_string()),
        duration_min: 35,
        price: 20.0,
        active: true,
    }]
}

#[derive(Deserialize)]
struct SlotsBody {
    slots: Vec<AvailableSlot>,
}

#[derive(Deserialize)]
struct BookingsBody {
    bookings: Vec<Booking>,
}

#[derive(Deserialize)]
struct BookingBody {
    booking: Booking,
}

#[derive(Deserialize)]
struct ServicesBody {
    services: Vec<Service>,
}

#[derive(Deserialize)]
struct BlocksBody {
    blocks: Vec<OwnerBlock>,
}

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn available_slots(&self, date: NaiveDate) -> Result<Vec<AvailableSlot>, ApiError> {
        let body: SlotsBody = self
            .get_with_query("bookings/available-slots", &[("date", date.to_string())])
            .await?;
        Ok(body.slots)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, ApiError> {
        self.post("bookings", request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let body: BookingsBody = self.get("bookings/me").await?;
        Ok(body.bookings)
    }

    #[tracing::instrument(skip(self))]
    pub async fn owner_bookings(
        &self,
        filter: &OwnerBookingsFilter,
    ) -> Result<Vec<Booking>, ApiError> {
        let body: BookingsBody = self
            .get_with_query("bookings/owner/bookings", filter)
            .await?;
        Ok(body.bookings)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<Booking, ApiError> {
        let body: BookingBody = self
            .patch(
                &format!("bookings/{booking_id}/status"),
                &json!({ "status": status }),
            )
            .await?;
        Ok(body.booking)
    }

    /// Active services. Falls back to [`default_services`] if the endpoint fails.
    #[tracing::instrument(skip(self))]
    pub async fn services(&self) -> Vec<Service> {
        match self.get::<ServicesBody>("bookings/services").await {
            Ok(body) => body.services,
            Err(e) => {
                tracing::debug!("Services endpoint unavailable, using defaults: {}", e);
                default_services()
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn owner_blocks(&self, date: NaiveDate) -> Result<Vec<OwnerBlock>, ApiError> {
        let body: BlocksBody = self
            .get_with_query("bookings/blocks", &[("date", date.to_string())])
            .await?;
        Ok(body.blocks)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_owner_block(&self, request: &CreateBlockRequest) -> Result<(), ApiError> {
        let _: Value = self.post("bookings/blocks", request).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_owner_block(&self, block_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("bookings/blocks/{block_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_block_between_validates_order() {
        let block = CreateBlockRequest::between(day(), "13:00", "14:00", "Lunch").unwrap();
        assert!(!block.full_day);
        assert_eq!(block.start_time.as_deref(), Some("13:00"));
        assert_eq!(block.reason.as_deref(), Some("Lunch"));

        assert!(CreateBlockRequest::between(day(), "14:00", "14:00", "").is_err());
        assert!(CreateBlockRequest::between(day(), "18:00", "09:00", "").is_err());
        assert!(CreateBlockRequest::between(day(), "9am", "10:00", "").is_err());
    }

    #[test]
    fn test_full_day_block_serializes_without_times() {
        let value = serde_json::to_value(CreateBlockRequest::full_day(day(), "  ")).unwrap();
        assert_eq!(value["date"], "2024-06-01");
        assert_eq!(value["fullDay"], true);
        assert!(value.get("startTime").is_none());
        assert!(value.get("reason").is_none());
    }

    #[test]
    fn test_create_booking_drops_blank_notes() {
        let start = "2024-06-01T14:00:00Z".parse().unwrap();
        assert_eq!(CreateBookingRequest::new("s1", start, "   ").notes, None);
        assert_eq!(
            CreateBookingRequest::new("s1", start, " fade ").notes.as_deref(),
            Some("fade")
        );
    }

    #[test]
    fn test_owner_filter_serializes_status_upper_case() {
        let filter = OwnerBookingsFilter {
            date: None,
            status: Some(BookingStatus::Confirmed),
        };
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value, json!({ "status": "CONFIRMED" }));
    }
}
