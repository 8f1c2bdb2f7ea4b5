//! Owner schedule endpoints: the day view, disabled slots and the weekly schedule.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Booking, DisabledSlot, OwnerSchedule};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDisabledSlotRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One weekday entry of a full weekly schedule replacement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub weekday: u8,
    pub start_time: String,
    pub end_time: String,
    pub active: bool,
}

impl From<&OwnerSchedule> for ScheduleDay {
    fn from(row: &OwnerSchedule) -> Self {
        Self {
            weekday: row.weekday,
            start_time: row.start_time.clone(),
            end_time: row.end_time.clone(),
            active: row.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateScheduleRequest {
    pub schedule: Vec<ScheduleDay>,
}

#[derive(Deserialize)]
struct BookingsBody {
    bookings: Vec<Booking>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisabledSlotsBody {
    disabled_slots: Vec<DisabledSlot>,
}

#[derive(Deserialize)]
struct SchedulesBody {
    schedules: Vec<OwnerSchedule>,
}

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn bookings_by_date(&self, date: NaiveDate) -> Result<Vec<Booking>, ApiError> {
        let body: BookingsBody = self
            .get_with_query("schedule/bookings", &[("date", date.to_string())])
            .await?;
        Ok(body.bookings)
    }

    #[tracing::instrument(skip(self))]
    pub async fn disabled_slots(&self) -> Result<Vec<DisabledSlot>, ApiError> {
        let body: DisabledSlotsBody = self.get("schedule/disabled-slots").await?;
        Ok(body.disabled_slots)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_disabled_slot(
        &self,
        request: &CreateDisabledSlotRequest,
    ) -> Result<DisabledSlot, ApiError> {
        self.post("schedule/disabled-slots", request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_disabled_slot(&self, slot_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("schedule/disabled-slots/{slot_id}"))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn owner_schedule(&self) -> Result<Vec<OwnerSchedule>, ApiError> {
        let body: SchedulesBody = self.get("schedule/owner-schedule").await?;
        Ok(body.schedules)
    }

    /// Replace the weekly schedule. The backend returns the saved rows.
    #[tracing::instrument(skip(self))]
    pub async fn update_owner_schedule(
        &self,
        request: &UpdateScheduleRequest,
    ) -> Result<Vec<OwnerSchedule>, ApiError> {
        self.put("schedule/owner-schedule", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_day_from_row() {
        let row = OwnerSchedule {
            id: "sch1".into(),
            weekday: 1,
            start_time: "09:00".into(),
            end_time: "18:00".into(),
            active: true,
        };
        let day = ScheduleDay::from(&row);
        let value = serde_json::to_value(UpdateScheduleRequest { schedule: vec![day] }).unwrap();
        assert_eq!(value["schedule"][0]["startTime"], "09:00");
        assert_eq!(value["schedule"][0]["weekday"], 1);
        assert!(value["schedule"][0].get("id").is_none());
        assert_eq!(row.weekday_name(), "Monday");
    }
}
