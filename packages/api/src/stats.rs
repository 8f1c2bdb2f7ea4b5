//! Owner statistics: summary totals, today's agenda, revenue per day and per service.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Booking;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_bookings: u32,
    pub completed_bookings: u32,
    pub pending_bookings: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStats {
    pub date: String,
    pub bookings: u32,
    pub completed: u32,
    pub revenue: f64,
    #[serde(default)]
    pub next_bookings: Vec<Booking>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueByDay {
    pub date: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStats {
    pub service_name: String,
    pub count: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerStats {
    pub summary: StatsSummary,
    pub today: TodayStats,
    #[serde(default)]
    pub revenue_by_day: Vec<RevenueByDay>,
    #[serde(default)]
    pub bookings_by_service: Vec<ServiceStats>,
}

impl OwnerStats {
    /// Mean daily revenue over the returned range, 0 when there are no rows.
    pub fn average_daily_revenue(&self) -> f64 {
        if self.revenue_by_day.is_empty() {
            return 0.0;
        }
        let total: f64 = self.revenue_by_day.iter().map(|r| r.revenue).sum();
        total / self.revenue_by_day.len() as f64
    }
}

/// Date range presets offered on the owner dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsRange {
    Today,
    Last7Days,
    ThisMonth,
    LastMonth,
    Custom { from: NaiveDate, to: NaiveDate },
}

impl StatsRange {
    pub const PRESETS: [(&'static str, &'static str); 4] = [
        ("today", "Today"),
        ("last_7_days", "Last 7 days"),
        ("this_month", "This month"),
        ("last_month", "Last month"),
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "today" => Some(StatsRange::Today),
            "last_7_days" => Some(StatsRange::Last7Days),
            "this_month" => Some(StatsRange::ThisMonth),
            "last_month" => Some(StatsRange::LastMonth),
            _ => None,
        }
    }

    /// Inclusive `(from, to)` dates for this range, relative to `today`.
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match *self {
            StatsRange::Today => (today, today),
            StatsRange::Last7Days => (today - Duration::days(6), today),
            StatsRange::ThisMonth => (today.with_day(1).unwrap_or(today), today),
            StatsRange::LastMonth => {
                let first_this = today.with_day(1).unwrap_or(today);
                let last_prev = first_this - Duration::days(1);
                (last_prev.with_day(1).unwrap_or(last_prev), last_prev)
            }
            StatsRange::Custom { from, to } => (from, to),
        }
    }
}

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn owner_stats(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<OwnerStats, ApiError> {
        let mut query = Vec::new();
        if let Some(from) = from {
            query.push(("from", from.to_string()));
        }
        if let Some(to) = to {
            query.push(("to", to.to_string()));
        }
        self.get_with_query("stats", &query).await
    }
}
