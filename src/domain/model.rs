use crate::utils::error::{AdminError, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar bucket a featured list is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    month: u8,
    year: i32,
}

impl Period {
    pub fn new(month: u8, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(AdminError::InvalidPeriod { month });
        }
        Ok(Self { month, year })
    }

    pub fn current() -> Self {
        let today = chrono::Utc::now().date_naive();
        Self {
            month: today.month() as u8,
            year: today.year(),
        }
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Storage key, also the display form: `YYYY-MM`.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One featured slot. Ranks are 0-based and contiguous within a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedEntry {
    pub restaurant_id: String,
    pub rank: u32,
}

/// Read result for a period, ordered by rank ascending.
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedList {
    pub entries: Vec<FeaturedEntry>,
    pub total: usize,
}

/// Store snapshot. `version` is the compare-and-set token for conditional
/// writes; it changes on every committed write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodState {
    pub entries: Vec<FeaturedEntry>,
    pub version: u64,
}

/// Catalog record. The catalog collaborator owns the full entity; only the
/// fields the admin surface shows are carried here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
}

/// The only identity-provider field the core ever observes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
}

/// Per-request admin access decision. Always returned as a value; the caller
/// performs the actual redirect or render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "value", rename_all = "snake_case")]
pub enum AccessDecision {
    Allow(String),
    Redirect(String),
    AllowDemo(String),
}

/// Non-critical aggregation for the admin landing page. Collaborator faults
/// degrade individual fields to defaults instead of failing the whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    pub featured_count: usize,
    pub slots_free: usize,
    pub restaurant_count: usize,
}
