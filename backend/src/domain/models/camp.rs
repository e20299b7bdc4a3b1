use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{AgeRange, CampCategory, CampStatus};

/// Domain representation of a camp listing.
///
/// This is also the exact document shape kept in the camp store, so field
/// names here are the paths the query builder matches on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camp {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub age_range: AgeRange,
    pub category: CampCategory,
    pub activities: Vec<String>,
    pub price: f64,
    pub images: Vec<String>,
    pub owner_id: String,
    pub capacity: u32,
    pub registered: u32,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<String>,
    pub status: CampStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Camp {
    /// Hide the camp from searches without removing it
    pub fn soft_delete(&mut self, deleted_by: &str, at: DateTime<Utc>) {
        self.is_deleted = true;
        self.deleted_at = Some(at);
        self.deleted_by = Some(deleted_by.to_string());
        self.updated_at = at;
    }
}
