//! Test fixtures shared by storage, domain and REST tests.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use shared::{AgeRange, CampCategory, CampStatus};

use super::connection::DbConnection;
use super::camp_repository::CampRepository;
use super::traits::CampStorage;
use crate::domain::models::camp::Camp;
use crate::domain::models::query::CampQuery;

pub const OWNER_ID: &str = "user::owner";

/// An active camp for ages 6-12 with no session dates
pub fn sample_camp(id: &str, name: &str, category: CampCategory, price: f64) -> Camp {
    let created_at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
    Camp {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        location: "Austin, TX".to_string(),
        age_range: AgeRange { min: 6, max: 12 },
        category,
        activities: Vec::new(),
        price,
        images: Vec::new(),
        owner_id: OWNER_ID.to_string(),
        capacity: 20,
        registered: 0,
        is_deleted: false,
        deleted_at: None,
        deleted_by: None,
        status: CampStatus::Active,
        start_date: None,
        end_date: None,
        created_at,
        updated_at: created_at,
    }
}

/// Repository over a fresh in-memory database
pub async fn test_repository() -> Arc<CampRepository> {
    let db = DbConnection::init_test().await.expect("Failed to create test database");
    Arc::new(CampRepository::new(db))
}

/// Store whose every operation fails, for exercising error paths
pub struct FailingStorage;

#[async_trait]
impl CampStorage for FailingStorage {
    async fn find(&self, _query: &CampQuery) -> Result<Vec<Camp>> {
        Err(anyhow!("connection refused: camp store unreachable"))
    }

    async fn get_camp(&self, _camp_id: &str) -> Result<Option<Camp>> {
        Err(anyhow!("connection refused: camp store unreachable"))
    }

    async fn store_camp(&self, _camp: &Camp) -> Result<()> {
        Err(anyhow!("connection refused: camp store unreachable"))
    }

    async fn update_camp(&self, _camp: &Camp) -> Result<bool> {
        Err(anyhow!("connection refused: camp store unreachable"))
    }
}
