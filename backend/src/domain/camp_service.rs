//! Camp service domain logic.
//!
//! Owns search (through the [`QueryBuilder`]) and the owner/admin listing
//! lifecycle.
//!
//! ## Business Rules
//!
//! - Public searches never return soft-deleted or inactive camps
//! - Only camp owners and admins create listings
//! - A listing is changed or deleted only by its owner or an admin
//! - Names are 1-120 characters; price is non-negative; age and date ranges
//!   are not inverted; registrations never exceed capacity

use std::sync::Arc;

use chrono::Utc;
use shared::{CampRecord, CampStatus, FilterCriteria};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::commands::camps::{CreateCampCommand, UpdateCampCommand};
use crate::domain::models::camp::Camp;
use crate::domain::models::query::Visibility;
use crate::domain::models::user::UserIdentity;
use crate::domain::query_builder::QueryBuilder;
use crate::storage::CampStorage;

const MAX_NAME_LENGTH: usize = 120;

#[derive(Debug, Error)]
pub enum CampServiceError {
    #[error("Camp not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Service for searching and managing camp listings
#[derive(Clone)]
pub struct CampService {
    storage: Arc<dyn CampStorage>,
    query_builder: QueryBuilder,
}

impl CampService {
    pub fn new(storage: Arc<dyn CampStorage>) -> Self {
        Self {
            storage,
            query_builder: QueryBuilder::new(),
        }
    }

    /// Every publicly visible camp, in insertion order
    pub async fn list_camps(&self) -> anyhow::Result<Vec<Camp>> {
        self.search_camps(&FilterCriteria::default(), Visibility::ActiveOnly)
            .await
    }

    /// Run a filtered search. Store failures propagate unchanged.
    pub async fn search_camps(
        &self,
        criteria: &FilterCriteria,
        visibility: Visibility,
    ) -> anyhow::Result<Vec<Camp>> {
        let query = self.query_builder.build_with_visibility(criteria, visibility);
        info!("Searching camps with query: {}", query.to_document());

        let camps = self.storage.find(&query).await?;
        info!("Search returned {} camps", camps.len());
        Ok(camps)
    }

    /// Fetch one camp. Soft-deleted camps are only visible to admins.
    pub async fn get_camp(
        &self,
        camp_id: &str,
        viewer: Option<&UserIdentity>,
    ) -> Result<Camp, CampServiceError> {
        let camp = self
            .storage
            .get_camp(camp_id)
            .await?
            .ok_or_else(|| CampServiceError::NotFound(camp_id.to_string()))?;

        let admin = viewer.map_or(false, UserIdentity::is_admin);
        if camp.is_deleted && !admin {
            debug!("Camp {} is deleted, hiding from non-admin viewer", camp_id);
            return Err(CampServiceError::NotFound(camp_id.to_string()));
        }
        Ok(camp)
    }

    pub async fn create_camp(
        &self,
        user: &UserIdentity,
        command: CreateCampCommand,
    ) -> Result<Camp, CampServiceError> {
        info!("Creating camp for {}: {:?}", user.id, command);

        if !user.can_create_camps() {
            return Err(CampServiceError::Forbidden(format!(
                "Role {} cannot create camps",
                user.role
            )));
        }

        let now = Utc::now();
        let camp = Camp {
            id: CampRecord::generate_id(),
            name: command.name.trim().to_string(),
            description: command.description,
            location: command.location,
            age_range: command.age_range,
            category: command.category,
            activities: command.activities,
            price: command.price,
            images: command.images,
            owner_id: user.id.clone(),
            capacity: command.capacity,
            registered: 0,
            is_deleted: false,
            deleted_at: None,
            deleted_by: None,
            status: CampStatus::Active,
            start_date: command.start_date,
            end_date: command.end_date,
            created_at: now,
            updated_at: now,
        };
        validate_camp(&camp)?;

        self.storage.store_camp(&camp).await?;
        info!("Created camp {}", camp.id);
        Ok(camp)
    }

    pub async fn update_camp(
        &self,
        user: &UserIdentity,
        camp_id: &str,
        command: UpdateCampCommand,
    ) -> Result<Camp, CampServiceError> {
        info!("Updating camp {} for {}: {:?}", camp_id, user.id, command);

        let mut camp = self.get_camp(camp_id, Some(user)).await?;
        if !user.can_manage(&camp.owner_id) {
            return Err(CampServiceError::Forbidden(
                "Only the camp owner or an admin can update this camp".to_string(),
            ));
        }

        if let Some(name) = command.name {
            camp.name = name.trim().to_string();
        }
        if let Some(description) = command.description {
            camp.description = description;
        }
        if let Some(location) = command.location {
            camp.location = location;
        }
        if let Some(age_range) = command.age_range {
            camp.age_range = age_range;
        }
        if let Some(category) = command.category {
            camp.category = category;
        }
        if let Some(activities) = command.activities {
            camp.activities = activities;
        }
        if let Some(price) = command.price {
            camp.price = price;
        }
        if let Some(images) = command.images {
            camp.images = images;
        }
        if let Some(capacity) = command.capacity {
            camp.capacity = capacity;
        }
        if let Some(registered) = command.registered {
            camp.registered = registered;
        }
        if let Some(status) = command.status {
            camp.status = status;
        }
        if command.start_date.is_some() {
            camp.start_date = command.start_date;
        }
        if command.end_date.is_some() {
            camp.end_date = command.end_date;
        }
        validate_camp(&camp)?;

        camp.updated_at = Utc::now();
        if !self.storage.update_camp(&camp).await? {
            warn!("Camp {} disappeared during update", camp_id);
            return Err(CampServiceError::NotFound(camp_id.to_string()));
        }
        Ok(camp)
    }

    /// Hide a camp from searches. Deleting twice is a no-op.
    pub async fn soft_delete_camp(
        &self,
        user: &UserIdentity,
        camp_id: &str,
    ) -> Result<(), CampServiceError> {
        info!("Soft deleting camp {} for {}", camp_id, user.id);

        let mut camp = self
            .storage
            .get_camp(camp_id)
            .await?
            .ok_or_else(|| CampServiceError::NotFound(camp_id.to_string()))?;
        if !user.can_manage(&camp.owner_id) {
            return Err(CampServiceError::Forbidden(
                "Only the camp owner or an admin can delete this camp".to_string(),
            ));
        }
        if camp.is_deleted {
            debug!("Camp {} already deleted", camp_id);
            return Ok(());
        }

        camp.soft_delete(&user.id, Utc::now());
        if !self.storage.update_camp(&camp).await? {
            return Err(CampServiceError::NotFound(camp_id.to_string()));
        }
        Ok(())
    }
}

fn validate_camp(camp: &Camp) -> Result<(), CampServiceError> {
    if camp.name.is_empty() {
        return Err(CampServiceError::Invalid("Camp name cannot be empty".to_string()));
    }
    if camp.name.chars().count() > MAX_NAME_LENGTH {
        return Err(CampServiceError::Invalid(format!(
            "Camp name cannot exceed {} characters",
            MAX_NAME_LENGTH
        )));
    }
    if camp.age_range.min > camp.age_range.max {
        return Err(CampServiceError::Invalid(
            "Minimum age cannot be greater than maximum age".to_string(),
        ));
    }
    if !camp.price.is_finite() || camp.price < 0.0 {
        return Err(CampServiceError::Invalid("Price must be a non-negative amount".to_string()));
    }
    if camp.registered > camp.capacity {
        return Err(CampServiceError::Invalid(
            "Registered campers cannot exceed capacity".to_string(),
        ));
    }
    if let Err(e) = shared::check_date_range(camp.start_date, camp.end_date) {
        return Err(CampServiceError::Invalid(e.to_string()));
    }
    Ok(())
}
