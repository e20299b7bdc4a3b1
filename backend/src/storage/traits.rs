//! # Storage Traits
//!
//! Storage abstraction used by the domain layer, so services can be tested
//! against in-memory or failing stores.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::camp::Camp;
use crate::domain::models::query::CampQuery;

/// Interface for camp document storage
#[async_trait]
pub trait CampStorage: Send + Sync {
    /// Return every camp matching the query, in the query's order
    /// (insertion order when unsorted)
    async fn find(&self, query: &CampQuery) -> Result<Vec<Camp>>;

    /// Retrieve a camp by ID, including soft-deleted ones
    async fn get_camp(&self, camp_id: &str) -> Result<Option<Camp>>;

    /// Store a new camp. Fails if the ID already exists.
    async fn store_camp(&self, camp: &Camp) -> Result<()>;

    /// Replace an existing camp document
    /// Returns false if no camp with that ID exists
    async fn update_camp(&self, camp: &Camp) -> Result<bool>;
}
