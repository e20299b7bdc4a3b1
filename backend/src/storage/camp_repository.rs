//! SQLite-backed camp repository.
//!
//! Each camp is one JSON document keyed by its ID. Queries are evaluated in
//! process with [`document_match`](super::document_match) so that the match
//! semantics are identical to a document database.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::Row;
use tracing::{debug, warn};

use super::connection::DbConnection;
use super::document_match::{matches, sort_documents};
use super::traits::CampStorage;
use crate::domain::models::camp::Camp;
use crate::domain::models::query::CampQuery;

#[derive(Clone)]
pub struct CampRepository {
    db: DbConnection,
}

impl CampRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// All parseable documents in insertion order
    async fn load_documents(&self) -> Result<Vec<(String, Value)>> {
        let rows = sqlx::query("SELECT id, document FROM camps ORDER BY rowid")
            .fetch_all(self.db.pool())
            .await
            .context("Failed to read camps")?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.try_get("id")?;
            let raw: String = row.try_get("document")?;
            match serde_json::from_str::<Value>(&raw) {
                Ok(document) => documents.push((id, document)),
                Err(e) => warn!("Skipping unreadable camp document {}: {}", id, e),
            }
        }
        Ok(documents)
    }
}

#[async_trait]
impl CampStorage for CampRepository {
    async fn find(&self, query: &CampQuery) -> Result<Vec<Camp>> {
        let mut matched: Vec<(String, Value)> = self
            .load_documents()
            .await?
            .into_iter()
            .filter(|(_, document)| matches(document, &query.criteria))
            .collect();

        if let Some(spec) = &query.sort {
            sort_documents(&mut matched, spec);
        }

        let mut camps = Vec::with_capacity(matched.len());
        for (id, document) in matched {
            match serde_json::from_value::<Camp>(document) {
                Ok(camp) => camps.push(camp),
                Err(e) => warn!("Skipping camp {} with invalid shape: {}", id, e),
            }
        }
        debug!("Camp query matched {} documents", camps.len());
        Ok(camps)
    }

    async fn get_camp(&self, camp_id: &str) -> Result<Option<Camp>> {
        let row = sqlx::query("SELECT document FROM camps WHERE id = ?")
            .bind(camp_id)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(row) => {
                let raw: String = row.try_get("document")?;
                let camp = serde_json::from_str(&raw)
                    .with_context(|| format!("Camp {} has an invalid document", camp_id))?;
                Ok(Some(camp))
            }
            None => Ok(None),
        }
    }

    async fn store_camp(&self, camp: &Camp) -> Result<()> {
        let document = serde_json::to_string(camp)?;
        sqlx::query("INSERT INTO camps (id, document) VALUES (?, ?)")
            .bind(&camp.id)
            .bind(document)
            .execute(self.db.pool())
            .await
            .with_context(|| format!("Failed to store camp {}", camp.id))?;
        Ok(())
    }

    async fn update_camp(&self, camp: &Camp) -> Result<bool> {
        // UPDATE keeps the rowid, so unsorted results stay in insertion order
        let document = serde_json::to_string(camp)?;
        let result = sqlx::query("UPDATE camps SET document = ? WHERE id = ?")
            .bind(document)
            .bind(&camp.id)
            .execute(self.db.pool())
            .await
            .with_context(|| format!("Failed to update camp {}", camp.id))?;
        Ok(result.rows_affected() > 0)
    }
}
