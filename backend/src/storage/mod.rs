//! # Storage Module
//!
//! Camp documents are kept as JSON in a single SQLite table and matched in
//! process against the query produced by the domain layer.

pub mod camp_repository;
pub mod connection;
pub mod document_match;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use camp_repository::CampRepository;
pub use connection::DbConnection;
pub use traits::CampStorage;
