//! # Domain Layer
//!
//! Camp search and listing rules, independent of HTTP and storage details.
//!
//! - **Query Builder**: maps filter criteria to a store query
//! - **Camp Service**: search plus create/update/soft-delete with ownership checks
//! - **Models**: camp documents, users and the query shape

pub mod camp_service;
pub mod commands;
pub mod models;
pub mod query_builder;

pub use camp_service::{CampService, CampServiceError};
pub use query_builder::QueryBuilder;
