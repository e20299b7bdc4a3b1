//! # REST API Interface Layer
//!
//! HTTP endpoints for camp search and management. This layer handles:
//! - JSON and query-string (de)serialization
//! - Caller identity extraction
//! - Translation of domain errors to status codes
//! - Request logging

pub mod auth;
pub mod camp_apis;
pub mod error;
pub mod mappers;

pub use camp_apis::*;
pub use error::{ApiError, ErrorPolicy};
