//! # IO Layer
//!
//! Exposes the domain over HTTP.

pub mod rest;

pub use rest::*;
