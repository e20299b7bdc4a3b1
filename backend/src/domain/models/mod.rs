pub mod camp;
pub mod query;
pub mod user;
