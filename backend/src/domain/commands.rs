//! Domain-level command types.
//! These are used by services inside the domain layer and are not exposed
//! over the public API. The REST layer maps the public DTOs in `shared` to
//! these, parsing dates on the way.

pub mod camps {
    use chrono::NaiveDate;
    use shared::{AgeRange, CampCategory, CampStatus};

    /// Input for creating a new camp listing
    #[derive(Debug, Clone)]
    pub struct CreateCampCommand {
        pub name: String,
        pub description: String,
        pub location: String,
        pub age_range: AgeRange,
        pub category: CampCategory,
        pub activities: Vec<String>,
        pub price: f64,
        pub images: Vec<String>,
        pub capacity: u32,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
    }

    /// Partial update; `None` leaves a field unchanged
    #[derive(Debug, Clone, Default)]
    pub struct UpdateCampCommand {
        pub name: Option<String>,
        pub description: Option<String>,
        pub location: Option<String>,
        pub age_range: Option<AgeRange>,
        pub category: Option<CampCategory>,
        pub activities: Option<Vec<String>>,
        pub price: Option<f64>,
        pub images: Option<Vec<String>>,
        pub capacity: Option<u32>,
        pub registered: Option<u32>,
        pub status: Option<CampStatus>,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
    }
}
