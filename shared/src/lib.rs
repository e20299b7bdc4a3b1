use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod display;
pub mod filter;
pub mod filter_store;
pub mod lenient;
pub mod quick_filter;

pub use display::{
    fallback_camps, pad_to_target, placeholder_image_for, project_results, DisplayCamp,
    DisplayContext, FALLBACK_ID_PREFIX, HOME_DISPLAY_TARGET,
};
pub use filter::{
    check_date_range, check_price_range, FilterCriteria, FilterPatch, FilterValidationError,
};
pub use filter_store::{FilterStore, SearchError};
pub use quick_filter::{find_quick_filter, quick_filters, QuickFilter};

/// Prefix carried by every persisted camp identifier
pub const CAMP_ID_PREFIX: &str = "camp::";

/// The fixed set of camp categories offered in search and listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampCategory {
    Sports,
    Arts,
    Science,
    Technology,
    Music,
    Outdoor,
    Academic,
    Adventure,
    Language,
    Drama,
    Dance,
    Cooking,
    Nature,
    Leadership,
}

impl CampCategory {
    pub const ALL: [CampCategory; 14] = [
        CampCategory::Sports,
        CampCategory::Arts,
        CampCategory::Science,
        CampCategory::Technology,
        CampCategory::Music,
        CampCategory::Outdoor,
        CampCategory::Academic,
        CampCategory::Adventure,
        CampCategory::Language,
        CampCategory::Drama,
        CampCategory::Dance,
        CampCategory::Cooking,
        CampCategory::Nature,
        CampCategory::Leadership,
    ];

    /// Label used on the wire, in the document store and in the UI
    pub fn label(&self) -> &'static str {
        match self {
            CampCategory::Sports => "Sports",
            CampCategory::Arts => "Arts",
            CampCategory::Science => "Science",
            CampCategory::Technology => "Technology",
            CampCategory::Music => "Music",
            CampCategory::Outdoor => "Outdoor",
            CampCategory::Academic => "Academic",
            CampCategory::Adventure => "Adventure",
            CampCategory::Language => "Language",
            CampCategory::Drama => "Drama",
            CampCategory::Dance => "Dance",
            CampCategory::Cooking => "Cooking",
            CampCategory::Nature => "Nature",
            CampCategory::Leadership => "Leadership",
        }
    }
}

impl fmt::Display for CampCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CampCategory {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampCategory::ALL
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownValueError::new("category", s))
    }
}

/// Publication status of a camp listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampStatus {
    #[default]
    Active,
    Inactive,
}

impl CampStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampStatus::Active => "active",
            CampStatus::Inactive => "inactive",
        }
    }
}

/// Field a search result list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Price,
    StartDate,
    Name,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::StartDate => "startDate",
            SortField::Name => "name",
        }
    }
}

impl FromStr for SortField {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "price" => Ok(SortField::Price),
            "startDate" | "start_date" => Ok(SortField::StartDate),
            "name" => Ok(SortField::Name),
            other => Err(UnknownValueError::new("sortBy", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(UnknownValueError::new("sortOrder", other)),
        }
    }
}

/// Returned when a label does not name any known variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValueError {
    pub field: &'static str,
    pub value: String,
}

impl UnknownValueError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} value: {}", self.field, self.value)
    }
}

impl std::error::Error for UnknownValueError {}

/// Inclusive age range a camp accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

/// A camp listing as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub age_range: AgeRange,
    pub category: CampCategory,
    #[serde(default)]
    pub activities: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    pub owner_id: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub registered: u32,
    #[serde(default)]
    pub is_deleted: bool,
    /// RFC 3339 timestamp of the soft delete
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub deleted_by: Option<String>,
    #[serde(default)]
    pub status: CampStatus,
    /// First day of the session (YYYY-MM-DD)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day of the session (YYYY-MM-DD)
    #[serde(default)]
    pub end_date: Option<String>,
    pub created_at: String, // RFC 3339 timestamp
    pub updated_at: String, // RFC 3339 timestamp
}

impl CampRecord {
    /// Generate a fresh camp ID
    pub fn generate_id() -> String {
        format!("{}{}", CAMP_ID_PREFIX, uuid::Uuid::new_v4())
    }

    /// Whether this record is synthetic display content rather than a stored camp
    pub fn is_fallback(&self) -> bool {
        self.id.starts_with(FALLBACK_ID_PREFIX)
    }

    /// Seats still available, saturating at zero
    pub fn spots_left(&self) -> u32 {
        self.capacity.saturating_sub(self.registered)
    }
}

/// Request for creating a camp listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub age_range: AgeRange,
    pub category: CampCategory,
    #[serde(default)]
    pub activities: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub start_date: Option<String>, // YYYY-MM-DD
    #[serde(default)]
    pub end_date: Option<String>, // YYYY-MM-DD
}

/// Request for updating a camp listing; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCampRequest {
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
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Response listing the available category labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<String>,
}

/// Body of every non-2xx API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
