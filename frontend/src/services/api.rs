use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{CampRecord, ErrorResponse, FilterCriteria};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    #[allow(dead_code)]
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Search camps; empty criteria fields are left out of the query string
    pub async fn search_camps(&self, criteria: &FilterCriteria) -> Result<Vec<CampRecord>, String> {
        let url = format!("{}/api/camps/search", self.base_url);

        match Request::get(&url).query(criteria.to_query_pairs()).send().await {
            Ok(response) => read_json(response, "search results").await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Every publicly visible camp, used for the featured grid
    pub async fn list_camps(&self) -> Result<Vec<CampRecord>, String> {
        let url = format!("{}/api/camps", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => read_json(response, "camps").await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, String> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse {}: {}", what, e));
    }

    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => match body.detail {
            Some(detail) => format!("{} ({})", body.error, detail),
            None => body.error,
        },
        Err(_) => "Unknown error".to_string(),
    };
    Err(format!("Server error {}: {}", status, message))
}
