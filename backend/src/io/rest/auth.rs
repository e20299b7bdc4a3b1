//! Identity extractors.
//!
//! Authentication happens upstream; the verified identity arrives in the
//! `x-user-id` and `x-user-role` headers and is only read here.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use std::convert::Infallible;
use tracing::warn;

use super::error::ApiError;
use crate::domain::models::user::{UserIdentity, UserRole};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Requires a caller identity; rejects with 401 otherwise
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserIdentity);

/// Optional caller identity for public endpoints
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<UserIdentity>);

fn identity_from_headers(headers: &HeaderMap) -> Option<UserIdentity> {
    let id = headers.get(USER_ID_HEADER)?.to_str().ok()?.trim();
    if id.is_empty() {
        return None;
    }
    let raw_role = headers.get(USER_ROLE_HEADER)?.to_str().ok()?;
    match raw_role.parse::<UserRole>() {
        Ok(role) => Some(UserIdentity {
            id: id.to_string(),
            role,
        }),
        Err(e) => {
            warn!("Ignoring identity for {}: {}", id, e);
            None
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        identity_from_headers(&parts.headers)
            .map(AuthenticatedUser)
            .ok_or(ApiError::Unauthorized)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(identity_from_headers(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(id: &str, role: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_str(id).unwrap());
        headers.insert(USER_ROLE_HEADER, HeaderValue::from_str(role).unwrap());
        headers
    }

    #[test]
    fn test_identity_from_headers() {
        let identity = identity_from_headers(&headers("user::7", "camp_owner")).unwrap();
        assert_eq!(identity.id, "user::7");
        assert_eq!(identity.role, UserRole::CampOwner);
    }

    #[test]
    fn test_incomplete_or_unknown_identity_is_ignored() {
        assert!(identity_from_headers(&HeaderMap::new()).is_none());
        assert!(identity_from_headers(&headers("  ", "admin")).is_none());
        assert!(identity_from_headers(&headers("user::7", "root")).is_none());
    }
}
