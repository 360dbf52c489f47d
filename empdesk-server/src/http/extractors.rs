//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::EmployeeId;

/// Employee id from the `{id}` path segment.
///
/// A segment that is not an integer cannot name a row, so it is rejected as
/// not found rather than as a bad request.
pub struct EmployeeIdPath(pub EmployeeId);

impl<S> FromRequestParts<S> for EmployeeIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Internal {
                message: format!("id path segment: {}", e.body_text()),
            })?;

        parse_id(&raw).map(Self)
    }
}

/// Parse a submitted id, treating anything non-numeric as not found.
pub fn parse_id(raw: &str) -> Result<EmployeeId, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::NotFound { id: raw.to_owned() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn non_numeric_id_is_not_found() {
        let err = parse_id("abc").unwrap_err();
        assert!(matches!(err, ApiError::NotFound { id } if id == "abc"));
    }
}
