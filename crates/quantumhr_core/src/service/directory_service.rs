//! Remote user directory client.
//!
//! # Responsibility
//! - Fetch the user collection from the remote directory endpoint.
//! - Decode the wire envelope into domain records.
//!
//! # Invariants
//! - No retry or backoff here: a failed fetch surfaces unchanged and the
//!   dashboard offers a manual refresh.
//! - Decoding is a pure function, testable without a socket.

use crate::model::user::User;
use log::{error, info};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Remote endpoint delivering one page of 50 records.
pub const DIRECTORY_ENDPOINT: &str = "https://randomuser.me/api/?results=50";

/// Directory fetch failure. Carries a human-readable cause only; the
/// dashboard shows it in a banner and offers manual retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    Fetch(String),
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(message) => write!(f, "Failed to fetch users: {message}"),
        }
    }
}

impl Error for NetworkError {}

/// Envelope metadata returned alongside the records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryInfo {
    pub seed: String,
    pub results: u32,
    pub page: u32,
    pub version: String,
}

/// Wire envelope for the directory response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryResponse {
    pub results: Vec<User>,
    pub info: DirectoryInfo,
}

/// Fetch collaborator contract consumed by the dashboard.
pub trait UserDirectory {
    fn fetch_users(&self) -> Result<Vec<User>, NetworkError>;
}

/// Blocking HTTP implementation over the public directory endpoint.
pub struct HttpUserDirectory {
    endpoint: String,
}

impl HttpUserDirectory {
    pub fn new() -> Self {
        Self {
            endpoint: DIRECTORY_ENDPOINT.to_string(),
        }
    }

    /// Points the client at a non-default endpoint (tests, staging).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for HttpUserDirectory {
    fn fetch_users(&self) -> Result<Vec<User>, NetworkError> {
        let started_at = Instant::now();
        info!("event=directory_fetch module=directory status=start");

        let body = ureq::get(&self.endpoint)
            .call()
            .map_err(|err| NetworkError::Fetch(err.to_string()))?
            .into_string()
            .map_err(|err| NetworkError::Fetch(err.to_string()))?;

        match decode_directory_response(&body) {
            Ok(users) => {
                info!(
                    "event=directory_fetch module=directory status=ok count={} duration_ms={}",
                    users.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(users)
            }
            Err(err) => {
                error!(
                    "event=directory_fetch module=directory status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}

/// Decodes the directory envelope and returns the records in wire order.
pub fn decode_directory_response(body: &str) -> Result<Vec<User>, NetworkError> {
    let response: DirectoryResponse =
        serde_json::from_str(body).map_err(|err| NetworkError::Fetch(err.to_string()))?;
    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::{decode_directory_response, NetworkError};

    const FIXTURE: &str = r#"{
        "results": [
            {
                "gender": "female",
                "name": {"title": "Ms", "first": "Hannah", "last": "Olsen"},
                "location": {
                    "street": {"number": 8224, "name": "Valwood Pkwy"},
                    "city": "Aalborg",
                    "state": "Nordjylland",
                    "country": "Denmark",
                    "postcode": 9000,
                    "coordinates": {"latitude": "-22.4", "longitude": "11.2"}
                },
                "email": "hannah.olsen@example.com",
                "login": {
                    "uuid": "19ab3f8e-81a7-4d31-8a3c-6b2f1a5e9c01",
                    "username": "smallfrog589",
                    "password": "ignored",
                    "salt": "ignored"
                },
                "dob": {"date": "1992-03-08T08:26:49.448Z", "age": 32},
                "registered": {"date": "2010-07-01T01:32:21.000Z", "age": 14},
                "phone": "66994582",
                "cell": "81092705",
                "id": {"name": "CPR", "value": "080392-1234"},
                "picture": {
                    "large": "https://example.com/l.jpg",
                    "medium": "https://example.com/m.jpg",
                    "thumbnail": "https://example.com/t.jpg"
                },
                "nat": "DK"
            }
        ],
        "info": {"seed": "abc", "results": 1, "page": 1, "version": "1.4"}
    }"#;

    #[test]
    fn decodes_wire_envelope_ignoring_unmodeled_fields() {
        let users = decode_directory_response(FIXTURE).expect("fixture should decode");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].full_name(), "Hannah Olsen");
        assert_eq!(users[0].location.postcode.to_string(), "9000");
    }

    #[test]
    fn malformed_body_surfaces_as_fetch_error() {
        let err = decode_directory_response("{not json").expect_err("garbage must fail");
        assert!(matches!(err, NetworkError::Fetch(_)));
        assert!(err.to_string().starts_with("Failed to fetch users:"));
    }
}
