//! Session-side value types: credentials, tokens and the profile overlay.
//!
//! # Responsibility
//! - Define the credential and token pair exchanged with the auth gateway.
//! - Define the locally-owned profile overlay and its merge semantics.
//!
//! # Invariants
//! - Overlay merge is shallow: present fields overwrite, absent fields
//!   keep their previous value.
//! - Serde field names stay camelCase to match the persisted payload and
//!   the profile form wire shape.

use serde::{Deserialize, Serialize};

/// Login form payload submitted to the credential gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Opaque credential pair issued by the gateway on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

/// Supplementary profile attributes not present on the base principal
/// record. All fields are optional so a partial update can express
/// "leave untouched" per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
}

impl ProfileOverlay {
    /// Shallow-merges `other` into `self`.
    pub fn merge(&mut self, other: ProfileOverlay) {
        if other.job_title.is_some() {
            self.job_title = other.job_title;
        }
        if other.years_of_experience.is_some() {
            self.years_of_experience = other.years_of_experience;
        }
        if other.working_hours.is_some() {
            self.working_hours = other.working_hours;
        }
    }

    /// Returns whether no overlay field is set.
    pub fn is_empty(&self) -> bool {
        self.job_title.is_none() && self.years_of_experience.is_none() && self.working_hours.is_none()
    }
}

/// Address subset captured by the profile form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: String,
}

/// Full profile form payload submitted to the profile collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub job_title: String,
    pub years_of_experience: u32,
    pub address: ProfileAddress,
    pub working_hours: String,
}
