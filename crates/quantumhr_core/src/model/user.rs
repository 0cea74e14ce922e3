//! Directory user record.
//!
//! # Responsibility
//! - Mirror the remote directory JSON shape closely enough to decode it.
//! - Provide the normalized name projection used by search matching.
//!
//! # Invariants
//! - `login.uuid` is the stable identity of a record.
//! - Unknown remote fields are ignored on decode, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Human name triple as delivered by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    pub title: String,
    pub first: String,
    pub last: String,
}

/// Remote account identity. Credential hash fields from the wire payload
/// are intentionally not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLogin {
    /// Stable global ID for the record.
    pub uuid: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStreet {
    pub number: u32,
    pub name: String,
}

/// Postal code arrives as either a JSON string or a bare number depending
/// on the record's country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Text(String),
    Number(i64),
}

impl Display for Postcode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLocation {
    pub street: UserStreet,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDob {
    /// ISO-8601 timestamp string as delivered by the directory.
    pub date: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPicture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

/// Canonical directory record displayed and searched by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub gender: String,
    pub name: UserName,
    pub location: UserLocation,
    pub email: String,
    pub login: UserLogin,
    pub dob: UserDob,
    pub phone: String,
    pub cell: String,
    pub picture: UserPicture,
    pub nat: String,
}

impl User {
    /// Returns the "first last" projection used for search matching.
    ///
    /// Interior whitespace is collapsed and the result is trimmed, so
    /// records with padded or empty name parts still match predictably.
    pub fn full_name(&self) -> String {
        let joined = format!("{} {}", self.name.first, self.name.last);
        WHITESPACE_RE.replace_all(&joined, " ").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Postcode, User, UserDob, UserLocation, UserLogin, UserName, UserPicture, UserStreet};
    use uuid::Uuid;

    fn user_named(first: &str, last: &str) -> User {
        User {
            gender: "female".to_string(),
            name: UserName {
                title: "Ms".to_string(),
                first: first.to_string(),
                last: last.to_string(),
            },
            location: UserLocation {
                street: UserStreet {
                    number: 1,
                    name: "Main St".to_string(),
                },
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                country: "USA".to_string(),
                postcode: Postcode::Number(62704),
            },
            email: "test@example.com".to_string(),
            login: UserLogin {
                uuid: Uuid::new_v4(),
                username: "tester".to_string(),
            },
            dob: UserDob {
                date: "1990-01-01T00:00:00.000Z".to_string(),
                age: 34,
            },
            phone: "555-0100".to_string(),
            cell: "555-0101".to_string(),
            picture: UserPicture {
                large: "l.jpg".to_string(),
                medium: "m.jpg".to_string(),
                thumbnail: "t.jpg".to_string(),
            },
            nat: "US".to_string(),
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(user_named("Ada", "Lovelace").full_name(), "Ada Lovelace");
    }

    #[test]
    fn full_name_collapses_padding_and_gaps() {
        assert_eq!(user_named("  Ada ", " Lovelace ").full_name(), "Ada Lovelace");
        assert_eq!(user_named("Ada", "").full_name(), "Ada");
    }

    #[test]
    fn postcode_decodes_from_string_and_number() {
        let text: Postcode = serde_json::from_str("\"EC1A 1BB\"").expect("string postcode");
        assert_eq!(text, Postcode::Text("EC1A 1BB".to_string()));

        let number: Postcode = serde_json::from_str("94102").expect("numeric postcode");
        assert_eq!(number, Postcode::Number(94102));
        assert_eq!(number.to_string(), "94102");
    }
}
