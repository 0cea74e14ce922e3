//! Mock credential gateway.
//!
//! # Responsibility
//! - Verify the fixed development credential pair and issue mock tokens.
//! - Provide the built-in demo principal committed on successful login.
//!
//! # Invariants
//! - A failed login leaves session state untouched; the error is surfaced
//!   inline on the login form.

use crate::model::auth::{AuthTokens, LoginCredentials};
use crate::model::user::{
    Postcode, User, UserDob, UserLocation, UserLogin, UserName, UserPicture, UserStreet,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const VALID_EMAIL: &str = "q@quantum.io";
const VALID_PASSWORD: &str = "qTask123#";

const MOCK_ACCESS_TOKEN: &str = "fake-token";
const MOCK_REFRESH_TOKEN: &str = "fake-refresh";

const DEMO_PRINCIPAL_UUID: Uuid = Uuid::from_u128(0x4fae_11ee_8c99_0242_ac12_0002_0001_0001);

/// Credential verification error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => {
                write!(f, "Invalid email or password. Please try again.")
            }
        }
    }
}

impl Error for AuthError {}

/// Verifies credentials against the fixed development pair.
pub fn login(credentials: &LoginCredentials) -> Result<AuthTokens, AuthError> {
    if credentials.email == VALID_EMAIL && credentials.password == VALID_PASSWORD {
        info!("event=login module=auth status=ok");
        Ok(AuthTokens {
            access: MOCK_ACCESS_TOKEN.to_string(),
            refresh: MOCK_REFRESH_TOKEN.to_string(),
        })
    } else {
        info!("event=login module=auth status=rejected");
        Err(AuthError::InvalidCredentials)
    }
}

/// Returns whether `token` is the gateway's current access token.
pub fn validate_token(token: &str) -> bool {
    token == MOCK_ACCESS_TOKEN
}

/// Returns the fixed demo principal committed by the login flow.
pub fn demo_principal() -> User {
    User {
        gender: "other".to_string(),
        name: UserName {
            title: "Mx".to_string(),
            first: "Quantum".to_string(),
            last: "User".to_string(),
        },
        location: UserLocation {
            street: UserStreet {
                number: 123,
                name: "Tech Street".to_string(),
            },
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            country: "USA".to_string(),
            postcode: Postcode::Text("94102".to_string()),
        },
        email: VALID_EMAIL.to_string(),
        login: UserLogin {
            uuid: DEMO_PRINCIPAL_UUID,
            username: "quantumuser".to_string(),
        },
        dob: UserDob {
            date: "1990-01-01T00:00:00.000Z".to_string(),
            age: 34,
        },
        phone: "+1 (555) 123-4567".to_string(),
        cell: "+1 (555) 765-4321".to_string(),
        picture: UserPicture {
            large: "https://randomuser.me/api/portraits/lego/1.jpg".to_string(),
            medium: "https://randomuser.me/api/portraits/med/lego/1.jpg".to_string(),
            thumbnail: "https://randomuser.me/api/portraits/thumb/lego/1.jpg".to_string(),
        },
        nat: "US".to_string(),
    }
}
