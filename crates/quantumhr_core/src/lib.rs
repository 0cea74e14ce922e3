//! Core domain logic for the QuantumHR admin dashboard.
//! This crate is the single source of truth for session and collection
//! invariants.

pub mod db;
pub mod guard;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod repo;
pub mod service;
pub mod store;

pub use guard::{evaluate_guest, evaluate_protected, GuardDecision, HOME_PATH, LOGIN_PATH};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::auth::{
    AuthTokens, LoginCredentials, ProfileAddress, ProfileOverlay, ProfileUpdate,
};
pub use model::user::{User, UserName};
pub use pagination::{page_items, page_meta, total_pages, PageMeta, DEFAULT_PAGE_SIZE};
pub use repo::session_repo::{
    SessionRepository, SessionSnapshot, SqliteSessionRepository, StoreError, StoreResult,
    SESSION_STORE_NAME,
};
pub use service::auth_service::{demo_principal, login, validate_token, AuthError};
pub use service::directory_service::{
    decode_directory_response, HttpUserDirectory, NetworkError, UserDirectory,
    DIRECTORY_ENDPOINT,
};
pub use service::profile_service::{overlay_from, update_profile, ValidationError};
pub use store::directory::DirectoryStore;
pub use store::session::SessionStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
