//! Collaborator services consumed by the stores.
//!
//! # Responsibility
//! - Realize the fetch, login and profile-update collaborator contracts.
//! - Keep stores decoupled from transport and verification details.

pub mod auth_service;
pub mod directory_service;
pub mod profile_service;
