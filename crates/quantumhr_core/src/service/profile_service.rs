//! Mock profile-update collaborator.
//!
//! # Responsibility
//! - Validate a submitted profile form and echo the accepted payload.
//! - Project the overlay subset that feeds the session store.
//!
//! # Invariants
//! - Validation happens before any state commit: a rejected update leaves
//!   session and overlay state untouched.

use crate::model::auth::{ProfileOverlay, ProfileUpdate};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_YEARS_OF_EXPERIENCE: u32 = 100;

/// Profile form rejection reasons, surfaced inline on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    JobTitleRequired,
    YearsOutOfRange(u32),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameRequired => write!(f, "Name fields are required"),
            Self::JobTitleRequired => write!(f, "Job title is required"),
            Self::YearsOutOfRange(value) => write!(
                f,
                "Years of experience must be between 0 and {MAX_YEARS_OF_EXPERIENCE}, got {value}"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Validates a profile update and returns the accepted payload unchanged.
pub fn update_profile(update: ProfileUpdate) -> Result<ProfileUpdate, ValidationError> {
    if update.first_name.trim().is_empty() || update.last_name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if update.job_title.trim().is_empty() {
        return Err(ValidationError::JobTitleRequired);
    }
    if update.years_of_experience > MAX_YEARS_OF_EXPERIENCE {
        return Err(ValidationError::YearsOutOfRange(update.years_of_experience));
    }
    Ok(update)
}

/// Projects the overlay subset committed to the session store after a
/// successful update.
pub fn overlay_from(update: &ProfileUpdate) -> ProfileOverlay {
    ProfileOverlay {
        job_title: Some(update.job_title.clone()),
        years_of_experience: Some(update.years_of_experience),
        working_hours: Some(update.working_hours.clone()),
    }
}
