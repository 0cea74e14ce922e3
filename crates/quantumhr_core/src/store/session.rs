//! Authentication session store with durable persistence.
//!
//! # Responsibility
//! - Own the token, principal and profile overlay for the signed-in user.
//! - Persist the durable subset on every mutation and restore it once at
//!   process start.
//!
//! # Invariants
//! - `authenticated` is derived: true iff both token and principal are
//!   present. It is recomputed on every mutation and on rehydration, and
//!   is never persisted.
//! - Persistence failures degrade to a logged-out empty state; they are
//!   logged and never propagated to the caller.

use crate::model::auth::ProfileOverlay;
use crate::model::user::User;
use crate::repo::session_repo::{SessionRepository, SessionSnapshot};
use log::{info, warn};

/// Single-instance authentication session store.
///
/// Generic over the persistence seam so tests and alternative storage
/// backends can supply their own repository.
pub struct SessionStore<R: SessionRepository> {
    token: Option<String>,
    principal: Option<User>,
    overlay: ProfileOverlay,
    authenticated: bool,
    repo: R,
}

impl<R: SessionRepository> SessionStore<R> {
    /// Creates an empty, unauthenticated store.
    ///
    /// Call [`rehydrate`] before the first guard check to restore any
    /// persisted session.
    ///
    /// [`rehydrate`]: SessionStore::rehydrate
    pub fn new(repo: R) -> Self {
        Self {
            token: None,
            principal: None,
            overlay: ProfileOverlay::default(),
            authenticated: false,
            repo,
        }
    }

    /// Commits a token and principal pair atomically and persists.
    pub fn set_auth(&mut self, token: impl Into<String>, principal: User) {
        self.token = Some(token.into());
        self.principal = Some(principal);
        self.recompute_authenticated();
        self.persist();
        info!("event=session_commit module=store status=ok");
    }

    /// Shallow-merges overlay fields and persists.
    ///
    /// Token and principal are untouched.
    pub fn update_profile_overlay(&mut self, fields: ProfileOverlay) {
        self.overlay.merge(fields);
        self.persist();
    }

    /// Clears the session to its empty state and persists the cleared
    /// snapshot.
    pub fn logout(&mut self) {
        self.token = None;
        self.principal = None;
        self.overlay = ProfileOverlay::default();
        self.recompute_authenticated();
        self.persist();
        info!("event=session_clear module=store status=ok");
    }

    /// Alias for [`logout`], kept for call-site symmetry with guard-side
    /// cleanup paths.
    ///
    /// [`logout`]: SessionStore::logout
    pub fn clear_auth(&mut self) {
        self.logout();
    }

    /// Restores persisted state and recomputes `authenticated`.
    ///
    /// Idempotent; must run before any guard check. A missing or
    /// unreadable snapshot leaves the store empty and unauthenticated.
    pub fn rehydrate(&mut self) {
        match self.repo.load() {
            Ok(Some(snapshot)) => {
                self.token = snapshot.token;
                self.principal = snapshot.principal;
                self.overlay = snapshot.overlay;
                self.recompute_authenticated();
                info!(
                    "event=session_rehydrate module=store status=ok authenticated={}",
                    self.authenticated
                );
            }
            Ok(None) => {
                info!("event=session_rehydrate module=store status=ok authenticated=false snapshot=absent");
            }
            Err(err) => {
                self.token = None;
                self.principal = None;
                self.overlay = ProfileOverlay::default();
                self.recompute_authenticated();
                warn!("event=session_rehydrate module=store status=error fallback=logged_out error={err}");
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn principal(&self) -> Option<&User> {
        self.principal.as_ref()
    }

    pub fn overlay(&self) -> &ProfileOverlay {
        &self.overlay
    }

    fn recompute_authenticated(&mut self) {
        self.authenticated = self.token.is_some() && self.principal.is_some();
    }

    /// Fire-and-forget persistence: a failed save keeps the in-memory
    /// session usable and is only logged.
    fn persist(&self) {
        let snapshot = SessionSnapshot {
            token: self.token.clone(),
            principal: self.principal.clone(),
            overlay: self.overlay.clone(),
        };
        if let Err(err) = self.repo.save(&snapshot) {
            warn!("event=session_persist module=store status=error error={err}");
        }
    }
}
