use quantumhr_core::db::{open_db, open_db_in_memory};
use quantumhr_core::{
    demo_principal, login, validate_token, LoginCredentials, ProfileOverlay, SessionStore,
    SqliteSessionRepository, SESSION_STORE_NAME,
};
use rusqlite::params;

#[test]
fn login_flow_commits_gateway_tokens_into_the_session() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SessionStore::new(SqliteSessionRepository::new(&conn));

    let tokens = login(&LoginCredentials {
        email: "q@quantum.io".to_string(),
        password: "qTask123#".to_string(),
    })
    .unwrap();
    store.set_auth(tokens.access, demo_principal());

    assert!(store.is_authenticated());
    assert!(validate_token(store.token().unwrap()));
}

#[test]
fn set_auth_derives_authenticated_and_logout_clears_everything() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SessionStore::new(SqliteSessionRepository::new(&conn));

    assert!(!store.is_authenticated());

    store.set_auth("fake-token", demo_principal());
    assert!(store.is_authenticated());
    assert_eq!(store.token(), Some("fake-token"));
    assert_eq!(store.principal().unwrap().email, "q@quantum.io");

    store.update_profile_overlay(ProfileOverlay {
        job_title: Some("Engineer".to_string()),
        ..ProfileOverlay::default()
    });
    assert!(!store.overlay().is_empty());

    store.logout();
    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
    assert!(store.principal().is_none());
    assert!(store.overlay().is_empty());
}

#[test]
fn clear_auth_behaves_exactly_like_logout() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SessionStore::new(SqliteSessionRepository::new(&conn));

    store.set_auth("fake-token", demo_principal());
    store.clear_auth();

    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
    assert!(store.overlay().is_empty());
}

#[test]
fn overlay_updates_merge_instead_of_replacing() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SessionStore::new(SqliteSessionRepository::new(&conn));
    store.set_auth("fake-token", demo_principal());

    store.update_profile_overlay(ProfileOverlay {
        job_title: Some("Engineer".to_string()),
        ..ProfileOverlay::default()
    });
    store.update_profile_overlay(ProfileOverlay {
        working_hours: Some("9-5".to_string()),
        ..ProfileOverlay::default()
    });

    assert_eq!(store.overlay().job_title.as_deref(), Some("Engineer"));
    assert_eq!(store.overlay().working_hours.as_deref(), Some("9-5"));
    assert!(store.overlay().years_of_experience.is_none());
}

#[test]
fn rehydrating_with_no_persisted_data_stays_unauthenticated() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SessionStore::new(SqliteSessionRepository::new(&conn));

    store.rehydrate();

    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
}

#[test]
fn rehydration_restores_a_persisted_session() {
    let conn = open_db_in_memory().unwrap();

    {
        let mut first = SessionStore::new(SqliteSessionRepository::new(&conn));
        first.set_auth("fake-token", demo_principal());
        first.update_profile_overlay(ProfileOverlay {
            job_title: Some("Engineer".to_string()),
            ..ProfileOverlay::default()
        });
    }

    let mut second = SessionStore::new(SqliteSessionRepository::new(&conn));
    assert!(!second.is_authenticated());
    second.rehydrate();

    assert!(second.is_authenticated());
    assert_eq!(second.token(), Some("fake-token"));
    assert_eq!(second.principal().unwrap().full_name(), "Quantum User");
    assert_eq!(second.overlay().job_title.as_deref(), Some("Engineer"));
}

#[test]
fn rehydration_is_idempotent() {
    let conn = open_db_in_memory().unwrap();

    {
        let mut seed = SessionStore::new(SqliteSessionRepository::new(&conn));
        seed.set_auth("fake-token", demo_principal());
    }

    let mut store = SessionStore::new(SqliteSessionRepository::new(&conn));
    store.rehydrate();
    store.rehydrate();

    assert!(store.is_authenticated());
    assert_eq!(store.token(), Some("fake-token"));
}

#[test]
fn rehydration_survives_a_process_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quantumhr.db");

    {
        let conn = open_db(&path).unwrap();
        let mut store = SessionStore::new(SqliteSessionRepository::new(&conn));
        store.set_auth("fake-token", demo_principal());
    }

    let conn = open_db(&path).unwrap();
    let mut store = SessionStore::new(SqliteSessionRepository::new(&conn));
    store.rehydrate();

    assert!(store.is_authenticated());
}

#[test]
fn corrupt_persisted_payload_degrades_to_logged_out() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO store_state (name, payload, updated_at) VALUES (?1, ?2, 0);",
        params![SESSION_STORE_NAME, "{definitely not json"],
    )
    .unwrap();

    let mut store = SessionStore::new(SqliteSessionRepository::new(&conn));
    store.rehydrate();

    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
    assert!(store.principal().is_none());
}

#[test]
fn persisted_payload_keeps_the_wire_shape_and_omits_authenticated() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SessionStore::new(SqliteSessionRepository::new(&conn));
    store.set_auth("fake-token", demo_principal());

    let payload: String = conn
        .query_row(
            "SELECT payload FROM store_state WHERE name = ?1;",
            [SESSION_STORE_NAME],
            |row| row.get(0),
        )
        .unwrap();
    let document: serde_json::Value = serde_json::from_str(&payload).unwrap();

    assert_eq!(document["token"], "fake-token");
    assert!(document.get("user").is_some());
    assert!(document.get("profileFields").is_some());
    assert!(document.get("authenticated").is_none());
    assert!(document.get("isAuthenticated").is_none());
}
