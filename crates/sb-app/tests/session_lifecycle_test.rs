use std::sync::Arc;

use sb_app::usecases::{CreateSession, TeardownSession};
use sb_core::ids::DeviceId;
use sb_infra::InMemoryRelayStore;

#[tokio::test]
async fn created_session_is_discoverable_in_the_store() {
    let relay = Arc::new(InMemoryRelayStore::new());
    let create = CreateSession::new(relay.clone());

    let session = create.execute(DeviceId::from("desk-01")).await.unwrap();

    let stored = relay.session(&session.id).await.expect("session stored");
    assert_eq!(stored.owner_id, DeviceId::from("desk-01"));
    assert_eq!(stored.id, session.id);
}

#[tokio::test]
async fn session_ids_are_unique_per_creation() {
    let relay = Arc::new(InMemoryRelayStore::new());
    let create = CreateSession::new(relay.clone());

    let a = create.execute(DeviceId::from("desk-01")).await.unwrap();
    let b = create.execute(DeviceId::from("desk-01")).await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn pairing_url_carries_the_session_marker() {
    let relay = Arc::new(InMemoryRelayStore::new());
    let create = CreateSession::new(relay.clone());

    let session = create.execute(DeviceId::from("desk-01")).await.unwrap();
    let url = session.pairing_url("https://host");
    assert_eq!(url, format!("https://host/scan?session={}", session.id));
}

#[tokio::test]
async fn create_fails_when_store_unreachable() {
    let relay = Arc::new(InMemoryRelayStore::new());
    relay.set_offline(true);

    let create = CreateSession::new(relay.clone());
    assert!(create.execute(DeviceId::from("desk-01")).await.is_err());
}

#[tokio::test]
async fn teardown_is_best_effort_and_idempotent() {
    let relay = Arc::new(InMemoryRelayStore::new());
    let create = CreateSession::new(relay.clone());
    let teardown = TeardownSession::new(relay.clone());

    let session = create.execute(DeviceId::from("desk-01")).await.unwrap();
    teardown.execute(&session.id).await.unwrap();
    assert!(relay.session(&session.id).await.is_none());

    // Second teardown of the same id still succeeds.
    teardown.execute(&session.id).await.unwrap();
}
