use chrono::Utc;

use sb_core::ids::{DeviceId, SessionId};
use sb_core::ports::{RelayStoreError, RelayStorePort};
use sb_core::scan::ScanEvent;
use sb_core::session::Session;
use sb_infra::InMemoryRelayStore;

fn session(id: &str) -> Session {
    Session::new(SessionId::from(id), DeviceId::from("desk-01"), Utc::now())
}

fn event(session_id: &str, payload: &str, timestamp: i64) -> ScanEvent {
    ScanEvent {
        session_id: SessionId::from(session_id),
        payload: payload.to_string(),
        actor_id: Some(DeviceId::from("phone-01")),
        timestamp,
    }
}

#[tokio::test]
async fn live_subscriber_receives_events_in_publish_order() {
    let store = InMemoryRelayStore::new();
    store.create_session(&session("s1")).await.unwrap();

    let mut rx = store.subscribe(&SessionId::from("s1")).await.unwrap();

    for (i, payload) in ["SKU-1", "SKU-2", "SKU-3"].into_iter().enumerate() {
        store.append_event(&event("s1", payload, i as i64)).await.unwrap();
    }

    assert_eq!(rx.recv().await.unwrap().payload, "SKU-1");
    assert_eq!(rx.recv().await.unwrap().payload, "SKU-2");
    assert_eq!(rx.recv().await.unwrap().payload, "SKU-3");
}

#[tokio::test]
async fn fresh_subscription_replays_backlog() {
    let store = InMemoryRelayStore::new();
    store.create_session(&session("s1")).await.unwrap();
    store.append_event(&event("s1", "SKU-1", 1)).await.unwrap();
    store.append_event(&event("s1", "SKU-2", 2)).await.unwrap();

    // Attach after the fact, as a reconnecting primary device would.
    let mut rx = store.subscribe(&SessionId::from("s1")).await.unwrap();

    assert_eq!(rx.recv().await.unwrap().payload, "SKU-1");
    assert_eq!(rx.recv().await.unwrap().payload, "SKU-2");
}

#[tokio::test]
async fn events_are_scoped_to_their_session() {
    let store = InMemoryRelayStore::new();
    store.create_session(&session("s1")).await.unwrap();
    store.create_session(&session("s2")).await.unwrap();

    let mut rx = store.subscribe(&SessionId::from("s1")).await.unwrap();
    store.append_event(&event("s2", "SKU-OTHER", 1)).await.unwrap();
    store.append_event(&event("s1", "SKU-MINE", 2)).await.unwrap();

    assert_eq!(rx.recv().await.unwrap().payload, "SKU-MINE");
}

#[tokio::test]
async fn teardown_is_idempotent() {
    let store = InMemoryRelayStore::new();
    let id = SessionId::from("s1");
    store.create_session(&session("s1")).await.unwrap();

    store.teardown_session(&id).await.unwrap();
    store.teardown_session(&id).await.unwrap();
    assert!(store.session(&id).await.is_none());

    // Never-created sessions tear down fine too.
    store.teardown_session(&SessionId::from("ghost")).await.unwrap();
}

#[tokio::test]
async fn offline_store_reports_unavailable() {
    let store = InMemoryRelayStore::new();
    store.set_offline(true);

    let result = store.create_session(&session("s1")).await;
    assert!(matches!(result, Err(RelayStoreError::Unavailable(_))));

    let result = store.append_event(&event("s1", "SKU-1", 1)).await;
    assert!(matches!(result, Err(RelayStoreError::Unavailable(_))));

    // Coming back online resumes service with no residue.
    store.set_offline(false);
    store.create_session(&session("s1")).await.unwrap();
    assert_eq!(store.event_count(&SessionId::from("s1")).await, 0);
}

#[tokio::test]
async fn dropped_receiver_releases_the_subscription() {
    let store = InMemoryRelayStore::new();
    store.create_session(&session("s1")).await.unwrap();

    let rx = store.subscribe(&SessionId::from("s1")).await.unwrap();
    drop(rx);

    // The next append prunes the dead subscriber instead of erroring.
    store.append_event(&event("s1", "SKU-1", 1)).await.unwrap();
    assert_eq!(store.event_count(&SessionId::from("s1")).await, 1);
}
