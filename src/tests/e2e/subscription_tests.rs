use crate::modules::planner::core::notifications::Topic;
use crate::modules::planner::use_cases::manage_events::command::AddEvent;
use crate::shell::graphql::build_schema;
use crate::shell::state::AppState;
use crate::tests::fixtures::store::make_store;
use futures::StreamExt;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(2);

async fn wait_for_subscriber(state: &AppState, topic: Topic) {
    timeout(WAIT, async {
        while state.store.subscriber_count(topic) == 0 {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("subscription never registered");
}

async fn add_concert(state: &AppState) -> String {
    let ali = state.store.add_user("Ali").await.unwrap();
    let istanbul = state.store.add_location("Istanbul").await.unwrap();
    state
        .store
        .add_event(AddEvent {
            title: "Concert".into(),
            user_id: ali.id,
            location_id: istanbul.id,
            description: "d".into(),
            time: "2025-02-15 20:00".into(),
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn delivers_an_event_created_after_subscribing() {
    let state = AppState::new(Arc::new(make_store()));
    let schema = build_schema(state.clone());

    let mut stream =
        schema.execute_stream("subscription { eventCreated { id title user { username } } }");
    let first = tokio::spawn(async move { stream.next().await });
    wait_for_subscriber(&state, Topic::EventCreated).await;

    let event_id = add_concert(&state).await;

    let response = timeout(WAIT, first)
        .await
        .expect("no notification received")
        .unwrap()
        .expect("stream ended");
    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "eventCreated": {
                "id": event_id,
                "title": "Concert",
                "user": { "username": "Ali" },
            }
        })
    );
}

#[tokio::test]
async fn delivers_exactly_one_notification_per_created_event() {
    let state = AppState::new(Arc::new(make_store()));
    let mut subscription = state.store.subscribe(Topic::EventCreated);

    add_concert(&state).await;

    assert!(subscription.try_recv().is_some());
    assert!(subscription.try_recv().is_none());
}

#[tokio::test]
async fn misses_events_created_before_subscribing() {
    let state = AppState::new(Arc::new(make_store()));
    add_concert(&state).await;

    let mut subscription = state.store.subscribe(Topic::EventCreated);

    assert!(subscription.try_recv().is_none());
}

#[tokio::test]
async fn delivers_deleted_users_to_graphql_subscribers() {
    let state = AppState::new(Arc::new(make_store()));
    let schema = build_schema(state.clone());
    let ali = state.store.add_user("Ali").await.unwrap();

    let mut stream = schema.execute_stream("subscription { userDeleted { id username } }");
    let first = tokio::spawn(async move { stream.next().await });
    wait_for_subscriber(&state, Topic::UserDeleted).await;

    state.store.delete_user(&ali.id).await.unwrap();

    let response = timeout(WAIT, first)
        .await
        .expect("no notification received")
        .unwrap()
        .expect("stream ended");
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "userDeleted": { "id": ali.id, "username": "Ali" } })
    );
}
