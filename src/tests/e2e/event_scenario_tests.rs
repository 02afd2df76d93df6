use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;
use crate::tests::fixtures::store::make_store;
use async_graphql::{Request, Variables};
use serde_json::{Value, json};
use std::sync::Arc;

fn make_schema() -> (AppSchema, AppState) {
    let state = AppState::new(Arc::new(make_store()));
    (build_schema(state.clone()), state)
}

async fn run(schema: &AppSchema, query: &str, variables: Value) -> Value {
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await;
    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    response.data.into_json().unwrap()
}

const ADD_EVENT: &str = r#"
    mutation AddEvent($title: String!, $userId: ID!, $locationId: ID!, $description: String!, $time: String!) {
        addEvent(title: $title, userId: $userId, locationId: $locationId, description: $description, time: $time) {
            id
            title
            user { id username }
            location { id name }
            description
            time
        }
    }
"#;

async fn add_ali_and_istanbul(schema: &AppSchema) -> (String, String) {
    let user = run(schema, r#"mutation { addUser(username: "Ali") { id } }"#, json!({})).await;
    let location = run(
        schema,
        r#"mutation { addLocation(name: "Istanbul") { id } }"#,
        json!({}),
    )
    .await;
    (
        user["addUser"]["id"].as_str().unwrap().to_string(),
        location["addLocation"]["id"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn lists_a_created_event_with_its_user_and_location() {
    let (schema, _) = make_schema();
    let (user_id, location_id) = add_ali_and_istanbul(&schema).await;

    let created = run(
        &schema,
        ADD_EVENT,
        json!({
            "title": "Concert",
            "userId": user_id,
            "locationId": location_id,
            "description": "d",
            "time": "2025-02-15 20:00",
        }),
    )
    .await;
    assert_eq!(created["addEvent"]["user"]["username"], "Ali");

    let listed = run(
        &schema,
        "{ events { id title user { username } location { name } participants { id } } }",
        json!({}),
    )
    .await;
    assert_eq!(
        listed["events"],
        json!([{
            "id": created["addEvent"]["id"],
            "title": "Concert",
            "user": { "username": "Ali" },
            "location": { "name": "Istanbul" },
            "participants": [],
        }])
    );
}

#[tokio::test]
async fn rejects_an_event_for_an_unknown_user() {
    let (schema, state) = make_schema();
    let (_, location_id) = add_ali_and_istanbul(&schema).await;

    let response = schema
        .execute(Request::new(ADD_EVENT).variables(Variables::from_json(json!({
            "title": "Concert",
            "userId": "404",
            "locationId": location_id,
            "description": "d",
            "time": "2025-02-15 20:00",
        }))))
        .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        response.errors[0].message,
        "validation failed: user not found: 404"
    );
    assert!(state.store.events().await.unwrap().is_empty());
}

#[tokio::test]
async fn reflects_a_renamed_user_in_every_event() {
    let (schema, state) = make_schema();
    let (user_id, location_id) = add_ali_and_istanbul(&schema).await;
    for title in ["Concert", "Workshop"] {
        run(
            &schema,
            ADD_EVENT,
            json!({
                "title": title,
                "userId": user_id,
                "locationId": location_id,
                "description": "d",
                "time": "2025-02-15 20:00",
            }),
        )
        .await;
    }

    run(
        &schema,
        "mutation($id: ID!) { updateUser(id: $id, username: \"Ali Veli\") { username } }",
        json!({ "id": user_id }),
    )
    .await;

    let listed = run(&schema, "{ events { user { username } } }", json!({})).await;
    assert_eq!(
        listed["events"],
        json!([
            { "user": { "username": "Ali Veli" } },
            { "user": { "username": "Ali Veli" } },
        ])
    );
    let owned = run(
        &schema,
        "query($id: ID!) { user(id: $id) { events { title } } }",
        json!({ "id": user_id }),
    )
    .await;
    assert_eq!(owned["user"]["events"].as_array().unwrap().len(), 2);
    assert_eq!(state.store.events().await.unwrap().len(), 2);
}

#[tokio::test]
async fn resolves_a_deleted_user_to_null() {
    let (schema, _) = make_schema();
    let (user_id, location_id) = add_ali_and_istanbul(&schema).await;
    run(
        &schema,
        ADD_EVENT,
        json!({
            "title": "Concert",
            "userId": user_id,
            "locationId": location_id,
            "description": "d",
            "time": "2025-02-15 20:00",
        }),
    )
    .await;

    run(
        &schema,
        "mutation($id: ID!) { deleteUser(id: $id) { id } }",
        json!({ "id": user_id }),
    )
    .await;

    let listed = run(&schema, "{ events { title user { id } } }", json!({})).await;
    assert_eq!(
        listed["events"],
        json!([{ "title": "Concert", "user": null }])
    );
}

#[tokio::test]
async fn returns_null_for_unknown_ids() {
    let (schema, _) = make_schema();
    let data = run(
        &schema,
        r#"mutation {
            updateUser(id: "404", username: "Ghost") { id }
            deleteEvent(id: "404") { id }
            updateLocation(id: "404", name: "Nowhere") { id }
            deleteParticipant(id: "404") { id }
        }"#,
        json!({}),
    )
    .await;
    assert_eq!(
        data,
        json!({
            "updateUser": null,
            "deleteEvent": null,
            "updateLocation": null,
            "deleteParticipant": null,
        })
    );
    let lookups = run(
        &schema,
        r#"{ user(id: "404") { id } event(id: "404") { id } location(id: "404") { id } participant(id: "404") { id } }"#,
        json!({}),
    )
    .await;
    assert_eq!(
        lookups,
        json!({ "user": null, "event": null, "location": null, "participant": null })
    );
}

#[tokio::test]
async fn attaches_participants_to_their_event() {
    let (schema, _) = make_schema();
    let (user_id, location_id) = add_ali_and_istanbul(&schema).await;
    let created = run(
        &schema,
        ADD_EVENT,
        json!({
            "title": "Concert",
            "userId": user_id,
            "locationId": location_id,
            "description": "d",
            "time": "2025-02-15 20:00",
        }),
    )
    .await;
    let event_id = created["addEvent"]["id"].as_str().unwrap().to_string();

    for username in ["Mehmet", "Ayşe"] {
        run(
            &schema,
            "mutation($name: String!, $eventId: ID) { addParticipant(username: $name, eventId: $eventId) { id } }",
            json!({ "name": username, "eventId": event_id }),
        )
        .await;
    }
    run(
        &schema,
        r#"mutation { addParticipant(username: "Fatma") { id } }"#,
        json!({}),
    )
    .await;

    let data = run(
        &schema,
        "query($id: ID!) { event(id: $id) { participants { username event { title } } } }",
        json!({ "id": event_id }),
    )
    .await;
    assert_eq!(
        data["event"]["participants"],
        json!([
            { "username": "Mehmet", "event": { "title": "Concert" } },
            { "username": "Ayşe", "event": { "title": "Concert" } },
        ])
    );
}

#[tokio::test]
async fn deletes_all_entities_and_returns_them() {
    let (schema, _) = make_schema();
    add_ali_and_istanbul(&schema).await;
    run(
        &schema,
        r#"mutation { addUser(username: "Veli") { id } }"#,
        json!({}),
    )
    .await;

    let deleted = run(
        &schema,
        "mutation { deleteAllUsers { username } deleteAllLocations { name } deleteAllEvents { id } deleteAllParticipants { id } }",
        json!({}),
    )
    .await;
    assert_eq!(
        deleted,
        json!({
            "deleteAllUsers": [{ "username": "Ali" }, { "username": "Veli" }],
            "deleteAllLocations": [{ "name": "Istanbul" }],
            "deleteAllEvents": [],
            "deleteAllParticipants": [],
        })
    );
    let listed = run(&schema, "{ users { id } locations { id } }", json!({})).await;
    assert_eq!(listed, json!({ "users": [], "locations": [] }));
}
