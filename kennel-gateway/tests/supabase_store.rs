mod support;

use config::StoreCredentials;
use kennel_core::{DogId, DogPatch, DogQuery, DogStatus, DogStore, KennelError, NewDog};
use kennel_gateway::SupabaseStore;
use support::{MockServer, Reply};

const ROWS: &str = r#"[
    {"id": 7, "name": "Rex", "breed": "Beagle", "age": "2 years", "description": "Loves naps",
     "image_url": "https://images.dog.ceo/breeds/beagle/1.jpg", "status": "available",
     "created_at": "2024-05-01T10:00:00Z"},
    {"id": "b1", "name": "Bella", "breed": "Pug", "age": null, "description": null,
     "image_url": "https://images.dog.ceo/breeds/pug/2.jpg", "status": "adopted",
     "created_at": "2024-04-01T10:00:00Z"}
]"#;

fn store_for(server: &MockServer) -> SupabaseStore {
    SupabaseStore::new(&StoreCredentials {
        url: server.base_url.clone(),
        anon_key: "anon-key".into(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_list_sends_filters_and_auth() {
    let server = MockServer::start(|_| Reply::json(200, ROWS)).await;
    let store = store_for(&server);

    let dogs = store
        .list(&DogQuery::all().with_status(DogStatus::Available).newest_first())
        .await
        .unwrap();
    assert_eq!(dogs.len(), 2);
    assert_eq!(dogs[0].id.as_str(), "7");
    assert_eq!(dogs[0].age.as_deref(), Some("2 years"));
    assert_eq!(dogs[1].status, DogStatus::Adopted);
    assert_eq!(dogs[1].description, None);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/rest/v1/dogs");
    assert!(request.query.contains("select=*") || request.query.contains("select=%2A"));
    assert!(request.query.contains("status=eq.available"));
    assert!(request.query.contains("order=created_at.desc"));
    assert_eq!(request.header("apikey"), Some("anon-key"));
    assert_eq!(request.header("authorization"), Some("Bearer anon-key"));
}

#[tokio::test]
async fn test_get_filters_by_id() {
    let server = MockServer::start(|_| Reply::json(200, "[]")).await;
    let store = store_for(&server);

    let found = store.get(&DogId::from("missing")).await.unwrap();
    assert!(found.is_none());
    assert!(server.requests()[0].query.contains("id=eq.missing"));
}

#[tokio::test]
async fn test_insert_asks_for_representation() {
    let server = MockServer::start(|_| Reply::json(201, ROWS)).await;
    let store = store_for(&server);

    let dogs = vec![NewDog {
        name: "Rex".into(),
        breed: "Beagle".into(),
        age: Some("2 years".into()),
        description: Some("Loves naps".into()),
        image_url: "https://images.dog.ceo/breeds/beagle/1.jpg".into(),
        status: DogStatus::Available,
    }];
    let inserted = store.insert(dogs).await.unwrap();
    assert_eq!(inserted.len(), 2);

    let request = &server.requests()[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.header("prefer"), Some("return=representation"));
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body[0]["name"], "Rex");
    assert_eq!(body[0]["status"], "available");
}

#[tokio::test]
async fn test_insert_nothing_skips_request() {
    let server = MockServer::start(|_| Reply::json(500, "{}")).await;
    let store = store_for(&server);

    assert!(store.insert(Vec::new()).await.unwrap().is_empty());
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_update_sends_only_set_fields() {
    let server = MockServer::start(|_| Reply::json(200, ROWS)).await;
    let store = store_for(&server);

    let patch = DogPatch::status(DogStatus::Pending);
    store.update_by_id(&DogId::from("7"), &patch).await.unwrap();

    let request = &server.requests()[0];
    assert_eq!(request.method, "PATCH");
    assert!(request.query.contains("id=eq.7"));
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, serde_json::json!({"status": "pending"}));
}

#[tokio::test]
async fn test_update_of_missing_row_fails() {
    let server = MockServer::start(|_| Reply::json(200, "[]")).await;
    let store = store_for(&server);

    let result = store
        .update_by_id(&DogId::from("gone"), &DogPatch::status(DogStatus::Adopted))
        .await;
    assert_eq!(
        result,
        Err(KennelError::Store("No dog found with id gone".into()))
    );
}

#[tokio::test]
async fn test_delete_by_id() {
    let server = MockServer::start(|request| {
        if request.query.contains("id=eq.7") {
            Reply::json(200, ROWS)
        } else {
            Reply::json(200, "[]")
        }
    })
    .await;
    let store = store_for(&server);

    store.delete_by_id(&DogId::from("7")).await.unwrap();
    assert!(store.delete_by_id(&DogId::from("8")).await.is_err());

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.method == "DELETE"));
}

#[tokio::test]
async fn test_error_message_is_surfaced() {
    let server = MockServer::start(|_| {
        Reply::json(
            401,
            r#"{"message":"Invalid API key","hint":"Double check your Supabase `anon` key."}"#,
        )
    })
    .await;
    let store = store_for(&server);

    let result = store.list(&DogQuery::all()).await;
    assert_eq!(result, Err(KennelError::Store("Invalid API key".into())));
}

#[tokio::test]
async fn test_error_without_message_uses_status() {
    let server = MockServer::start(|_| Reply::json(503, "upstream down")).await;
    let store = store_for(&server);

    let Err(KennelError::Store(message)) = store.list(&DogQuery::all()).await else {
        panic!("expected a store error");
    };
    assert!(message.contains("503"), "{message}");
}

#[tokio::test]
async fn test_count_reads_content_range() {
    let server =
        MockServer::start(|_| Reply::json(200, "").with_header("content-range", "0-1/42")).await;
    let store = store_for(&server);

    assert_eq!(store.count().await.unwrap(), 42);
    let request = &server.requests()[0];
    assert_eq!(request.method, "HEAD");
    assert_eq!(request.header("prefer"), Some("count=exact"));
}
