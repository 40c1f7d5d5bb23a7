mod support;

use kennel_core::{BreedCatalog, KennelError};
use kennel_gateway::DogCeoCatalog;
use support::{MockServer, Reply};

fn catalog_for(server: &MockServer) -> DogCeoCatalog {
    DogCeoCatalog::new(&format!("{}/api", server.base_url))
}

#[tokio::test]
async fn test_list_breeds_returns_sorted_keys() {
    let server = MockServer::start(|_| {
        Reply::json(
            200,
            r#"{"message":{"pug":[],"akita":[],"hound":["afghan","basset"]},"status":"success"}"#,
        )
    })
    .await;
    let catalog = catalog_for(&server);

    let breeds = catalog.list_breeds().await.unwrap();
    assert_eq!(breeds, vec!["akita", "hound", "pug"]);
    assert_eq!(server.requests()[0].path, "/api/breeds/list/all");
}

#[tokio::test]
async fn test_list_images_limits_results() {
    let server = MockServer::start(|_| {
        let images: Vec<String> = (0..20)
            .map(|i| format!("https://images.dog.ceo/breeds/pug/{i}.jpg"))
            .collect();
        Reply::json(
            200,
            serde_json::json!({"message": images, "status": "success"}).to_string(),
        )
    })
    .await;
    let catalog = catalog_for(&server);

    let images = catalog.list_images("pug", 9).await.unwrap();
    assert_eq!(images.len(), 9);
    assert_eq!(images[0], "https://images.dog.ceo/breeds/pug/0.jpg");
    assert_eq!(server.requests()[0].path, "/api/breed/pug/images");
}

#[tokio::test]
async fn test_sub_breed_images_use_nested_path() {
    let server =
        MockServer::start(|_| Reply::json(200, r#"{"message":[],"status":"success"}"#)).await;
    let catalog = catalog_for(&server);

    let images = catalog.list_images("hound-afghan", 9).await.unwrap();
    assert!(images.is_empty());
    assert_eq!(server.requests()[0].path, "/api/breed/hound/afghan/images");
}

#[tokio::test]
async fn test_random_image() {
    let server = MockServer::start(|_| {
        Reply::json(
            200,
            r#"{"message":"https://images.dog.ceo/breeds/akita/a.jpg","status":"success"}"#,
        )
    })
    .await;
    let catalog = catalog_for(&server);

    assert_eq!(
        catalog.random_image().await.unwrap(),
        "https://images.dog.ceo/breeds/akita/a.jpg"
    );
    assert_eq!(server.requests()[0].path, "/api/breeds/image/random");
}

#[tokio::test]
async fn test_unknown_breed_is_fetch_error() {
    let server = MockServer::start(|_| {
        Reply::json(
            404,
            r#"{"status":"error","message":"Breed not found (main breed does not exist)","code":404}"#,
        )
    })
    .await;
    let catalog = catalog_for(&server);

    let result = catalog.list_images("unicorn", 9).await;
    assert_eq!(
        result,
        Err(KennelError::Fetch(
            "Breed not found (main breed does not exist)".into()
        ))
    );
}

#[tokio::test]
async fn test_error_status_in_envelope() {
    let server =
        MockServer::start(|_| Reply::json(200, r#"{"message":"nope","status":"error"}"#)).await;
    let catalog = catalog_for(&server);

    assert!(matches!(
        catalog.random_image().await,
        Err(KennelError::Fetch(_))
    ));
}
