// ABOUTME: HTTP-level tests for the WordPress publishing client
// ABOUTME: Uses wiremock to stand in for a WordPress site's REST API

use serde_json::json;
use wiremock::matchers::{body_partial_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trygo_content::{PipelineError, PostPublisher, PublishRequest, WordPressConnection};
use trygo_wordpress::{WordPressClient, WordPressError};

fn connection(base_url: &str) -> WordPressConnection {
    WordPressConnection {
        base_url: base_url.to_string(),
        username: "author".to_string(),
        application_password: "app-pass".to_string(),
    }
}

fn publish_request(base_url: &str, image_url: Option<String>) -> PublishRequest {
    PublishRequest {
        title: "A post".to_string(),
        content: "The body".to_string(),
        category: trygo_content::IdeaCategory::Pain,
        connection: connection(base_url),
        image_url,
    }
}

#[tokio::test]
async fn create_post_publishes_and_returns_id_and_link() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(header_exists("authorization"))
        .and(body_partial_json(json!({"status": "publish", "title": "A post"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "link": "https://blog.example/a-post"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = WordPressClient::new();
    let (id, link) = client
        .create_post(&connection(&server.uri()), "A post", "The body", None)
        .await
        .unwrap();

    assert_eq!(id, 42);
    assert_eq!(link, "https://blog.example/a-post");
}

#[tokio::test]
async fn rejected_post_surfaces_the_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"code": "incorrect_password"})),
        )
        .mount(&server)
        .await;

    let client = WordPressClient::new();
    let err = client
        .create_post(&connection(&server.uri()), "A post", "The body", None)
        .await
        .unwrap_err();

    match err {
        WordPressError::ApiError(message) => {
            assert!(message.contains("401"));
            assert!(message.contains("incorrect_password"));
        }
        other => panic!("expected ApiError, got {}", other),
    }
}

#[tokio::test]
async fn publish_sideloads_the_image_before_posting() {
    let server = MockServer::start().await;

    // The asset itself is served from the same mock for simplicity
    Mock::given(method("GET"))
        .and(path("/assets/hero.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(vec![0x89, 0x50, 0x4e, 0x47]),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/media"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(body_partial_json(json!({"featured_media": 7})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 43,
            "link": "https://blog.example/with-image"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = WordPressClient::new();
    let image_url = format!("{}/assets/hero.png", server.uri());
    let outcome = client
        .publish(&publish_request(&server.uri(), Some(image_url)))
        .await
        .unwrap();

    assert_eq!(outcome.post_id, "43");
    assert_eq!(outcome.post_url, "https://blog.example/with-image");
}

#[tokio::test]
async fn failed_media_upload_still_publishes_without_image() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/hero.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 44,
            "link": "https://blog.example/no-image"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = WordPressClient::new();
    let image_url = format!("{}/assets/hero.png", server.uri());
    let outcome = client
        .publish(&publish_request(&server.uri(), Some(image_url)))
        .await
        .unwrap();

    assert_eq!(outcome.post_id, "44");
}

#[tokio::test]
async fn failed_post_creation_is_an_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("db gone"))
        .mount(&server)
        .await;

    let client = WordPressClient::new();
    let err = client
        .publish(&publish_request(&server.uri(), None))
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Upstream(_)));
}
