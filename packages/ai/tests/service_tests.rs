// ABOUTME: HTTP-level tests for the OpenAI service clients
// ABOUTME: Uses wiremock to stand in for the completions and images endpoints

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trygo_ai::{AiServiceError, ImageService, OpenAiService};

#[tokio::test]
async fn generate_text_returns_the_first_choice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"message": {"role": "assistant", "content": "{\"title\": \"T\", \"body\": \"B\"}"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = OpenAiService::with_base_url(server.uri(), "test-key".to_string());
    let text = service
        .generate_text("write something".to_string(), None)
        .await
        .unwrap();

    assert_eq!(text, "{\"title\": \"T\", \"body\": \"B\"}");
}

#[tokio::test]
async fn api_errors_surface_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let service = OpenAiService::with_base_url(server.uri(), "test-key".to_string());
    let err = service
        .generate_text("write something".to_string(), None)
        .await
        .unwrap_err();

    match err {
        AiServiceError::ApiError(message) => {
            assert!(message.contains("429"));
            assert!(message.contains("rate limited"));
        }
        other => panic!("expected ApiError, got {}", other),
    }
}

#[tokio::test]
async fn empty_choice_list_is_an_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let service = OpenAiService::with_base_url(server.uri(), "test-key".to_string());
    let err = service
        .generate_text("prompt".to_string(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, AiServiceError::InvalidResponse));
}

#[tokio::test]
async fn image_generation_returns_the_hosted_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"url": "https://img.example/generated.png"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = ImageService::with_base_url(server.uri(), "test-key".to_string());
    let url = service.create_image("hero image".to_string()).await.unwrap();

    assert_eq!(url, "https://img.example/generated.png");
}

#[tokio::test]
async fn image_api_failure_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let service = ImageService::with_base_url(server.uri(), "test-key".to_string());
    let err = service.create_image("hero image".to_string()).await.unwrap_err();

    assert!(matches!(err, AiServiceError::ApiError(_)));
}
