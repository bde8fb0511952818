use contact_core::{
    client::{FAILURE_FALLBACK, SUCCESS_NOTICE},
    config::DeliveryConfig,
    create_app, AppConfig, AppState, ContactClient, ContactForm, ContactRequest, FormField,
    FormState,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn spawn_app(delivery: DeliveryConfig) -> String {
    let config = AppConfig {
        delivery,
        ..AppConfig::default()
    };
    let state = AppState::from_config(config).unwrap();
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api/contact", addr)
}

fn delivery_for(provider: &MockServer) -> DeliveryConfig {
    DeliveryConfig {
        api_key: Some("re_test_key".to_string()),
        api_url: provider.uri(),
        recipient: "owner@example.org".to_string(),
        ..DeliveryConfig::default()
    }
}

fn fill(form: &mut ContactForm, name: &str, email: &str, subject: &str, message: &str) {
    form.set_field(FormField::Name, name);
    form.set_field(FormField::Email, email);
    form.set_field(FormField::Subject, subject);
    form.set_field(FormField::Message, message);
}

#[tokio::test]
async fn test_submission_is_relayed_end_to_end() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("authorization", "Bearer re_test_key"))
        .and(body_partial_json(json!({
            "from": "\"Ann (ann@example.com)\" <onboarding@resend.dev>",
            "to": ["owner@example.org"],
            "reply_to": "ann@example.com",
            "subject": "[Portfolio] Hi"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "re_msg_1" })))
        .expect(1)
        .mount(&provider)
        .await;

    let endpoint = spawn_app(delivery_for(&provider)).await;
    let client = ContactClient::new(endpoint).unwrap();

    let response = client
        .send(&ContactRequest::new("Ann", "ann@example.com", "Hi", "Line1\nLine2"))
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(response.id.as_deref(), Some("re_msg_1"));

    let requests = provider.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let html = sent["html"].as_str().unwrap();
    assert!(html.contains("Line1<br />Line2"));
}

#[tokio::test]
async fn test_form_round_trip_against_live_server() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "re_msg_2" })))
        .expect(1)
        .mount(&provider)
        .await;

    let endpoint = spawn_app(delivery_for(&provider)).await;
    let client = ContactClient::new(endpoint).unwrap();

    let mut form = ContactForm::new();
    fill(&mut form, "  Ann  ", "ann@example.com", " Hi ", "Hello!");
    form.submit(&client).await;

    assert_eq!(form.state(), &FormState::Success);
    assert_eq!(form.state().notification(), Some(SUCCESS_NOTICE));
    assert!(form.field(FormField::Name).is_empty());
}

#[tokio::test]
async fn test_unconfigured_server_reports_503_to_form() {
    let endpoint = spawn_app(DeliveryConfig::default()).await;
    let client = ContactClient::new(endpoint).unwrap();

    let mut form = ContactForm::new();
    fill(&mut form, "Ann", "ann@example.com", "Hi", "Hello!");
    form.submit(&client).await;

    assert_eq!(
        form.state(),
        &FormState::Error("Email service is not configured.".to_string())
    );
    assert_eq!(form.field(FormField::Name), "Ann");
}

#[tokio::test]
async fn test_blank_field_is_reported_by_server() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&provider)
        .await;

    let endpoint = spawn_app(delivery_for(&provider)).await;
    let client = ContactClient::new(endpoint).unwrap();

    let mut form = ContactForm::new();
    fill(&mut form, "   ", "ann@example.com", "Hi", "Hello!");
    form.submit(&client).await;

    assert_eq!(
        form.state(),
        &FormState::Error("All fields are required.".to_string())
    );
}

#[tokio::test]
async fn test_provider_rejection_is_surfaced() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "statusCode": 403,
            "name": "validation_error",
            "message": "You can only send testing emails to your own email address."
        })))
        .mount(&provider)
        .await;

    let endpoint = spawn_app(delivery_for(&provider)).await;
    let client = ContactClient::new(endpoint).unwrap();

    let mut form = ContactForm::new();
    fill(&mut form, "Ann", "ann@example.com", "Hi", "Hello!");
    form.submit(&client).await;

    assert_eq!(
        form.state(),
        &FormState::Error("You can only send testing emails to your own email address.".to_string())
    );
    assert_ne!(form.state().notification(), Some(FAILURE_FALLBACK));
}

#[tokio::test]
async fn test_unreachable_provider_hides_transport_detail() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let delivery = DeliveryConfig {
        api_key: Some("re_test_key".to_string()),
        api_url: dead_url,
        ..DeliveryConfig::default()
    };
    let endpoint = spawn_app(delivery).await;
    let client = ContactClient::new(endpoint).unwrap();

    let mut form = ContactForm::new();
    fill(&mut form, "Ann", "ann@example.com", "Hi", "Hello!");
    form.submit(&client).await;

    assert_eq!(
        form.state(),
        &FormState::Error("Something went wrong. Please try again.".to_string())
    );
}
