// Endpoint-level tests for the Admin API proxy and static endpoints
//
// The outbound transport is replaced with an in-memory mock so every
// scenario runs hermetically and outbound calls can be counted.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use bodhi_site::cloudinary::mock::MockTransport;
use bodhi_site::config::{CloudinaryConfig, Config, ServerConfig, SiteConfig};
use bodhi_site::server::{routes, AppState};

fn test_config(with_secrets: bool) -> Config {
    Config {
        server: ServerConfig::default(),
        site: SiteConfig {
            base_url: "https://highlands-rental.com".to_string(),
            default_folder: "banyan_tree/flat_mountain".to_string(),
        },
        cloudinary: CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: with_secrets.then(|| "1234567890".to_string()),
            api_secret: with_secrets.then(|| "topsecret".to_string()),
        },
    }
}

macro_rules! test_app {
    ($transport:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new($config, $transport)))
                .configure(routes),
        )
        .await
    };
}

fn resources_body() -> String {
    json!({
        "resources": [
            {
                "public_id": "villa/kitchen-wide",
                "tags": ["kitchen", "interior"],
                "context": {"custom": {"alt": "Kitchen"}},
                "width": 4000,
                "height": 3000,
                "format": "jpg",
                "bytes": 1_500_000,
                "created_at": "2024-06-01T12:00:00Z",
                "folder": "banyan_tree/flat_mountain",
                "secure_url": "https://res.cloudinary.com/demo/image/upload/villa/kitchen-wide"
            },
            {
                "public_id": "villa/kitchen-island",
                "tags": ["kitchen"],
                "width": 3600,
                "height": 2400,
                "format": "jpg",
                "bytes": 1_100_000,
                "created_at": "2024-06-02T09:30:00Z",
                "folder": "banyan_tree/flat_mountain",
                "secure_url": "https://res.cloudinary.com/demo/image/upload/villa/kitchen-island"
            }
        ],
        "total_count": 2
    })
    .to_string()
}

#[actix_web::test]
async fn missing_credentials_returns_500_without_outbound_call() {
    let transport = Arc::new(MockTransport::new());
    let app = test_app!(transport.clone(), test_config(false));

    let req = test::TestRequest::get()
        .uri("/api/cloudinary/tags?action=tags")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["error"].as_str().unwrap().contains("credentials"),
        "Envelope should name the problem: {}",
        body
    );
    assert_eq!(transport.call_count(), 0, "No outbound call may be made");
}

#[actix_web::test]
async fn upstream_failure_status_and_body_are_forwarded() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(403, r#"{"error":{"message":"Invalid Signature abcdef"}}"#);
    let app = test_app!(transport, test_config(true));

    let req = test::TestRequest::get()
        .uri("/api/cloudinary/tags?action=tags")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["details"]
            .as_str()
            .unwrap()
            .contains("Invalid Signature abcdef"),
        "Upstream body must be carried in details: {}",
        body
    );
}

#[actix_web::test]
async fn tags_action_is_reshaped_to_tags_and_total() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(200, r#"{"tags":["exterior","interior","kitchen"]}"#);
    let app = test_app!(transport, test_config(true));

    let req = test::TestRequest::get()
        .uri("/api/cloudinary/tags?action=tags")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["tags"], json!(["exterior", "interior", "kitchen"]));
    assert_eq!(body["total"], 3);
}

#[actix_web::test]
async fn default_action_lists_resources_with_grouping() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(200, &resources_body());
    let app = test_app!(transport.clone(), test_config(true));

    // No action parameter: defaults to list_resources with the configured folder
    let req = test::TestRequest::get().uri("/api/cloudinary/tags").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["total"], 2);
    assert_eq!(body["resources"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["resources"][0]["url"],
        "https://res.cloudinary.com/demo/image/upload/villa/kitchen-wide"
    );

    // Kitchen holds both resources, interior only the first
    let grouped = &body["groupedByTags"];
    assert_eq!(grouped["kitchen"].as_array().unwrap().len(), 2);
    assert_eq!(grouped["interior"].as_array().unwrap().len(), 1);
    assert_eq!(
        grouped["interior"][0]["public_id"],
        "villa/kitchen-wide"
    );

    // The signed form carried the configured default folder
    let sent = transport.last_request().unwrap();
    let form = sent.form.unwrap();
    assert_eq!(form.get("prefix").unwrap(), "banyan_tree/flat_mountain");
    assert!(form.contains_key("signature"));
}

#[actix_web::test]
async fn search_forwards_tag_expression() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(200, &resources_body());
    let app = test_app!(transport.clone(), test_config(true));

    let req = test::TestRequest::get()
        .uri("/api/cloudinary/tags?action=search&tag=kitchen")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let sent = transport.last_request().unwrap();
    assert!(sent.url.contains("/resources/search"));
    assert_eq!(sent.form.unwrap().get("expression").unwrap(), "tags=kitchen");
}

#[actix_web::test]
async fn unknown_action_fails_fast_with_400() {
    let transport = Arc::new(MockTransport::new());
    let app = test_app!(transport.clone(), test_config(true));

    let req = test::TestRequest::get()
        .uri("/api/cloudinary/tags?action=purge")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["details"].as_str().unwrap().contains("purge"));
    assert_eq!(transport.call_count(), 0);
}

#[actix_web::test]
async fn search_without_tag_fails_fast_with_400() {
    let transport = Arc::new(MockTransport::new());
    let app = test_app!(transport.clone(), test_config(true));

    let req = test::TestRequest::get()
        .uri("/api/cloudinary/tags?action=search")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(transport.call_count(), 0);
}

#[actix_web::test]
async fn simple_variant_uses_basic_auth_and_forwards_failures() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(401, "rate limited or denied");
    let app = test_app!(transport.clone(), test_config(true));

    let req = test::TestRequest::get()
        .uri("/api/cloudinary/simple?action=list")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"], "rate limited or denied");

    let sent = transport.last_request().unwrap();
    assert_eq!(
        sent.basic_auth,
        Some(("1234567890".to_string(), "topsecret".to_string()))
    );
}

#[actix_web::test]
async fn simple_variant_groups_resources() {
    let transport = Arc::new(MockTransport::new());
    transport.push_response(200, &resources_body());
    let app = test_app!(transport, test_config(true));

    let req = test::TestRequest::get().uri("/api/cloudinary/simple").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["groupedByTags"]["kitchen"].is_array());
}

#[actix_web::test]
async fn sitemap_is_served_as_xml() {
    let transport = Arc::new(MockTransport::new());
    let app = test_app!(transport, test_config(false));

    let req = test::TestRequest::get().uri("/sitemap.xml").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/xml"
    );
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("<loc>https://highlands-rental.com/property</loc>"));
}

#[actix_web::test]
async fn brand_tokens_are_served_as_json() {
    let transport = Arc::new(MockTransport::new());
    let app = test_app!(transport, test_config(false));

    let req = test::TestRequest::get().uri("/api/brand").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["colors"]["feltedGreen"]["500"], "rgb(86, 125, 95)");
}

#[actix_web::test]
async fn seo_schema_is_served() {
    let transport = Arc::new(MockTransport::new());
    let app = test_app!(transport, test_config(false));

    let req = test::TestRequest::get().uri("/api/seo/schema").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["@type"], "LodgingBusiness");
    assert_eq!(body["url"], "https://highlands-rental.com");
}

#[actix_web::test]
async fn health_endpoint_reports_ok() {
    let transport = Arc::new(MockTransport::new());
    let app = test_app!(transport, test_config(false));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
