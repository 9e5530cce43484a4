#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use serde_json::Value;
use spinnerd::config::{extract, ConfigV1};
use spinnerd::routes::create_router;
use spinnerd::startup::build_state;
use spinnerd::state::AppState;

pub fn load_test_config(yaml: &str) -> ConfigV1 {
    extract(&Figment::new().merge(Yaml::string(yaml))).expect("Failed to parse test config YAML")
}

pub fn build_app(config: ConfigV1) -> (Router, AppState) {
    let state = build_state(&config).expect("state should build");
    (create_router(state.clone()), state)
}

pub fn request(path: &str, method: Method) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

pub fn labels(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .expect("items should be an array")
        .iter()
        .map(|item| item["label"].as_str().unwrap_or_default().to_string())
        .collect()
}
