
use crate::octomind::OctomindClient;
use serde_json::{Value, json};
use wiremock::MockServer;

pub(super) const API_KEY: &str = "test-api-key";
pub(super) const TEST_TARGET_ID: &str = "test-target-id";
pub(super) const ENVIRONMENTS_PATH: &str =
    "/api/apiKey/v3/test-targets/test-target-id/environments";

pub(super) fn client_for(server: &MockServer) -> OctomindClient {
    OctomindClient::new(reqwest::Client::new(), server.uri(), API_KEY)
}

pub(super) fn sample_environment() -> Value {
    json!({
        "id": "env-1",
        "name": "DEFAULT",
        "testTargetId": TEST_TARGET_ID,
        "type": "DEFAULT",
        "discoveryUrl": "https://example.com",
        "additionalHeaderFields": { "Authorization": "Bearer token" },
        "testAccount": { "username": "u", "password": "p", "otpInitializerKey": "otp" },
        "basicAuth": { "username": "bu", "password": "bp" },
        "enableCrossOriginIframes": true,
        "privateLocation": { "id": "pl-1", "name": "pl", "status": "active", "type": "edge" }
    })
}

/// Copy of the sample with some fields replaced
pub(super) fn environment_with(overrides: Value) -> Value {
    let mut env = sample_environment();
    if let (Some(target), Some(source)) = (env.as_object_mut(), overrides.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    env
}
