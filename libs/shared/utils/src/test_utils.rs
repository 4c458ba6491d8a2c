use std::sync::Arc;

use axum::{body::to_bytes, response::Response};
use serde_json::Value;

use shared_config::AppConfig;

pub struct TestConfig {
    pub male_doctor_avatar: String,
    pub female_doctor_avatar: String,
    pub seed_demo_data: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            male_doctor_avatar: "/test/male.png".to_string(),
            female_doctor_avatar: "/test/female.png".to_string(),
            seed_demo_data: true,
        }
    }
}

impl TestConfig {
    pub fn empty_stores() -> Self {
        Self {
            seed_demo_data: false,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            male_doctor_avatar: self.male_doctor_avatar.clone(),
            female_doctor_avatar: self.female_doctor_avatar.clone(),
            seed_demo_data: self.seed_demo_data,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Reads a router response body as JSON.
pub async fn response_json(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body is readable");
    serde_json::from_slice(&body).expect("response body is JSON")
}
