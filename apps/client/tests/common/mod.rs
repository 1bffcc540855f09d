#![allow(dead_code)]

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reactive_resume=debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn user_json(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "name": "Ada Lovelace",
        "picture": null,
        "username": username,
        "email": "ada@example.com",
        "locale": "en-US",
        "emailVerified": false,
        "twoFactorEnabled": false,
        "provider": "email",
        "createdAt": "2024-03-01T09:30:00.000Z",
        "updatedAt": "2024-03-01T09:30:00.000Z"
    })
}

pub fn auth_json(id: &str, username: &str) -> String {
    json!({"status": "authenticated", "user": user_json(id, username)}).to_string()
}

pub fn imported_json(id: &str) -> String {
    json!({
        "id": id,
        "title": "Ada Lovelace",
        "slug": "ada-lovelace",
        "visibility": "private",
        "locked": false,
        "userId": "u1",
        "createdAt": "2024-05-10T12:00:00.000Z",
        "updatedAt": "2024-05-10T12:00:00.000Z"
    })
    .to_string()
}

pub fn sample_resume() -> Value {
    json!({
        "basics": {
            "name": "Ada Lovelace",
            "headline": "Analytical Engine Programmer",
            "email": "ada@example.com"
        },
        "sections": {
            "experience": {
                "items": [
                    {"company": "Babbage & Co.", "position": "Programmer", "date": "1842 - 1843"}
                ]
            }
        }
    })
}

pub const PDF_BYTES: &[u8] = b"%PDF-1.7\n1 0 obj << /Type /Catalog >> endobj\n%%EOF\n";
