use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity record the service assigns on signup and returns on login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: String,
    pub name: String,
    pub picture: Option<String>,
    pub username: String,
    pub email: String,
    pub locale: String,
    pub email_verified: bool,
    pub two_factor_enabled: bool,
    pub provider: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedResponse {
    pub status: String,
    pub user: AuthenticatedUser,
}

pub type SignupResponse = AuthenticatedResponse;
pub type LoginResponse = AuthenticatedResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTH_JSON: &str = r#"{
        "status": "authenticated",
        "user": {
            "id": "clx0user",
            "name": "Ada Lovelace",
            "picture": null,
            "username": "ada",
            "email": "ada@example.com",
            "locale": "en-US",
            "emailVerified": false,
            "twoFactorEnabled": false,
            "provider": "email",
            "createdAt": "2024-03-01T09:30:00.000Z",
            "updatedAt": "2024-03-01T09:30:00.000Z"
        }
    }"#;

    #[test]
    fn test_authenticated_response_deserializes_camel_case() {
        let response: AuthenticatedResponse = serde_json::from_str(AUTH_JSON).unwrap();

        assert_eq!(response.status, "authenticated");
        assert_eq!(response.user.id, "clx0user");
        assert_eq!(response.user.picture, None);
        assert!(!response.user.email_verified);
        assert_eq!(response.user.provider, "email");
        assert_eq!(
            response.user.created_at.to_rfc3339(),
            "2024-03-01T09:30:00+00:00"
        );
    }

    #[test]
    fn test_user_picture_may_be_absent() {
        let mut value: serde_json::Value = serde_json::from_str(AUTH_JSON).unwrap();
        value["user"]
            .as_object_mut()
            .unwrap()
            .remove("picture");
        value["user"]["secrets"] = serde_json::json!({"ignored": true});

        let response: AuthenticatedResponse = serde_json::from_value(value).unwrap();
        assert_eq!(response.user.picture, None);
    }

    #[test]
    fn test_user_serializes_back_to_wire_names() {
        let response: AuthenticatedResponse = serde_json::from_str(AUTH_JSON).unwrap();
        let value = serde_json::to_value(&response.user).unwrap();

        assert!(value.get("twoFactorEnabled").is_some());
        assert!(value.get("two_factor_enabled").is_none());
    }

    #[test]
    fn test_logout_response() {
        let response: LogoutResponse =
            serde_json::from_str(r#"{"message":"You have been logged out, tschüss!"}"#).unwrap();
        assert!(response.message.starts_with("You have been logged out"));
    }
}
