//! Data structures for authentication-related entities.
//!
//! Request bodies use the camelCase field names the frontend sends. Every
//! field is optional so that a partially filled form still deserializes and
//! is rejected by the service rather than by the JSON extractor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userName", default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "userName", default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Validated registration data.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub const AUTHENTICATED: &str = "Authenticated";
pub const ALREADY_REGISTERED: &str = "Already Registered";

/// Body shared by login, logout and registration. A present `status` of
/// `"Authenticated"` is the success signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponse {
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl AuthResponse {
    pub fn authenticated(user_name: impl Into<String>) -> Self {
        Self {
            user_name: Some(user_name.into()),
            status: Some(AUTHENTICATED),
            error: None,
        }
    }

    pub fn anonymous(user_name: Option<String>) -> Self {
        Self {
            user_name,
            status: None,
            error: None,
        }
    }

    pub fn already_registered(user_name: impl Into<String>) -> Self {
        Self {
            user_name: Some(user_name.into()),
            status: None,
            error: Some(ALREADY_REGISTERED),
        }
    }

    pub fn logged_out() -> Self {
        Self::anonymous(Some(String::new()))
    }
}

/// A logged-in user, as held by the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i32,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_shapes() {
        assert_eq!(
            serde_json::to_value(AuthResponse::authenticated("ada")).unwrap(),
            json!({"userName": "ada", "status": "Authenticated"})
        );
        assert_eq!(
            serde_json::to_value(AuthResponse::anonymous(Some("ada".into()))).unwrap(),
            json!({"userName": "ada"})
        );
        assert_eq!(
            serde_json::to_value(AuthResponse::already_registered("ada")).unwrap(),
            json!({"userName": "ada", "error": "Already Registered"})
        );
        assert_eq!(
            serde_json::to_value(AuthResponse::logged_out()).unwrap(),
            json!({"userName": ""})
        );
    }

    #[test]
    fn login_request_tolerates_missing_fields() {
        let req: LoginRequest = serde_json::from_value(json!({"userName": "ada"})).unwrap();
        assert_eq!(req.user_name.as_deref(), Some("ada"));
        assert!(req.password.is_none());
    }
}
