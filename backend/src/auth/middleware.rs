//! Request extractor resolving the session cookie into the current user.
//!
//! Handlers that need to know who is calling take a [`CurrentUser`]; an
//! absent, unknown or revoked token simply yields an anonymous caller.

use std::{convert::Infallible, sync::Arc, time::Duration};

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap},
};

use super::models::Session;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "sessionid";

#[derive(Debug, Clone, Default)]
pub struct CurrentUser {
    /// Token presented by the client, valid or not.
    pub token: Option<String>,
    pub session: Option<Session>,
}

impl CurrentUser {
    pub fn is_anonymous(&self) -> bool {
        self.session.is_none()
    }
}

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers);
        let session = match &token {
            Some(token) => state.auth.session(token).await,
            None => None,
        };

        Ok(Self { token, session })
    }
}

/// Reads the session token out of the request's `Cookie` headers.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// Cookie carrying `token`, expiring in the browser when the server-side
/// session does.
pub fn session_cookie(token: &str, ttl: Duration) -> String {
    format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        ttl.as_secs()
    )
}

pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn finds_session_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("csrftoken=abc; sessionid=tok123; theme=dark"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("tok123"));
    }

    #[test]
    fn ignores_missing_or_empty_session() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        headers.insert(COOKIE, HeaderValue::from_static("sessionid=; theme=dark"));
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn cookie_attributes() {
        assert_eq!(
            session_cookie("tok", Duration::from_secs(3600)),
            "sessionid=tok; HttpOnly; SameSite=Lax; Path=/; Max-Age=3600"
        );
        assert!(expired_session_cookie().ends_with("Max-Age=0"));
    }
}
