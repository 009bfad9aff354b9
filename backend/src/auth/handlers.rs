//! Handler functions for authentication-related API endpoints.
//!
//! These functions parse login/registration bodies, call into
//! `auth::service`, and set or clear the session cookie.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use super::{
    errors::AuthError,
    middleware::{expired_session_cookie, session_cookie, CurrentUser},
    models::{AuthResponse, LoginRequest, NewUser, RegisterRequest, Session},
};
use crate::{errors::AppError, state::AppState};

pub async fn login_user(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|_| AppError::MalformedPayload)?;

    let (Some(username), Some(password)) = (&request.user_name, &request.password) else {
        return Ok(Json(AuthResponse::anonymous(request.user_name)).into_response());
    };

    match state.auth.authenticate(username, password).await? {
        Some(session) => Ok(start_session(&state, &current, session).await),
        None => Ok(Json(AuthResponse::anonymous(request.user_name)).into_response()),
    }
}

pub async fn logout_request(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> Response {
    if let Some(token) = &current.token {
        state.auth.logout(token).await;
    }
    if let Some(session) = &current.session {
        info!("{} logged out", session.username);
    }

    (
        [(SET_COOKIE, expired_session_cookie())],
        Json(AuthResponse::logged_out()),
    )
        .into_response()
}

pub async fn registration(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|_| AppError::MalformedPayload)?;
    let new_user = NewUser::try_from(request)?;
    let username = new_user.username.clone();

    match state.auth.register(new_user).await {
        Ok(session) => Ok(start_session(&state, &current, session).await),
        Err(AuthError::AlreadyRegistered) => {
            Ok(Json(AuthResponse::already_registered(username)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Replaces any existing session with a fresh token for `session`.
async fn start_session(state: &AppState, current: &CurrentUser, session: Session) -> Response {
    if let Some(old) = &current.token {
        state.auth.logout(old).await;
    }

    let body = AuthResponse::authenticated(session.username.clone());
    let token = state.auth.login(session).await;

    ([(SET_COOKIE, session_cookie(&token, state.auth.session_ttl()))], Json(body)).into_response()
}
