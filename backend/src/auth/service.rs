//! Core business logic for the authentication system.
//!
//! This service handles user creation, password hashing, credential checks
//! and the in-memory session store. Sessions are keyed by an opaque random
//! token that the handlers hand out as a cookie, and lapse after a fixed
//! lifetime.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use sea_orm::{DatabaseConnection, Set, SqlErr};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::{
    errors::AuthError,
    models::{NewUser, RegisterRequest, Session},
};
use crate::database::{models::user, queries};

pub struct AuthService {
    db: DatabaseConnection,
    sessions: SessionStore,
}

impl AuthService {
    pub fn new(db: DatabaseConnection, session_ttl: Duration) -> Self {
        Self {
            db,
            sessions: SessionStore::new(session_ttl),
        }
    }

    /// How long a session stays valid after login.
    pub fn session_ttl(&self) -> Duration {
        self.sessions.ttl
    }

    /// Checks a username/password pair. Unknown users and wrong passwords
    /// both yield `None`; this never creates an account.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Session>, AuthError> {
        let Some(user) = queries::find_user_by_username(&self.db, username).await? else {
            debug!("Login attempt for unknown user {username}");
            return Ok(None);
        };

        if !verify_password(password, &user.salt, &user.password_hash) {
            debug!("Wrong password for {username}");
            return Ok(None);
        }

        Ok(Some(Session {
            user_id: user.id,
            username: user.username,
        }))
    }

    pub async fn register(&self, new_user: NewUser) -> Result<Session, AuthError> {
        if queries::find_user_by_username(&self.db, &new_user.username)
            .await?
            .is_some()
        {
            return Err(AuthError::AlreadyRegistered);
        }

        let salt = Uuid::new_v4().simple().to_string();
        let record = user::ActiveModel {
            username: Set(new_user.username.clone()),
            password_hash: Set(hash_password(&new_user.password, &salt)),
            salt: Set(salt),
            first_name: Set(new_user.first_name),
            last_name: Set(new_user.last_name),
            email: Set(new_user.email),
            ..Default::default()
        };

        let created = queries::insert_user(&self.db, record)
            .await
            .map_err(|err| match err.sql_err() {
                // lost a race with a concurrent registration
                Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::AlreadyRegistered,
                _ => AuthError::Database(err),
            })?;

        info!("{} is a new user", created.username);
        Ok(Session {
            user_id: created.id,
            username: created.username,
        })
    }

    /// Starts a session and returns its token.
    pub async fn login(&self, session: Session) -> String {
        self.sessions.create(session).await
    }

    pub async fn logout(&self, token: &str) {
        self.sessions.remove(token).await;
    }

    pub async fn session(&self, token: &str) -> Option<Session> {
        self.sessions.get(token).await
    }
}

impl TryFrom<RegisterRequest> for NewUser {
    type Error = AuthError;

    fn try_from(req: RegisterRequest) -> Result<Self, Self::Error> {
        let username = req
            .user_name
            .filter(|name| !name.is_empty())
            .ok_or(AuthError::MissingField("userName"))?;
        let password = req
            .password
            .filter(|password| !password.is_empty())
            .ok_or(AuthError::MissingField("password"))?;

        Ok(NewUser {
            username,
            password,
            first_name: req.first_name.unwrap_or_default(),
            last_name: req.last_name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
        })
    }
}

struct IssuedSession {
    session: Session,
    issued_at: Instant,
}

/// Token to session map. Entries older than `ttl` read as absent and are
/// dropped the next time a session is created.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, IssuedSession>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn create(&self, session: Session) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, issued| self.is_live(issued));
        let pruned = before - sessions.len();
        if pruned > 0 {
            debug!("Dropped {pruned} expired sessions");
        }

        sessions.insert(
            token.clone(),
            IssuedSession {
                session,
                issued_at: Instant::now(),
            },
        );
        token
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        self.sessions
            .read()
            .await
            .get(token)
            .filter(|issued| self.is_live(issued))
            .map(|issued| issued.session.clone())
    }

    pub async fn remove(&self, token: &str) -> Option<Session> {
        self.sessions
            .write()
            .await
            .remove(token)
            .map(|issued| issued.session)
    }

    fn is_live(&self, issued: &IssuedSession) -> bool {
        issued.issued_at.elapsed() < self.ttl
    }
}

pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    hash_password(password, salt) == expected_hash
}
