//! Custom error types specific to authentication failures.

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Already Registered")]
    AlreadyRegistered,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
