//! Module for the car catalog API.

pub mod handlers;
pub mod routes;
