//! Module for the dealer API.
//!
//! This module defines the HTTP endpoints for listing dealers, reading a
//! dealer's details and sentiment-labelled reviews, searching a dealer's
//! inventory, and submitting new reviews.

pub mod handlers;
pub mod routes;
