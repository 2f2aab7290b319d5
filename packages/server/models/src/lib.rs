#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the crime prediction server.
//!
//! The predict endpoint's request body is deliberately NOT a typed struct:
//! the handler inspects raw JSON so it can name the first missing or null
//! field in its 400 response. Only the fully-typed shapes live here.

use serde::{Deserialize, Serialize};

/// Login form submission (`POST /`).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    /// Submitted username.
    pub username: String,
    /// Submitted password.
    pub password: String,
}

/// Successful prediction response (`POST /predict`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Resolved crime-type label.
    pub prediction: String,
}

/// Error envelope for validation and model failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable description of the failure.
    pub error: String,
}
