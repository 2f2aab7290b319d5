#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Feature preparation and classifier abstraction for crime prediction.
//!
//! [`features`] turns a validated report context into the fixed-width
//! numeric vector the pre-trained model expects. [`model`] defines the
//! [`Classifier`](model::Classifier) seam ("vector in, class code out")
//! and the serialized linear scorer loaded from disk at startup.

pub mod features;
pub mod model;

pub use features::{FeaturePreparer, MODEL_INPUT_WIDTH, ReportContext};
pub use model::{Classifier, LinearModel};

/// Errors from running a feature vector through a classifier.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// The input vector width does not match the trained model's.
    #[error("Input has {actual} features, but the model expects {expected}")]
    ShapeMismatch {
        /// Feature width the model was trained with.
        expected: usize,
        /// Feature width that was actually supplied.
        actual: usize,
    },

    /// The input contains NaN or an infinite value.
    #[error("Input contains a non-finite value at column {column}")]
    NonFinite {
        /// Zero-based column index of the offending value.
        column: usize,
    },
}

/// Errors from loading a serialized model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    /// The artifact file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact is not valid JSON for the expected format.
    #[error("Malformed model artifact: {0}")]
    Json(#[from] serde_json::Error),

    /// The artifact parsed but its dimensions are inconsistent.
    #[error("Invalid model artifact: {message}")]
    Invalid {
        /// Description of the inconsistency.
        message: String,
    },
}
