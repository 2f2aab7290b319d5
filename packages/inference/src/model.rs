//! Classifier seam and the serialized linear model artifact.
//!
//! The application only relies on the "feature vector in, class code out"
//! contract plus the shape-mismatch failure mode, so handlers hold an
//! `Arc<dyn Classifier>` and tests substitute stubs. The shipped
//! implementation is a one-vs-rest linear scorer deserialized from a JSON
//! artifact once at process start.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{InferenceError, ModelLoadError};

/// A pre-trained classifier mapping a feature vector to an integer class
/// code.
pub trait Classifier: Send + Sync {
    /// Predicts the class code for one feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError`] if the vector's shape or values are
    /// invalid for the trained model.
    fn predict(&self, features: &[f64]) -> Result<i64, InferenceError>;
}

/// One-vs-rest linear scorer loaded from a serialized artifact.
///
/// Scores each class as `dot(weights, features) + intercept` and returns
/// the code of the highest-scoring class (first wins on ties).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Feature width the model was trained with.
    n_features: usize,
    /// Class codes, parallel to `weights` and `intercepts`.
    classes: Vec<i64>,
    /// Per-class weight rows, each `n_features` wide.
    weights: Vec<Vec<f64>>,
    /// Per-class intercepts.
    intercepts: Vec<f64>,
}

impl LinearModel {
    /// Loads a model artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelLoadError`] if the file cannot be read, is not valid
    /// JSON, or its dimensions are inconsistent.
    pub fn from_file(path: &Path) -> Result<Self, ModelLoadError> {
        let raw = std::fs::read_to_string(path)?;
        let model = Self::from_json(&raw)?;
        log::info!(
            "Loaded model from {} ({} classes, {} features)",
            path.display(),
            model.classes.len(),
            model.n_features
        );
        Ok(model)
    }

    /// Parses a model artifact from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ModelLoadError`] if the JSON is malformed or the parsed
    /// dimensions are inconsistent.
    pub fn from_json(raw: &str) -> Result<Self, ModelLoadError> {
        let model: Self = serde_json::from_str(raw)?;
        model.validate()?;
        Ok(model)
    }

    /// Feature width the model was trained with.
    #[must_use]
    pub const fn n_features(&self) -> usize {
        self.n_features
    }

    fn validate(&self) -> Result<(), ModelLoadError> {
        if self.classes.is_empty() {
            return Err(ModelLoadError::Invalid {
                message: "artifact declares no classes".to_string(),
            });
        }
        if self.weights.len() != self.classes.len() || self.intercepts.len() != self.classes.len() {
            return Err(ModelLoadError::Invalid {
                message: format!(
                    "expected {} weight rows and intercepts, got {} and {}",
                    self.classes.len(),
                    self.weights.len(),
                    self.intercepts.len()
                ),
            });
        }
        if let Some(row) = self.weights.iter().find(|row| row.len() != self.n_features) {
            return Err(ModelLoadError::Invalid {
                message: format!(
                    "weight row has {} columns, expected {}",
                    row.len(),
                    self.n_features
                ),
            });
        }
        Ok(())
    }
}

impl Classifier for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<i64, InferenceError> {
        if features.len() != self.n_features {
            return Err(InferenceError::ShapeMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }
        if let Some(column) = features.iter().position(|v| !v.is_finite()) {
            return Err(InferenceError::NonFinite { column });
        }

        let mut best = (self.classes[0], f64::NEG_INFINITY);
        for ((&class, weights), &intercept) in self
            .classes
            .iter()
            .zip(&self.weights)
            .zip(&self.intercepts)
        {
            let score: f64 = weights
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
                + intercept;
            if score > best.1 {
                best = (class, score);
            }
        }

        Ok(best.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_class_model() -> LinearModel {
        LinearModel {
            n_features: 2,
            classes: vec![1, 2],
            weights: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            intercepts: vec![0.0, 0.0],
        }
    }

    #[test]
    fn predicts_highest_scoring_class() {
        let model = two_class_model();
        assert_eq!(model.predict(&[3.0, 1.0]).unwrap(), 1);
        assert_eq!(model.predict(&[1.0, 3.0]).unwrap(), 2);
    }

    #[test]
    fn first_class_wins_ties() {
        let model = two_class_model();
        assert_eq!(model.predict(&[2.0, 2.0]).unwrap(), 1);
    }

    #[test]
    fn rejects_wrong_width() {
        let model = two_class_model();
        let err = model.predict(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::ShapeMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        let model = two_class_model();
        let err = model.predict(&[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, InferenceError::NonFinite { column: 1 }));
    }

    #[test]
    fn parses_valid_artifact() {
        let raw = r#"{
            "n_features": 2,
            "classes": [1, 2],
            "weights": [[1.0, 0.0], [0.0, 1.0]],
            "intercepts": [0.0, 0.0]
        }"#;
        let model = LinearModel::from_json(raw).unwrap();
        assert_eq!(model.n_features(), 2);
    }

    #[test]
    fn rejects_mismatched_artifact_dimensions() {
        let raw = r#"{
            "n_features": 2,
            "classes": [1, 2],
            "weights": [[1.0, 0.0]],
            "intercepts": [0.0, 0.0]
        }"#;
        assert!(matches!(
            LinearModel::from_json(raw),
            Err(ModelLoadError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_empty_artifact() {
        let raw = r#"{
            "n_features": 2,
            "classes": [],
            "weights": [],
            "intercepts": []
        }"#;
        assert!(matches!(
            LinearModel::from_json(raw),
            Err(ModelLoadError::Invalid { .. })
        ));
    }

    #[test]
    fn missing_artifact_file_is_an_io_error() {
        let err = LinearModel::from_file(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ModelLoadError::Io(_)));
    }
}
