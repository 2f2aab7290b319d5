//! Feature vector construction for the pre-trained crime classifier.
//!
//! The trained artifact consumes exactly [`MODEL_INPUT_WIDTH`] columns:
//! the five timestamp components followed by the leading columns of the
//! one-hot location encoding. The encoder and imputer are re-fitted on
//! every request, matching how the model has always been fed; this is
//! redundant for a single complete row but is preserved deliberately.

/// Number of columns the trained model consumes.
///
/// The concatenated row (5 timestamp fields + 17 one-hot columns) is
/// truncated to this width before inference, so only the first two one-hot
/// positions ever reach the model. Whether the artifact really encodes
/// location in two columns is unverified; the truncation is kept as-is
/// until a new artifact settles the question.
pub const MODEL_INPUT_WIDTH: usize = 7;

/// The validated context fields of one prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    /// Report location; must be one of the encoder's known categories.
    pub location: String,
    /// Year component.
    pub year: f64,
    /// Month component.
    pub month: f64,
    /// Day-of-month component.
    pub day: f64,
    /// Hour component.
    pub hour: f64,
    /// Minute component.
    pub minute: f64,
}

/// One-hot encoder over a fixed, ordered category list.
///
/// Unknown values encode to an all-zeros row rather than an error
/// (`handle_unknown=ignore` semantics); callers that want to reject
/// unknown categories check [`Self::category_index`] first.
#[derive(Debug, Clone)]
pub struct OneHotEncoder {
    categories: Vec<String>,
}

impl OneHotEncoder {
    /// Fits the encoder over the given category list, preserving order.
    #[must_use]
    pub fn fit(categories: &[&str]) -> Self {
        Self {
            categories: categories.iter().map(ToString::to_string).collect(),
        }
    }

    /// Returns the position of `value` in the fitted category list.
    #[must_use]
    pub fn category_index(&self, value: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == value)
    }

    /// Encodes `value` as a one-hot row over the fitted categories.
    #[must_use]
    pub fn transform(&self, value: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.categories.len()];
        if let Some(idx) = self.category_index(value) {
            row[idx] = 1.0;
        }
        row
    }
}

/// Mean-strategy imputer: NaN entries are replaced with the mean of the
/// observed values in their column.
///
/// Fitted fresh on the data it transforms. For the single complete row a
/// prediction request produces this is a no-op; the behavior only matters
/// for rows carrying NaN, where a column with no observed value at all
/// falls back to `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanImputer;

impl MeanImputer {
    /// Fits on `rows` and returns the imputed copy.
    #[must_use]
    pub fn fit_transform(&self, rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let width = rows.first().map_or(0, Vec::len);

        let means: Vec<f64> = (0..width)
            .map(|col| {
                let observed: Vec<f64> = rows
                    .iter()
                    .map(|row| row[col])
                    .filter(|v| !v.is_nan())
                    .collect();
                if observed.is_empty() {
                    0.0
                } else {
                    #[allow(clippy::cast_precision_loss)]
                    let count = observed.len() as f64;
                    observed.iter().sum::<f64>() / count
                }
            })
            .collect();

        rows.iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(col, v)| if v.is_nan() { means[col] } else { *v })
                    .collect()
            })
            .collect()
    }
}

/// Builds model input vectors from request contexts.
///
/// Holds the fixed category list and nothing else; the encoder and imputer
/// are constructed per call.
#[derive(Debug, Clone)]
pub struct FeaturePreparer {
    locations: Vec<String>,
}

impl FeaturePreparer {
    /// Creates a preparer over the given known-location list.
    #[must_use]
    pub fn new(locations: &[&str]) -> Self {
        Self {
            locations: locations.iter().map(ToString::to_string).collect(),
        }
    }

    /// Returns whether `location` is one of the known categories
    /// (case-sensitive exact match).
    #[must_use]
    pub fn knows(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }

    /// Prepares the model input vector for one request.
    ///
    /// Concatenates the five timestamp fields with the one-hot location
    /// encoding, applies mean imputation, and truncates the result to
    /// [`MODEL_INPUT_WIDTH`] columns.
    #[must_use]
    pub fn prepare(&self, report: &ReportContext) -> Vec<f64> {
        let categories: Vec<&str> = self.locations.iter().map(String::as_str).collect();
        let encoder = OneHotEncoder::fit(&categories);

        let mut row = vec![
            report.year,
            report.month,
            report.day,
            report.hour,
            report.minute,
        ];
        row.extend(encoder.transform(&report.location));

        let imputed = MeanImputer.fit_transform(&[row]);
        let mut features = imputed.into_iter().next().unwrap_or_default();
        features.truncate(MODEL_INPUT_WIDTH);
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITIES: &[&str] = &["Kisumu", "Nakuru", "Eldoret"];

    fn report(location: &str) -> ReportContext {
        ReportContext {
            location: location.to_string(),
            year: 2023.0,
            month: 5.0,
            day: 10.0,
            hour: 14.0,
            minute: 30.0,
        }
    }

    #[test]
    fn one_hot_encodes_known_category() {
        let encoder = OneHotEncoder::fit(CITIES);
        assert_eq!(encoder.transform("Nakuru"), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn one_hot_ignores_unknown_category() {
        let encoder = OneHotEncoder::fit(CITIES);
        assert_eq!(encoder.transform("Atlantis"), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn one_hot_is_case_sensitive() {
        let encoder = OneHotEncoder::fit(CITIES);
        assert_eq!(encoder.category_index("kisumu"), None);
        assert_eq!(encoder.category_index("Kisumu"), Some(0));
    }

    #[test]
    fn imputer_is_noop_on_complete_rows() {
        let rows = vec![vec![1.0, 2.0, 3.0]];
        assert_eq!(MeanImputer.fit_transform(&rows), rows);
    }

    #[test]
    fn imputer_fills_nan_with_column_mean() {
        let rows = vec![vec![1.0, f64::NAN], vec![3.0, 4.0]];
        let imputed = MeanImputer.fit_transform(&rows);
        assert_eq!(imputed[0], vec![1.0, 4.0]);
        assert_eq!(imputed[1], vec![3.0, 4.0]);
    }

    #[test]
    fn imputer_defaults_unobserved_column_to_zero() {
        let rows = vec![vec![f64::NAN]];
        assert_eq!(MeanImputer.fit_transform(&rows), vec![vec![0.0]]);
    }

    #[test]
    fn prepare_truncates_to_model_width() {
        let preparer = FeaturePreparer::new(CITIES);
        let features = preparer.prepare(&report("Kisumu"));
        // 5 timestamp fields + first 2 one-hot columns.
        assert_eq!(features, vec![2023.0, 5.0, 10.0, 14.0, 30.0, 1.0, 0.0]);
    }

    #[test]
    fn prepare_keeps_only_leading_one_hot_columns() {
        let preparer = FeaturePreparer::new(CITIES);
        let features = preparer.prepare(&report("Eldoret"));
        // The hot column for the third category is truncated away.
        assert_eq!(features, vec![2023.0, 5.0, 10.0, 14.0, 30.0, 0.0, 0.0]);
    }

    #[test]
    fn knows_is_exact_match() {
        let preparer = FeaturePreparer::new(CITIES);
        assert!(preparer.knows("Kisumu"));
        assert!(!preparer.knows("kisumu"));
        assert!(!preparer.knows("Atlantis"));
    }
}
