//! Error types for perceptron operations.
//!
//! Every variant is a caller-input error raised synchronously before any
//! weight mutation; none of them is transient or retryable.

/// Result type alias for perceptron operations.
pub type PerceptronResult<T> = Result<T, PerceptronError>;

/// Error type shared by all perceptron operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PerceptronError {
    /// A feature slice or replacement weight structure has the wrong shape.
    #[error("dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Length the current configuration requires.
        expected: usize,
        /// Length actually supplied by the caller.
        got: usize,
        /// Which shape disagreed ("input features", "weight vector", ...).
        context: &'static str,
    },

    /// A training set's inputs and labels have different lengths.
    #[error("training set size mismatch: {inputs} inputs vs {labels} labels")]
    SetSizeMismatch {
        /// Number of input vectors supplied.
        inputs: usize,
        /// Number of labels supplied.
        labels: usize,
    },

    /// An expected class index is outside the configured class count.
    #[error("class index {class} out of range for {class_count} classes")]
    ClassOutOfRange {
        /// The offending class index.
        class: usize,
        /// Number of classes the perceptron was constructed with.
        class_count: usize,
    },
}

impl PerceptronError {
    /// Create a dimension mismatch error.
    pub(crate) fn dimension_mismatch(expected: usize, got: usize, context: &'static str) -> Self {
        PerceptronError::DimensionMismatch {
            expected,
            got,
            context,
        }
    }
}
