use std::fmt;

/// All errors a perceptron can report.
///
/// Every variant is a precondition violation detected before any numeric
/// work starts; the weights are left untouched when one is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum PerceptronError {
    /// Bad constructor argument (e.g. zero inputs).
    InvalidConfiguration(String),
    /// The feature or desired-output sequence is empty.
    EmptyDataset,
    /// Feature and desired-output sequences differ in length.
    DatasetSizeMismatch { features: usize, desired: usize },
    /// A feature vector does not have `num_inputs` entries.
    FeatureWidthMismatch { expected: usize, found: usize },
}

impl fmt::Display for PerceptronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::EmptyDataset => write!(f, "inputs or desired outputs can't be empty"),
            Self::DatasetSizeMismatch { features, desired } => write!(
                f,
                "dataset size mismatch: {features} feature vectors but {desired} desired outputs"
            ),
            Self::FeatureWidthMismatch { expected, found } => write!(
                f,
                "feature width mismatch: expected {expected} inputs, found {found}"
            ),
        }
    }
}

impl std::error::Error for PerceptronError {}

pub type Result<T> = std::result::Result<T, PerceptronError>;
