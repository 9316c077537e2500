use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read session script at {path}: {source}")]
    ScriptFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse session script: {0}")]
    ScriptFileParse(#[from] serde_yaml::Error),

    #[error("session script validation failed: {0}")]
    Validation(String),
}

/// The only user-facing failure of the editing controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Please finish the previous variant first")]
    UnfinishedDimension,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("step {step}: no dimension at position {index}")]
    UnknownDimension { step: usize, index: usize },

    #[error("step {step}: dimension {dimension} has no option at position {index}")]
    UnknownOption {
        step: usize,
        dimension: usize,
        index: usize,
    },

    #[error("step {step}: no combination matches \"{label}\"")]
    UnknownCombination { step: usize, label: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("at least one variant must be included")]
    NothingIncluded,

    #[error("variant \"{label}\" has price {price}; minimum is {min_price}")]
    PriceBelowMinimum {
        label: String,
        price: f64,
        min_price: f64,
    },

    #[error("variant \"{label}\" has an empty option pair")]
    BlankPair { label: String },
}
