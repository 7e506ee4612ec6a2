/// Errors raised at the boundaries of the criteria crate.
///
/// Classification itself never fails. These variants cover parsing findings documents,
/// reading them from disk and driving the findings collector.
#[derive(Debug, thiserror::Error)]
pub enum CriteriaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CriteriaResult<T> = std::result::Result<T, CriteriaError>;
