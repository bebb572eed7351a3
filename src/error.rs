use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The DescribeInstances call was rejected or never reached AWS.
    #[error("{0}")]
    Describe(String),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
