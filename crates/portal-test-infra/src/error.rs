use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestInfraError {
    /// The container failed to start or its mapped port could not be read.
    #[error("test container failed: {0}")]
    Container(#[from] testcontainers::TestcontainersError),
}

pub type Result<T> = std::result::Result<T, TestInfraError>;
