use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,
    #[error("{0} already exists")]
    Conflict(String),
}
