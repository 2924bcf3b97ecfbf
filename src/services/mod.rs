//! Service layer sitting between the routes and the repositories.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod courses;
pub mod departments;
pub mod instructors;
pub mod main;
pub mod seed;
pub mod students;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
