use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] simple_admin_service::error::ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] simple_admin_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] simple_admin_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
