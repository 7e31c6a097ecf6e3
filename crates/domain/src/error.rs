#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<UpdateError> for CreateError {
    fn from(value: UpdateError) -> Self {
        match value {
            UpdateError::Storage(storage) => CreateError::Storage(storage),
            UpdateError::Other(other) => CreateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

/// Failure of any repository call made by the planner service.
#[derive(thiserror::Error, Debug)]
pub enum RepositoryError {
    #[error("failed to read: {0}")]
    Read(#[from] ReadError),
    #[error("failed to create: {0}")]
    Create(#[from] CreateError),
    #[error("failed to update: {0}")]
    Update(#[from] UpdateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_from_update_error() {
        assert!(matches!(
            CreateError::from(UpdateError::Storage(StorageError::Unavailable)),
            CreateError::Storage(StorageError::Unavailable)
        ));
        assert!(matches!(
            CreateError::from(UpdateError::Other("foo".into())),
            CreateError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_repository_error_display() {
        assert_eq!(
            RepositoryError::from(ReadError::Storage(StorageError::Unavailable)).to_string(),
            "failed to read: storage unavailable"
        );
        assert_eq!(
            RepositoryError::from(CreateError::Conflict).to_string(),
            "failed to create: conflict"
        );
    }
}
