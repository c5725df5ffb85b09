//! Error type for Step 1 content operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::content::ContentField;

/// Everything that can go wrong while validating or writing a content set
#[derive(Debug, Error)]
pub enum ContentError {
    /// A required field was empty after trimming
    #[error("{field} must be non-empty")]
    Validation { field: ContentField },

    /// The project root directory does not exist
    #[error("project '{project}' was not found at {}", path.display())]
    ProjectNotFound { project: String, path: PathBuf },

    /// Any other filesystem failure (permissions, disk full, ...)
    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ContentError {
    /// Process exit code for this error.
    ///
    /// User-facing failures exit with 2, generic I/O failures with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation { .. } | Self::ProjectNotFound { .. } => 2,
            Self::Io { .. } => 1,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = ContentError::Validation {
            field: ContentField::Concept,
        };
        assert_eq!(err.to_string(), "concept must be non-empty");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_not_found_message_names_path() {
        let err = ContentError::ProjectNotFound {
            project: "ghost".to_string(),
            path: PathBuf::from("projects").join("ghost"),
        };
        assert_eq!(
            err.to_string(),
            format!(
                "project 'ghost' was not found at {}",
                PathBuf::from("projects").join("ghost").display()
            )
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_is_generic_failure() {
        let err = ContentError::io(
            "projects/demo/music",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("denied"));
    }
}
