//! Error types for enroll-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{CourseCode, EntityKind};

/// All errors that can arise from registry and seed operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Unknown student id or course code.
    #[error("{kind} '{key}' not found")]
    NotFound { kind: EntityKind, key: String },

    /// The course has no seats left.
    #[error("course '{code}' is full")]
    CourseFull { code: CourseCode },

    /// An entity with this key is already registered.
    #[error("{kind} '{key}' already exists")]
    DuplicateKey { kind: EntityKind, key: String },

    /// Courses must seat at least one student.
    #[error("course '{code}' must have a capacity of at least 1")]
    InvalidCapacity { code: CourseCode },

    /// A capacity or bidirectional-link invariant does not hold.
    #[error("registry inconsistent: {0}")]
    Inconsistent(String),

    /// Underlying I/O failure while reading a seed file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed YAML parse error, with the file path and serde_yaml's line context.
    #[error("failed to parse seed at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The seed file did not exist at the given path.
    #[error("seed not found at {path}")]
    SeedNotFound { path: PathBuf },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

impl RegistryError {
    pub(crate) fn not_found(kind: EntityKind, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub(crate) fn duplicate(kind: EntityKind, key: impl ToString) -> Self {
        Self::DuplicateKey {
            kind,
            key: key.to_string(),
        }
    }
}
