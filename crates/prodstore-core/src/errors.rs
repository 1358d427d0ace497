use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Caller supplied a value the model refuses (e.g. a property with a comma)
    InvalidInput,
    /// A repository write could not be carried out
    WriteFailed,
    /// Connection, pragma or schema bootstrap failure
    Persistence,
    /// Configuration could not be loaded
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::WriteFailed => "ERR_WRITE_FAILED",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context for debugging. Built with
/// the `with_*` methods:
///
/// ```
/// use prodstore_core::errors::{ExError, ExErrorKind};
///
/// let err = ExError::new(ExErrorKind::Persistence)
///     .with_op("open")
///     .with_message("unable to open database file");
/// assert_eq!(err.code(), "ERR_PERSISTENCE");
/// ```
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors surfaced by the product repository
///
/// Deliberately opaque: the driver error that caused a failure is logged by
/// the repository and never handed back to the caller. "Nothing matched" is
/// not an error and is reported through the `Ok` value instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryError {
    /// The statement could not be executed, or did not affect the expected rows
    #[error("write failed in operation '{op}'")]
    WriteFailed { op: &'static str },
}

impl RepositoryError {
    pub fn kind(&self) -> ExErrorKind {
        match self {
            RepositoryError::WriteFailed { .. } => ExErrorKind::WriteFailed,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Operation that failed
    pub fn op(&self) -> &'static str {
        match self {
            RepositoryError::WriteFailed { op } => op,
        }
    }
}

impl From<RepositoryError> for ExError {
    fn from(err: RepositoryError) -> Self {
        ExError::new(err.kind())
            .with_op(err.op())
            .with_message(err.to_string())
    }
}
