use thiserror::Error;

/// Error raised by a user supplied transform. Passed through untouched.
pub type TransformError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SweepError {
    /// A class tried to register a second rule for a field it already sweeps.
    #[error("Don't sweep {field} twice!")]
    DuplicateRule { field: String },
    /// The host type has no storage for the named field.
    #[error("{class} has no field named {field}")]
    UnknownField { class: String, field: String },
    #[error(transparent)]
    Transform(TransformError),
}

impl SweepError {
    pub fn unknown_field(class: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField { class: class.into(), field: field.into() }
    }

    pub fn is_duplicate(&self) -> bool { matches!(self, Self::DuplicateRule { .. }) }
}
