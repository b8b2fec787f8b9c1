//! Sweep rules: a field name bound to the transform that cleans its values.

use std::fmt;
use std::sync::Arc;

use crate::error::{SweepError, TransformError};

/// Shared transform. One closure may back rules on many fields.
pub type Transform<V> = Arc<dyn Fn(V) -> Result<V, TransformError> + Send + Sync>;

pub struct SweepRule<V> {
    field: String,
    transform: Transform<V>,
}

impl<V> SweepRule<V> {
    pub fn new(field: impl Into<String>, transform: Transform<V>) -> Self {
        Self { field: field.into(), transform }
    }

    pub fn field(&self) -> &str { &self.field }

    pub fn transform(&self) -> &Transform<V> { &self.transform }

    pub fn apply(&self, value: V) -> Result<V, SweepError> {
        (self.transform)(value).map_err(SweepError::Transform)
    }
}

impl<V> Clone for SweepRule<V> {
    fn clone(&self) -> Self { Self { field: self.field.clone(), transform: Arc::clone(&self.transform) } }
}

impl<V> fmt::Debug for SweepRule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SweepRule").field("field", &self.field).finish_non_exhaustive()
    }
}

/// One or many field names, so `sweep("notes", ..)` and
/// `sweep(["address1", "city"], ..)` read the same way.
pub trait IntoFieldNames {
    fn into_field_names(self) -> Vec<String>;
}

impl IntoFieldNames for &str {
    fn into_field_names(self) -> Vec<String> { vec![self.to_string()] }
}

impl IntoFieldNames for String {
    fn into_field_names(self) -> Vec<String> { vec![self] }
}

impl IntoFieldNames for &String {
    fn into_field_names(self) -> Vec<String> { vec![self.clone()] }
}

impl<const N: usize> IntoFieldNames for [&str; N] {
    fn into_field_names(self) -> Vec<String> { self.iter().map(|f| f.to_string()).collect() }
}

impl IntoFieldNames for &[&str] {
    fn into_field_names(self) -> Vec<String> { self.iter().map(|f| f.to_string()).collect() }
}

impl IntoFieldNames for Vec<&str> {
    fn into_field_names(self) -> Vec<String> { self.into_iter().map(str::to_string).collect() }
}

impl IntoFieldNames for Vec<String> {
    fn into_field_names(self) -> Vec<String> { self }
}
