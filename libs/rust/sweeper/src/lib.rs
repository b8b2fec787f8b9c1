//! Declarative field sweeping.
//!
//! A type marks some of its fields as swept by registering a transform for
//! them on its `SweepClass`. Every write routed through
//! [`Sweepable::assign`] runs the transform first, except for `None`, which
//! is stored untouched. [`Sweepable::sweep_up`] re-runs every rule over the
//! values an instance already holds.

pub mod brooms;
pub mod config;
mod error;
mod registry;
mod rule;
mod sweepable;

pub use brooms::Broom;
pub use config::{ConfigError, SweepConfig};
pub use error::{SweepError, TransformError};
pub use registry::SweepClass;
pub use rule::{IntoFieldNames, SweepRule, Transform};
pub use sweepable::Sweepable;
