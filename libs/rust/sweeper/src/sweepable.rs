use crate::error::SweepError;
use crate::registry::SweepClass;

/// Capability a host type implements to get swept fields.
///
/// The host owns storage through `read_field`/`write_field` and routes
/// every write of a swept field through [`Sweepable::assign`]. Types that
/// embed a base type should delegate the base's fields to it and point
/// `sweep_class` at a class built with [`SweepClass::extends`].
pub trait Sweepable {
    type Value: 'static;

    fn sweep_class() -> &'static SweepClass<Self::Value>;

    fn read_field(&self, field: &str) -> Result<Option<Self::Value>, SweepError>;

    /// Raw store, no sweeping.
    fn write_field(&mut self, field: &str, value: Option<Self::Value>) -> Result<(), SweepError>;

    /// Stores `value` after running the field's sweep rule on it.
    fn assign(&mut self, field: &str, value: impl Into<Option<Self::Value>>) -> Result<(), SweepError>
    where
        Self: Sized,
    {
        let swept = Self::sweep_class().sweep_value(field, value.into())?;
        self.write_field(field, swept)
    }

    /// Runs every applicable rule over the current field values.
    fn sweep_up(&mut self) -> Result<(), SweepError>
    where
        Self: Sized,
    {
        Self::sweep_class().sweep_up(self)
    }
}
