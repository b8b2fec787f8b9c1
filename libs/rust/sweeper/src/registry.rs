//! Per-class sweep registries.
//!
//! Every sweeping type owns one `SweepClass`, usually a `static` built in a
//! `Lazy`. A class may name a parent class; rule lookups walk from the
//! concrete class up through its ancestors and the most derived rule wins.
//! Duplicate checks only ever look at the class doing the registering.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::error::{SweepError, TransformError};
use crate::rule::{IntoFieldNames, SweepRule, Transform};
use crate::sweepable::Sweepable;

struct Registry<V> {
    rules: BTreeMap<String, SweepRule<V>>,
    interceptors: BTreeSet<String>,
}

impl<V> Registry<V> {
    fn new() -> Self { Self { rules: BTreeMap::new(), interceptors: BTreeSet::new() } }
}

pub struct SweepClass<V: 'static> {
    name: &'static str,
    parent: Option<&'static SweepClass<V>>,
    // created on first registration
    registry: OnceCell<RwLock<Registry<V>>>,
}

impl<V: 'static> SweepClass<V> {
    pub const fn new(name: &'static str) -> Self {
        Self { name, parent: None, registry: OnceCell::new() }
    }

    /// A class whose rule lookups fall back to `parent` for fields it does
    /// not sweep itself.
    pub const fn extends(name: &'static str, parent: &'static SweepClass<V>) -> Self {
        Self { name, parent: Some(parent), registry: OnceCell::new() }
    }

    pub fn name(&self) -> &'static str { self.name }

    pub fn parent(&self) -> Option<&'static SweepClass<V>> { self.parent }

    /// This class followed by its ancestors, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &SweepClass<V>> + '_ {
        std::iter::successors(Some(self), |class| class.parent)
    }

    /// Registers `transform` for every field in `fields`.
    pub fn sweep<F>(&self, fields: impl IntoFieldNames, transform: F) -> Result<(), SweepError>
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        self.sweep_with(fields, Arc::new(move |value: V| -> Result<V, TransformError> { Ok(transform(value)) }))
    }

    /// Like [`SweepClass::sweep`] for transforms that can fail. Their errors
    /// reach the caller of `assign` or `sweep_up` as `SweepError::Transform`.
    pub fn try_sweep<F, E>(&self, fields: impl IntoFieldNames, transform: F) -> Result<(), SweepError>
    where
        F: Fn(V) -> Result<V, E> + Send + Sync + 'static,
        E: Into<TransformError>,
    {
        self.sweep_with(fields, Arc::new(move |value: V| -> Result<V, TransformError> { transform(value).map_err(Into::into) }))
    }

    /// Fields are registered in order. A duplicate stops the call; fields
    /// registered before it stay registered. No names, no registry.
    pub fn sweep_with(&self, fields: impl IntoFieldNames, transform: Transform<V>) -> Result<(), SweepError> {
        let fields = fields.into_field_names();
        if fields.is_empty() {
            return Ok(());
        }
        let registry = self.registry.get_or_init(|| RwLock::new(Registry::new()));
        for field in fields {
            let inherited = self.parent.map_or(false, |p| p.intercepts(&field));
            let mut reg = registry.write();
            if reg.rules.contains_key(&field) {
                warn!(class = self.name, %field, "duplicate sweep rule");
                return Err(SweepError::DuplicateRule { field });
            }
            if !inherited && reg.interceptors.insert(field.clone()) {
                debug!(class = self.name, %field, "installed assignment interceptor");
            }
            reg.rules.insert(field.clone(), SweepRule::new(field.clone(), Arc::clone(&transform)));
            debug!(class = self.name, %field, "registered sweep rule");
        }
        Ok(())
    }

    pub fn has_own_rule(&self, field: &str) -> bool {
        self.registry.get().map_or(false, |reg| reg.read().rules.contains_key(field))
    }

    /// Fields registered on this class alone, sorted.
    pub fn own_fields(&self) -> Vec<String> {
        self.registry.get().map(|reg| reg.read().rules.keys().cloned().collect()).unwrap_or_default()
    }

    /// Every field swept by this class or an ancestor, sorted.
    pub fn swept_fields(&self) -> Vec<String> {
        let mut fields = BTreeSet::new();
        for class in self.ancestors() {
            fields.extend(class.own_fields());
        }
        fields.into_iter().collect()
    }

    /// Most derived rule for `field`.
    pub fn rule_for(&self, field: &str) -> Option<SweepRule<V>> {
        self.ancestors().find_map(|class| class.registry.get().and_then(|reg| reg.read().rules.get(field).cloned()))
    }

    /// Whether this class or an ancestor has an interceptor on `field`.
    pub fn intercepts(&self, field: &str) -> bool {
        self.ancestors().any(|class| class.registry.get().map_or(false, |reg| reg.read().interceptors.contains(field)))
    }

    /// The value an assignment of `value` to `field` actually stores.
    /// `None` is returned as is and never reaches a transform.
    pub fn sweep_value(&self, field: &str, value: Option<V>) -> Result<Option<V>, SweepError> {
        let Some(value) = value else { return Ok(None) };
        match self.rule_for(field) {
            Some(rule) => rule.apply(value).map(Some),
            None => Ok(Some(value)),
        }
    }

    /// Re-assigns the current value of every field this class sweeps, so
    /// each one goes through `target`'s interceptor again.
    pub fn sweep_up<T>(&self, target: &mut T) -> Result<(), SweepError>
    where
        T: Sweepable<Value = V>,
    {
        let fields = self.swept_fields();
        trace!(class = self.name, fields = fields.len(), "sweeping up");
        for field in &fields {
            let current = target.read_field(field)?;
            target.assign(field, current)?;
        }
        Ok(())
    }
}

impl<V: 'static> fmt::Debug for SweepClass<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SweepClass")
            .field("name", &self.name)
            .field("parent", &self.parent.map(|p| p.name))
            .field("fields", &self.own_fields())
            .finish()
    }
}
