#![allow(dead_code)]

use once_cell::sync::Lazy;
use tiny_sweeper::{brooms, SweepClass, SweepError, Sweepable};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub static CONTRACT: Lazy<SweepClass<String>> = Lazy::new(|| {
    let class = SweepClass::new("Contract");
    class.sweep("notes", brooms::strip).expect("notes rule");
    class.sweep("name", |n: String| n.to_uppercase()).expect("name rule");
    class
});

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Contract {
    pub name: Option<String>,
    pub notes: Option<String>,
}

impl Contract {
    pub fn set_name(&mut self, name: impl Into<Option<String>>) -> Result<(), SweepError> { self.assign("name", name) }
    pub fn set_notes(&mut self, notes: impl Into<Option<String>>) -> Result<(), SweepError> { self.assign("notes", notes) }
}

impl Sweepable for Contract {
    type Value = String;

    fn sweep_class() -> &'static SweepClass<String> { &CONTRACT }

    fn read_field(&self, field: &str) -> Result<Option<String>, SweepError> {
        match field {
            "name" => Ok(self.name.clone()),
            "notes" => Ok(self.notes.clone()),
            _ => Err(SweepError::unknown_field("Contract", field)),
        }
    }

    fn write_field(&mut self, field: &str, value: Option<String>) -> Result<(), SweepError> {
        match field {
            "name" => self.name = value,
            "notes" => self.notes = value,
            _ => return Err(SweepError::unknown_field("Contract", field)),
        }
        Ok(())
    }
}

pub static ADDRESS: Lazy<SweepClass<String>> = Lazy::new(|| {
    let class = SweepClass::new("Address");
    class.sweep(["address1", "address2", "city", "state", "zip"], brooms::strip).expect("address rules");
    class
});

#[derive(Debug, Default)]
pub struct Address {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl Address {
    fn slot(&mut self, field: &str) -> Result<&mut Option<String>, SweepError> {
        match field {
            "address1" => Ok(&mut self.address1),
            "address2" => Ok(&mut self.address2),
            "city" => Ok(&mut self.city),
            "state" => Ok(&mut self.state),
            "zip" => Ok(&mut self.zip),
            _ => Err(SweepError::unknown_field("Address", field)),
        }
    }
}

impl Sweepable for Address {
    type Value = String;

    fn sweep_class() -> &'static SweepClass<String> { &ADDRESS }

    fn read_field(&self, field: &str) -> Result<Option<String>, SweepError> {
        let value = match field {
            "address1" => &self.address1,
            "address2" => &self.address2,
            "city" => &self.city,
            "state" => &self.state,
            "zip" => &self.zip,
            _ => return Err(SweepError::unknown_field("Address", field)),
        };
        Ok(value.clone())
    }

    fn write_field(&mut self, field: &str, value: Option<String>) -> Result<(), SweepError> {
        *self.slot(field)? = value;
        Ok(())
    }
}

// A base type that never sweeps anything, and a type embedding it that
// sweeps the inherited `name` field.
pub static BASE_CLASS: SweepClass<String> = SweepClass::new("BaseClass");

pub static SUB_CLASS: Lazy<SweepClass<String>> = Lazy::new(|| SweepClass::extends("SubClass", &BASE_CLASS));

#[derive(Debug, Default)]
pub struct BaseClass {
    pub name: Option<String>,
}

impl Sweepable for BaseClass {
    type Value = String;

    fn sweep_class() -> &'static SweepClass<String> { &BASE_CLASS }

    fn read_field(&self, field: &str) -> Result<Option<String>, SweepError> {
        match field {
            "name" => Ok(self.name.clone()),
            _ => Err(SweepError::unknown_field("BaseClass", field)),
        }
    }

    fn write_field(&mut self, field: &str, value: Option<String>) -> Result<(), SweepError> {
        match field {
            "name" => { self.name = value; Ok(()) }
            _ => Err(SweepError::unknown_field("BaseClass", field)),
        }
    }
}

#[derive(Debug, Default)]
pub struct SubClass {
    pub base: BaseClass,
}

impl Sweepable for SubClass {
    type Value = String;

    fn sweep_class() -> &'static SweepClass<String> { &SUB_CLASS }

    fn read_field(&self, field: &str) -> Result<Option<String>, SweepError> { self.base.read_field(field) }

    fn write_field(&mut self, field: &str, value: Option<String>) -> Result<(), SweepError> { self.base.write_field(field, value) }
}
