//! Address cleanup demo.
//!
//! Run with: cargo run -p tiny-sweeper --example address_demo
//! Set SWEEPER_CONFIG_FILE to a YAML rule set to add rules for `Address`
//! fields not swept below, and RUST_LOG=debug to watch registration.

use tiny_sweeper::{brooms, SweepClass, SweepConfig, SweepError, Sweepable};

static ADDRESS: SweepClass<String> = SweepClass::new("Address");

#[derive(Debug, Default)]
struct Address {
    address1: Option<String>,
    address2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
}

impl Sweepable for Address {
    type Value = String;

    fn sweep_class() -> &'static SweepClass<String> { &ADDRESS }

    fn read_field(&self, field: &str) -> Result<Option<String>, SweepError> {
        Ok(match field {
            "address1" => self.address1.clone(),
            "address2" => self.address2.clone(),
            "city" => self.city.clone(),
            "state" => self.state.clone(),
            "zip" => self.zip.clone(),
            _ => return Err(SweepError::unknown_field("Address", field)),
        })
    }

    fn write_field(&mut self, field: &str, value: Option<String>) -> Result<(), SweepError> {
        match field {
            "address1" => self.address1 = value,
            "address2" => self.address2 = value,
            "city" => self.city = value,
            "state" => self.state = value,
            "zip" => self.zip = value,
            _ => return Err(SweepError::unknown_field("Address", field)),
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    ADDRESS.sweep(["address1", "address2", "city", "zip"], brooms::strip)?;
    ADDRESS.sweep("state", brooms::chain(vec![tiny_sweeper::Broom::Strip, tiny_sweeper::Broom::Upcase]))?;
    if let Some(cfg) = SweepConfig::from_env()? {
        let added = cfg.apply(&ADDRESS)?;
        println!("config added {added} rule(s)");
    }

    let mut address = Address::default();
    address.assign("address1", " 12 Elm St ".to_string())?;
    address.assign("address2", None)?;
    address.assign("city", " New Haven ".to_string())?;
    address.assign("state", " ct ".to_string())?;
    address.assign("zip", " 06510 ".to_string())?;
    println!("assigned:   {address:?}");

    // dirty values written behind the interceptor's back
    address.write_field("city", Some("  Hartford ".to_string()))?;
    address.sweep_up()?;
    println!("swept up:   {address:?}");
    Ok(())
}
