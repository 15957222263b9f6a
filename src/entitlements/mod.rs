//! Entitlements property list builder.

mod aps;
mod data_protection;

pub use aps::{APS_ENVIRONMENT, ApsEnvironment};
pub use data_protection::{DEFAULT_DATA_PROTECTION, DataProtection};

use crate::error::{Error, ErrorExt, Result};
use crate::info_plist::encode_xml;
use plist::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Builder for a `.entitlements` file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entitlements {
    aps: Option<ApsEnvironment>,
    data_protection: Option<DataProtection>,
    custom: BTreeMap<String, Value>,
}

impl Entitlements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aps(&mut self, environment: ApsEnvironment) -> &mut Self {
        self.aps = Some(environment);
        self
    }

    pub fn data_protection(&mut self, level: DataProtection) -> &mut Self {
        self.data_protection = Some(level);
        self
    }

    /// Sets an arbitrary entitlement, overriding the typed setters.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Serializes to an XML property list. Fails when no entitlement is set.
    pub fn build(&self) -> Result<String> {
        let mut data = BTreeMap::new();
        if let Some(aps) = self.aps {
            data.insert(APS_ENVIRONMENT.to_string(), Value::from(aps.value()));
        }
        if let Some(level) = self.data_protection {
            data.insert(DEFAULT_DATA_PROTECTION.to_string(), Value::from(level.value()));
        }
        for (key, value) in &self.custom {
            data.insert(key.clone(), value.clone());
        }

        if data.is_empty() {
            return Err(Error::GenericError("No entitlements found".into()));
        }
        encode_xml(data)
    }

    pub async fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let xml = self.build()?;
        tokio::fs::write(path, xml)
            .await
            .fs_context("writing entitlements", path)?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }
}
