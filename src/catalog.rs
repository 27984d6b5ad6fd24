//! Typed view of a toolchain services API response.
//!
//! Only `items[0].services` is ever consulted, so later items stay opaque
//! JSON and are never validated. Every service record in the first item must
//! carry `service_id`, `instance_id`, `url` and `parameters.name`; a missing
//! field fails the whole parse rather than surfacing later as a lookup error.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawCatalog {
    items: Vec<Value>,
}

/// Parsed API response. Holds the first item; the rest are dropped.
#[derive(Debug, Clone)]
pub struct Catalog {
    item: Item,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Item {
    pub services: Vec<ServiceRecord>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub service_id: String,
    pub instance_id: String,
    pub url: String,
    pub parameters: ServiceParameters,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServiceParameters {
    pub name: String,
}

impl Catalog {
    /// Parse the API response text.
    pub fn parse(input: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(input).context("parsing catalog JSON")?;
        Self::from_raw(raw)
    }

    /// Build a catalog from an already-decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_value(value).context("reading catalog items")?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCatalog) -> Result<Self> {
        let Some(first) = raw.items.into_iter().next() else {
            bail!("catalog contains no items");
        };
        let item: Item = serde_json::from_value(first).context("parsing items[0]")?;
        Ok(Self { item })
    }

    /// Service records of the first item, in document order.
    pub fn services(&self) -> &[ServiceRecord] {
        &self.item.services
    }
}

/// Read and parse a catalog stored on disk.
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?;
    Catalog::parse(&data).with_context(|| format!("parsing catalog {}", path.display()))
}
