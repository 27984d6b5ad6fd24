//! Look up service bindings in a toolchain services API response.
//!
//! The response arrives pre-fetched in `TC_API_RES` (or a file). The crate
//! parses it into a [`Catalog`] and [`ServiceLookup`] turns a mode argument
//! into output lines. [`evaluate`] wires the two together over explicit
//! inputs so callers and tests never touch process globals.

pub mod catalog;
pub mod logging;
pub mod lookup;

pub use catalog::{Catalog, Item, ServiceParameters, ServiceRecord, load_catalog_from_path};
pub use lookup::{
    ACTIVE_DEPLOY_TAG, INSTANCE_ID_LEN, MODE_BROKER_URL, MODE_SERVICE_ID, ServiceLookup,
    UNSET_SENTINEL,
};

use anyhow::{Context, Result, bail};
use std::env;
use std::path::Path;
use tracing::debug;

/// Environment variable holding the services API response.
pub const ENV_API_RES: &str = "TC_API_RES";

/// Read the API response from `TC_API_RES`.
pub fn read_api_response() -> Result<String> {
    match env::var(ENV_API_RES) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => bail!("{ENV_API_RES} is not set"),
        Err(env::VarError::NotUnicode(_)) => bail!("{ENV_API_RES} is not valid UTF-8"),
    }
}

/// Parse the raw `TC_API_RES` value. Unset and empty are both fatal.
pub fn catalog_from_api_response(api_res: Option<&str>) -> Result<Catalog> {
    let Some(raw) = api_res else {
        bail!("{ENV_API_RES} is not set");
    };
    if raw.trim().is_empty() {
        bail!("{ENV_API_RES} is empty");
    }
    Catalog::parse(raw).with_context(|| format!("parsing {ENV_API_RES} as JSON"))
}

/// Where the services response comes from.
#[derive(Debug, Clone, Copy)]
pub enum CatalogSource<'a> {
    /// Read `TC_API_RES` from the process environment.
    Environment,
    /// An already-captured `TC_API_RES` value (`None` when unset).
    ApiResponse(Option<&'a str>),
    /// A file holding the same document.
    File(&'a Path),
}

impl CatalogSource<'_> {
    pub fn load(self) -> Result<Catalog> {
        match self {
            CatalogSource::Environment => {
                let raw = read_api_response()?;
                debug!(bytes = raw.len(), "read {ENV_API_RES}");
                catalog_from_api_response(Some(&raw))
            }
            CatalogSource::ApiResponse(api_res) => catalog_from_api_response(api_res),
            CatalogSource::File(path) => load_catalog_from_path(path),
        }
    }
}

/// Evaluate one invocation: `args[0]` is the mode.
///
/// `Ok` lines are printed one per line with exit status 0; any `Err` is a
/// fatal input problem and maps to a non-zero status.
pub fn evaluate(api_res: Option<&str>, args: &[String]) -> Result<Vec<String>> {
    evaluate_with(CatalogSource::ApiResponse(api_res), args, ACTIVE_DEPLOY_TAG)
}

/// [`evaluate`] with an explicit input source and category tag.
///
/// The catalog is loaded before the mode is looked at, so an input problem
/// wins over a missing mode. Arguments after the mode are ignored.
pub fn evaluate_with(
    source: CatalogSource<'_>,
    args: &[String],
    tag: &str,
) -> Result<Vec<String>> {
    let catalog = source.load()?;
    debug!(services = catalog.services().len(), tag, "catalog loaded");
    let Some(mode) = args.first() else {
        bail!("missing mode argument (sid, ad-url, or a 36-character instance id)");
    };
    Ok(ServiceLookup::with_tag(&catalog, tag).resolve(mode))
}
