//! Service selection over a parsed catalog.
//!
//! Two independent checks run for every mode: the `sid` / `ad-url` outputs
//! driven by the category tag scan, then the instance lookup for modes that
//! look like a full instance id. Both may contribute lines.

use crate::catalog::{Catalog, ServiceRecord};
use tracing::debug;

/// Category marker searched for inside `service_id`.
pub const ACTIVE_DEPLOY_TAG: &str = "activedeploy";
/// Mode that prints the tagged service's `instance_id`.
pub const MODE_SERVICE_ID: &str = "sid";
/// Mode that prints the tagged service's `url`.
pub const MODE_BROKER_URL: &str = "ad-url";
/// Length of a canonical instance id; modes of this length trigger an instance lookup.
pub const INSTANCE_ID_LEN: usize = 36;
/// Printed in place of a field when no tagged service exists.
pub const UNSET_SENTINEL: &str = "0";

#[derive(Debug, Clone)]
pub struct ServiceLookup<'a> {
    catalog: &'a Catalog,
    tag: String,
}

impl<'a> ServiceLookup<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_tag(catalog, ACTIVE_DEPLOY_TAG)
    }

    pub fn with_tag(catalog: &'a Catalog, tag: impl Into<String>) -> Self {
        Self {
            catalog,
            tag: tag.into(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Last record whose `service_id` contains the tag. Later matches win.
    pub fn tagged_service(&self) -> Option<&'a ServiceRecord> {
        let mut matched = None;
        for service in self.catalog.services() {
            if service.service_id.contains(self.tag.as_str()) {
                debug!(service_id = %service.service_id, "tagged service candidate");
                matched = Some(service);
            }
        }
        matched
    }

    /// Records whose `instance_id` contains `fragment`, in catalog order.
    pub fn instances_matching<'s>(
        &'s self,
        fragment: &'s str,
    ) -> impl Iterator<Item = &'a ServiceRecord> + 's {
        let catalog: &'a Catalog = self.catalog;
        catalog
            .services()
            .iter()
            .filter(move |service| service.instance_id.contains(fragment))
    }

    /// Output lines for `mode`. An empty result is a normal outcome.
    pub fn resolve(&self, mode: &str) -> Vec<String> {
        let tagged = self.tagged_service();
        let mut lines = Vec::new();

        if mode == MODE_SERVICE_ID {
            lines.push(render(tagged.map(|svc| svc.instance_id.as_str())));
        }
        if mode == MODE_BROKER_URL {
            lines.push(render(tagged.map(|svc| svc.url.as_str())));
        }

        if mode.chars().count() == INSTANCE_ID_LEN {
            lines.extend(
                self.instances_matching(mode)
                    .map(|svc| svc.parameters.name.clone()),
            );
        }

        debug!(mode, lines = lines.len(), "resolved");
        lines
    }
}

fn render(field: Option<&str>) -> String {
    field.unwrap_or(UNSET_SENTINEL).to_string()
}
