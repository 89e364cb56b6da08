//! Assigns the objects found by a walk to the bundle that was walked.

use crate::registry::BundleRegistry;
use crate::walker::VisitedSet;
use bundlescope_api::BundleRecord;
use bundlescope_plugin::HostCaps;
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttributionStats {
    pub attributed: usize,
    /// Objects with no persistent identity (runtime-only objects)
    pub unidentified: usize,
    pub exported: usize,
    pub export_failures: usize,
}

/// Consumes `visited`, attaching every identified object to `bundle`.
///
/// Each introspection handle is dropped right after its object is processed;
/// whatever is left is dropped with the consumed set, so every handle is
/// released exactly once even if processing stops early.
pub fn attribute(
    bundle: &BundleRecord,
    visited: VisitedSet,
    caps: &HostCaps,
    registry: &mut BundleRegistry,
    export: bool,
) -> AttributionStats {
    let mut stats = AttributionStats::default();
    let exporter = if export { caps.exporter.as_ref() } else { None };

    for (object, entry) in visited.into_ordered() {
        let identity = caps.identity.identify(object);

        if let Some(identity) = &identity {
            let asset = registry.asset_or_insert(identity.guid);
            if asset.name.is_none() {
                asset.name = identity.name.clone();
            }
            if asset.type_name.is_none() {
                asset.type_name = identity.type_name.clone();
            }
            if asset.asset_path.is_none() {
                asset.asset_path = identity.asset_path.clone();
            }
            asset.attach(&bundle.name, entry.root);
            stats.attributed += 1;
        } else {
            stats.unidentified += 1;
        }

        if let Some(exporter) = exporter {
            match exporter.export(bundle, object, identity.as_ref()) {
                Ok(()) => stats.exported += 1,
                Err(e) => {
                    warn!("Failed to export object {} of {}: {}", object, bundle.name, e);
                    stats.export_failures += 1;
                }
            }
        }

        drop(entry);
    }

    debug!(
        "Attributed {} objects to {} ({} unidentified)",
        stats.attributed, bundle.name, stats.unidentified
    );
    stats
}
