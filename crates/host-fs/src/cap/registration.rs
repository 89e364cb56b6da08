use crate::FsHost;
use bundlescope_plugin::HostCaps;
use std::sync::Arc;

/// Capabilities of the filesystem host. Scene analysis and export need a
/// live runtime and are left unset.
pub fn fs_caps() -> HostCaps {
    let host = Arc::new(FsHost::new());
    HostCaps {
        manifest: host.clone(),
        bundles: host.clone(),
        introspect: host.clone(),
        hierarchy: host.clone(),
        animator: host.clone(),
        identity: host,
        scenes: None,
        exporter: None,
    }
}
