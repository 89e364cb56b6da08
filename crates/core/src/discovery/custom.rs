use super::DiscoveryStrategy;
use bundlescope_api::BundleRecord;
use std::path::Path;
use std::sync::Arc;

/// Caller-supplied discovery. `Some(vec![])` still suppresses every
/// lower-priority strategy; only `None` falls through.
pub type CustomDiscoveryFn = Arc<dyn Fn(&Path) -> Option<Vec<BundleRecord>> + Send + Sync>;

pub struct CustomHookStrategy {
    hook: CustomDiscoveryFn,
}

impl CustomHookStrategy {
    pub fn new(hook: CustomDiscoveryFn) -> Self {
        Self { hook }
    }
}

impl DiscoveryStrategy for CustomHookStrategy {
    fn discover(&self, root: &Path) -> Option<Vec<BundleRecord>> {
        (self.hook)(root)
    }

    fn name(&self) -> &str {
        "custom"
    }
}
