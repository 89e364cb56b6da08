use bundlescope_api::BundleRecord;

/// Analyzes streamed-scene bundles, which can only be inspected at runtime.
///
/// Work started by [`SceneAnalyzer::begin`] completes asynchronously; the
/// caller polls [`SceneAnalyzer::is_pending`].
pub trait SceneAnalyzer: Send + Sync {
    fn begin(&self, bundle: &BundleRecord, scene_paths: &[String]);

    fn is_pending(&self) -> bool;
}
