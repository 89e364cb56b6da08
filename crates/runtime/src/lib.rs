use bundlescope_api::AnalysisState;
use bundlescope_core::{AnalysisSession, AnalyzeConfig};
use bundlescope_plugin::HostCaps;
use std::time::Duration;

/// Bootstraps an analysis session over the filesystem host.
pub fn build_default_session(config: AnalyzeConfig) -> AnalysisSession {
    session_with_caps(bundlescope_fs::fs_caps(), config)
}

/// Same as [`build_default_session`] but for an embedding host that brings
/// its own capabilities (a live runtime, a scene analyzer, an exporter).
pub fn session_with_caps(caps: HostCaps, config: AnalyzeConfig) -> AnalysisSession {
    AnalysisSession::builder(caps).with_config(config).build()
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(bundlescope_core::logging::init_logging(component, to_stderr))
}

/// Polls `session` until pending scene work has finished.
///
/// Returns immediately for a session that is not waiting. Wrap in
/// `tokio::time::timeout` to bound the wait.
pub async fn wait_for_completion(session: &mut AnalysisSession, interval: Duration) -> AnalysisState {
    loop {
        let state = session.poll();
        if state != AnalysisState::WaitingForScenes {
            return state;
        }
        tracing::trace!("Scene analysis still pending, next poll in {:?}", interval);
        tokio::time::sleep(interval).await;
    }
}
