pub mod attribution;
pub mod config;
pub mod discovery;
pub mod error;
pub mod graph;
pub mod logging;
pub mod registry;
pub mod report;
pub mod scene;
pub mod session;
pub mod signal;
pub mod walker;

pub use config::AnalyzeConfig;
pub use error::{BundlescopeError, Result};
pub use session::{AnalysisSession, AnalysisSessionBuilder};
