//! Capability traits implemented by an asset-runtime host.
//!
//! The analysis core never touches bundle files or serialized objects
//! directly. Everything it needs from the host is expressed as a small
//! capability trait here and handed over as one [`HostCaps`] bundle.

pub mod cap;
pub mod object;
pub mod registration;

pub use cap::*;
pub use object::*;
pub use registration::HostCaps;

/// Error type for host operations
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
