pub mod bundle;
pub mod manifest;
pub mod object;
pub mod registration;

pub use bundle::FsBundle;
pub use manifest::TextManifest;
pub use registration::fs_caps;
