pub mod asset;
pub mod bundle;
pub mod report;

pub use asset::*;
pub use bundle::*;
pub use report::*;
