pub mod bundle;
pub mod export;
pub mod manifest;
pub mod object;
pub mod scene;

pub use bundle::*;
pub use export::*;
pub use manifest::*;
pub use object::*;
pub use scene::*;
