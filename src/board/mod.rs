//! Territory records and the registry that owns them

pub mod registry;
pub mod territory;

pub use registry::Registry;
pub use territory::Territory;
