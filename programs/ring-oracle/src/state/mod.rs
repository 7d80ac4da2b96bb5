pub mod hook_registry;
pub mod price_ring;

pub use hook_registry::*;
pub use price_ring::*;
