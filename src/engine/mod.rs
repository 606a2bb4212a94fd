// ============================================================================
// Engine Module
// Conversion between numeral systems, system factory and registry
// ============================================================================

pub mod conversion;
pub mod factory;
mod registry;

pub use conversion::{convert_decimal_to, convert_to, convert_to_decimal, from_biguint, to_biguint};
pub use factory::{create_from_config, NumeralSystemBuilder};
pub use registry::SystemRegistry;
