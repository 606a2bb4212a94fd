// ============================================================================
// Domain Models Module
// Numeral systems, numbers and their configuration
// ============================================================================

pub mod config;
pub mod number;
pub mod numeral_system;

pub use config::{NumeralSystemConfig, Preset};
pub use number::Number;
pub use numeral_system::{
    NumeralSystem, ALPHABETICAL, BINARY, DECIMAL, HEXADECIMAL, OCTAL, QUATERNARY, QUINARY,
    SENARY, SEPTENARY, TERNARY,
};
