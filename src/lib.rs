// ============================================================================
// Radix Numerals Library
// Exact arithmetic and conversion across positional numeral systems
// ============================================================================

//! # Radix Numerals
//!
//! Numbers written in arbitrary positional numeral systems, with exact
//! arithmetic and lossless conversion between systems.
//!
//! ## Features
//!
//! - **Any alphabet** of two or more distinct symbols, not only digits
//! - **Preset systems** from binary to hexadecimal and base-26 letters
//! - **Unbounded precision** for every conversion and operation
//! - **Explicit errors** for digits outside a system's alphabet
//!
//! ## Example
//!
//! ```rust
//! use radix_numerals::prelude::*;
//! use std::sync::Arc;
//!
//! let a = Number::new(Arc::clone(&BINARY), "1011");
//! let b = Number::new(Arc::clone(&BINARY), "1");
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.value(), "1100");
//!
//! let hex = convert_to(&HEXADECIMAL, &Number::new(Arc::clone(&DECIMAL), "255")).unwrap();
//! assert_eq!(hex.to_string(), "FF b16");
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Number, NumeralSystem, NumeralSystemConfig, Preset, ALPHABETICAL, BINARY, DECIMAL,
        HEXADECIMAL, OCTAL, QUATERNARY, QUINARY, SENARY, SEPTENARY, TERNARY,
    };
    pub use crate::engine::{
        convert_decimal_to, convert_to, convert_to_decimal, create_from_config,
        NumeralSystemBuilder, SystemRegistry,
    };
    pub use crate::numeric::{DefinitionError, NumericError, NumericResult};
}
