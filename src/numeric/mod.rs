// ============================================================================
// Numeric Module
// Error types and integer interop shared by the domain and engine
// ============================================================================
//
// This module provides:
// - NumericError / DefinitionError: every failure the crate can report
// - NumericResult: Result alias used throughout
// - rust_decimal interop for Number (API boundaries only)
//
// Design principles:
// - All fallible operations return Result (no panics)
// - Arithmetic is exact; nothing is ever truncated to machine width

mod decimal;
mod errors;

pub use errors::{DefinitionError, NumericError, NumericResult};
