// ============================================================================
// Numeric Errors
// Error types for numeral system definition, conversion and arithmetic
// ============================================================================

use std::fmt;

/// Reasons a symbol list cannot define a positional numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionError {
    /// Fewer than two symbols were supplied
    TooFewSymbols(usize),
    /// The same symbol appears more than once
    DuplicateSymbol(char),
    /// A named system was configured without a name
    EmptyName,
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::TooFewSymbols(found) => {
                write!(f, "a numeral system needs at least 2 symbols, got {}", found)
            },
            DefinitionError::DuplicateSymbol(symbol) => {
                write!(f, "symbol {:?} appears more than once", symbol)
            },
            DefinitionError::EmptyName => write!(f, "system name cannot be empty"),
        }
    }
}

/// Errors that can occur while converting or computing with numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A digit is not part of the numeral system's alphabet.
    /// `position` is the zero-based character index counted from the left.
    InvalidDigit { symbol: char, position: usize },
    /// The symbol list does not define a valid system
    InvalidSystemDefinition(DefinitionError),
    /// A decimal-system number was expected
    NotDecimal { base: usize },
    /// Value does not fit the target representation
    Overflow,
    /// Conversion would drop a fractional part
    PrecisionLoss,
    /// Negative values have no positional representation here
    Negative,
    /// Name does not denote a known preset system
    UnknownPreset,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidDigit { symbol, position } => {
                write!(f, "invalid digit {:?} at position {}", symbol, position)
            },
            NumericError::InvalidSystemDefinition(reason) => {
                write!(f, "invalid numeral system definition: {}", reason)
            },
            NumericError::NotDecimal { base } => {
                write!(f, "expected a decimal number, got base {}", base)
            },
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the target representation")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: value has a fractional part"
            ),
            NumericError::Negative => write!(f, "negative values are not supported"),
            NumericError::UnknownPreset => write!(f, "unknown preset numeral system"),
        }
    }
}

impl std::error::Error for NumericError {}

impl From<DefinitionError> for NumericError {
    fn from(err: DefinitionError) -> Self {
        NumericError::InvalidSystemDefinition(err)
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
