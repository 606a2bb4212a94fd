// ============================================================================
// Numeral System Factory
// Creates numeral systems from configuration or a fluent builder
// ============================================================================

use crate::domain::{NumeralSystem, NumeralSystemConfig};
use crate::numeric::NumericResult;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a numeral system from configuration
///
/// # Example
/// ```
/// use radix_numerals::domain::NumeralSystemConfig;
/// use radix_numerals::engine::factory::create_from_config;
///
/// let system = create_from_config(&NumeralSystemConfig::dozenal()).unwrap();
/// assert_eq!(system.base(), 12);
/// ```
pub fn create_from_config(config: &NumeralSystemConfig) -> NumericResult<Arc<NumeralSystem>> {
    config.validate()?;

    let system = NumeralSystem::new(config.symbols.chars())?;
    tracing::debug!(name = %config.name, base = system.base(), "created numeral system");

    Ok(Arc::new(system))
}

// ============================================================================
// Builder Pattern for Custom Alphabets
// ============================================================================

/// Builder for assembling an alphabet piece by piece
///
/// # Example
/// ```
/// use radix_numerals::engine::factory::NumeralSystemBuilder;
///
/// // Base 36: digits then upper-case letters
/// let base36 = NumeralSystemBuilder::new()
///     .digits()
///     .upper_letters()
///     .build()
///     .unwrap();
/// assert_eq!(base36.base(), 36);
///
/// // Base 20: the first twenty of the same symbols
/// let vigesimal = NumeralSystemBuilder::new()
///     .digits()
///     .upper_letters()
///     .truncate(20)
///     .build()
///     .unwrap();
/// assert_eq!(vigesimal.symbol_at(19), Some('J'));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumeralSystemBuilder {
    symbols: Vec<char>,
}

impl NumeralSystemBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single symbol
    pub fn symbol(mut self, symbol: char) -> Self {
        self.symbols.push(symbol);
        self
    }

    /// Append symbols in order
    pub fn symbols(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.symbols.extend(symbols);
        self
    }

    /// Append `0`-`9`
    pub fn digits(self) -> Self {
        self.symbols('0'..='9')
    }

    /// Append `A`-`Z`
    pub fn upper_letters(self) -> Self {
        self.symbols('A'..='Z')
    }

    /// Append `a`-`z`
    pub fn lower_letters(self) -> Self {
        self.symbols('a'..='z')
    }

    /// Keep only the first `base` symbols
    pub fn truncate(mut self, base: usize) -> Self {
        self.symbols.truncate(base);
        self
    }

    /// Describe the alphabet as a named configuration
    pub fn into_config(self, name: impl Into<String>) -> NumeralSystemConfig {
        NumeralSystemConfig::new(name, self.symbols.into_iter().collect::<String>())
    }

    /// Build the numeral system
    ///
    /// # Errors
    /// Returns `InvalidSystemDefinition` if fewer than two symbols were
    /// collected or a symbol repeats.
    pub fn build(self) -> NumericResult<Arc<NumeralSystem>> {
        NumeralSystem::new(self.symbols).map(Arc::new)
    }
}
