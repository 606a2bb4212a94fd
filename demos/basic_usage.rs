// ============================================================================
// Basic Usage Example
// ============================================================================

use radix_numerals::prelude::*;
use std::sync::Arc;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Radix Numerals Example ===\n");

    // Arithmetic within one system
    let a = Number::new(Arc::clone(&BINARY), "1011");
    let b = Number::new(Arc::clone(&BINARY), "1");
    let sum = a.add(&b)?;
    println!("{} + {} = {}", a, b, sum);

    // Conversion between presets
    let decimal = Number::new(Arc::clone(&DECIMAL), "255");
    for preset in Preset::ALL {
        let converted = decimal.convert_to(&preset.system())?;
        println!("  255 in {:<12} -> {}", preset.name(), converted);
    }

    // Mixed-system arithmetic, result in the left operand's system
    let hex = Number::new(Arc::clone(&HEXADECIMAL), "FF");
    let twelve = Number::new(Arc::clone(&DECIMAL), "12");
    println!("\n{} * {} = {}", hex, twelve, hex.multiply(&twelve)?);

    // Custom alphabets through the registry
    println!("\n=== Custom Systems ===");
    let registry = SystemRegistry::with_presets();
    let dozenal = registry.register_config(&NumeralSystemConfig::dozenal())?;
    let base36 = NumeralSystemBuilder::new().digits().upper_letters().build()?;
    registry.register("base36", Arc::clone(&base36));

    let big = Number::new(Arc::clone(&DECIMAL), "123456789012345678901234567890");
    println!("{} in dozenal -> {}", big.value(), big.convert_to(&dozenal)?);
    println!("{} in base36  -> {}", big.value(), big.convert_to(&base36)?);
    println!("registered: {}", registry.names().join(", "));

    // Invalid digits are reported, never silently ignored
    println!("\n=== Errors ===");
    let bad = Number::new(Arc::clone(&BINARY), "102");
    match bad.convert_to(&DECIMAL) {
        Ok(n) => println!("unexpected: {}", n),
        Err(err) => println!("{} -> {}", bad, err),
    }

    Ok(())
}
