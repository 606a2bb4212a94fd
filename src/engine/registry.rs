// ============================================================================
// System Registry
// Thread-safe lookup of numeral systems by name
// ============================================================================

use crate::domain::{NumeralSystem, NumeralSystemConfig, Preset};
use crate::engine::factory::create_from_config;
use crate::numeric::NumericResult;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<SystemRegistry> = LazyLock::new(SystemRegistry::with_presets);

/// Name to numeral system registry.
///
/// Names are matched case-insensitively. Registered systems are handed out
/// as shared `Arc`s, so numbers built from a lookup keep their system alive
/// after it is replaced or removed.
#[derive(Debug, Default)]
pub struct SystemRegistry {
    systems: RwLock<HashMap<String, Arc<NumeralSystem>>>,
}

impl SystemRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every preset under its canonical name
    pub fn with_presets() -> Self {
        let registry = Self::new();
        for preset in Preset::ALL {
            registry.register(preset.name(), preset.system());
        }
        registry
    }

    /// Process-wide registry, pre-populated with the presets
    pub fn global() -> &'static SystemRegistry {
        &GLOBAL
    }

    /// Register `system` under `name`, returning the system it replaced
    pub fn register(
        &self,
        name: impl AsRef<str>,
        system: Arc<NumeralSystem>,
    ) -> Option<Arc<NumeralSystem>> {
        let key = Self::key(name.as_ref());
        tracing::debug!(name = %key, base = system.base(), "registering numeral system");
        self.systems.write().insert(key, system)
    }

    /// Validate, build and register a configured system
    ///
    /// # Errors
    /// Returns `InvalidSystemDefinition` if the configuration is invalid.
    pub fn register_config(&self, config: &NumeralSystemConfig) -> NumericResult<Arc<NumeralSystem>> {
        let system = create_from_config(config)?;
        self.register(&config.name, Arc::clone(&system));
        Ok(system)
    }

    /// Look up a system by name
    pub fn get(&self, name: &str) -> Option<Arc<NumeralSystem>> {
        self.systems.read().get(&Self::key(name)).cloned()
    }

    /// Remove a system, returning it if present
    pub fn remove(&self, name: &str) -> Option<Arc<NumeralSystem>> {
        self.systems.write().remove(&Self::key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.systems.read().contains_key(&Self::key(name))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.systems.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.systems.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.read().is_empty()
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
