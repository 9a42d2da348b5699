use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};

use super::backend::DetectorBackend;
use super::info::ImageInfo;
use super::result::DetectionResult;

/// Detector backends keyed by name, with one selected as active.
///
/// `DetectorBackend::detect` takes `&mut self`, so each backend sits behind a `Mutex`.
#[derive(Default)]
pub struct BackendRegistry {
    backends: BTreeMap<&'static str, Mutex<Box<dyn DetectorBackend>>>,
    active: Option<&'static str>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in backend, with `stub` active.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(super::StubBackend::new());
        registry
    }

    /// Add a backend. The first one added becomes active.
    pub fn register<B: DetectorBackend + 'static>(&mut self, backend: B) {
        let name = backend.name();
        if self.active.is_none() {
            self.active = Some(name);
        }
        let backend: Box<dyn DetectorBackend> = Box::new(backend);
        self.backends.insert(name, Mutex::new(backend));
    }

    /// Make the backend called `name` active.
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        let (key, _) = self
            .backends
            .get_key_value(name)
            .ok_or_else(|| anyhow!("backend '{}' not registered", name))?;
        self.active = Some(*key);
        Ok(())
    }

    pub fn default_name(&self) -> Option<&str> {
        self.active
    }

    /// Registered backend names, sorted.
    pub fn list(&self) -> Vec<&'static str> {
        self.backends.keys().copied().collect()
    }

    /// Run the active backend.
    pub fn detect(&self, image: &ImageInfo) -> Result<DetectionResult> {
        let backend = self
            .active
            .and_then(|name| self.backends.get(name))
            .ok_or_else(|| anyhow!("no detector backend registered"))?;
        let mut guard = backend
            .lock()
            .map_err(|_| anyhow!("backend lock poisoned"))?;
        guard.detect(image)
    }
}
