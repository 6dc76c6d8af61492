//! Registry of module models
//!
//! Maps module names to their models. Build it once at startup and pass it by
//! reference to whatever needs to look modules up.

use crate::buttons::ButtonsModel;
use crate::error::{Error, Result};
use crate::model::ModuleModel;
use indexmap::IndexMap;
use tracing::debug;

/// Explicit name to model lookup
///
/// # Example
///
/// ```rust
/// use unicorn_options::{BaseModel, ModuleRegistry};
///
/// let mut registry = ModuleRegistry::with_builtin_modules();
/// registry.register(BaseModel::new("grids"))?;
///
/// assert_eq!(registry.names(), vec!["buttons", "grids"]);
/// assert!(registry.get("forms").is_err());
/// # Ok::<(), unicorn_options::Error>(())
/// ```
#[derive(Default)]
pub struct ModuleRegistry {
    models: IndexMap<String, Box<dyn ModuleModel>>,
}

impl ModuleRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every module shipped with this crate
    pub fn with_builtin_modules() -> Self {
        let mut models: IndexMap<String, Box<dyn ModuleModel>> = IndexMap::new();
        let buttons = ButtonsModel;
        models.insert(buttons.module().to_string(), Box::new(buttons));
        Self { models }
    }

    /// Add a model, refusing to replace an existing one
    pub fn register<M: ModuleModel + 'static>(&mut self, model: M) -> Result<()> {
        let name = model.module().to_string();
        if self.models.contains_key(&name) {
            return Err(Error::DuplicateModule(name));
        }
        debug!(module = %name, "registered module model");
        self.models.insert(name, Box::new(model));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&dyn ModuleModel> {
        self.models
            .get(name)
            .map(|model| model.as_ref())
            .ok_or_else(|| Error::UnknownModule(name.to_string()))
    }

    /// Registered module names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.names())
            .finish()
    }
}
