//! Module models
//!
//! A module is a named family of component styles (`buttons`, `grids`, ...).
//! Each module has its own defaults, its own serialization rules and its own
//! build route on the compiler backend. [`ModuleModel`] captures that contract;
//! concrete modules must override [`ModuleModel::generate`].

use crate::error::{Error, Result};
use crate::response::parse_response;
use crate::serializer::SerializationRules;
use crate::types::{ConfigRecord, ModuleDocument, StyleSheets};
use serde_json::Value;

/// Default address of the options compiler
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Contract shared by every module model
///
/// Only [`module`](ModuleModel::module) is required by the compiler, but a
/// model that keeps the default [`generate`](ModuleModel::generate) fails
/// with [`Error::NotImplemented`].
pub trait ModuleModel: Send + Sync {
    /// Module name, also the key of the compiled css in build responses
    fn module(&self) -> &str;

    /// Default configuration before any user edits
    fn defaults(&self) -> ConfigRecord {
        ConfigRecord::new()
    }

    /// Rules used to serialize this module's configuration
    fn rules(&self) -> SerializationRules {
        SerializationRules::default()
    }

    /// Generate the options document for `config`
    fn generate(&self, _config: &ConfigRecord) -> Result<ModuleDocument> {
        Err(Error::NotImplemented {
            module: self.module().to_string(),
        })
    }

    /// Extract compiled stylesheets from a build response
    fn parse(&self, response: &Value) -> StyleSheets {
        parse_response(response, self.module())
    }

    /// Build route for this module, e.g. `http://localhost:5000/build/buttons`
    fn endpoint(&self, base_url: &str) -> String {
        format!("{}/build/{}", base_url.trim_end_matches('/'), self.module())
    }
}

/// Model with no generator of its own
///
/// Useful for registering a module whose generator lives elsewhere, and as the
/// fallback behaviour every concrete model overrides.
#[derive(Debug, Clone)]
pub struct BaseModel {
    module: String,
}

impl BaseModel {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }
}

impl ModuleModel for BaseModel {
    fn module(&self) -> &str {
        &self.module
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_generate_not_implemented() {
        let model = BaseModel::new("grids");
        let mut config = ConfigRecord::new();
        config.insert("$uni-grid-columns".to_string(), "12".into());

        let err = model.generate(&config).unwrap_err();
        assert!(matches!(err, Error::NotImplemented { ref module } if module == "grids"));
        assert!(err.to_string().contains("grids"));
    }

    #[test]
    fn test_base_defaults_and_rules() {
        let model = BaseModel::new("grids");
        assert!(model.defaults().is_empty());
        assert_eq!(model.rules(), SerializationRules::default());
    }

    #[test]
    fn test_endpoint() {
        let model = BaseModel::new("buttons");
        assert_eq!(
            model.endpoint(DEFAULT_BASE_URL),
            "http://localhost:5000/build/buttons"
        );
        assert_eq!(
            model.endpoint("https://compiler.example.com/"),
            "https://compiler.example.com/build/buttons"
        );
    }

    #[test]
    fn test_parse_uses_module_name() {
        let model = BaseModel::new("grids");
        let response = json!({"grids": ".grid{}", "optionsScss": "$g: 1;"});
        let styles = model.parse(&response);
        assert_eq!(styles.css, ".grid{}");
        assert_eq!(styles.options, "$g: 1;");
    }
}
