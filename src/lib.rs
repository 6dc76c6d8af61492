//! # unicorn-options - Module options for the Unicorn options compiler
//!
//! This library models the configurable style modules of the Unicorn UI kit
//! (buttons, ...) and turns a module's configuration into the
//! stylesheet-variable statements the options compiler builds final
//! stylesheets from.
//!
//! ## Features
//!
//! - Typed property values: scalars, ordered lists and action maps
//! - Rule-driven serialization with fixed emission order
//! - Module models with defaults, build routes and response parsing
//! - Explicit module registry
//! - Merge user edits (JSON files or `key=value` pairs) into module defaults
//! - Query properties using glob patterns (e.g., `"$uni-btn-font-*"`)
//!
//! ## Quick Start
//!
//! ### Generating a module's options
//!
//! ```rust
//! use unicorn_options::{ModuleModel, ModuleRegistry};
//!
//! let registry = ModuleRegistry::with_builtin_modules();
//! let buttons = registry.get("buttons")?;
//!
//! let document = buttons.generate(&buttons.defaults())?;
//! assert_eq!(document.name, "buttons");
//! assert!(document.lines().any(|l| l == "$uni-btn-height: 32px;"));
//! # Ok::<(), unicorn_options::Error>(())
//! ```
//!
//! ### Applying edits
//!
//! ```rust
//! use unicorn_options::{merge_edits, parse_edits, ButtonsModel, MergeOptions, ModuleModel};
//!
//! let edits = parse_edits(r##"{
//!     "$uni-btn-bgcolor": "#EEE",
//!     "$uni-btn-button_styles": ["rounded", "pill"]
//! }"##)?;
//!
//! let config = merge_edits(&ButtonsModel, edits, &MergeOptions::default())?;
//! let document = ButtonsModel.generate(&config)?;
//!
//! assert!(document.lines().any(|l| l == "$uni-btn-bgcolor: #EEE;"));
//! assert!(document.lines().any(|l| l == "$uni-btn-button_styles: 'rounded' 'pill' ;"));
//! # Ok::<(), unicorn_options::Error>(())
//! ```
//!
//! ### Custom rules
//!
//! ```rust
//! use unicorn_options::{serialize, ComplexFormat, ConfigRecord, ConfigValue, SerializationRules};
//!
//! let mut config = ConfigRecord::new();
//! config.insert("$uni-grid-namespace".into(), ".grid".into());
//! config.insert(
//!     "$uni-grid-breakpoints".into(),
//!     ConfigValue::OrderedList(vec!["small".into(), "large".into()]),
//! );
//!
//! let rules = SerializationRules::default()
//!     .quote("$uni-grid-namespace")
//!     .complex("$uni-grid-breakpoints", ComplexFormat::QuotedList);
//!
//! let document = serialize(&config, &rules, "grids");
//! assert_eq!(
//!     document.body,
//!     "$uni-grid-namespace: '.grid';\n$uni-grid-breakpoints: 'small' 'large' ;"
//! );
//! ```
//!
//! ## Output Format
//!
//! Statements are newline separated and always come in this order:
//!
//! 1. Simple properties: `key: value;`
//! 2. Quoted simple properties: `key: 'value';`
//! 3. Complex properties in declared order, e.g.
//!    `key: ('primary' #00A1CB #FFF) ('action' #7db500 #FFF) ;` or
//!    `key: 'rounded' 'pill' ;`
//!
//! Simple properties with an empty value produce no statement at all.
//!
//! ## Error Handling
//!
//! All fallible functions return [`Result<T, Error>`]. A model that does not
//! override [`ModuleModel::generate`] reports [`Error::NotImplemented`]:
//!
//! ```rust
//! use unicorn_options::{BaseModel, Error, ModuleModel};
//!
//! let model = BaseModel::new("grids");
//! match model.generate(&model.defaults()) {
//!     Err(Error::NotImplemented { module }) => assert_eq!(module, "grids"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

// Re-export all public types at crate root
pub use types::{ActionMap, ConfigRecord, ConfigValue, ModuleDocument, StyleSheets};

// Re-export error types
pub use error::{Error, Result};

// Re-export models and registry
pub use buttons::{ButtonsModel, BUTTONS_MODULE};
pub use model::{BaseModel, ModuleModel, DEFAULT_BASE_URL};
pub use registry::ModuleRegistry;

// Re-export serialization
pub use serializer::{
    serialize, serialize_lines, simple_property, ComplexFormat, ComplexProperty,
    SerializationRules, META_FIELDS,
};

// Re-export edits, queries and response parsing
pub use config_merger::{load_edits, merge_edits, parse_assignment, parse_edits, MergeOptions};
pub use query::query_properties;
pub use response::{parse_response, OPTIONS_FIELD};

// All modules are private - use re-exports above for public API
mod buttons;
mod config_merger;
mod error;
mod model;
mod query;
mod registry;
mod response;
mod serializer;
mod types;
