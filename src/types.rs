use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::Cow;

/// Action name to "color color" pair, kept in insertion order
pub type ActionMap = IndexMap<String, String>;

/// Property name to value, kept in insertion order
///
/// Module defaults are declared in a fixed order and edits keep that order,
/// so generated documents are stable across runs.
pub type ConfigRecord = IndexMap<String, ConfigValue>;

/// A single property value in a module configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Plain value, e.g. `14px` or `.button`
    Scalar(String),
    /// Ordered list of names, e.g. `["rounded", "pill"]`
    OrderedList(Vec<String>),
    /// Action name to color pair, e.g. `{"primary": "#00A1CB #FFF"}`
    ActionMap(ActionMap),
}

impl ConfigValue {
    /// Short name of the variant, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Scalar(_) => "scalar",
            ConfigValue::OrderedList(_) => "list",
            ConfigValue::ActionMap(_) => "action map",
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ConfigValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::OrderedList(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_action_map(&self) -> Option<&ActionMap> {
        match self {
            ConfigValue::ActionMap(map) => Some(map),
            _ => None,
        }
    }

    /// Text used when this value is written as a simple `key: value;` line
    ///
    /// Lists render space-separated, which is a plain list in the target
    /// stylesheet syntax. Action maps render as `('name' value)` pairs. Empty
    /// lists and maps give empty text and are skipped like empty scalars.
    pub fn simple_text(&self) -> Cow<'_, str> {
        match self {
            ConfigValue::Scalar(s) => Cow::Borrowed(s),
            ConfigValue::OrderedList(items) => Cow::Owned(items.join(" ")),
            ConfigValue::ActionMap(actions) => Cow::Owned(
                actions
                    .iter()
                    .map(|(name, colors)| format!("('{name}' {colors})"))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Scalar(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Scalar(value)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        ConfigValue::OrderedList(items)
    }
}

impl From<ActionMap> for ConfigValue {
    fn from(map: ActionMap) -> Self {
        ConfigValue::ActionMap(map)
    }
}

/// Generated stylesheet-variable document for one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDocument {
    /// Module name, e.g. `buttons`
    pub name: String,
    /// Newline-separated statements
    pub body: String,
}

impl ModuleDocument {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }

    /// JSON body expected by the compiler backend's build route
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "_options": self.body,
        })
    }
}

/// Compiled stylesheets extracted from a backend response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleSheets {
    pub css: String,
    pub options: String,
}
