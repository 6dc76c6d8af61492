//! Merging user edits into module defaults
//!
//! A module's configuration is its defaults with the user's edits applied on
//! top. Edits replace default values in place, so the default declaration
//! order survives, and properties the module does not define are appended.

use crate::error::{Error, Result};
use crate::model::ModuleModel;
use crate::types::{ActionMap, ConfigRecord, ConfigValue};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Controls how edits are merged into defaults
///
/// # Example
///
/// ```rust
/// use unicorn_options::MergeOptions;
///
/// let options = MergeOptions {
///     allow_unknown_keys: false,
/// };
/// assert!(MergeOptions::default().allow_unknown_keys);
/// ```
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Accept properties that are not among the module defaults
    pub allow_unknown_keys: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            allow_unknown_keys: true,
        }
    }
}

/// Apply `edits` on top of the model's defaults
///
/// # Returns
///
/// - `Ok(config)` - Defaults with every edit applied
/// - `Err(Error::UnknownProperty)` - An edit names a property missing from the
///   defaults while `allow_unknown_keys` is false
///
/// # Example
///
/// ```rust
/// use unicorn_options::{merge_edits, ButtonsModel, ConfigRecord, MergeOptions};
///
/// let mut edits = ConfigRecord::new();
/// edits.insert("$uni-btn-height".into(), "40px".into());
///
/// let config = merge_edits(&ButtonsModel, edits, &MergeOptions::default())?;
/// assert_eq!(config["$uni-btn-height"].as_scalar(), Some("40px"));
/// # Ok::<(), unicorn_options::Error>(())
/// ```
pub fn merge_edits(
    model: &dyn ModuleModel,
    edits: ConfigRecord,
    options: &MergeOptions,
) -> Result<ConfigRecord> {
    let mut config = model.defaults();
    let mut overridden = 0usize;
    let mut added = 0usize;

    for (key, value) in edits {
        if let Some(slot) = config.get_mut(&key) {
            *slot = value;
            overridden += 1;
        } else if options.allow_unknown_keys {
            config.insert(key, value);
            added += 1;
        } else {
            return Err(Error::UnknownProperty {
                module: model.module().to_string(),
                key,
            });
        }
    }

    debug!(
        module = model.module(),
        overridden, added, "merged edits into defaults"
    );
    Ok(config)
}

/// Read edits from a JSON object file
///
/// Values may be strings, numbers, booleans, arrays of scalars or objects of
/// scalars. Numbers and booleans become their textual form.
pub fn load_edits(path: &Path) -> Result<ConfigRecord> {
    let content = std::fs::read_to_string(path)?;
    parse_edits(&content)
}

/// Parse edits from JSON text, see [`load_edits`]
pub fn parse_edits(content: &str) -> Result<ConfigRecord> {
    let object: serde_json::Map<String, Value> = serde_json::from_str(content)?;
    object
        .into_iter()
        .map(|(key, value)| {
            let value = value_from_json(&key, value)?;
            Ok((key, value))
        })
        .collect()
}

/// Parse a `key=value` assignment into a scalar edit
///
/// Only the first `=` splits, so values may contain `=` themselves. An empty
/// value is kept; it clears the property from the generated document.
pub fn parse_assignment(assignment: &str) -> Result<(String, ConfigValue)> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| Error::InvalidAssignment(assignment.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::InvalidAssignment(assignment.to_string()));
    }
    Ok((key.to_string(), ConfigValue::Scalar(value.trim().to_string())))
}

fn value_from_json(key: &str, value: Value) -> Result<ConfigValue> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| scalar_text(key, item))
            .collect::<Result<Vec<_>>>()
            .map(ConfigValue::OrderedList),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(name, colors)| scalar_text(key, colors).map(|text| (name, text)))
            .collect::<Result<ActionMap>>()
            .map(ConfigValue::ActionMap),
        other => scalar_text(key, other).map(ConfigValue::Scalar),
    }
}

fn scalar_text(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(Error::InvalidValue {
            key: key.to_string(),
            message: "nested arrays and objects are not supported".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::{ButtonsModel, BUTTON_ACTIONS, BUTTON_STYLES};
    use std::fs::write;
    use tempfile::TempDir;

    #[test]
    fn test_merge_options_default() {
        assert!(MergeOptions::default().allow_unknown_keys);
    }

    #[test]
    fn test_merge_overrides_in_place() {
        let mut edits = ConfigRecord::new();
        edits.insert("$uni-btn-namespace".to_string(), ".btn".into());

        let config = merge_edits(&ButtonsModel, edits, &MergeOptions::default()).unwrap();
        assert_eq!(config.len(), ButtonsModel.defaults().len());
        let (index, _, value) = config.get_full("$uni-btn-namespace").unwrap();
        assert_eq!(index, 0);
        assert_eq!(value.as_scalar(), Some(".btn"));
    }

    #[test]
    fn test_merge_appends_unknown_keys() {
        let mut edits = ConfigRecord::new();
        edits.insert("$uni-btn-radius".to_string(), "4px".into());

        let config = merge_edits(&ButtonsModel, edits, &MergeOptions::default()).unwrap();
        assert_eq!(config.get_index(config.len() - 1).unwrap().0, "$uni-btn-radius");
    }

    #[test]
    fn test_merge_strict_rejects_unknown_keys() {
        let mut edits = ConfigRecord::new();
        edits.insert("$uni-btn-radius".to_string(), "4px".into());

        let options = MergeOptions {
            allow_unknown_keys: false,
        };
        let err = merge_edits(&ButtonsModel, edits, &options).unwrap_err();
        match err {
            Error::UnknownProperty { module, key } => {
                assert_eq!(module, "buttons");
                assert_eq!(key, "$uni-btn-radius");
            }
            other => panic!("Expected UnknownProperty, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_edits_value_kinds() {
        let edits = parse_edits(
            r##"{
                "$uni-btn-height": "40px",
                "$uni-btn-font-weight": 400,
                "$uni-btn-button_styles": ["pill", "flat"],
                "$uni-btn-button_actions": {"primary": "#000 #FFF"}
            }"##,
        )
        .unwrap();

        assert_eq!(edits["$uni-btn-height"].as_scalar(), Some("40px"));
        assert_eq!(edits["$uni-btn-font-weight"].as_scalar(), Some("400"));
        assert_eq!(
            edits[BUTTON_STYLES].as_list().unwrap(),
            &["pill".to_string(), "flat".to_string()]
        );
        assert_eq!(
            edits[BUTTON_ACTIONS].as_action_map().unwrap()["primary"],
            "#000 #FFF"
        );
    }

    #[test]
    fn test_parse_edits_rejects_nested_arrays() {
        let result = parse_edits(r#"{"$uni-btn-button_styles": [["pill"]]}"#);
        assert!(matches!(result, Err(Error::InvalidValue { .. })));
    }

    #[test]
    fn test_parse_edits_rejects_non_object() {
        assert!(matches!(parse_edits("[1, 2]"), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_edits() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edits.json");
        write(&path, r##"{"$uni-btn-bgcolor": "#EEE"}"##).unwrap();

        let edits = load_edits(&path).unwrap();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits["$uni-btn-bgcolor"].as_scalar(), Some("#EEE"));
    }

    #[test]
    fn test_load_edits_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_edits(&temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parse_assignment() {
        let (key, value) = parse_assignment("$uni-btn-height=40px").unwrap();
        assert_eq!(key, "$uni-btn-height");
        assert_eq!(value, ConfigValue::Scalar("40px".to_string()));

        let (_, value) = parse_assignment("$uni-btn-font-family = a=b").unwrap();
        assert_eq!(value.as_scalar(), Some("a=b"));

        let (_, value) = parse_assignment("$uni-btn-height=").unwrap();
        assert_eq!(value.as_scalar(), Some(""));
    }

    #[test]
    fn test_parse_assignment_invalid() {
        assert!(matches!(
            parse_assignment("no-equals"),
            Err(Error::InvalidAssignment(_))
        ));
        assert!(matches!(
            parse_assignment("=40px"),
            Err(Error::InvalidAssignment(_))
        ));
    }
}
