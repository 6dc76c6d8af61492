//! Buttons module
//!
//! Defaults and generation rules for the `buttons` style family.

use crate::error::Result;
use crate::model::ModuleModel;
use crate::serializer::{serialize, ComplexFormat, SerializationRules};
use crate::types::{ActionMap, ConfigRecord, ConfigValue, ModuleDocument};

pub const BUTTONS_MODULE: &str = "buttons";

pub const NAMESPACE: &str = "$uni-btn-namespace";
pub const GLOW_NAMESPACE: &str = "$uni-btn-glow_namespace";
pub const BUTTON_ACTIONS: &str = "$uni-btn-button_actions";
pub const BUTTON_STYLES: &str = "$uni-btn-button_styles";
pub const BUTTON_SIZES: &str = "$uni-btn-button_sizes";

const SIMPLE_DEFAULTS: [(&str, &str); 13] = [
    (NAMESPACE, ".button"),
    (GLOW_NAMESPACE, ".glow"),
    ("$uni-btn-glow_color", "#2c9adb"),
    ("$uni-btn-bgcolor", "#CCC"),
    ("$uni-btn-height", "32px"),
    ("$uni-btn-font-color", "#666"),
    ("$uni-btn-font-size", "14px"),
    ("$uni-btn-font-weight", "300"),
    (
        "$uni-btn-font-family",
        "'HelveticaNeue-Light', 'Helvetica Neue Light', 'Helvetica Neue', Helvetica, Arial, 'Lucida Grande', sans-serif",
    ),
    ("$uni-btn-dropdown-background", "#fcfcfc"),
    ("$uni-btn-dropdown-link-color", "#333"),
    ("$uni-btn-dropdown-link-hover", "#FFF"),
    ("$uni-btn-dropdown-link-hover-background", "#3c6ab9"),
];

const DEFAULT_ACTIONS: [(&str, &str); 5] = [
    ("primary", "#00A1CB #FFF"),
    ("action", "#7db500 #FFF"),
    ("highlight", "#F18D05 #FFF"),
    ("caution", "#E54028 #FFF"),
    ("royal", "#87318C #FFF"),
];

const DEFAULT_STYLES: [&str; 6] = ["rounded", "pill", "circle", "dropdown", "glow", "flat"];
const DEFAULT_SIZES: [&str; 3] = ["large", "small", "tiny"];

/// Model for the `buttons` module
///
/// # Example
///
/// ```rust
/// use unicorn_options::{ButtonsModel, ModuleModel};
///
/// let model = ButtonsModel;
/// let document = model.generate(&model.defaults())?;
///
/// assert_eq!(document.name, "buttons");
/// assert!(document.lines().any(|l| l == "$uni-btn-namespace: '.button';"));
/// assert!(document.lines().any(|l| l == "$uni-btn-button_sizes: 'large' 'small' 'tiny' ;"));
/// # Ok::<(), unicorn_options::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonsModel;

impl ModuleModel for ButtonsModel {
    fn module(&self) -> &str {
        BUTTONS_MODULE
    }

    fn defaults(&self) -> ConfigRecord {
        let mut config: ConfigRecord = SIMPLE_DEFAULTS
            .iter()
            .map(|(k, v)| (k.to_string(), ConfigValue::from(*v)))
            .collect();

        let actions: ActionMap = DEFAULT_ACTIONS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config.insert(BUTTON_ACTIONS.to_string(), actions.into());
        config.insert(BUTTON_STYLES.to_string(), owned(&DEFAULT_STYLES).into());
        config.insert(BUTTON_SIZES.to_string(), owned(&DEFAULT_SIZES).into());
        config.insert("$uni-btn-circle-size".to_string(), "120px".into());
        config
    }

    fn rules(&self) -> SerializationRules {
        SerializationRules::default()
            .quote(NAMESPACE)
            .quote(GLOW_NAMESPACE)
            .complex(BUTTON_ACTIONS, ComplexFormat::ActionMap)
            .complex(BUTTON_STYLES, ComplexFormat::QuotedList)
            .complex(BUTTON_SIZES, ComplexFormat::QuotedList)
    }

    fn generate(&self, config: &ConfigRecord) -> Result<ModuleDocument> {
        Ok(serialize(config, &self.rules(), BUTTONS_MODULE))
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_defaults() -> ModuleDocument {
        let model = ButtonsModel;
        model.generate(&model.defaults()).unwrap()
    }

    #[test]
    fn test_defaults_shape() {
        let defaults = ButtonsModel.defaults();
        assert_eq!(defaults.len(), 17);
        assert_eq!(defaults.get_index(0).unwrap().0, NAMESPACE);
        assert_eq!(
            defaults[BUTTON_ACTIONS].as_action_map().unwrap().len(),
            DEFAULT_ACTIONS.len()
        );
        assert_eq!(defaults[BUTTON_STYLES].as_list().unwrap().len(), 6);
        assert_eq!(defaults[BUTTON_SIZES].as_list().unwrap().len(), 3);
    }

    #[test]
    fn test_generate_defaults_line_count() {
        let model = ButtonsModel;
        let defaults = model.defaults();
        let rules = model.rules();

        let complex = rules.complex.len();
        let quoted = defaults.keys().filter(|k| rules.is_quoted(k)).count();
        let simple = defaults
            .iter()
            .filter(|(k, _)| !rules.is_excluded(k) && !rules.is_quoted(k))
            .filter(|(_, v)| v.as_scalar().is_some_and(|s| !s.is_empty()))
            .count();

        let document = generate_defaults();
        assert_eq!(document.lines().count(), simple + quoted + complex);
        assert_eq!(document.lines().count(), 17);
    }

    #[test]
    fn test_generate_defaults_sections_in_order() {
        let document = generate_defaults();
        let lines: Vec<&str> = document.lines().collect();

        assert_eq!(lines[0], "$uni-btn-glow_color: #2c9adb;");
        assert_eq!(lines[11], "$uni-btn-circle-size: 120px;");
        assert_eq!(lines[12], "$uni-btn-namespace: '.button';");
        assert_eq!(lines[13], "$uni-btn-glow_namespace: '.glow';");
        assert_eq!(
            lines[14],
            "$uni-btn-button_actions: ('primary' #00A1CB #FFF) ('action' #7db500 #FFF) \
             ('highlight' #F18D05 #FFF) ('caution' #E54028 #FFF) ('royal' #87318C #FFF) ;"
        );
        assert_eq!(
            lines[15],
            "$uni-btn-button_styles: 'rounded' 'pill' 'circle' 'dropdown' 'glow' 'flat' ;"
        );
        assert_eq!(lines[16], "$uni-btn-button_sizes: 'large' 'small' 'tiny' ;");
    }

    #[test]
    fn test_generate_keeps_font_family_unquoted() {
        let document = generate_defaults();
        assert!(document.lines().any(|l| l
            == "$uni-btn-font-family: 'HelveticaNeue-Light', 'Helvetica Neue Light', \
                'Helvetica Neue', Helvetica, Arial, 'Lucida Grande', sans-serif;"));
    }

    #[test]
    fn test_generate_each_key_once() {
        let document = generate_defaults();
        for key in ButtonsModel.defaults().keys() {
            let count = document
                .lines()
                .filter(|l| l.starts_with(&format!("{key}:")))
                .count();
            assert_eq!(count, 1, "{key} should appear exactly once");
        }
    }

    #[test]
    fn test_generate_ignores_meta_fields() {
        let model = ButtonsModel;
        let mut config = model.defaults();
        config.insert("css".to_string(), ".button {}".into());
        config.insert("options".to_string(), "$x: 1;".into());
        let document = model.generate(&config).unwrap();
        assert_eq!(document, generate_defaults());
    }
}
