//! Stylesheet-variable serializer
//!
//! Turns a [`ConfigRecord`] into newline-separated statements that the
//! options compiler feeds to its stylesheet preprocessor.
//!
//! # Format
//!
//! ```text
//! $uni-btn-height: 32px;
//! $uni-btn-namespace: '.button';
//! $uni-btn-button_actions: ('primary' #00A1CB #FFF) ('action' #7db500 #FFF) ;
//! $uni-btn-button_styles: 'rounded' 'pill' ;
//! ```
//!
//! Statements are emitted in a fixed order: unquoted simple properties, then
//! quoted simple properties, then each complex property in declared order.

use crate::types::{ConfigRecord, ConfigValue, ModuleDocument};
use tracing::{debug, warn};

/// Properties that carry compiler output rather than options
pub const META_FIELDS: [&str; 2] = ["css", "options"];

/// Formatter bound to a complex property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexFormat {
    /// `key: ('name' value) ('name' value) ;`
    ActionMap,
    /// `key: 'a' 'b' 'c' ;`
    QuotedList,
}

/// A property that needs a bespoke multi-value formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexProperty {
    pub name: String,
    pub format: ComplexFormat,
}

impl ComplexProperty {
    pub fn new(name: impl Into<String>, format: ComplexFormat) -> Self {
        Self {
            name: name.into(),
            format,
        }
    }
}

/// Which properties are skipped, quoted or handled by a complex formatter
///
/// The default rule set only excludes [`META_FIELDS`].
///
/// # Example
///
/// ```rust
/// use unicorn_options::{ComplexFormat, SerializationRules};
///
/// let rules = SerializationRules::default()
///     .quote("$uni-btn-namespace")
///     .complex("$uni-btn-button_styles", ComplexFormat::QuotedList);
///
/// assert!(rules.is_excluded("css"));
/// assert!(rules.is_excluded("$uni-btn-button_styles"));
/// assert!(rules.is_quoted("$uni-btn-namespace"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializationRules {
    pub excluded: Vec<String>,
    pub quoted: Vec<String>,
    pub complex: Vec<ComplexProperty>,
}

impl Default for SerializationRules {
    fn default() -> Self {
        Self {
            excluded: META_FIELDS.iter().map(|f| f.to_string()).collect(),
            quoted: Vec::new(),
            complex: Vec::new(),
        }
    }
}

impl SerializationRules {
    /// Rules with nothing excluded, not even the meta fields
    pub fn empty() -> Self {
        Self {
            excluded: Vec::new(),
            quoted: Vec::new(),
            complex: Vec::new(),
        }
    }

    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.push(name.into());
        self
    }

    pub fn quote(mut self, name: impl Into<String>) -> Self {
        self.quoted.push(name.into());
        self
    }

    /// Declare a complex property; redeclaring a name replaces its format
    pub fn complex(mut self, name: impl Into<String>, format: ComplexFormat) -> Self {
        let property = ComplexProperty::new(name, format);
        match self.complex.iter_mut().find(|c| c.name == property.name) {
            Some(existing) => existing.format = property.format,
            None => self.complex.push(property),
        }
        self
    }

    /// True when the key never goes through the simple passes
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded.iter().any(|e| e == key) || self.complex.iter().any(|c| c.name == key)
    }

    pub fn is_quoted(&self, key: &str) -> bool {
        self.quoted.iter().any(|q| q == key)
    }
}

/// Format a simple `key: value;` statement
///
/// Returns `None` when either the key or the value is empty; callers skip
/// the property rather than treating it as an error.
///
/// # Example
///
/// ```rust
/// use unicorn_options::simple_property;
///
/// assert_eq!(
///     simple_property("$uni-btn-height", "32px", false).as_deref(),
///     Some("$uni-btn-height: 32px;")
/// );
/// assert_eq!(
///     simple_property("$uni-btn-namespace", ".button", true).as_deref(),
///     Some("$uni-btn-namespace: '.button';")
/// );
/// assert_eq!(simple_property("$uni-btn-height", "", false), None);
/// ```
pub fn simple_property(key: &str, value: &str, quoted: bool) -> Option<String> {
    if key.is_empty() || value.is_empty() {
        return None;
    }
    if quoted {
        Some(format!("{key}: '{value}';"))
    } else {
        Some(format!("{key}: {value};"))
    }
}

/// Serialize a configuration into a [`ModuleDocument`]
///
/// # Example
///
/// ```rust
/// use unicorn_options::{serialize, ConfigRecord, ConfigValue, SerializationRules};
///
/// let mut config = ConfigRecord::new();
/// config.insert("$uni-btn-height".into(), ConfigValue::from("32px"));
/// config.insert("$uni-btn-namespace".into(), ConfigValue::from(".button"));
///
/// let rules = SerializationRules::default().quote("$uni-btn-namespace");
/// let document = serialize(&config, &rules, "buttons");
///
/// assert_eq!(document.name, "buttons");
/// assert_eq!(
///     document.body,
///     "$uni-btn-height: 32px;\n$uni-btn-namespace: '.button';"
/// );
/// ```
pub fn serialize(
    config: &ConfigRecord,
    rules: &SerializationRules,
    module: &str,
) -> ModuleDocument {
    let lines = serialize_lines(config, rules);
    debug!(module, lines = lines.len(), "serialized module options");
    ModuleDocument {
        name: module.to_string(),
        body: lines.join("\n"),
    }
}

/// Produce the ordered statements without joining them
pub fn serialize_lines(config: &ConfigRecord, rules: &SerializationRules) -> Vec<String> {
    let simple: Vec<(&String, &ConfigValue)> = config
        .iter()
        .filter(|(key, _)| !rules.is_excluded(key))
        .collect();

    let mut lines = Vec::with_capacity(config.len());

    // Unquoted first, then quoted
    for quoted in [false, true] {
        for (key, value) in simple.iter().filter(|(key, _)| rules.is_quoted(key) == quoted) {
            match simple_property(key, &value.simple_text(), quoted) {
                Some(line) => lines.push(line),
                None => debug!(key = %key, "skipping empty property"),
            }
        }
    }

    // `complex` is public, so a name may have been pushed twice
    let mut emitted: Vec<&str> = Vec::with_capacity(rules.complex.len());
    for property in &rules.complex {
        if emitted.contains(&property.name.as_str()) {
            debug!(key = %property.name, "complex property declared twice, keeping the first");
            continue;
        }
        emitted.push(&property.name);
        lines.push(complex_property(property, config.get(&property.name)));
    }

    lines
}

fn complex_property(property: &ComplexProperty, value: Option<&ConfigValue>) -> String {
    let mut out = format!("{}: ", property.name);

    match (property.format, value) {
        (ComplexFormat::ActionMap, Some(ConfigValue::ActionMap(actions))) => {
            for (name, colors) in actions {
                out.push_str(&format!("('{name}' {colors}) "));
            }
        }
        (ComplexFormat::QuotedList, Some(ConfigValue::OrderedList(items))) => {
            for item in items {
                out.push_str(&format!("'{item}' "));
            }
        }
        (_, None) => debug!(key = %property.name, "complex property missing, emitting empty body"),
        (format, Some(other)) => warn!(
            key = %property.name,
            expected = ?format,
            found = other.kind(),
            "complex property has the wrong kind, emitting empty body"
        ),
    }

    out.push(';');
    out
}
