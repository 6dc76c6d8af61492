//! Extraction of compiled stylesheets from compiler responses
//!
//! The options compiler answers a build request with a JSON object holding the
//! compiled module stylesheet under the module's name and the options
//! stylesheet under `optionsScss`:
//!
//! ```json
//! { "buttons": ".button { ... }", "optionsScss": "$uni-btn-height: 32px;" }
//! ```

use crate::types::StyleSheets;
use serde_json::Value;

/// Field holding the generated options stylesheet
pub const OPTIONS_FIELD: &str = "optionsScss";

/// Pull `{css, options}` out of a compiler response
///
/// Both fields must be present and non-empty strings; otherwise both come back
/// empty. A save may answer with no body at all, so `null` is accepted too.
///
/// # Example
///
/// ```rust
/// use unicorn_options::parse_response;
/// use serde_json::json;
///
/// let response = json!({"buttons": ".button{}", "optionsScss": "$a: 1;"});
/// let styles = parse_response(&response, "buttons");
/// assert_eq!(styles.css, ".button{}");
/// assert_eq!(styles.options, "$a: 1;");
///
/// let styles = parse_response(&json!({"buttons": ".button{}"}), "buttons");
/// assert!(styles.css.is_empty() && styles.options.is_empty());
/// ```
pub fn parse_response(response: &Value, module: &str) -> StyleSheets {
    let css = non_empty_str(response, module);
    let options = non_empty_str(response, OPTIONS_FIELD);

    match (css, options) {
        (Some(css), Some(options)) => StyleSheets {
            css: css.to_string(),
            options: options.to_string(),
        },
        _ => StyleSheets::default(),
    }
}

fn non_empty_str<'a>(response: &'a Value, field: &str) -> Option<&'a str> {
    response
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
