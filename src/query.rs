use crate::error::{Error, Result};
use crate::types::ConfigRecord;
use glob::Pattern;

/// Select the properties whose name matches at least one glob pattern
///
/// Every pattern is compiled before any property is looked at, so a bad
/// pattern fails the whole query. Matches keep their record order.
pub fn query_properties(config: &ConfigRecord, patterns: &[&str]) -> Result<ConfigRecord> {
    let compiled_patterns = patterns
        .iter()
        .map(|p| compile_pattern(p))
        .collect::<Result<Vec<_>>>()?;

    let mut queried = ConfigRecord::new();
    for (key, value) in config {
        // keep if ANY pattern matches
        if compiled_patterns.iter().any(|pattern| pattern.matches(key)) {
            queried.insert(key.clone(), value.clone());
        }
    }
    Ok(queried)
}

fn compile_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| Error::InvalidGlobPattern(format!("'{pattern}': {e}")))
}
