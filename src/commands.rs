use crate::cli::OutputFormat;
use anyhow::Context;
use std::path::Path;
use unicorn_options::{
    load_edits, merge_edits, parse_assignment, query_properties, ConfigRecord, MergeOptions,
    ModuleRegistry,
};

/// List registered module names
pub fn list_modules(registry: &ModuleRegistry) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&registry.names())?;
    println!("{}", json);
    Ok(())
}

/// Print a module's defaults, optionally filtered by glob patterns
pub fn show_defaults(
    registry: &ModuleRegistry,
    module: &str,
    query_patterns: &[&str],
) -> anyhow::Result<()> {
    let model = registry
        .get(module)
        .context("Use 'unicorn modules' to see available modules")?;

    let defaults = model.defaults();
    let output = if query_patterns.is_empty() {
        defaults
    } else {
        query_properties(&defaults, query_patterns)
            .map_err(|e| anyhow::anyhow!("Failed to apply query: {}", e))?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Merge edits into a module's defaults and generate its options document
pub fn generate(
    registry: &ModuleRegistry,
    module: &str,
    edits_path: Option<&Path>,
    assignments: &[String],
    strict: bool,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let model = registry
        .get(module)
        .context("Use 'unicorn modules' to see available modules")?;

    let mut edits = match edits_path {
        Some(path) => load_edits(path)
            .with_context(|| format!("Failed to load edits from {}", path.display()))?,
        None => ConfigRecord::new(),
    };
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        edits.insert(key, value);
    }

    let options = MergeOptions {
        allow_unknown_keys: !strict,
    };
    let config = merge_edits(model, edits, &options)?;
    let document = model
        .generate(&config)
        .with_context(|| format!("Failed to generate options for '{}'", module))?;

    let rendered = match format {
        OutputFormat::Body => document.body,
        OutputFormat::Json => serde_json::to_string_pretty(&document)?,
        OutputFormat::Payload => serde_json::to_string_pretty(&document.to_payload())?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(module, path = %path.display(), "wrote options");
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Print the build route for a module
pub fn show_endpoint(
    registry: &ModuleRegistry,
    module: &str,
    base_url: &str,
) -> anyhow::Result<()> {
    let model = registry.get(module)?;
    println!("{}", model.endpoint(base_url));
    Ok(())
}

/// Extract `{css, options}` from a saved build response
pub fn parse_response_file(
    registry: &ModuleRegistry,
    module: &str,
    path: &Path,
) -> anyhow::Result<()> {
    let model = registry.get(module)?;
    let content = std::fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read response at {}: {e}. Make sure the file exists and is readable.",
            path.display()
        )
    })?;
    let response: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let styles = model.parse(&response);
    if styles.css.is_empty() {
        tracing::warn!(module, "response holds no compiled stylesheets");
    }
    println!("{}", serde_json::to_string_pretty(&styles)?);
    Ok(())
}
