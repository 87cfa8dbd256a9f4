//! Query command implementation.
//!
//! Emits the resolved configuration as JSON - the hand-off point for the
//! external rendering framework. Output key order follows the config
//! structure, and sidebar order is preserved exactly.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::log;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let resolved = serde_json::to_value(config)?;

    let output = match &args.fields {
        Some(fields) => filter_fields(&resolved, fields),
        None => resolved,
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Filter to specific top-level sections.
///
/// A field that was requested but doesn't exist shows as null, so callers
/// notice the typo instead of silently missing data.
fn filter_fields(resolved: &JsonValue, fields: &[String]) -> JsonValue {
    let mut obj = Map::new();

    if let JsonValue::Object(src) = resolved {
        for field in fields {
            let value = src.get(field).cloned().unwrap_or(JsonValue::Null);
            obj.insert(field.clone(), value);
        }
    }

    JsonValue::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_resolved_sections() {
        let config = test_parse_config("");
        let resolved = serde_json::to_value(&config).unwrap();

        let obj = resolved.as_object().unwrap();
        assert!(obj.contains_key("site"));
        assert!(obj.contains_key("nav"));
        assert!(obj.contains_key("theme"));
        assert!(obj.contains_key("serve"));
        // Internal paths are not exposed
        assert!(!obj.contains_key("config_path"));
        assert!(!obj.contains_key("root"));
    }

    #[test]
    fn test_serve_passthrough_unchanged() {
        let config = test_parse_config("[serve]\nport = 4321\nhost = true");
        let resolved = serde_json::to_value(&config).unwrap();

        assert_eq!(resolved["serve"]["port"], 4321);
        assert_eq!(resolved["serve"]["host"], true);
    }

    #[test]
    fn test_sidebar_order_preserved_in_json() {
        let config = test_parse_config(
            r#"[nav]
sidebar = [
    { label = "Introduction", items = [
        "introduction/overview",
        "introduction/getting-started",
    ] },
]"#,
        );
        let resolved = serde_json::to_value(&config).unwrap();

        let items = resolved["nav"]["sidebar"][0]["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], "introduction/overview");
        assert_eq!(items[1], "introduction/getting-started");
    }

    #[test]
    fn test_filter_fields() {
        let config = test_parse_config("");
        let resolved = serde_json::to_value(&config).unwrap();

        let filtered = filter_fields(&resolved, &["serve".into(), "bogus".into()]);
        let obj = filtered.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj["serve"].is_object());
        assert!(obj["bogus"].is_null());
    }
}
