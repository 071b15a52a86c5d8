//! Query command implementation.
//!
//! Dumps the resolved configuration (and sidebars, when present) as
//! JSON for scripting and editor tooling.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::sidebar::SidebarConfig;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let sidebars = load_sidebars(config);
    let output = collect(config, sidebars.as_ref(), args)?;

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Sidebars are optional for query; a missing file just omits the section.
fn load_sidebars(config: &SiteConfig) -> Option<SidebarConfig> {
    let path = config.sidebars_path();
    if !path.exists() {
        return None;
    }
    match SidebarConfig::from_path(&path) {
        Ok(sidebars) => Some(sidebars),
        Err(e) => {
            log!("warning"; "skipping sidebars: {}", e);
            None
        }
    }
}

/// Assemble the JSON document: site, build, presets, sidebars.
fn collect(
    config: &SiteConfig,
    sidebars: Option<&SidebarConfig>,
    args: &QueryArgs,
) -> Result<JsonValue> {
    let mut obj = Map::new();

    obj.insert("site".to_string(), serde_json::to_value(&config.site)?);
    obj.insert("build".to_string(), serde_json::to_value(&config.build)?);
    obj.insert(
        "presets".to_string(),
        serde_json::to_value(&config.presets)?,
    );

    // Resolved urls: site root and docs root
    let info = &config.site.info;
    let mut urls = Map::new();
    urls.insert(
        "site".to_string(),
        JsonValue::String(crate::core::join_base(
            info.url.as_deref(),
            &info.base_url,
            "",
        )),
    );
    urls.insert(
        "docs".to_string(),
        JsonValue::String(config.docs_root_url()),
    );
    obj.insert("urls".to_string(), JsonValue::Object(urls));

    if let Some(sidebars) = sidebars {
        // Sorted ids for deterministic output
        let mut sidebar_obj = Map::new();
        for id in sidebars.ids() {
            sidebar_obj.insert(id.to_string(), serde_json::to_value(&sidebars.sidebars[id])?);
        }
        obj.insert("sidebars".to_string(), JsonValue::Object(sidebar_obj));
    }

    let mut output = if let Some(ref fields) = args.fields {
        filter_fields(obj, fields)
    } else {
        JsonValue::Object(obj)
    };

    if args.filter_empty {
        filter_empty_values(&mut output);
    }

    Ok(output)
}

/// Filter to specific top-level sections.
fn filter_fields(obj: Map<String, JsonValue>, fields: &[String]) -> JsonValue {
    let mut filtered = Map::new();
    for field in fields {
        match obj.get(field) {
            Some(value) => {
                filtered.insert(field.clone(), value.clone());
            }
            // Field explicitly requested but doesn't exist - show null
            None => {
                filtered.insert(field.clone(), JsonValue::Null);
            }
        }
    }
    JsonValue::Object(filtered)
}

/// Recursively drop null/empty-string/empty-array values from objects.
fn filter_empty_values(value: &mut JsonValue) {
    match value {
        JsonValue::Object(obj) => {
            for v in obj.values_mut() {
                filter_empty_values(v);
            }
            obj.retain(|_, v| !is_empty_value(v));
        }
        JsonValue::Array(arr) => {
            for v in arr.iter_mut() {
                filter_empty_values(v);
            }
        }
        _ => {}
    }
}

/// Check if a JSON value is considered "empty" (null, "", or [])
fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(arr) => arr.is_empty(),
        _ => false,
    }
}
