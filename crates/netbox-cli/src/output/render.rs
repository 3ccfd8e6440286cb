//! Rendering of NetBox objects through the resource registry's field lists.

use colored::Colorize;
use netbox_core::Page;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::resources::Resource;

/// Longest cell printed in list tables
const MAX_CELL_WIDTH: usize = 40;

/// Placeholder for absent values
const EMPTY: &str = "-";

/// Collect the values at a dotted `path`. Arrays met on the way fan out, so
/// `tags.name` yields every tag name.
pub fn lookup<'v>(value: &'v Value, path: &str) -> Vec<&'v Value> {
    let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
    let mut found = Vec::new();
    collect(value, &segments, &mut found);
    found
}

fn collect<'v>(value: &'v Value, segments: &[&str], found: &mut Vec<&'v Value>) {
    match (segments.split_first(), value) {
        (_, Value::Array(items)) => {
            for item in items {
                collect(item, segments, found);
            }
        }
        (None, Value::Null) => {}
        (None, leaf) => found.push(leaf),
        (Some((head, rest)), Value::Object(map)) => {
            if let Some(child) = map.get(*head) {
                collect(child, rest, found);
            }
        }
        (Some(_), _) => {}
    }
}

/// Human text for one JSON value.
///
/// Nested objects are shown by their `display`, `name` or `label` member,
/// which every NetBox brief representation carries.
pub fn scalar(value: &Value) -> String {
    match value {
        Value::Null => EMPTY.to_string(),
        Value::String(s) if s.is_empty() => EMPTY.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(", "),
        Value::Object(map) => ["display", "name", "label", "value"]
            .iter()
            .find_map(|key| map.get(*key).filter(|v| !v.is_null()))
            .map_or_else(|| value.to_string(), scalar),
    }
}

/// Text of one field of `object`, `-` if absent.
pub fn field_text(object: &Value, path: &str) -> String {
    let values = lookup(object, path);
    if values.is_empty() {
        return EMPTY.to_string();
    }
    values.into_iter().map(scalar).collect::<Vec<_>>().join(", ")
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_CELL_WIDTH {
        let mut cut: String = text.chars().take(MAX_CELL_WIDTH - 1).collect();
        cut.push('…');
        cut
    } else {
        text.to_string()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Message for a list request that matched nothing.
pub fn not_found(resource: &Resource) -> String {
    format!("No {} found.", resource.plural).yellow().to_string()
}

/// Message for an ID lookup that matched nothing.
pub fn not_found_id(resource: &Resource, id: u64) -> String {
    format!("No {} found with ID {id}.", resource.singular)
        .yellow()
        .to_string()
}

/// Banner printed once the last page has been shown.
pub fn done_banner(resource: &Resource, total: u64) -> String {
    format!("Done: all {total} {} displayed.", resource.plural)
        .green()
        .bold()
        .to_string()
}

/// One page of a list as a table, or the "not found" message.
pub fn page(resource: &Resource, page: &Page<Value>) -> String {
    if page.results.is_empty() {
        return if page.count == 0 {
            not_found(resource)
        } else {
            "This page is empty.".dimmed().to_string()
        };
    }

    let mut builder = Builder::default();
    builder.push_record(resource.fields.iter().map(|f| f.label.bold().to_string()));
    for object in &page.results {
        builder.push_record(
            resource
                .fields
                .iter()
                .map(|f| truncate(&field_text(object, f.path))),
        );
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!(
        "{} {}\n{table}",
        capitalize(resource.plural).bold().underline(),
        format!("({} total, {} on this page)", page.count, page.results.len()).dimmed(),
    )
}

/// A single object as `Label  value` lines.
pub fn object(resource: &Resource, object: &Value) -> String {
    let width = resource
        .fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "{} {}\n",
        capitalize(resource.singular).bold(),
        format!("#{}", field_text(object, "id")).cyan()
    );

    for field in resource.fields {
        let text = field_text(object, field.path);
        let shown = if text == EMPTY {
            text.dimmed().to_string()
        } else {
            text
        };
        out.push_str(&format!(
            "  {}{} {shown}\n",
            field.label.bold(),
            " ".repeat(width - field.label.chars().count() + 1)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::find;
    use serde_json::json;

    fn device() -> Value {
        json!({
            "id": 17,
            "name": "ams1-edge-01",
            "device_type": {"id": 3, "display": "MX204", "model": "MX204"},
            "role": {"id": 1, "name": "Edge Router"},
            "site": {"id": 2, "name": "ams1"},
            "rack": null,
            "status": {"value": "active", "label": "Active"},
            "primary_ip": {"id": 9, "address": "192.0.2.1/32"},
            "serial": "",
            "tags": [{"name": "core"}, {"name": "bgp"}]
        })
    }

    #[test]
    fn test_lookup_nested_and_arrays() {
        let device = device();
        assert_eq!(field_text(&device, "site.name"), "ams1");
        assert_eq!(field_text(&device, "status.label"), "Active");
        assert_eq!(field_text(&device, "tags.name"), "core, bgp");
        assert_eq!(field_text(&device, "rack.name"), "-");
        assert_eq!(field_text(&device, "serial"), "-");
        assert_eq!(field_text(&device, "missing.path"), "-");
        assert_eq!(field_text(&device, "device_type"), "MX204");
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(scalar(&json!(true)), "yes");
        assert_eq!(scalar(&json!(1500)), "1500");
        assert_eq!(scalar(&json!({"value": "dcim.interface"})), "dcim.interface");
        assert_eq!(scalar(&json!({"x": 1})), r#"{"x":1}"#);
    }

    #[test]
    fn test_empty_page_renders_not_found() {
        let sites = find("sites").unwrap();
        let empty: Page<Value> = Page::default();
        assert!(page(sites, &empty).contains("No sites found."));
    }

    #[test]
    fn test_page_table_has_columns_and_rows() {
        let devices = find("devices").unwrap();
        let listing = Page {
            count: 31,
            next: Some("https://netbox.example.net/api/dcim/devices/?offset=1".into()),
            previous: None,
            results: vec![device()],
        };

        let text = page(devices, &listing);
        assert!(text.contains("Primary IP"));
        assert!(text.contains("ams1-edge-01"));
        assert!(text.contains("192.0.2.1/32"));
        assert!(text.contains("31 total, 1 on this page"));
    }

    #[test]
    fn test_object_listing() {
        let devices = find("devices").unwrap();
        let text = object(devices, &device());
        assert!(text.contains("#17"));
        assert!(text.contains("Edge Router"));
        assert!(text.contains("core, bgp"));
    }

    #[test]
    fn test_long_cells_truncated() {
        let long = "x".repeat(100);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_CELL_WIDTH);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_not_found_by_id() {
        let tenant = find("tenants").unwrap();
        assert!(not_found_id(tenant, 5).contains("No tenant found with ID 5."));
    }
}
