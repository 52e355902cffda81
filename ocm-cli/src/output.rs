//! Output formatting utilities for the OCM CLI

use colored::*;
use serde_json::Value;

/// Fields shown first, in this order, when an object is printed as text
const LEADING_FIELDS: &[&str] = &["id", "name", "username", "display_name", "key", "status"];

/// Format and print output based on the JSON flag
pub fn print_output(data: Value, json_format: bool) {
    if json_format {
        println!(
            "{}",
            serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        print!("{}", render_human_readable(&data));
    }
}

/// Render data in human-readable form
pub fn render_human_readable(data: &Value) -> String {
    let mut out = String::new();
    match data {
        Value::Object(map) => {
            for (key, value) in map {
                match key.as_str() {
                    "page" => render_page(&mut out, value),
                    "deleted" => {
                        out.push_str(&format!("{} {}\n", "Deleted".bold().green(), format_value(value)));
                    }
                    _ => {
                        out.push_str(&format!("{}\n", title(key).bold().green()));
                        render_object(&mut out, value, 1);
                    }
                }
            }
        }
        _ => out.push_str(&format!("{}\n", format_value(data))),
    }
    out
}

/// Render one page of a list response
fn render_page(out: &mut String, page: &Value) {
    let number = page.get("page").map(format_value).unwrap_or_default();
    let size = page.get("size").map(format_value).unwrap_or_default();
    let total = page.get("total").map(format_value).unwrap_or_default();
    out.push_str(&format!(
        "{} {} ({} of {} items)\n",
        "Page".bold().green(),
        number,
        size,
        total
    ));

    let items = page.get("items").and_then(Value::as_array);
    match items {
        Some(items) if !items.is_empty() => {
            for item in items {
                out.push_str(&format!("  {} {}\n", "-".cyan(), summary(item)));
            }
        }
        _ => out.push_str(&format!("  {}\n", "no items".dimmed())),
    }
}

/// Render the fields of an object, nested objects indented below their key
fn render_object(out: &mut String, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    let Value::Object(map) = value else {
        out.push_str(&format!("{}{}\n", indent, format_value(value)));
        return;
    };

    let leading = LEADING_FIELDS.iter().filter_map(|k| map.get_key_value(*k));
    let rest = map
        .iter()
        .filter(|(k, _)| *k != "kind" && !LEADING_FIELDS.contains(&k.as_str()));

    for (key, value) in leading.chain(rest) {
        match value {
            Value::Object(_) => {
                out.push_str(&format!("{}{}:\n", indent, key.cyan()));
                render_object(out, value, depth + 1);
            }
            Value::Array(items) if items.iter().any(Value::is_object) => {
                out.push_str(&format!("{}{}:\n", indent, key.cyan()));
                for item in items {
                    out.push_str(&format!("{}  {} {}\n", indent, "-".cyan(), summary(item)));
                }
            }
            _ => out.push_str(&format!("{}{}: {}\n", indent, key.cyan(), format_value(value))),
        }
    }
}

/// One-line summary of a list item
fn summary(item: &Value) -> String {
    let Value::Object(map) = item else {
        return format_value(item);
    };

    let parts: Vec<String> = LEADING_FIELDS
        .iter()
        .chain(["quota_id", "value", "allowed", "consumed"].iter())
        .filter_map(|k| map.get(*k).map(|v| format!("{}={}", k, format_value(v))))
        .collect();

    if parts.is_empty() {
        serde_json::to_string(item).unwrap_or_else(|_| "{}".to_string())
    } else {
        parts.join(" ")
    }
}

/// Turn a snake_case key into a heading
fn title(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Format a JSON value for human-readable output
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => format!(
            "[{}]",
            arr.iter().map(format_value).collect::<Vec<_>>().join(", ")
        ),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string()),
    }
}
