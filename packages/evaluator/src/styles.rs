//! Breakpoint-aware style composition.
//!
//! Element styles and responsive overrides are JSON attribute maps with
//! camelCase keys (`backgroundColor`). The projector needs CSS declarations,
//! so keys become kebab-case and values become strings.

use pagesmith_model::{AttributeMap, Breakpoint, Element};
use serde_json::Value;
use std::collections::BTreeMap;

/// `element.styles` overridden key-by-key by the layer for `breakpoint`
///
/// A `null` in the override layer removes the base declaration.
pub fn compose_styles(element: &Element, breakpoint: Breakpoint) -> BTreeMap<String, String> {
    let mut composed = BTreeMap::new();
    apply_layer(&mut composed, &element.styles);
    apply_layer(&mut composed, element.responsive.get(breakpoint));
    composed
}

fn apply_layer(target: &mut BTreeMap<String, String>, layer: &AttributeMap) {
    for (key, value) in layer {
        let property = camel_to_kebab(key);
        match css_value(value) {
            Some(css) => {
                target.insert(property, css);
            }
            None => {
                target.remove(&property);
            }
        }
    }
}

/// `backgroundColor` -> `background-color`; already-kebab keys pass through
pub fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// CSS text for a JSON value; `None` for null
pub fn css_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Human-readable text for a content value (generic renderer, captions)
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, display_value(v)))
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

/// Section padding for the theme's spacing scale
pub fn section_padding(spacing: &str, breakpoint: Breakpoint) -> String {
    let vertical = match spacing {
        "compact" => 40,
        "relaxed" => 96,
        _ => 64,
    };
    let vertical = match breakpoint {
        Breakpoint::Desktop => vertical,
        Breakpoint::Tablet => vertical * 3 / 4,
        Breakpoint::Mobile => vertical / 2,
    };
    format!("{}px 20px", vertical)
}

/// Column count for card grids
pub fn grid_columns(breakpoint: Breakpoint) -> usize {
    match breakpoint {
        Breakpoint::Desktop => 3,
        Breakpoint::Tablet => 2,
        Breakpoint::Mobile => 1,
    }
}
