//! Value codec
//!
//! Manufactures literal source text for new values. Existing source values
//! are never evaluated; they stay opaque text in the scan result.

use serde_json::{Number, Value};

/// Render a value as dialect literal text
///
/// With `raw` set and a string value, the string is returned unmodified and
/// the caller is responsible for it being a valid expression. Every other
/// value is exported as a literal:
///
/// - `true` / `false` / `NULL`
/// - numbers in canonical decimal form (`42`, `1.5`)
/// - strings single-quoted with `\` and `'` escaped
/// - lists and maps as one-line `array ( KEY => VALUE, ... )`, maps in
///   insertion order
///
/// # Examples
/// ```
/// # use wpconf_dialect::render;
/// # use serde_json::json;
/// assert_eq!(render(&json!("wp_"), false), "'wp_'");
/// assert_eq!(render(&json!("wp_"), true), "wp_");
/// assert_eq!(render(&json!([1, "a"]), false), "array ( 0 => 1, 1 => 'a' )");
/// ```
#[must_use]
pub fn render(value: &Value, raw: bool) -> String {
    match value {
        Value::String(s) if raw => s.clone(),
        _ => {
            let mut out = String::new();
            write_value(&mut out, value);
            out
        }
    }
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, n),
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push_str("array (");
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push(' ');
                out.push_str(&index.to_string());
                out.push_str(" => ");
                write_value(out, item);
            }
            out.push_str(" )");
        }
        Value::Object(map) => {
            out.push_str("array (");
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push(' ');
                write_string(out, key);
                out.push_str(" => ");
                write_value(out, item);
            }
            out.push_str(" )");
        }
    }
}

fn write_number(out: &mut String, n: &Number) {
    // serde_json keeps a fractional part on floats ("1.0"), so integers and
    // floats stay distinguishable in the output.
    out.push_str(&n.to_string());
}

fn write_string(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
}
