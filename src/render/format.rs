//! Label and value formatting for report text.

use serde_json::Value;

/// Render a metric key as a display label: words split from snake, kebab
/// or camel case, lower-cased, first letter capitalized.
///
/// `pending_msg` → `Pending msg`, `taskExecutor` → `Task executor`.
pub fn field_label(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_was_lower = false;

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_was_lower = false;
        } else if ch.is_uppercase() && prev_was_lower {
            words.push(std::mem::take(&mut current));
            current.extend(ch.to_lowercase());
            prev_was_lower = false;
        } else {
            prev_was_lower = ch.is_lowercase() || ch.is_ascii_digit();
            current.extend(ch.to_lowercase());
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    let label = words.join(" ");
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => label,
    }
}

/// Render a metric value: floats with a fractional part fixed to two
/// decimals, strings bare, everything else in its JSON form.
pub fn field_value(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() != 0.0 => format!("{:.2}", f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
