use serde_json::Value;

/// Renders a JSON value the way it would read in a message: strings without
/// quotes, scalars as text, containers as compact JSON.
pub fn value_to_string(value: &Value) -> String {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    };
    strip_control_chars(raw)
}

fn strip_control_chars(s: String) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_render_as_plain_text() {
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!("timeout")), "timeout");
        assert_eq!(value_to_string(&json!(false)), "false");
        assert_eq!(value_to_string(&Value::Null), "null");
    }

    #[test]
    fn containers_render_as_json_without_control_chars() {
        assert_eq!(value_to_string(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
        assert_eq!(value_to_string(&json!("line\nbreak")), "linebreak");
    }
}
