use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: unwrap the result envelope, prefer the forecast summary when
/// present, then look for well-known result fields in order of priority,
/// falling back to the first field of the object.
pub fn print_minimal(value: &Value) {
    // Try to extract the "result" envelope
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // A forecast's headline number lives on its summary
    let result_obj = result_obj
        .as_object()
        .and_then(|m| m.get("summary"))
        .unwrap_or(result_obj);

    // Priority list of key output fields
    let priority_keys = [
        "total_expected",
        "next_30_days",
        "next_60_days",
        "next_90_days",
        "risk_amount",
        "high_probability_amount",
        "expected",
    ];

    if let Value::Object(map) = result_obj {
        // Try priority keys first (skip null values)
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
