use serde_json::Value;

/// Print just the key answer figure from the output.
///
/// Heuristic: the projection nests its headline figures under `summary`,
/// so descend there first, then try well-known fields in priority order,
/// then fall back to the first field.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let target = result
        .as_object()
        .and_then(|m| m.get("summary"))
        .unwrap_or(result);

    let priority_keys = [
        "gross_yield_pct",
        "net_yield_pct",
        "break_even_month",
        "total_investment",
        "periodic_payment",
    ];

    if let Value::Object(map) = target {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(target));
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
