use serde_json::{Map, Value};

/// Parse a request body based on Content-Type header.
///
/// JSON is assumed when no content type is given. A body that decodes to
/// something other than an object yields an empty submission, and so does an
/// empty body.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Map<String, Value>, String> {
    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/x-www-form-urlencoded") {
        return parse_form_urlencoded(body);
    }

    if !ct.contains("application/json") {
        return Err(format!("Unsupported content type: {ct}"));
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

/// Decode `a=1&b=2` pairs. A key seen more than once, or written as `key[]`,
/// becomes an array under `key`.
fn parse_form_urlencoded(body: &[u8]) -> Result<Map<String, Value>, String> {
    std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body) {
        let (key, forced_array) = match k.strip_suffix("[]") {
            Some(stripped) => (stripped.to_string(), true),
            None => (k.to_string(), false),
        };
        let value = Value::String(v.into_owned());

        match map.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if forced_array => {
                map.insert(key, Value::Array(vec![value]));
            }
            None => {
                map.insert(key, value);
            }
        }
    }

    Ok(map)
}
