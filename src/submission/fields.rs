use serde_json::{Map, Value};

/// Fields every submission must carry, checked in this order.
pub const REQUIRED_FIELDS: [&str; 14] = [
    "businessName",
    "contactName",
    "email",
    "phone",
    "role",
    "goLiveDate",
    "primaryGoal",
    "currentTools",
    "leadSources",
    "paymentModel",
    "numberOfUsers",
    "customerUpdates",
    "budgetRange",
    "decisionMaker",
];

pub const PRIORITIES_FIELD: &str = "priorities";
pub const MIN_PRIORITIES: usize = 1;
pub const MAX_PRIORITIES: usize = 6;

pub const PRIORITIES_MESSAGE: &str = "Priorities must be an array with 1-6 items";

/// Whether a value counts as filled in.
///
/// Strings must contain something besides whitespace. Numbers always count,
/// so `0` is a valid answer. `false` and `null` do not count. Arrays and
/// objects count even when empty.
///
/// Booleans follow form falsiness: an unticked `false` is absent
/// even though it is a defined, non-null value.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(_)) | Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// First required field that is not present, in declaration order.
pub fn first_missing(data: &Map<String, Value>) -> Option<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .find(|name| !is_present(data.get(*name)))
}

pub fn priorities_valid(data: &Map<String, Value>) -> bool {
    match data.get(PRIORITIES_FIELD) {
        Some(Value::Array(items)) => (MIN_PRIORITIES..=MAX_PRIORITIES).contains(&items.len()),
        _ => false,
    }
}

/// Check a submission. Returns the caller-facing message of the first rule
/// it breaks.
pub fn validate(data: &Map<String, Value>) -> Result<(), String> {
    if let Some(name) = first_missing(data) {
        return Err(format!("Missing required field: {name}"));
    }

    if !priorities_valid(data) {
        return Err(PRIORITIES_MESSAGE.to_string());
    }

    Ok(())
}
