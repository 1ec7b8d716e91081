use serde_json::Value;

/// An incoming booking submission. Ephemeral: the service validates field
/// presence, acknowledges, and never stores it.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    /// Kept as received; never resolved against the catalog.
    pub doctor_id: String,
}

const REQUIRED_FIELDS: [&str; 5] = ["name", "email", "date", "time", "doctorId"];

impl BookingRequest {
    /// Extracts a booking from a raw JSON body.
    ///
    /// Presence is judged the way the browser client's runtime judges
    /// truthiness: absent, `null`, `false`, `0` and `""` all count as
    /// missing. Returns `None` when any of the five required fields is
    /// missing; no further type checks are applied.
    pub fn from_value(body: &Value) -> Option<Self> {
        if REQUIRED_FIELDS.iter().any(|f| !truthy(body.get(*f))) {
            return None;
        }

        Some(Self {
            name: text(&body["name"]),
            email: text(&body["email"]),
            date: text(&body["date"]),
            time: text(&body["time"]),
            doctor_id: text(&body["doctorId"]),
        })
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
