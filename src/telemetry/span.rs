use serde::Serialize;

use super::Attributes;

/// A span in the vendor wire model.
///
/// `id` and `trace_id` are always present; `parent_id` is absent for root
/// spans and `name` is absent when the source span had an empty name.
/// `timestamp` is integer milliseconds since epoch; `duration_ms` is
/// fractional milliseconds so sub-millisecond resolution survives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    pub id: String,
    #[serde(rename = "trace.id")]
    pub trace_id: String,
    #[serde(rename = "parent.id", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub timestamp: i64,
    #[serde(rename = "duration.ms")]
    pub duration_ms: f64,
    pub attributes: Attributes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_json_omits_absent_parent_and_name() {
        let span = Span {
            id: "0000000000000001".into(),
            trace_id: "00000000000000000000000000000001".into(),
            parent_id: None,
            name: None,
            timestamp: 1000,
            duration_ms: 2.5,
            attributes: Attributes::new(),
        };

        let json = serde_json::to_value(&span).unwrap();
        assert_eq!(json["id"], "0000000000000001");
        assert_eq!(json["trace.id"], "00000000000000000000000000000001");
        assert_eq!(json["duration.ms"], 2.5);
        assert!(json.get("parent.id").is_none());
        assert!(json.get("name").is_none());
    }
}
