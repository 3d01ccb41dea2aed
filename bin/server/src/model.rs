use insta_agent_core::Fields;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of an agent call, kept as loose JSON so the action can be checked
/// before any field is interpreted.
#[derive(Debug)]
pub struct AgentRequest {
    body: Value,
}

impl AgentRequest {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes).map(|body| Self { body })
    }

    /// Raw action name; missing or non-string values come back empty.
    pub fn action_name(&self) -> &str {
        self.body
            .get("action")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Form fields; a missing `data` key means no fields were submitted.
    pub fn fields(&self) -> serde_json::Result<Fields> {
        match self.body.get("data") {
            Some(data) => Fields::deserialize(data),
            None => Ok(Fields::default()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AgentResponse {
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_name_tolerates_odd_shapes() {
        for (raw, expected) in [
            (r#"{"action":"schedule_post"}"#, "schedule_post"),
            (r#"{"action":42}"#, ""),
            (r#"{}"#, ""),
            (r#"[1,2]"#, ""),
        ] {
            let req = AgentRequest::from_slice(raw.as_bytes()).unwrap();
            assert_eq!(req.action_name(), expected, "{raw}");
        }
    }

    #[test]
    fn test_fields_default_only_when_data_missing() {
        let missing = AgentRequest::from_slice(br#"{"action":"x"}"#).unwrap();
        assert_eq!(missing.fields().unwrap(), Fields::default());

        let null = AgentRequest::from_slice(br#"{"action":"x","data":null}"#).unwrap();
        assert!(null.fields().is_err());

        let mistyped = AgentRequest::from_slice(br#"{"data":{"postTopic":5}}"#).unwrap();
        assert!(mistyped.fields().is_err());
    }

    #[test]
    fn test_from_slice_rejects_malformed_json() {
        assert!(AgentRequest::from_slice(b"{not json").is_err());
        assert!(AgentRequest::from_slice(b"").is_err());
    }
}
