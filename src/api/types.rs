// API type definitions module
// Request/response shapes for the message endpoints

use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;

/// Body of `POST /receive_text/`
///
/// The `message` field is optional in the payload; a missing field is
/// treated the same as an empty string and fails validation downstream.
#[derive(Debug, Deserialize)]
pub struct ReceiveTextRequest {
    #[serde(default)]
    pub message: String,
}

/// Body of the `POST /receive_text/` response
///
/// Serializes to `{"status":"success","received":...}` or
/// `{"status":"error","detail":...}`. Validation failures keep HTTP 200
/// and signal the outcome through `status` only; existing clients key
/// off the body field, not the status code.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReceiveOutcome {
    Success { received: String },
    Error { detail: String },
}

impl ReceiveOutcome {
    /// The fixed validation-failure body for empty submissions
    pub fn no_text() -> Self {
        Self::Error {
            detail: "No text received".to_string(),
        }
    }
}

/// Body of the `GET /get_messages/` response
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<MessageRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::AslMatch;

    #[test]
    fn test_request_message_field_is_optional() {
        let parsed: ReceiveTextRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.message, "");

        let parsed: ReceiveTextRequest =
            serde_json::from_str(r#"{"message": "hello you"}"#).unwrap();
        assert_eq!(parsed.message, "hello you");
    }

    #[test]
    fn test_success_wire_shape() {
        let outcome = ReceiveOutcome::Success {
            received: "hello how are you".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "success", "received": "hello how are you"})
        );
    }

    #[test]
    fn test_error_wire_shape() {
        let json = serde_json::to_value(ReceiveOutcome::no_text()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "error", "detail": "No text received"})
        );
    }

    #[test]
    fn test_messages_wire_shape() {
        let response = MessagesResponse {
            messages: vec![MessageRecord {
                text: "hello".to_string(),
                asl: vec![AslMatch {
                    word: "hello".to_string(),
                    video: "/static/hello.mp4".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "messages": [{
                    "text": "hello",
                    "asl": [{"word": "hello", "video": "/static/hello.mp4"}]
                }]
            })
        );
    }
}
