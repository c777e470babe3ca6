//! Intent payload codec
//!
//! Chat buttons carry either a plain canned string ("Yes, please.") or a
//! parameterized intent of the form `/verb{json}`. Before sending, the
//! recognized keys of a parameterized payload are substituted with the
//! session's active resource and, for reason-bearing payloads, the user's
//! freshly typed message.

use serde_json::{Map, Value};
use tracing::warn;

/// Verb carried by reason-bearing draft submissions
pub const SEND_VERB: &str = "/send";

/// Recognized payload keys
const KEY_RESOURCE_ID: &str = "resource_id";
const KEY_RESOURCE_TYPE: &str = "resource_type";
const KEY_REASON: &str = "reason";

/// The pack or role the chat surface is currently scoped to.
///
/// When both are set the pack takes precedence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveResource {
    pub pack_id: Option<i64>,
    pub role_id: Option<i64>,
}

impl ActiveResource {
    pub fn resource_id(&self) -> Option<i64> {
        self.pack_id.or(self.role_id)
    }

    pub fn resource_type(&self) -> &'static str {
        if self.pack_id.is_some() {
            "PACK"
        } else {
            "ROLE"
        }
    }
}

/// A decoded chat intent
#[derive(Debug, Clone, PartialEq)]
pub enum IntentPayload {
    /// A canned choice, passed through unchanged
    Plain(String),
    /// A `/verb{json}` command with a JSON object argument
    Parameterized {
        verb: String,
        args: Map<String, Value>,
    },
}

impl IntentPayload {
    /// Decode a raw payload string.
    ///
    /// A string is parameterized iff it starts with `/` and contains `{`.
    /// Malformed JSON after the brace degrades to `Plain` rather than
    /// failing the compose surface.
    pub fn decode(raw: &str) -> Self {
        if !raw.starts_with('/') {
            return IntentPayload::Plain(raw.to_string());
        }
        let Some(brace) = raw.find('{') else {
            return IntentPayload::Plain(raw.to_string());
        };

        let (verb, json) = raw.split_at(brace);
        match serde_json::from_str::<Map<String, Value>>(json) {
            Ok(args) => IntentPayload::Parameterized {
                verb: verb.to_string(),
                args,
            },
            Err(e) => {
                warn!(payload = raw, error = %e, "Malformed intent payload, treating as plain");
                IntentPayload::Plain(raw.to_string())
            }
        }
    }

    /// Re-serialize the payload to its wire string
    pub fn encode(&self) -> String {
        match self {
            IntentPayload::Plain(s) => s.clone(),
            IntentPayload::Parameterized { verb, args } => {
                format!("{}{}", verb, Value::Object(args.clone()))
            }
        }
    }

    /// Verb prefix of a parameterized payload
    pub fn verb(&self) -> Option<&str> {
        match self {
            IntentPayload::Plain(_) => None,
            IntentPayload::Parameterized { verb, .. } => Some(verb),
        }
    }
}

/// Build the payload string actually sent to the backend.
///
/// Plain payloads pass through unchanged. For parameterized payloads the
/// recognized keys are substituted in order: `resource_id` takes the
/// active pack or role id, `resource_type` takes "PACK"/"ROLE", and
/// `reason` takes the user's freshly typed message. Unrecognized keys
/// pass through untouched.
pub fn create_payload(raw: &str, active: &ActiveResource, message: &str) -> String {
    let payload = IntentPayload::decode(raw);
    let IntentPayload::Parameterized { verb, mut args } = payload else {
        return raw.to_string();
    };

    if args.contains_key(KEY_RESOURCE_ID) {
        let id = active
            .resource_id()
            .map(Value::from)
            .unwrap_or(Value::Null);
        args.insert(KEY_RESOURCE_ID.to_string(), id);
    }

    if args.contains_key(KEY_RESOURCE_TYPE) {
        args.insert(
            KEY_RESOURCE_TYPE.to_string(),
            Value::from(active.resource_type()),
        );
    }

    if args.contains_key(KEY_REASON) {
        args.insert(KEY_REASON.to_string(), Value::from(message));
    }

    IntentPayload::Parameterized { verb, args }.encode()
}

/// Build the fixed draft-mode submission payload
pub fn reason_payload(message: &str) -> String {
    let mut args = Map::new();
    args.insert(KEY_REASON.to_string(), Value::from(message));
    IntentPayload::Parameterized {
        verb: SEND_VERB.to_string(),
        args,
    }
    .encode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain() {
        assert_eq!(
            IntentPayload::decode("Yes, please."),
            IntentPayload::Plain("Yes, please.".to_string())
        );
    }

    #[test]
    fn test_decode_parameterized() {
        let payload = IntentPayload::decode("/send{\"reason\": \"\"}");
        match payload {
            IntentPayload::Parameterized { verb, args } => {
                assert_eq!(verb, "/send");
                assert_eq!(args.get("reason"), Some(&Value::from("")));
            }
            IntentPayload::Plain(_) => panic!("expected parameterized payload"),
        }
    }

    #[test]
    fn test_slash_without_brace_is_plain() {
        assert_eq!(
            IntentPayload::decode("/help"),
            IntentPayload::Plain("/help".to_string())
        );
    }

    #[test]
    fn test_brace_without_slash_is_plain() {
        assert_eq!(
            IntentPayload::decode("see {docs}"),
            IntentPayload::Plain("see {docs}".to_string())
        );
    }

    #[test]
    fn test_malformed_json_degrades_to_plain() {
        let payload = IntentPayload::decode("/send{reason: oops");
        assert_eq!(payload, IntentPayload::Plain("/send{reason: oops".to_string()));
    }

    #[test]
    fn test_create_payload_substitutes_reason() {
        let active = ActiveResource::default();
        let out = create_payload(
            "/request{\"reason\": \"placeholder\"}",
            &active,
            "need access",
        );
        let decoded = IntentPayload::decode(&out);
        match decoded {
            IntentPayload::Parameterized { verb, args } => {
                assert_eq!(verb, "/request");
                assert_eq!(args.get("reason"), Some(&Value::from("need access")));
            }
            IntentPayload::Plain(_) => panic!("expected parameterized payload"),
        }
    }

    #[test]
    fn test_create_payload_pack_precedence() {
        let active = ActiveResource {
            pack_id: Some(11),
            role_id: Some(22),
        };
        let out = create_payload(
            "/grant{\"resource_id\": 0, \"resource_type\": \"\"}",
            &active,
            "",
        );
        let decoded = IntentPayload::decode(&out);
        match decoded {
            IntentPayload::Parameterized { args, .. } => {
                assert_eq!(args.get("resource_id"), Some(&Value::from(11)));
                assert_eq!(args.get("resource_type"), Some(&Value::from("PACK")));
            }
            IntentPayload::Plain(_) => panic!("expected parameterized payload"),
        }
    }

    #[test]
    fn test_create_payload_role_fallback() {
        let active = ActiveResource {
            pack_id: None,
            role_id: Some(22),
        };
        let out = create_payload(
            "/grant{\"resource_id\": 0, \"resource_type\": \"\"}",
            &active,
            "",
        );
        let decoded = IntentPayload::decode(&out);
        match decoded {
            IntentPayload::Parameterized { args, .. } => {
                assert_eq!(args.get("resource_id"), Some(&Value::from(22)));
                assert_eq!(args.get("resource_type"), Some(&Value::from("ROLE")));
            }
            IntentPayload::Plain(_) => panic!("expected parameterized payload"),
        }
    }

    #[test]
    fn test_create_payload_plain_passthrough() {
        let active = ActiveResource::default();
        assert_eq!(create_payload("Yes, please.", &active, "msg"), "Yes, please.");
    }

    #[test]
    fn test_create_payload_unrecognized_keys_untouched() {
        let active = ActiveResource {
            pack_id: Some(1),
            role_id: None,
        };
        let out = create_payload("/noop{\"other\": 5}", &active, "msg");
        let decoded = IntentPayload::decode(&out);
        match decoded {
            IntentPayload::Parameterized { args, .. } => {
                assert_eq!(args.get("other"), Some(&Value::from(5)));
                assert!(!args.contains_key("reason"));
            }
            IntentPayload::Plain(_) => panic!("expected parameterized payload"),
        }
    }

    #[test]
    fn test_reason_payload_shape() {
        let out = reason_payload("need access");
        let decoded = IntentPayload::decode(&out);
        assert_eq!(decoded.verb(), Some(SEND_VERB));
        match decoded {
            IntentPayload::Parameterized { args, .. } => {
                assert_eq!(args.get("reason"), Some(&Value::from("need access")));
            }
            IntentPayload::Plain(_) => panic!("expected parameterized payload"),
        }
    }
}
