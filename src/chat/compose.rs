//! Compose form state machine
//!
//! The chat surface shows either a single-line input (Normal) or a
//! multi-line draft area (Draft). The mode is derived per received batch
//! from the first button payload of the most recent message: a
//! parameterized `/send` intent switches the form into Draft. Submitting a
//! draft always produces the fixed `/send{"reason": ...}` payload and
//! flags a refresh for the next receive.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::intent::{self, ActiveResource, IntentPayload, SEND_VERB};

/// A button attached to a chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatButton {
    pub title: String,
    pub payload: String,
}

/// A message received from the approval chat surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub buttons: Vec<ChatButton>,
}

/// Input mode of the hosting form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeMode {
    /// Single-line input; buttons create payloads and send immediately
    Normal,
    /// Multi-line draft area; submission carries a free-text reason
    Draft,
}

/// Per-turn compose state for the chat approval surface
#[derive(Debug, Clone)]
pub struct ComposeForm {
    mode: ComposeMode,
    active: ActiveResource,
    refresh_on_receive: bool,
}

impl ComposeForm {
    pub fn new(active: ActiveResource) -> Self {
        Self {
            mode: ComposeMode::Normal,
            active,
            refresh_on_receive: false,
        }
    }

    pub fn mode(&self) -> ComposeMode {
        self.mode
    }

    pub fn set_active(&mut self, active: ActiveResource) {
        self.active = active;
    }

    /// Inspect a newly received message batch and derive the input mode.
    ///
    /// Only the first button payload of the most recent message is
    /// consulted; any lookup failure (no messages, no buttons) means
    /// Normal, silently.
    pub fn on_receive(&mut self, batch: &[ChatMessage]) {
        let wants_draft = batch
            .last()
            .and_then(|message| message.buttons.first())
            .map(|button| IntentPayload::decode(&button.payload).verb() == Some(SEND_VERB))
            .unwrap_or(false);

        self.mode = if wants_draft {
            ComposeMode::Draft
        } else {
            ComposeMode::Normal
        };
        debug!(mode = ?self.mode, "Compose mode derived from received batch");
    }

    /// Build the payload for a tapped button in Normal mode
    pub fn button_payload(&self, raw: &str, message: &str) -> String {
        intent::create_payload(raw, &self.active, message)
    }

    /// Submit the composed message.
    ///
    /// In Draft mode this always yields the fixed `/send{"reason": ...}`
    /// payload, flags a refresh for the next receive, and resets to
    /// Normal. In Normal mode the message passes through unchanged.
    pub fn submit(&mut self, message: &str) -> String {
        match self.mode {
            ComposeMode::Draft => {
                self.refresh_on_receive = true;
                self.mode = ComposeMode::Normal;
                intent::reason_payload(message)
            }
            ComposeMode::Normal => message.to_string(),
        }
    }

    /// Consume the refresh flag set by a draft submission
    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.refresh_on_receive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(buttons: &[&str]) -> ChatMessage {
        ChatMessage {
            text: "Anything else?".to_string(),
            buttons: buttons
                .iter()
                .map(|p| ChatButton {
                    title: "button".to_string(),
                    payload: p.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_send_button_enters_draft() {
        let mut form = ComposeForm::new(ActiveResource::default());
        form.on_receive(&[message(&["/send{\"reason\": \"\"}"])]);
        assert_eq!(form.mode(), ComposeMode::Draft);
    }

    #[test]
    fn test_only_most_recent_message_counts() {
        let mut form = ComposeForm::new(ActiveResource::default());
        form.on_receive(&[
            message(&["/send{\"reason\": \"\"}"]),
            message(&["Yes, please."]),
        ]);
        assert_eq!(form.mode(), ComposeMode::Normal);
    }

    #[test]
    fn test_only_first_button_counts() {
        let mut form = ComposeForm::new(ActiveResource::default());
        form.on_receive(&[message(&["Yes, please.", "/send{\"reason\": \"\"}"])]);
        assert_eq!(form.mode(), ComposeMode::Normal);
    }

    #[test]
    fn test_missing_buttons_is_not_draft() {
        let mut form = ComposeForm::new(ActiveResource::default());
        form.on_receive(&[message(&[])]);
        assert_eq!(form.mode(), ComposeMode::Normal);

        form.on_receive(&[]);
        assert_eq!(form.mode(), ComposeMode::Normal);
    }

    #[test]
    fn test_draft_submit_builds_send_payload() {
        let mut form = ComposeForm::new(ActiveResource::default());
        form.on_receive(&[message(&["/send{\"reason\": \"\"}"])]);

        let payload = form.submit("need access");
        assert_eq!(payload, "/send{\"reason\":\"need access\"}");
        assert_eq!(form.mode(), ComposeMode::Normal);
        assert!(form.take_refresh());
        assert!(!form.take_refresh());
    }

    #[test]
    fn test_normal_submit_passthrough() {
        let mut form = ComposeForm::new(ActiveResource::default());
        assert_eq!(form.submit("hello"), "hello");
        assert!(!form.take_refresh());
    }

    #[test]
    fn test_button_payload_uses_active_resource() {
        let mut form = ComposeForm::new(ActiveResource::default());
        form.set_active(ActiveResource {
            pack_id: None,
            role_id: Some(4),
        });
        let out = form.button_payload("/grant{\"resource_id\": 0}", "");
        assert!(out.contains("\"resource_id\":4"));
    }
}
