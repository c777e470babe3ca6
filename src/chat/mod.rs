//! Chat approval surface module
//!
//! Intent payload encoding/decoding and the compose form state machine.

pub mod compose;
pub mod intent;

pub use compose::{ChatButton, ChatMessage, ComposeForm, ComposeMode};
pub use intent::{create_payload, ActiveResource, IntentPayload, SEND_VERB};
