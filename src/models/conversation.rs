use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One conversation record from a `conversations.json` archive.
///
/// The export stores the message history as a tree: `mapping` keys node ids to
/// nodes, each node links back to its parent, and `current_node` points at the
/// leaf of the active branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub mapping: HashMap<String, Node>,
    #[serde(default)]
    pub current_node: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub content: Option<MessageContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub role: String,
}

/// Message content. Parts stay raw JSON values: non-text content types carry
/// object parts, which must not fail archive deserialization even though they
/// contribute nothing downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageContent {
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub parts: Vec<Value>,
}

/// One entry of a reconstructed transcript, in display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptMessage {
    pub author: String,
    pub text: String,
}
