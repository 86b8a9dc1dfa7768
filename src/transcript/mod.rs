//! Transcript reconstruction from a conversation's parent-linked node map.
//!
//! An archived conversation is a tree of nodes keyed by id, where every node
//! points back at its parent and `current_node` marks the leaf of the active
//! branch. The chronological transcript is the single path from the root down
//! to that leaf; sibling branches in the mapping never appear in it.

use crate::models::{Conversation, Message, TranscriptMessage};

const CONTENT_TYPE_TEXT: &str = "text";

const ROLE_ASSISTANT: &str = "assistant";
const ROLE_SYSTEM: &str = "system";

/// Flatten a conversation into chronological (root-to-leaf) order.
///
/// Walks parent links from `current_node` up to the root with an explicit
/// iterative loop (no recursion, so arbitrarily long conversations cannot
/// overflow the stack), then reverses the collected messages. An id missing
/// from the mapping behaves as an empty node: it contributes nothing and,
/// having no parent, ends the walk. Nodes with no message, non-text content,
/// or no usable first part are traversed through without contributing.
pub fn conversation_messages(conversation: &Conversation) -> Vec<TranscriptMessage> {
    let mut messages = Vec::new();
    let mut current = conversation.current_node.clone();

    while let Some(node_id) = current {
        let node = conversation.mapping.get(&node_id);
        if let Some(message) = node.and_then(|n| n.message.as_ref()) {
            if let Some(text) = first_text_part(message) {
                messages.push(TranscriptMessage {
                    author: display_author(message),
                    text: text.to_string(),
                });
            }
        }
        current = node.and_then(|n| n.parent.clone());
    }

    messages.reverse();
    messages
}

/// First part of a text-type content, if it is a string.
fn first_text_part(message: &Message) -> Option<&str> {
    let content = message.content.as_ref()?;
    if content.content_type != CONTENT_TYPE_TEXT {
        return None;
    }
    content.parts.first()?.as_str()
}

/// Display name for a message author: the export's role label, with the
/// well-known roles remapped. An absent author shows as an empty name.
fn display_author(message: &Message) -> String {
    let role = message.author.as_ref().map(|a| a.role.as_str()).unwrap_or("");
    match role {
        ROLE_ASSISTANT => "ChatGPT".to_string(),
        ROLE_SYSTEM => "System".to_string(),
        other => other.to_string(),
    }
}
