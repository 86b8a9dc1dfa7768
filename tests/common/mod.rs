//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for directory trees holding `conversations.json` archives
pub struct ArchiveTreeBuilder {
    temp_dir: TempDir,
}

impl ArchiveTreeBuilder {
    /// Create a new builder with an empty root directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the root directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a `conversations.json` under `subdir` (empty string for the root),
    /// creating intermediate directories as needed
    pub fn with_archive(self, subdir: &str, conversations: &[ConversationBuilder]) -> Self {
        let dir = if subdir.is_empty() {
            self.temp_dir.path().to_path_buf()
        } else {
            self.temp_dir.path().join(subdir)
        };
        fs::create_dir_all(&dir).expect("Failed to create archive dir");

        let content = format!(
            "[{}]",
            conversations.iter().map(|c| c.to_json()).collect::<Vec<_>>().join(",")
        );
        fs::write(dir.join("conversations.json"), content).expect("Failed to write archive");

        self
    }

    /// Write an arbitrary file with the given content (for malformed archives
    /// and decoy files)
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ArchiveTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one conversation record inside an archive
pub struct ConversationBuilder {
    nodes: Vec<String>,
    current_node: Option<String>,
}

impl ConversationBuilder {
    /// Create an empty conversation with no nodes and no current node
    pub fn new() -> Self {
        Self { nodes: Vec::new(), current_node: None }
    }

    /// Build a linear chain of text messages, with `current_node` pointing at
    /// the last one
    pub fn linear(messages: &[(&str, &str)]) -> Self {
        let mut builder = Self::new();
        for (index, (role, text)) in messages.iter().enumerate() {
            let parent = if index == 0 { None } else { Some(format!("node-{}", index - 1)) };
            builder = builder.with_node(
                &format!("node-{}", index),
                parent.as_deref(),
                Some(Self::text_message(role, text)),
            );
        }
        if !messages.is_empty() {
            builder = builder.current_node(&format!("node-{}", messages.len() - 1));
        }
        builder
    }

    /// Set the conversation's current node id
    pub fn current_node(mut self, id: &str) -> Self {
        self.current_node = Some(id.to_string());
        self
    }

    /// Add a node with the given id, optional parent id, and optional raw
    /// message JSON
    pub fn with_node(mut self, id: &str, parent: Option<&str>, message: Option<String>) -> Self {
        let parent_json = parent.map(|p| format!(r#""{}""#, p)).unwrap_or("null".to_string());
        let message_json = message.unwrap_or("null".to_string());
        self.nodes
            .push(format!(r#""{}":{{"message":{},"parent":{}}}"#, id, message_json, parent_json));
        self
    }

    /// Message JSON for a plain text message
    pub fn text_message(role: &str, text: &str) -> String {
        format!(
            r#"{{"author":{{"role":"{}"}},"content":{{"content_type":"text","parts":["{}"]}}}}"#,
            role, text
        )
    }

    /// Message JSON for a non-text content type (contributes nothing)
    pub fn non_text_message(role: &str, content_type: &str, part: &str) -> String {
        format!(
            r#"{{"author":{{"role":"{}"}},"content":{{"content_type":"{}","parts":["{}"]}}}}"#,
            role, content_type, part
        )
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let current_json = self
            .current_node
            .as_ref()
            .map(|id| format!(r#""{}""#, id))
            .unwrap_or("null".to_string());
        format!(r#"{{"mapping":{{{}}},"current_node":{}}}"#, self.nodes.join(","), current_json)
    }
}

impl Default for ConversationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
