//! Data models for exported conversation archives.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Conversation`], [`Node`], [`Message`] - the parent-linked node graph one
//!   archive stores per conversation
//! - [`TranscriptMessage`] - one entry of a reconstructed chronological transcript
//! - [`ConversationStats`] - aggregate word and phrase counts across all archives
//!
//! The archive-side models use serde for JSON deserialization, with every field
//! defaulted so that missing or unexpected fields degrade to "no contribution"
//! instead of failing the parse.

pub mod conversation;
pub mod stats;

pub use conversation::{Author, Conversation, Message, MessageContent, Node, TranscriptMessage};
pub use stats::{ConversationStats, PhraseCount};
