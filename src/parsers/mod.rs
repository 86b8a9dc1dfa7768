//! Archive file parsing.
//!
//! An archive is a single JSON document: a top-level array of conversation
//! records. Unlike line-oriented formats there is no way to salvage part of a
//! damaged file, so an unreadable or malformed archive is a fatal error that
//! aborts the whole run rather than a warning to skip past.

pub mod archive;

pub use archive::parse_archive_file;
