//! # Qurantext Architecture
//!
//! Qurantext is a **UI-agnostic Quran text composition library**. The CLI in
//! this repository is one client of it; a document-editor add-in or any
//! other host could sit on the same API.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints paragraph records               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: compose, stream and surah listings          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (compose.rs, line.rs, numbering.rs, surahs.rs)      │
//! │  - Pure function of a CompositionRequest plus the corpus    │
//! │  - Emits ordered ParagraphRecords, no I/O assumptions       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Corpus Layer (corpus/)                                     │
//! │  - Abstract Corpus trait                                    │
//! │  - XmlCorpus (production), MemoryCorpus (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: the engine is pure
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result` values, and never writes to the terminal or touches editor
//! state. A composition either yields the complete ordered record sequence
//! or fails with a typed error; partial output is never surfaced.
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade — entry point for all operations
//! - [`compose`]: the composition engine (layout policy, invocation rule)
//! - [`line`]: single ayah line construction
//! - [`numbering`]: localized ayah-number decoration
//! - [`surahs`]: the fixed 114-entry name and size tables
//! - [`corpus`]: corpus abstraction and backends
//! - [`model`]: request/record types
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod compose;
pub mod config;
pub mod corpus;
pub mod error;
pub mod line;
pub mod model;
pub mod numbering;
pub mod surahs;
