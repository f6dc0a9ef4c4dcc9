//! # Agenda Architecture
//!
//! Agenda is an in-memory contact book. The library holds the contact store
//! and the operations on it; the binary wraps it in a numbered console menu.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, colored output                       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the dump sink                         │
//! │  - One method per operation, returns Result<CmdResult>      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, bucket routing, the operation itself         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BucketStore: 26 name-sorted buckets, A to Z              │
//! │  - ContactSink: FileSink (production), MemorySink (testing) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Buckets
//!
//! A contact is filed under the uppercased first letter of its given name.
//! Each bucket is re-sorted after an insert and searched with a binary search.
//! Edits replace a record in place and deletes swap the last record into the
//! hole, so neither moves records between buckets or re-sorts. See
//! [`store`] for the exact invariants.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Add, search, edit, delete and dump
//! - [`store`]: Bucket store and dump sinks
//! - [`model`]: The `Contact` record
//! - [`validate`]: Phone and email checks
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
