//! # Cookfolio Architecture
//!
//! Cookfolio is a **UI-agnostic recipe catalog library**. The CLI in
//! `main.rs` is just one client of it; nothing inside the library writes to
//! stdout/stderr or assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/)                         │
//! │  - Parses arguments, formats output, confirmation prompts   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs) + Session (session.rs)                │
//! │  - Catalog owns the in-memory collection, add/delete ops,   │
//! │    and persists the full collection on every mutation       │
//! │  - Session is the screen-level state machine UI clients     │
//! │    drive (listing / adding / viewing / confirming delete)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecipeStore trait, one JSON blob per catalog    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence model
//!
//! The whole collection is one JSON array under a single storage key
//! (`cookfolio_recipes.json`). Every mutation rewrites the blob in full —
//! this is a best-effort local cache, not a database, and the code is honest
//! about that: no transactions, no partial writes, no retry. Loading
//! validates each stored record and repairs what it can; see [`store`].
//!
//! ## Module Overview
//!
//! - [`catalog`]: The collection controller — entry point for all operations
//! - [`session`]: UI-session state machine
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Recipe`, `Ingredient`, `RecipeDraft`)
//! - [`error`]: Error types

pub mod catalog;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
