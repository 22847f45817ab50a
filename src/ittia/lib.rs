//! # Ittia Architecture
//!
//! Ittia is a **UI-agnostic clinical note composition library**: ten fixed
//! labeled sections, live abbreviation expansion, markdown-style text
//! normalization, a condensed scratchpad mirror, and one-document export.
//! The editing surface (whatever toolkit hosts the text areas) is a thin
//! client; everything with real behavior lives here.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Editing surface (external)                                 │
//! │  - Owns widgets, carets, keyboard events                    │
//! │  - Relays keystrokes and caret offsets, applies decisions   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facade (api.rs)                                            │
//! │  - One entry point per user-visible operation               │
//! │  - Routes every mutation through the change-notification    │
//! │    path so the scratchpad mirror stays in sync              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (model, format, expand, scratchpad, export,         │
//! │  templates)                                                 │
//! │  - Pure, synchronous functions over in-memory state         │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage & sinks (store/, clipboard, config)                │
//! │  - Abstract AbbrevStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! │  - OS clipboard wrapper                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Decisions, Not Callbacks
//!
//! The surface asks and the engine answers. A space keystroke becomes a
//! call into [`expand::on_space_key`] returning an
//! [`expand::ExpansionDecision`]; the surface applies it (or the facade
//! does, given the caret). No listener registration machinery, no shared
//! mutable globals: the abbreviation table is a capability threaded into
//! the composer.
//!
//! ## Single-Threaded by Design
//!
//! Every operation is triggered synchronously by a user-input event on the
//! surface's event thread and terminates without suspension. The only
//! mutable state is the section store and the abbreviation table, both
//! single-writer by construction, so the core carries no locks.
//!
//! ## Degraded Persistence
//!
//! The abbreviation table mutates its in-memory map first and persists
//! second. A dead backing file surfaces as an error to the caller, but
//! expansion, normalization, and aggregation keep working off memory.
//!
//! ## Module Overview
//!
//! - [`api`]: The [`api::Composer`] facade—entry point for all operations
//! - [`model`]: Section keys, section store, problem list
//! - [`format`]: `auto_format` / `finalize` normalization passes
//! - [`expand`]: Abbreviation expansion decisions per space keystroke
//! - [`scratchpad`]: Condensed mirror aggregation and idempotent redraw
//! - [`export`]: Document assembly for the clipboard
//! - [`templates`]: Closed library of insertable text blocks
//! - [`store`]: Abbreviation persistence (trait + file/memory backends)
//! - [`config`]: Host configuration
//! - [`clipboard`]: OS clipboard sink
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod expand;
pub mod export;
pub mod format;
pub mod model;
pub mod scratchpad;
pub mod store;
pub mod templates;
