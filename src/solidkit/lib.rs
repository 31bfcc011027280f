//! # Solidkit Architecture
//!
//! Solidkit is a small library built around two reusable pieces:
//!
//! - **Specification filtering** ([`spec`]): criteria are values that can be combined
//!   (`and`, `or`, `not`, `AllOf`, `AnyOf`), and a single filter applies any of them.
//!   New criteria are new types; the filter never changes.
//! - **A fluent tree builder** ([`html`]): an `HtmlBuilder` grows a tree of named
//!   elements and renders it as indented, tag-delimited text.
//!
//! A thin CLI sits on top. Like the library, the CLI knows nothing about how a
//! filter or a render works; it only parses arguments and prints results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves render options from the stored config           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - filter, products, html, demo, config                     │
//! │  - Operates on Rust types, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (spec/, html/, catalog.rs, model.rs)                  │
//! │  - Specification trait, combinators, filter                 │
//! │  - Element tree, builder, renderer                          │
//! │  - Catalog trait: InMemoryCatalog, JsonCatalog              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests next to the code, plus property tests for
//!    the filter laws in `spec/`.
//! 2. **API** (`api.rs`): dispatch tests against an `InMemoryCatalog`.
//! 3. **CLI** (`tests/`): end-to-end runs of the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`spec`]: Specification trait, combinators and filters
//! - [`html`]: Element tree, fluent builder and renderer
//! - [`catalog`]: Product sources
//! - [`model`]: `Product`, `Color`, `Size`
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod html;
pub mod model;
pub mod spec;
