// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # HBSLAB
//!
//! Live Handlebars compilation pipeline for in-browser template studios.
//!
//! A template studio holds four editable panes — a template body, a JSON
//! data document, an optional wrapping layout and a stylesheet — plus a
//! layout switch. On every change the studio hands the current snapshot to
//! [`compile`], which produces either the preview HTML or the diagnostic
//! text of the first failing stage. The pipeline is pure, synchronous and
//! re-entrant; storage backends and UI chrome live outside this crate and
//! talk to it through the [`DocumentStore`] and [`PreviewSink`] seams.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hbslab::{compile, HelperRegistry, TemplateDocument};
//!
//! let helpers = HelperRegistry::with_builtins();
//! let doc = TemplateDocument {
//!     template: "<p>{{greeting}}</p>".into(),
//!     data: r#"{ "greeting": "hello" }"#.into(),
//!     ..TemplateDocument::default()
//! };
//!
//! let result = compile(&doc, &helpers);
//! assert_eq!(result.html(), Some("<p>hello</p>"));
//! ```
//!
//! ## Pipeline
//!
//! 1. Parse the data pane as JSON. A parse failure short-circuits the
//!    whole compilation.
//! 2. Render the template body against the parsed data.
//! 3. With the layout switch on, render the layout against the same data
//!    plus a `body` key holding the template output.
//! 4. Splice the style pane into the result.
//!
//! Every failure is converted into the error variant of
//! [`CompiledResult`] at the pipeline boundary; [`compile`] itself never
//! fails.

/// Document snapshot types and the starter document.
pub mod document;
/// Render context construction from the data pane.
pub mod context;
/// Built-in template helpers and the helper registry.
pub mod helpers;
/// The compilation pipeline.
pub mod pipeline;
/// Error types.
pub mod error;
/// Document provider and preview consumer contracts.
pub mod store;
/// Live editing session glue.
pub mod session;
/// Editor input validation and the fallback HTML sanitizer.
pub mod validate;

/// WASM bindings for browser usage.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use document::TemplateDocument;
pub use error::{PipelineError, Result, Stage};
pub use helpers::HelperRegistry;
pub use pipeline::{compile, CompiledResult};
pub use session::EditorSession;
pub use store::{DocumentStore, MemoryDocumentStore, MemoryPreviewSink, PreviewSink};

// Re-export WASM bindings when targeting WebAssembly
#[cfg(target_arch = "wasm32")]
pub use wasm::*;
