// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Document provider and preview consumer contracts.
//!
//! The studio around the pipeline owns persistence and display. This
//! module fixes the two seams the pipeline needs from it: a
//! [`DocumentStore`] that yields the current snapshot, and a
//! [`PreviewSink`] that receives each [`CompiledResult`]. The memory
//! implementations back the editor session and the test suite; durable
//! backends live outside this crate and only need to satisfy the traits.

use std::sync::{Arc, Mutex};

use crate::document::TemplateDocument;
use crate::pipeline::CompiledResult;

/// Supplies the pipeline with the current document.
pub trait DocumentStore: Send + Sync {
    /// Returns a read-only snapshot of the current document.
    fn snapshot(&self) -> TemplateDocument;

    /// Replaces the current document.
    fn replace(&self, doc: TemplateDocument);

    /// Creates a boxed clone (for use in closures).
    fn clone_box(&self) -> Box<dyn DocumentStore>;
}

impl Clone for Box<dyn DocumentStore> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Consumes each compiled result for display.
///
/// An error result replaces whatever the surface showed before; there is
/// no stale-success state kept alongside a diagnostic.
pub trait PreviewSink: Send + Sync {
    /// Publishes the latest result to the display surface.
    fn publish(&self, result: &CompiledResult);

    /// Creates a boxed clone (for use in closures).
    fn clone_box(&self) -> Box<dyn PreviewSink>;
}

impl Clone for Box<dyn PreviewSink> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// In-memory document store.
#[derive(Debug, Clone)]
pub struct MemoryDocumentStore {
    doc: Arc<Mutex<TemplateDocument>>,
}

impl MemoryDocumentStore {
    /// Creates a store holding the given document.
    pub fn new(doc: TemplateDocument) -> Self {
        Self {
            doc: Arc::new(Mutex::new(doc)),
        }
    }

    /// Creates a store seeded with the starter document.
    pub fn starter() -> Self {
        Self::new(TemplateDocument::starter())
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new(TemplateDocument::default())
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn snapshot(&self) -> TemplateDocument {
        self.doc.lock().unwrap().clone()
    }

    fn replace(&self, doc: TemplateDocument) {
        *self.doc.lock().unwrap() = doc;
    }

    fn clone_box(&self) -> Box<dyn DocumentStore> {
        Box::new(self.clone())
    }
}

/// In-memory preview surface retaining the latest published result.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreviewSink {
    last: Arc<Mutex<Option<CompiledResult>>>,
}

impl MemoryPreviewSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently published result, if any.
    pub fn last(&self) -> Option<CompiledResult> {
        self.last.lock().unwrap().clone()
    }
}

impl PreviewSink for MemoryPreviewSink {
    fn publish(&self, result: &CompiledResult) {
        *self.last.lock().unwrap() = Some(result.clone());
    }

    fn clone_box(&self) -> Box<dyn PreviewSink> {
        Box::new(self.clone())
    }
}
