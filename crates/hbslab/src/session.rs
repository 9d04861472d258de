// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Live editing session glue.
//!
//! [`EditorSession`] wires a document store to a preview sink: every pane
//! update rewrites the stored document and, while the session is live,
//! recompiles and publishes the result. Pausing the session lets edits
//! accumulate without recompilation; re-enabling it catches the surface up
//! immediately.
//!
//! Debouncing rapid keystrokes is the embedder's concern. Each refresh
//! runs to completion on the calling thread and the last one to complete
//! determines the displayed result.

use crate::document::TemplateDocument;
use crate::helpers::HelperRegistry;
use crate::pipeline::{compile, CompiledResult};
use crate::store::{DocumentStore, PreviewSink};

/// A live editing session over one document.
///
/// Generic over the store and sink so embedders plug in their own
/// persistence and display surfaces.
pub struct EditorSession<S: DocumentStore, P: PreviewSink> {
    store: S,
    sink: P,
    helpers: HelperRegistry,
    live: bool,
}

impl<S: DocumentStore, P: PreviewSink> EditorSession<S, P> {
    /// Creates a live session and publishes the first compilation.
    pub fn new(store: S, sink: P, helpers: HelperRegistry) -> Self {
        let session = Self {
            store,
            sink,
            helpers,
            live: true,
        };
        session.refresh();
        session
    }

    /// The store backing this session.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The sink backing this session.
    pub fn sink(&self) -> &P {
        &self.sink
    }

    /// Whether updates currently trigger recompilation.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Turns live recompilation on or off.
    ///
    /// Turning it back on recompiles immediately so the surface catches up
    /// with edits made while paused.
    pub fn set_live(&mut self, live: bool) {
        self.live = live;
        if live {
            self.refresh();
        }
    }

    /// Flips live recompilation.
    pub fn toggle_live(&mut self) {
        self.set_live(!self.live);
    }

    /// Compiles the current snapshot and publishes the result.
    ///
    /// Returns `None` while the session is paused.
    pub fn refresh(&self) -> Option<CompiledResult> {
        if !self.live {
            return None;
        }
        let doc = self.store.snapshot();
        let result = compile(&doc, &self.helpers);
        self.sink.publish(&result);
        Some(result)
    }

    fn update<F: FnOnce(&mut TemplateDocument)>(&self, apply: F) -> Option<CompiledResult> {
        let mut doc = self.store.snapshot();
        apply(&mut doc);
        self.store.replace(doc);
        self.refresh()
    }

    /// Replaces the template pane and recompiles.
    pub fn update_template(&self, value: &str) -> Option<CompiledResult> {
        self.update(|doc| doc.template = value.to_string())
    }

    /// Replaces the data pane and recompiles.
    pub fn update_data(&self, value: &str) -> Option<CompiledResult> {
        self.update(|doc| doc.data = value.to_string())
    }

    /// Replaces the layout pane and recompiles.
    pub fn update_layout(&self, value: &str) -> Option<CompiledResult> {
        self.update(|doc| doc.layout = value.to_string())
    }

    /// Replaces the style pane and recompiles.
    pub fn update_styles(&self, value: &str) -> Option<CompiledResult> {
        self.update(|doc| doc.styles = value.to_string())
    }

    /// Flips the layout switch and recompiles.
    pub fn toggle_layout(&self) -> Option<CompiledResult> {
        self.update(|doc| doc.use_layout = !doc.use_layout)
    }

    /// Restores the starter document and recompiles.
    pub fn reset(&self) -> Option<CompiledResult> {
        tracing::debug!("resetting session to the starter document");
        self.store.replace(TemplateDocument::starter());
        self.refresh()
    }
}
