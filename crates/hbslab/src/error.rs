// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for the compilation pipeline.
//!
//! [`PipelineError`] mirrors the three halting points of the pipeline:
//! data parse, template render, layout render. Its Display output is the
//! underlying parser's or compiler's message, unchanged — that text is
//! what the preview surface shows the user.
//!
//! The published [`CompiledResult`](crate::CompiledResult) carries only
//! the message and does not distinguish template-stage from layout-stage
//! failures; [`PipelineError::stage`] keeps the origin available for
//! logging.

use thiserror::Error;

/// The pipeline stage at which a compilation halted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Parsing the JSON data pane.
    Data,
    /// Rendering the template body.
    Template,
    /// Rendering the wrapping layout.
    Layout,
}

/// The main error type for pipeline operations.
///
/// Never escapes [`compile`](crate::compile); every variant is converted
/// into the error variant of [`CompiledResult`](crate::CompiledResult) at
/// the pipeline boundary.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The data pane is not syntactically valid JSON.
    #[error("{0}")]
    DataParse(#[from] serde_json::Error),

    /// The template body failed to compile or render.
    #[error("{0}")]
    Template(#[source] handlebars::RenderError),

    /// The wrapping layout failed to compile or render.
    #[error("{0}")]
    Layout(#[source] handlebars::RenderError),
}

impl PipelineError {
    /// The stage at which this error halted the pipeline.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::DataParse(_) => Stage::Data,
            PipelineError::Template(_) => Stage::Template,
            PipelineError::Layout(_) => Stage::Layout,
        }
    }
}

/// Convenience type alias for Results with [`PipelineError`].
pub type Result<T> = std::result::Result<T, PipelineError>;
