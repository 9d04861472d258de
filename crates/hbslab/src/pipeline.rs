// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The compilation pipeline.
//!
//! [`compile`] takes a document snapshot and a helper registry and
//! produces a [`CompiledResult`]: either the preview HTML or the
//! diagnostic text of the first failing stage. It never returns an error
//! to the caller; every failure is converted at this boundary, so callers
//! need no error handling of their own.
//!
//! # Stages
//!
//! 1. Parse the data pane as JSON. Failure short-circuits before any
//!    template compilation.
//! 2. Render the template body against the parsed data.
//! 3. With the layout switch on, render the layout against the data plus
//!    a `body` key holding the template output.
//! 4. Splice the style pane into the result.
//!
//! There is no retry, no partial success and no caching between stages;
//! two calls with identical inputs produce byte-identical output.

use serde::{Deserialize, Serialize};

use crate::context;
use crate::document::TemplateDocument;
use crate::error::{PipelineError, Result};
use crate::helpers::HelperRegistry;

/// The outcome of one compilation.
///
/// Exactly one of the two variants' payloads ever exists; there is no
/// partial-success state. Serializes as `{"html": …}` or
/// `{"errorMessage": …}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompiledResult {
    /// Successful compilation.
    Html {
        /// The compiled preview HTML. The display surface is responsible
        /// for sanitizing this before rendering it.
        html: String,
    },
    /// Failed compilation.
    Error {
        /// The parser's or compiler's message, verbatim.
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
}

impl CompiledResult {
    /// The compiled HTML, if this compilation succeeded.
    pub fn html(&self) -> Option<&str> {
        match self {
            CompiledResult::Html { html } => Some(html),
            CompiledResult::Error { .. } => None,
        }
    }

    /// The diagnostic message, if this compilation failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            CompiledResult::Html { .. } => None,
            CompiledResult::Error { error_message } => Some(error_message),
        }
    }

    /// Whether this compilation failed.
    pub fn is_error(&self) -> bool {
        matches!(self, CompiledResult::Error { .. })
    }
}

/// Compiles a document snapshot into its preview result.
///
/// Pure with respect to `doc` and `helpers`: no I/O, no shared mutable
/// state, safe to invoke repeatedly and concurrently with itself. Rapid
/// successive invocations naturally supersede one another — the caller
/// displays whichever result it received last.
pub fn compile(doc: &TemplateDocument, helpers: &HelperRegistry) -> CompiledResult {
    match render(doc, helpers) {
        Ok(html) => {
            tracing::trace!(bytes = html.len(), "compilation succeeded");
            CompiledResult::Html { html }
        }
        Err(err) => {
            tracing::debug!(stage = ?err.stage(), "compilation halted: {}", err);
            CompiledResult::Error {
                error_message: err.to_string(),
            }
        }
    }
}

fn render(doc: &TemplateDocument, helpers: &HelperRegistry) -> Result<String> {
    let data = context::parse_data(&doc.data)?;
    let hb = helpers.handlebars();

    let template_output = hb
        .render_template(&doc.template, &data)
        .map_err(PipelineError::Template)?;

    let rendered = if doc.use_layout {
        let scope = context::layout_scope(&data, template_output);
        hb.render_template(&doc.layout, &scope)
            .map_err(PipelineError::Layout)?
    } else {
        template_output
    };

    Ok(inject_styles(rendered, &doc.styles, doc.use_layout))
}

/// Splices the style pane into the rendered output.
///
/// A whitespace-only style pane is a no-op. With the layout on, the style
/// block lands immediately before the first literal `</head>`; without
/// that anchor the block is silently dropped. With the layout off, the
/// block is prepended to the output.
fn inject_styles(rendered: String, styles: &str, use_layout: bool) -> String {
    if styles.trim().is_empty() {
        return rendered;
    }
    let style_tag = format!("<style>\n{styles}\n</style>");
    if use_layout {
        match rendered.find("</head>") {
            Some(at) => {
                let mut out = String::with_capacity(rendered.len() + style_tag.len() + 1);
                out.push_str(&rendered[..at]);
                out.push_str(&style_tag);
                out.push('\n');
                out.push_str(&rendered[at..]);
                out
            }
            None => rendered,
        }
    } else {
        format!("{style_tag}\n{rendered}")
    }
}
