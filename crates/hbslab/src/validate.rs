// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Editor input validation and the fallback HTML sanitizer.
//!
//! These checks guard editor inputs (template names, the data pane)
//! before they reach a storage backend. [`sanitize_html`] is the basic
//! sanitizer a preview surface falls back on when no full sanitizer is
//! available; the pipeline itself never sanitizes its output.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Maximum accepted template-name length, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Validation failures for editor inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The template name is empty or whitespace.
    #[error("Template name cannot be empty")]
    EmptyName,
    /// The template name exceeds [`MAX_NAME_LEN`] characters.
    #[error("Template name too long (max {MAX_NAME_LEN} characters)")]
    NameTooLong,
    /// The template name matches a disallowed pattern.
    #[error("Template name contains invalid characters")]
    DisallowedName,
    /// The data pane is not valid JSON.
    #[error("Invalid JSON data")]
    InvalidJson,
}

lazy_static! {
    static ref HTML_TAGS: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref NAME_SPECIALS: Regex = Regex::new(r#"[<>"'&]"#).unwrap();
    static ref DANGEROUS_NAME: Regex =
        Regex::new(r"(?i)<script|javascript:|on\w+\s*=|data:").unwrap();
    static ref SCRIPT_BLOCK: Regex = Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
    static ref EVENT_HANDLER: Regex =
        Regex::new(r#"(?i)on\w+\s*=\s*["'][^"']*["']"#).unwrap();
    static ref JS_PROTOCOL: Regex = Regex::new(r"(?i)javascript:").unwrap();
    static ref DATA_PROTOCOL: Regex = Regex::new(r"(?i)data:").unwrap();
}

/// Strips markup and special characters from a template name and caps its
/// length at [`MAX_NAME_LEN`].
pub fn sanitize_template_name(name: &str) -> String {
    let stripped = HTML_TAGS.replace_all(name, "");
    let cleaned = NAME_SPECIALS.replace_all(&stripped, "");
    cleaned.trim().chars().take(MAX_NAME_LEN).collect()
}

/// Checks a template name for emptiness, length and disallowed patterns.
pub fn validate_template_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }
    if DANGEROUS_NAME.is_match(name) {
        return Err(ValidationError::DisallowedName);
    }
    Ok(())
}

/// Checks that the data pane parses as JSON.
pub fn validate_json_data(data: &str) -> Result<(), ValidationError> {
    serde_json::from_str::<serde_json::Value>(data)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidJson)
}

/// Basic HTML sanitization: removes script blocks, inline event handlers
/// and `javascript:`/`data:` protocols.
pub fn sanitize_html(html: &str) -> String {
    let no_scripts = SCRIPT_BLOCK.replace_all(html, "");
    let no_handlers = EVENT_HANDLER.replace_all(&no_scripts, "");
    let no_js = JS_PROTOCOL.replace_all(&no_handlers, "");
    DATA_PROTOCOL.replace_all(&no_js, "").into_owned()
}
