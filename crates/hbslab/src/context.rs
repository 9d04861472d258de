// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Render context construction from the data pane.
//!
//! The data pane is one JSON document. The template pass renders against
//! the parsed value directly; the layout pass renders against the same
//! bindings plus a `body` key carrying the rendered template output.
//! Contexts are built fresh per invocation and never persisted.

use serde_json::{Map, Value};

use crate::error::Result;

/// Key under which the rendered template output is exposed to the layout.
pub const BODY_KEY: &str = "body";

/// Parses the data pane into a render context.
///
/// Failure here must short-circuit the pipeline before any template
/// compilation is attempted.
pub fn parse_data(data: &str) -> Result<Value> {
    Ok(serde_json::from_str(data)?)
}

/// Builds the layout scope: the parsed data bindings plus [`BODY_KEY`].
///
/// Non-object data contributes no bindings of its own; the scope then
/// holds `body` alone.
pub fn layout_scope(data: &Value, body: String) -> Value {
    let mut scope = match data {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    scope.insert(BODY_KEY.to_string(), Value::String(body));
    Value::Object(scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_data_accepts_any_json_document() {
        assert_eq!(parse_data(r#"{"a": 1}"#).unwrap(), json!({"a": 1}));
        assert_eq!(parse_data("[1, 2]").unwrap(), json!([1, 2]));
        assert_eq!(parse_data("42").unwrap(), json!(42));
    }

    #[test]
    fn parse_data_rejects_malformed_json() {
        assert!(parse_data("{invalid").is_err());
        assert!(parse_data("").is_err());
    }

    #[test]
    fn layout_scope_merges_body_into_object_data() {
        let data = json!({"title": "hi"});
        let scope = layout_scope(&data, "<p>x</p>".to_string());
        assert_eq!(scope, json!({"title": "hi", "body": "<p>x</p>"}));
    }

    #[test]
    fn layout_scope_of_non_object_data_is_body_alone() {
        let scope = layout_scope(&json!([1, 2]), "out".to_string());
        assert_eq!(scope, json!({"body": "out"}));
    }

    #[test]
    fn layout_scope_body_shadows_a_data_key_named_body() {
        let data = json!({"body": "original"});
        let scope = layout_scope(&data, "rendered".to_string());
        assert_eq!(scope, json!({"body": "rendered"}));
    }
}
