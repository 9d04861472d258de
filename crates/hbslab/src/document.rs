// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Document snapshot types and the starter document.

use serde::{Deserialize, Serialize};

/// A read-only snapshot of the four editable panes plus the layout switch.
///
/// The studio around the pipeline owns the live document; the pipeline
/// receives one snapshot per invocation and never mutates it. Serialized
/// field names are camelCase (`useLayout`) to match the wire shape the
/// surrounding tooling expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateDocument {
    /// Template body: the main content fragment.
    pub template: String,
    /// Data pane: one JSON document supplying variable bindings.
    pub data: String,
    /// Layout pane: a wrapping template embedding the compiled body via
    /// `{{{body}}}`.
    pub layout: String,
    /// Style pane: CSS spliced into the compiled output.
    pub styles: String,
    /// Whether the layout pass runs.
    pub use_layout: bool,
}

impl TemplateDocument {
    /// The sample document seeded into a fresh studio.
    ///
    /// Exercises conditionals, iteration and the `formatDate` helper, and
    /// compiles cleanly against
    /// [`HelperRegistry::with_builtins`](crate::HelperRegistry::with_builtins).
    pub fn starter() -> Self {
        Self {
            template: STARTER_TEMPLATE.to_string(),
            data: STARTER_DATA.to_string(),
            layout: STARTER_LAYOUT.to_string(),
            styles: STARTER_STYLES.to_string(),
            use_layout: true,
        }
    }
}

const STARTER_TEMPLATE: &str = r#"<div class="container">
  <h2>{{title}}</h2>
  <p>{{description}}</p>

  {{#if showList}}
    <ul>
      {{#each items}}
        <li>{{name}} - {{price}}</li>
      {{/each}}
    </ul>
  {{/if}}
</div>"#;

const STARTER_DATA: &str = r#"{
  "title": "Welcome to HBSLAB",
  "description": "A live studio for Handlebars template development",
  "showList": true,
  "items": [
    {"name": "Feature 1", "price": "$9.99"},
    {"name": "Feature 2", "price": "$19.99"},
    {"name": "Feature 3", "price": "$29.99"}
  ],
  "date": "2024-01-15"
}"#;

const STARTER_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{title}}</title>
</head>
<body>
  <header class="header">
    <h1>{{title}}</h1>
  </header>

  <main class="content">
    {{{body}}}
  </main>

  <footer class="footer">
    <p>Generated on {{formatDate date}}</p>
  </footer>
</body>
</html>"#;

const STARTER_STYLES: &str = r#"body {
  font-family: Arial, sans-serif;
  margin: 0;
  padding: 0;
}

.header {
  padding: 1rem;
  border-bottom: 1px solid #dee2e6;
}

.content {
  padding: 2rem;
  margin: 1rem;
  border-radius: 8px;
  box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}

.footer {
  padding: 1rem;
  text-align: center;
  border-top: 1px solid #dee2e6;
  margin-top: 2rem;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
}

h1, h2 {
  color: #333;
  margin-bottom: 1rem;
}

p {
  color: #666;
  line-height: 1.6;
}

ul {
  list-style: none;
  padding: 0;
}

li {
  padding: 0.5rem 0;
  border-bottom: 1px solid #eee;
}

li:last-child {
  border-bottom: none;
}"#;
