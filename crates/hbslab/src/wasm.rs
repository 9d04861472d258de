// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! WebAssembly bindings for the compilation pipeline.
//!
//! JavaScript-friendly bindings for mounting the pipeline in a browser
//! page: the page keeps the pane contents, calls
//! [`WasmPipeline::compile`] on every change and renders either `html` or
//! `errorMessage` from the returned object.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import { WasmPipeline } from 'hbslab';
//!
//! const pipeline = new WasmPipeline();
//! const result = pipeline.compile(
//!   '<p>{{greeting}}</p>',
//!   '{ "greeting": "hello" }',
//!   '',
//!   '',
//!   false,
//! );
//! console.log(result.html); // <p>hello</p>
//! ```

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;

use crate::document::TemplateDocument;
use crate::helpers::HelperRegistry;
use crate::pipeline;
use crate::pipeline::CompiledResult;

/// A WASM-compatible compilation pipeline carrying the studio built-ins.
#[wasm_bindgen]
pub struct WasmPipeline {
    helpers: HelperRegistry,
}

#[wasm_bindgen]
impl WasmPipeline {
    /// Creates a pipeline with `formatDate`, `eq`, `gt` and `lt`
    /// registered.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmPipeline {
        WasmPipeline {
            helpers: HelperRegistry::with_builtins(),
        }
    }

    /// Compiles the four panes and the layout switch.
    ///
    /// # Returns
    /// An object with either an `html` or an `errorMessage` property,
    /// never both.
    #[wasm_bindgen]
    pub fn compile(
        &self,
        template: &str,
        data: &str,
        layout: &str,
        styles: &str,
        use_layout: bool,
    ) -> Result<JsValue, JsValue> {
        let doc = TemplateDocument {
            template: template.to_string(),
            data: data.to_string(),
            layout: layout.to_string(),
            styles: styles.to_string(),
            use_layout,
        };
        to_js(&pipeline::compile(&doc, &self.helpers))
    }

    /// Compiles a document object
    /// (`{ template, data, layout, styles, useLayout }`).
    #[wasm_bindgen(js_name = compileDocument)]
    pub fn compile_document(&self, doc: JsValue) -> Result<JsValue, JsValue> {
        let doc: TemplateDocument = serde_wasm_bindgen::from_value(doc)
            .map_err(|e| JsValue::from_str(&format!("Invalid document: {}", e)))?;
        to_js(&pipeline::compile(&doc, &self.helpers))
    }

    /// The starter document a fresh studio seeds.
    #[wasm_bindgen(js_name = starterDocument)]
    pub fn starter_document() -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&TemplateDocument::starter())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl Default for WasmPipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(result: &CompiledResult) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
