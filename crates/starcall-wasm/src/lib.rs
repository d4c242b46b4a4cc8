//! WASM bindings for shooting star call extraction.
//!
//! This crate provides WebAssembly bindings for use in browser overlays that
//! run OCR on the telescope dialog themselves.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use starcall_core::{CallCommand, ExtractedFields, StarCallParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Repair known OCR misreadings in dialog text.
#[wasm_bindgen]
pub fn normalize_text(text: &str) -> String {
    starcall_core::normalize(text)
}

/// The three call fields, with `ERR` / `0` for anything not found.
#[derive(Serialize)]
struct CallFields {
    region: String,
    size: String,
    relative_time: String,
}

impl From<&ExtractedFields> for CallFields {
    fn from(fields: &ExtractedFields) -> Self {
        Self {
            region: fields.location_or_sentinel().to_string(),
            size: fields.size_or_sentinel(),
            relative_time: fields.time_or_sentinel(),
        }
    }
}

/// Extract region, size and relative time from raw OCR text.
#[wasm_bindgen]
pub fn extract_fields(text: &str) -> Result<JsValue, JsValue> {
    let result = StarCallParser::new().parse(text);

    serde_wasm_bindgen::to_value(&CallFields::from(&result.fields))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build the `/call` command for raw OCR text seen on `world`.
#[wasm_bindgen]
pub fn build_call_command(text: &str, world: u16) -> String {
    let result = StarCallParser::new().parse(text);
    CallCommand::new(world, result.fields).to_string()
}

/// Dialog extractor class for browser use.
#[wasm_bindgen]
pub struct StarCallExtractor {
    parser: StarCallParser,
}

#[wasm_bindgen]
impl StarCallExtractor {
    /// Create a new extractor with the built-in OCR repairs.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: StarCallParser::new(),
        }
    }

    /// Add an OCR misreading repair, applied after the built-in ones.
    #[wasm_bindgen]
    pub fn add_replacement(&mut self, from: &str, to: &str) {
        self.parser = self.parser.clone().with_replacement(from, to);
    }

    /// Extract the call fields from raw OCR text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        serde_wasm_bindgen::to_value(&CallFields::from(&result.fields))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Extract the call fields along with the cleaned text and warnings.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        #[derive(Serialize)]
        struct ExtractResult {
            fields: CallFields,
            cleaned_text: String,
            confidence: f32,
            warnings: Vec<String>,
            processing_time_ms: u64,
        }

        let output = ExtractResult {
            fields: CallFields::from(&result.fields),
            cleaned_text: result.cleaned_text,
            confidence: result.confidence,
            warnings: result.warnings,
            processing_time_ms: result.processing_time_ms,
        };

        serde_wasm_bindgen::to_value(&output)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Build the `/call` command for raw OCR text seen on `world`.
    #[wasm_bindgen]
    pub fn call_command(&self, text: &str, world: u16) -> String {
        let result = self.parser.parse(text);
        CallCommand::new(world, result.fields).to_string()
    }
}

impl Default for StarCallExtractor {
    fn default() -> Self {
        Self::new()
    }
}
