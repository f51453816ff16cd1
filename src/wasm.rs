use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::catalog;
use crate::decode::{self, CapturedError, DecodeOptions, DecodedResult};
use crate::error::Error;

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn parse_options(options: Option<String>) -> Result<DecodeOptions, Error> {
    match options.as_deref() {
        None | Some("") => Ok(DecodeOptions::default()),
        Some(json) => serde_json::from_str(json).map_err(Error::from),
    }
}

fn decoded_or_failure(result: Result<DecodedResult, Error>) -> JsValue {
    match result {
        Ok(decoded) => to_js(&decoded),
        Err(err) => to_js(&DecodedResult::from_failure(&err)),
    }
}

/// Decode traceback text. `options` is optional JSON, e.g. `{"language":"hi"}`.
#[wasm_bindgen]
pub fn decode_traceback(text: Option<String>, options: Option<String>) -> JsValue {
    decoded_or_failure(
        parse_options(options).map(|opts| decode::decode_text_with(text.as_deref(), &opts)),
    )
}

/// Decode an error described as JSON, shaped like [`CapturedError`]:
/// `{"class_name", "message", "frames": [{"file", "line"}], "cause": {...}}`.
#[wasm_bindgen]
pub fn decode_error_json(json: &str, options: Option<String>) -> JsValue {
    decoded_or_failure(parse_options(options).and_then(|opts| {
        let err: CapturedError = serde_json::from_str(json)?;
        Ok(decode::decode_error_object_with(&err, &opts))
    }))
}

/// Catalog record for a class name, or the fallback record.
#[wasm_bindgen]
pub fn lookup_exception(class_name: &str) -> JsValue {
    to_js(catalog::lookup(class_name))
}

#[wasm_bindgen]
pub fn list_exceptions() -> JsValue {
    to_js(&catalog::list_all())
}

#[wasm_bindgen]
pub fn search_by_tag(tag: &str) -> JsValue {
    to_js(&catalog::search_by_tag(tag))
}

#[wasm_bindgen]
pub fn all_tags() -> JsValue {
    to_js(&catalog::all_tags())
}
