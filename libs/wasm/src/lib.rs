//! WASM-facing entry points for the partscan analysis pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The upload page hands the raw file bytes and name to
//! [`analyze_part_json`] and renders the returned profile; native tests
//! interact with the internal helper [`analyze_part_internal`] to avoid
//! depending on a JS host.

use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "partscan-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Analyzes an uploaded part and returns the manufacturability profile
/// serialized as a JSON string.
///
/// Fail-soft like the underlying pipeline: a corrupt or unsupported
/// upload yields the default profile rather than an error, so the page
/// always has something to render.
///
/// # Examples
/// ```no_run
/// // In JavaScript: JSON.parse(analyze_part_json(bytes, file.name));
/// ```
#[wasm_bindgen]
pub fn analyze_part_json(data: &[u8], file_name: &str) -> String {
    let profile = analyze_part_internal(data, file_name);
    serde_json::to_string(&profile).unwrap_or_else(|_| "{}".to_string())
}

/// Host-only helper that runs the fail-soft pipeline and returns the
/// profile with Rust types.
pub fn analyze_part_internal(data: &[u8], file_name: &str) -> partscan_analysis::GeometryData {
    partscan_analysis::analyze_part(data, file_name)
}

#[cfg(test)]
mod tests;
