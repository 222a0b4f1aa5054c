//! WASM-facing entry points for Mobius ring generation.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests go through the `*_internal` helpers, which
//! return Rust error types and do not need a JS host.
//!
//! ```
//! let mesh = mobius_wasm::generate_from_query_internal("sides=3&segments=8&twist=0").unwrap();
//! assert_eq!(mesh.triangle_count(), 48);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use mobius_mesh::{MobiusError, MobiusParams};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "mobius_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the query string of the default parameter record, for seeding
/// the page URL.
///
/// # Examples
/// ```
/// let query = mobius_wasm::default_query();
/// assert!(query.starts_with("geometryType=polygon&"));
/// ```
#[wasm_bindgen]
pub fn default_query() -> String {
    MobiusParams::default().to_query_string()
}

/// Normalizes a query string: parses it over the defaults and re-serializes
/// every field in canonical order.
///
/// # Errors
/// Returns a JavaScript error when a field cannot be parsed.
#[wasm_bindgen]
pub fn normalize_query(query: &str) -> Result<String, JsValue> {
    MobiusParams::from_query_string(query)
        .map(|params| params.to_query_string())
        .map_err(to_js_error)
}

/// Generates a ring mesh from a URL query string.
///
/// Missing parameters keep their defaults, so an empty string yields the
/// default ring.
///
/// # Errors
/// Returns a JavaScript error with a human-readable message when the
/// parameters are invalid.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_from_query(window.location.search);
/// // console.log(mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn generate_from_query(query: &str) -> Result<MeshHandle, JsValue> {
    generate_from_query_internal(query).map_err(to_js_error)
}

/// Generates a ring mesh from the JSON form of the parameter record.
///
/// # Errors
/// Returns a JavaScript error when the JSON or the parameters are invalid.
#[wasm_bindgen]
pub fn generate_from_json(json: &str) -> Result<MeshHandle, JsValue> {
    generate_from_json_internal(json).map_err(to_js_error)
}

/// Host-only helper behind [`generate_from_query`].
pub fn generate_from_query_internal(query: &str) -> Result<MeshHandle, MobiusError> {
    generate_internal(&MobiusParams::from_query_string(query)?)
}

/// Host-only helper behind [`generate_from_json`].
pub fn generate_from_json_internal(json: &str) -> Result<MeshHandle, MobiusError> {
    generate_internal(&MobiusParams::from_json(json)?)
}

fn generate_internal(params: &MobiusParams) -> Result<MeshHandle, MobiusError> {
    let mesh = mobius_mesh::generate_from_params(params)?;
    Ok(MeshHandle::from_mesh(mesh, params.colour.as_str()))
}

fn to_js_error(err: MobiusError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests;
