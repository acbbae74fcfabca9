//! Session Storage Backend
//!
//! `KeyValueStorage` over `window.sessionStorage`, reached through gloo's
//! raw handle so the backend itself stays a plain `Copy` value.

use gloo_storage::{SessionStorage as GlooSessionStorage, Storage};
use todo_core::{DomainError, DomainResult, KeyValueStorage};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStorage;

impl KeyValueStorage for SessionStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        GlooSessionStorage::raw().get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> DomainResult<()> {
        GlooSessionStorage::raw().set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
