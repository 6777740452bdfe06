//! Browser helpers: navigation, query string, file inputs

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::File;

/// Full page navigation
pub fn go_to(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            log::error!("Navigation to {} failed: {:?}", path, e);
        }
    }
}

/// Current `?query`, or empty
pub fn query_string() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Swap the query string in the address bar without reloading
pub fn replace_query(query: &str) {
    let Some(window) = web_sys::window() else { return };
    let path = window.location().pathname().unwrap_or_default();
    let target = format!("{}{}", path, query);
    if let Ok(history) = window.history() {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&target)) {
            log::warn!("Could not rewrite URL: {:?}", e);
        }
    }
}

/// All files picked in an `<input type="file">`
pub fn picked_files(input: &NodeRef<html::Input>) -> Vec<File> {
    let Some(el) = input.get_untracked() else { return Vec::new() };
    let Some(list) = el.files() else { return Vec::new() };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

pub fn picked_file(input: &NodeRef<html::Input>) -> Option<File> {
    picked_files(input).into_iter().next()
}

/// Image shown next to a file input: a stored image URL or a blob URL for
/// a freshly picked file. Blob URLs are revoked when replaced and when the
/// owning component goes away.
#[derive(Clone, Copy)]
pub struct Preview(RwSignal<Option<String>>);

impl Preview {
    pub fn new() -> Self {
        let url = RwSignal::new(None::<String>);
        on_cleanup(move || {
            if let Some(Some(old)) = url.try_get_untracked() {
                revoke(&old);
            }
        });
        Self(url)
    }

    pub fn get(&self) -> Option<String> {
        self.0.get()
    }

    pub fn set(&self, next: Option<String>) {
        if let Some(old) = self.0.get_untracked() {
            revoke(&old);
        }
        self.0.set(next);
    }

    pub fn show_file(&self, file: &File) {
        self.set(web_sys::Url::create_object_url_with_blob(file).ok());
    }
}

fn is_blob_url(url: &str) -> bool {
    url.starts_with("blob:")
}

fn revoke(url: &str) {
    if !is_blob_url(url) {
        return;
    }
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        log::warn!("Could not revoke preview {}: {:?}", url, e);
    }
}

pub fn clear_input(input: &NodeRef<html::Input>) {
    if let Some(el) = input.get_untracked() {
        el.set_value("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_blob_previews_are_revoked() {
        assert!(is_blob_url("blob:http://localhost/5f2c"));
        assert!(!is_blob_url("/static/images/database_images/meal.jpg"));
        assert!(!is_blob_url("https://cdn.example.com/blob:x"));
    }
}
