//! Browser-side draft persistence
//!
//! IndexedDB keeps the add-listing form (including the selected image
//! files, which survive as structured clones) across the payment redirect.

use async_trait::async_trait;
use js_sys::{Array, Promise, Reflect};
use urbanease_domain::{
    ApiResult, DomainError, DomainResult, DraftMeta, DraftStore, ListingDraft, ListingSubmitter,
    DRAFT_KEY,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, IdbDatabase, IdbObjectStore, IdbRequest, IdbTransactionMode};

use crate::api;

const DB_NAME: &str = "UrbanEaseProviderDB";
const DB_VERSION: u32 = 1;
const STORE_NAME: &str = "pendingListings";

fn storage_err(value: JsValue) -> DomainError {
    let text = value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "IndexedDB error".to_string());
    DomainError::Storage(text)
}

/// Resolve when an IDB request fires `success`, with its `result`
fn request_done(request: &IdbRequest) -> JsFuture {
    let promise = Promise::new(&mut |resolve, reject| {
        let req = request.clone();
        let on_success = Closure::once_into_js(move |_event: web_sys::Event| {
            let result = req.result().unwrap_or(JsValue::UNDEFINED);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let req = request.clone();
        let on_error = Closure::once_into_js(move |_event: web_sys::Event| {
            let reason = req
                .error()
                .ok()
                .flatten()
                .map(|e| JsValue::from_str(&e.message()))
                .unwrap_or_else(|| JsValue::from_str("IndexedDB request failed"));
            let _ = reject.call1(&JsValue::NULL, &reason);
        });
        request.set_onsuccess(Some(on_success.unchecked_ref()));
        request.set_onerror(Some(on_error.unchecked_ref()));
    });
    JsFuture::from(promise)
}

/// Single-record draft store in `UrbanEaseProviderDB/pendingListings`
#[derive(Clone, Copy, Default)]
pub struct IndexedDbDraftStore;

impl IndexedDbDraftStore {
    async fn open(&self) -> DomainResult<IdbDatabase> {
        let factory = web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window".into()))?
            .indexed_db()
            .map_err(storage_err)?
            .ok_or_else(|| DomainError::Storage("IndexedDB unavailable".into()))?;
        let open = factory.open_with_u32(DB_NAME, DB_VERSION).map_err(storage_err)?;

        let upgrading = open.clone();
        let on_upgrade = Closure::once_into_js(move |_event: web_sys::Event| {
            let Ok(result) = upgrading.result() else { return };
            let Ok(db) = result.dyn_into::<IdbDatabase>() else { return };
            if !db.object_store_names().contains(STORE_NAME) {
                if let Err(e) = db.create_object_store(STORE_NAME) {
                    log::error!("Failed to create {}: {:?}", STORE_NAME, e);
                }
            }
        });
        open.set_onupgradeneeded(Some(on_upgrade.unchecked_ref()));

        request_done(&open)
            .await
            .map_err(storage_err)?
            .dyn_into::<IdbDatabase>()
            .map_err(storage_err)
    }

    async fn object_store(&self, mode: IdbTransactionMode) -> DomainResult<IdbObjectStore> {
        let db = self.open().await?;
        let tx = db
            .transaction_with_str_and_mode(STORE_NAME, mode)
            .map_err(storage_err)?;
        tx.object_store(STORE_NAME).map_err(storage_err)
    }
}

#[async_trait(?Send)]
impl DraftStore for IndexedDbDraftStore {
    type File = File;

    async fn save(&self, draft: &ListingDraft<File>) -> DomainResult<()> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let record = serde::Serialize::serialize(&draft.meta, &serializer)
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        let files: Array = draft.files.iter().collect();
        Reflect::set(&record, &JsValue::from_str("files"), &files).map_err(storage_err)?;

        let store = self.object_store(IdbTransactionMode::Readwrite).await?;
        let request = store
            .put_with_key(&record, &JsValue::from_str(DRAFT_KEY))
            .map_err(storage_err)?;
        request_done(&request).await.map_err(storage_err)?;
        Ok(())
    }

    async fn load(&self) -> DomainResult<Option<ListingDraft<File>>> {
        let store = self.object_store(IdbTransactionMode::Readonly).await?;
        let request = store.get(&JsValue::from_str(DRAFT_KEY)).map_err(storage_err)?;
        let record = request_done(&request).await.map_err(storage_err)?;
        if record.is_undefined() || record.is_null() {
            return Ok(None);
        }

        let meta: DraftMeta = serde_wasm_bindgen::from_value(record.clone())
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        let files = Reflect::get(&record, &JsValue::from_str("files"))
            .ok()
            .and_then(|v| v.dyn_into::<Array>().ok())
            .map(|arr| arr.iter().filter_map(|v| v.dyn_into::<File>().ok()).collect())
            .unwrap_or_default();
        Ok(Some(ListingDraft::from_parts(meta, files)))
    }

    async fn clear(&self) -> DomainResult<()> {
        let store = self.object_store(IdbTransactionMode::Readwrite).await?;
        let request = store.delete(&JsValue::from_str(DRAFT_KEY)).map_err(storage_err)?;
        request_done(&request).await.map_err(storage_err)?;
        Ok(())
    }
}

/// Posts a draft as multipart form data with its images under `images`
#[derive(Clone, Copy, Default)]
pub struct HttpSubmitter;

#[async_trait(?Send)]
impl ListingSubmitter for HttpSubmitter {
    type File = File;

    async fn submit(&self, endpoint: &str, draft: &ListingDraft<File>) -> ApiResult<()> {
        let form = draft_form(draft)?;
        api::add_listing(endpoint, form, draft.idempotency_key()).await?;
        Ok(())
    }
}

fn draft_form(draft: &ListingDraft<File>) -> ApiResult<FormData> {
    let form = FormData::new().map_err(api::js_err)?;
    for (name, value) in draft.form_fields() {
        form.append_with_str(&name, &value).map_err(api::js_err)?;
    }
    for file in &draft.files {
        form.append_with_blob_and_filename("images", file, &file.name())
            .map_err(api::js_err)?;
    }
    Ok(form)
}
