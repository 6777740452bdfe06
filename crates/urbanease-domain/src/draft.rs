//! Pending Listing Draft
//!
//! A provider's add-listing form is parked in local storage while the
//! browser visits the payment page, then submitted when the dashboard is
//! reloaded with `?payment=success`. Only one draft exists at a time.
//!
//! Each draft carries an idempotency key minted when it is created. The
//! key travels with every submission attempt of that draft, so a repeated
//! return from the payment page or an explicit retry cannot create a second
//! listing on a backend that honours it.

use std::cell::RefCell;
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::endpoints::{paths, ApiError, ApiResult};
use crate::entity::DomainResult;
use crate::listing::ListingKind;

/// Fixed record key; there is never more than one draft
pub const DRAFT_KEY: &str = "current_listing";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DraftState {
    /// Saved, not yet sent
    #[default]
    Pending,
    /// A submission was started; if it is still in this state on load, the
    /// outcome is unknown and a retry reuses the same key
    Submitting,
    /// Paid for, but the submission was refused or never arrived
    Failed,
}

impl DraftState {
    /// Payment went through for this draft and it still has to be sent
    pub fn needs_retry(&self) -> bool {
        matches!(self, DraftState::Submitting | DraftState::Failed)
    }
}

/// Everything about a draft except the file handles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMeta {
    pub listing_type: ListingKind,
    pub fields: BTreeMap<String, String>,
    pub idempotency_key: String,
    #[serde(default)]
    pub state: DraftState,
}

/// A listing form waiting for payment. `F` is the platform file handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft<F> {
    pub meta: DraftMeta,
    pub files: Vec<F>,
}

impl<F> ListingDraft<F> {
    pub fn new(kind: ListingKind, fields: BTreeMap<String, String>, files: Vec<F>) -> Self {
        Self {
            meta: DraftMeta {
                listing_type: kind,
                fields,
                idempotency_key: uuid::Uuid::new_v4().to_string(),
                state: DraftState::Pending,
            },
            files,
        }
    }

    pub fn from_parts(meta: DraftMeta, files: Vec<F>) -> Self {
        Self { meta, files }
    }

    pub fn kind(&self) -> ListingKind {
        self.meta.listing_type
    }

    pub fn idempotency_key(&self) -> &str {
        &self.meta.idempotency_key
    }

    pub fn state(&self) -> DraftState {
        self.meta.state
    }

    pub fn endpoint(&self) -> String {
        paths::add_listing(self.meta.listing_type)
    }

    /// Text parts of the multipart body, in submission order. Files go
    /// under `images` and are appended by the submitter.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = self
            .meta
            .fields
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "payment_status" | "idempotency_key" | "listing_type"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        out.push(("listing_type".into(), self.meta.listing_type.slug().into()));
        out.push(("payment_status".into(), "success".into()));
        out.push(("idempotency_key".into(), self.meta.idempotency_key.clone()));
        out
    }
}

/// Local single-record storage for the draft
#[async_trait(?Send)]
pub trait DraftStore {
    type File: Clone;

    async fn save(&self, draft: &ListingDraft<Self::File>) -> DomainResult<()>;
    async fn load(&self) -> DomainResult<Option<ListingDraft<Self::File>>>;
    async fn clear(&self) -> DomainResult<()>;
}

/// Sends a draft as a multipart POST
#[async_trait(?Send)]
pub trait ListingSubmitter {
    type File: Clone;

    async fn submit(&self, endpoint: &str, draft: &ListingDraft<Self::File>) -> ApiResult<()>;
}

/// In-memory store, used where no browser storage exists
pub struct MemoryDraftStore<F> {
    slot: RefCell<Option<ListingDraft<F>>>,
}

impl<F> Default for MemoryDraftStore<F> {
    fn default() -> Self {
        Self { slot: RefCell::new(None) }
    }
}

impl<F> MemoryDraftStore<F> {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl<F: Clone> DraftStore for MemoryDraftStore<F> {
    type File = F;

    async fn save(&self, draft: &ListingDraft<F>) -> DomainResult<()> {
        *self.slot.borrow_mut() = Some(draft.clone());
        Ok(())
    }

    async fn load(&self) -> DomainResult<Option<ListingDraft<F>>> {
        Ok(self.slot.borrow().clone())
    }

    async fn clear(&self) -> DomainResult<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

/// Result of processing a (possible) return from the payment page
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeOutcome {
    /// The page was not loaded with `payment=success`
    NotAPaymentReturn,
    /// Payment returned but there was nothing stored
    NoDraft,
    /// Listing created and draft cleared
    Submitted(ListingKind),
    /// The POST failed; the draft is kept for a retry
    Failed { kind: ListingKind, error: ApiError },
}

/// Does the query string (with or without `?`) carry `payment=success`?
pub fn is_payment_success(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "payment=success")
}

/// Query string with the `payment` parameter removed, `?`-prefixed or empty
pub fn strip_payment_param(query: &str) -> String {
    let rest: Vec<&str> = query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty() && *pair != "payment" && !pair.starts_with("payment="))
        .collect();
    if rest.is_empty() {
        String::new()
    } else {
        format!("?{}", rest.join("&"))
    }
}

/// Park the form before redirecting to the payment page
pub async fn begin_payment<S: DraftStore>(store: &S, draft: &ListingDraft<S::File>) -> DomainResult<()> {
    store.save(draft).await?;
    log::info!(
        "Saved {} listing draft {} before payment",
        draft.kind().slug(),
        draft.idempotency_key()
    );
    Ok(())
}

/// Handle a dashboard load. Submits the stored draft when the query says
/// payment succeeded.
pub async fn resume_after_payment<S, P>(query: &str, store: &S, submitter: &P) -> DomainResult<ResumeOutcome>
where
    S: DraftStore,
    P: ListingSubmitter<File = S::File>,
{
    if !is_payment_success(query) {
        return Ok(ResumeOutcome::NotAPaymentReturn);
    }
    submit_stored(store, submitter).await
}

/// Explicit retry of a draft whose earlier submission failed
pub async fn retry_pending<S, P>(store: &S, submitter: &P) -> DomainResult<ResumeOutcome>
where
    S: DraftStore,
    P: ListingSubmitter<File = S::File>,
{
    submit_stored(store, submitter).await
}

/// Kind of a stored draft left over from an earlier page: one whose
/// submission failed or was cut off mid-request. A draft still waiting on
/// payment is not reported.
pub async fn stranded_draft<S: DraftStore>(store: &S) -> DomainResult<Option<ListingKind>> {
    let stranded = store
        .load()
        .await?
        .filter(|draft| draft.state().needs_retry())
        .map(|draft| draft.kind());
    if let Some(kind) = stranded {
        log::info!("Found an unsent {} listing draft", kind.slug());
    }
    Ok(stranded)
}

async fn submit_stored<S, P>(store: &S, submitter: &P) -> DomainResult<ResumeOutcome>
where
    S: DraftStore,
    P: ListingSubmitter<File = S::File>,
{
    let Some(mut draft) = store.load().await? else {
        log::info!("Payment return without a stored draft");
        return Ok(ResumeOutcome::NoDraft);
    };
    let kind = draft.kind();

    draft.meta.state = DraftState::Submitting;
    store.save(&draft).await?;

    match submitter.submit(&draft.endpoint(), &draft).await {
        Ok(()) => {
            if let Err(e) = store.clear().await {
                log::warn!("Listing submitted but draft not cleared: {}", e);
            }
            log::info!("Submitted {} listing {}", kind.slug(), draft.idempotency_key());
            Ok(ResumeOutcome::Submitted(kind))
        }
        Err(error) => {
            log::error!("Submitting {} listing failed: {}", kind.slug(), error);
            draft.meta.state = DraftState::Failed;
            store.save(&draft).await?;
            Ok(ResumeOutcome::Failed { kind, error })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Records every submission and fails while `fail` is set
    #[derive(Default)]
    struct RecordingSubmitter {
        calls: RefCell<Vec<(String, Vec<(String, String)>, Vec<String>)>>,
        fail: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl ListingSubmitter for RecordingSubmitter {
        type File = String;

        async fn submit(&self, endpoint: &str, draft: &ListingDraft<String>) -> ApiResult<()> {
            self.calls
                .borrow_mut()
                .push((endpoint.to_string(), draft.form_fields(), draft.files.clone()));
            if self.fail.get() {
                Err(ApiError::Rejected("Payment required before listing".into()))
            } else {
                Ok(())
            }
        }
    }

    fn house_draft() -> ListingDraft<String> {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), "Sunrise Hostel".to_string());
        fields.insert("type".to_string(), "Hostel".to_string());
        ListingDraft::new(ListingKind::House, fields, vec!["a.jpg".to_string(), "b.jpg".to_string()])
    }

    fn field<'a>(fields: &'a [(String, String)], key: &str) -> Option<&'a str> {
        fields.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_payment_query() {
        assert!(is_payment_success("?payment=success"));
        assert!(is_payment_success("tab=house&payment=success"));
        assert!(!is_payment_success("?payment=failed"));
        assert!(!is_payment_success(""));
        assert_eq!(strip_payment_param("?payment=success"), "");
        assert_eq!(strip_payment_param("?tab=house&payment=success"), "?tab=house");
    }

    #[test]
    fn test_form_fields_carry_key_and_flag() {
        let draft = house_draft();
        let fields = draft.form_fields();
        assert_eq!(field(&fields, "payment_status"), Some("success"));
        assert_eq!(field(&fields, "listing_type"), Some("house"));
        assert_eq!(field(&fields, "idempotency_key"), Some(draft.idempotency_key()));
        assert_eq!(draft.endpoint(), "/provider/api/house-listings/add");
    }

    #[test]
    fn test_drafts_get_distinct_keys() {
        assert_ne!(house_draft().idempotency_key(), house_draft().idempotency_key());
    }

    #[tokio::test]
    async fn test_successful_return_submits_and_clears() {
        let store = MemoryDraftStore::new();
        let submitter = RecordingSubmitter::default();
        let draft = house_draft();
        begin_payment(&store, &draft).await.unwrap();

        let outcome = resume_after_payment("?payment=success", &store, &submitter).await.unwrap();
        assert_eq!(outcome, ResumeOutcome::Submitted(ListingKind::House));
        assert!(store.load().await.unwrap().is_none());

        let calls = submitter.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/provider/api/house-listings/add");
        assert_eq!(calls[0].2, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    }

    #[tokio::test]
    async fn test_fresh_load_without_draft() {
        let store: MemoryDraftStore<String> = MemoryDraftStore::new();
        let submitter = RecordingSubmitter::default();

        let outcome = resume_after_payment("", &store, &submitter).await.unwrap();
        assert_eq!(outcome, ResumeOutcome::NotAPaymentReturn);

        let outcome = resume_after_payment("?payment=success", &store, &submitter).await.unwrap();
        assert_eq!(outcome, ResumeOutcome::NoDraft);
        assert!(submitter.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_non_payment_load_leaves_draft_alone() {
        let store = MemoryDraftStore::new();
        let submitter = RecordingSubmitter::default();
        begin_payment(&store, &house_draft()).await.unwrap();

        resume_after_payment("?tab=house", &store, &submitter).await.unwrap();
        assert!(store.load().await.unwrap().is_some());
        assert!(submitter.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failure_keeps_draft_and_retry_reuses_key() {
        let store = MemoryDraftStore::new();
        let submitter = RecordingSubmitter::default();
        submitter.fail.set(true);
        let draft = house_draft();
        let key = draft.idempotency_key().to_string();
        begin_payment(&store, &draft).await.unwrap();

        let outcome = resume_after_payment("?payment=success", &store, &submitter).await.unwrap();
        assert!(matches!(outcome, ResumeOutcome::Failed { kind: ListingKind::House, .. }));
        let kept = store.load().await.unwrap().unwrap();
        assert_eq!(kept.idempotency_key(), key);
        assert_eq!(kept.state(), DraftState::Failed);

        submitter.fail.set(false);
        let outcome = retry_pending(&store, &submitter).await.unwrap();
        assert_eq!(outcome, ResumeOutcome::Submitted(ListingKind::House));
        assert!(store.load().await.unwrap().is_none());

        let calls = submitter.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(field(&calls[0].1, "idempotency_key"), field(&calls[1].1, "idempotency_key"));
    }

    #[tokio::test]
    async fn test_failed_resume_is_offered_again_on_next_load() {
        let store = MemoryDraftStore::new();
        let submitter = RecordingSubmitter::default();
        submitter.fail.set(true);
        begin_payment(&store, &house_draft()).await.unwrap();
        resume_after_payment("?payment=success", &store, &submitter).await.unwrap();

        // Plain reload of the dashboard
        let outcome = resume_after_payment("", &store, &submitter).await.unwrap();
        assert_eq!(outcome, ResumeOutcome::NotAPaymentReturn);
        assert_eq!(stranded_draft(&store).await.unwrap(), Some(ListingKind::House));
    }

    #[tokio::test]
    async fn test_interrupted_submission_is_stranded() {
        let store = MemoryDraftStore::new();
        let mut draft = house_draft();
        draft.meta.state = DraftState::Submitting;
        store.save(&draft).await.unwrap();
        assert_eq!(stranded_draft(&store).await.unwrap(), Some(ListingKind::House));
    }

    #[tokio::test]
    async fn test_unpaid_or_missing_draft_is_not_stranded() {
        let store: MemoryDraftStore<String> = MemoryDraftStore::new();
        assert_eq!(stranded_draft(&store).await.unwrap(), None);

        begin_payment(&store, &house_draft()).await.unwrap();
        assert_eq!(stranded_draft(&store).await.unwrap(), None);
    }

    #[test]
    fn test_meta_serializes_without_files() {
        let draft = house_draft();
        let json = serde_json::to_value(&draft.meta).unwrap();
        assert_eq!(json["listing_type"], "house");
        assert_eq!(json["state"], "pending");
        assert_eq!(json["fields"]["title"], "Sunrise Hostel");
    }
}
