use super::DocumentStore;
use crate::common::{DocumentType, LegalDocument, StoreError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Store that replays a canned answer and counts how often it was asked.
///
/// While paused, fetches are counted but don't answer until `resume` is called.
pub struct MockStore {
    pub answer: Mutex<Result<Option<LegalDocument>, StoreError>>,
    pub fetches: AtomicUsize,
    pub last_type: Mutex<Option<DocumentType>>,
    paused: AtomicBool,
    resumed: Notify,
}

impl MockStore {
    pub fn new(answer: Result<Option<LegalDocument>, StoreError>) -> Self {
        Self {
            answer: Mutex::new(answer),
            fetches: AtomicUsize::new(0),
            last_type: Mutex::new(None),
            paused: AtomicBool::new(false),
            resumed: Notify::new(),
        }
    }

    pub fn with_row(content: &str, version: Option<&str>, effective_from: Option<&str>) -> Self {
        Self::new(Ok(Some(LegalDocument {
            content: Some(content.to_string()),
            version: version.map(str::to_string),
            effective_from: effective_from.map(str::to_string),
        })))
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn last_type(&self) -> Option<DocumentType> {
        *self.last_type.lock().unwrap()
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
        self.resumed.notify_one();
    }
}

#[async_trait]
impl DocumentStore for MockStore {
    async fn fetch_active(
        &self,
        doc_type: DocumentType,
    ) -> Result<Option<LegalDocument>, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        *self.last_type.lock().unwrap() = Some(doc_type);
        if self.paused.load(Ordering::SeqCst) {
            self.resumed.notified().await;
        }
        self.answer.lock().unwrap().clone()
    }
}

// Lets a test keep a handle on the store it gave to a component.
#[async_trait]
impl DocumentStore for Arc<MockStore> {
    async fn fetch_active(
        &self,
        doc_type: DocumentType,
    ) -> Result<Option<LegalDocument>, StoreError> {
        self.as_ref().fetch_active(doc_type).await
    }
}
