use crate::common::{DocumentType, LegalDocument, StoreError};
use async_trait::async_trait;
use std::rc::Rc;

#[cfg(test)]
pub(crate) mod mock;
mod rest;

pub use rest::RestStore;

/// Anything the legal pages can read documents from.
///
/// Implementations return `Ok(None)` when no active row exists for the type;
/// that is not an error at this level.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DocumentStore: MaybeSync {
    async fn fetch_active(
        &self,
        doc_type: DocumentType,
    ) -> Result<Option<LegalDocument>, StoreError>;
}

// The browser runtime is single threaded and reqwest's wasm futures aren't Send.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSync: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> MaybeSync for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSync {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSync for T {}

/// Cheap handle to the store, shared through the component context.
#[derive(Clone)]
pub struct StoreHandle(Rc<dyn DocumentStore>);

impl StoreHandle {
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.0.as_ref()
    }
}
