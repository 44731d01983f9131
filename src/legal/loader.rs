use crate::common::{DocumentType, LoadError, LoadedDocument};
use crate::store::DocumentStore;

/// Fetches the active document of the given type and cleans it up for display.
///
/// Every failure ends up as a [`LoadError`]; nothing is returned to the caller as a panic
/// or a transport error.
pub async fn load_document(
    store: &dyn DocumentStore,
    doc_type: DocumentType,
) -> Result<LoadedDocument, LoadError> {
    tracing::info!("fetching document: {doc_type}");

    match store.fetch_active(doc_type).await {
        Ok(Some(record)) => {
            let doc = LoadedDocument::from_record(record);
            tracing::info!(version = %doc.version, "document found for {doc_type}");
            Ok(doc)
        }
        Ok(None) => {
            tracing::warn!("no active document found for type: {doc_type}");
            Err(LoadError::NotFound)
        }
        Err(e) => {
            tracing::error!("document store error for {doc_type}: {e}");
            Err(e.into())
        }
    }
}
