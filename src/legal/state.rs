use crate::common::{DocumentMeta, DocumentType, LoadError, LoadedDocument};

/// What a legal page is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Loading,
    Loaded(LoadedDocument),
    Failed(LoadError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn meta(&self) -> DocumentMeta {
        match self {
            Self::Loaded(doc) => doc.meta(),
            _ => DocumentMeta::default(),
        }
    }
}

impl From<Result<LoadedDocument, LoadError>> for ViewState {
    fn from(outcome: Result<LoadedDocument, LoadError>) -> Self {
        match outcome {
            Ok(doc) => Self::Loaded(doc),
            Err(e) => Self::Failed(e),
        }
    }
}

/// Identifies one fetch. Only the ticket of the latest request may write the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub doc_type: DocumentType,
    generation: u64,
}

/// Drives a page through `loading -> loaded | error`, once per requested type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    requested: Option<DocumentType>,
    generation: u64,
    view: ViewState,
}

impl PageState {
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Call on mount and whenever the requested type may have changed.
    ///
    /// Returns a ticket when a fetch has to be started. Asking again for the type that
    /// is already requested returns `None`, so re-renders don't re-fetch.
    pub fn request(&mut self, doc_type: DocumentType) -> Option<LoadTicket> {
        if self.requested == Some(doc_type) {
            return None;
        }

        self.requested = Some(doc_type);
        self.generation += 1;
        self.view = ViewState::Loading;

        Some(LoadTicket {
            doc_type,
            generation: self.generation,
        })
    }

    /// Applies the outcome of a fetch. Outcomes of superseded tickets are dropped.
    pub fn resolve(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<LoadedDocument, LoadError>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("dropping stale result for {}", ticket.doc_type);
            return false;
        }
        if !self.view.is_loading() {
            return false;
        }

        self.view = outcome.into();
        true
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation && self.requested == Some(ticket.doc_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legal::load_document;
    use crate::store::mock::MockStore;

    fn doc(content: &str) -> LoadedDocument {
        LoadedDocument {
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_loading() {
        let state = PageState::default();
        assert!(state.view().is_loading());
    }

    #[test]
    fn same_type_is_requested_once() {
        let mut state = PageState::default();
        assert!(state.request(DocumentType::TermsOfService).is_some());
        assert!(state.request(DocumentType::TermsOfService).is_none());
        assert!(state.request(DocumentType::TermsOfService).is_none());
    }

    #[test]
    fn resolution_leaves_loading_exactly_once() {
        let mut state = PageState::default();
        let ticket = state.request(DocumentType::PrivacyPolicy).unwrap();

        assert!(state.resolve(ticket, Ok(doc("first"))));
        assert!(!state.resolve(ticket, Ok(doc("second"))));
        assert_eq!(state.view(), &ViewState::Loaded(doc("first")));
    }

    #[test]
    fn type_change_reenters_loading_and_drops_stale_results() {
        let mut state = PageState::default();
        let terms = state.request(DocumentType::TermsOfService).unwrap();
        let privacy = state.request(DocumentType::PrivacyPolicy).unwrap();
        assert!(state.view().is_loading());

        assert!(!state.resolve(terms, Ok(doc("terms"))));
        assert!(state.view().is_loading());

        assert!(state.resolve(privacy, Err(LoadError::NotFound)));
        assert_eq!(state.view(), &ViewState::Failed(LoadError::NotFound));
    }

    #[test]
    fn switching_back_fetches_again() {
        let mut state = PageState::default();
        let first = state.request(DocumentType::TermsOfService).unwrap();
        state.resolve(first, Ok(doc("terms")));
        state.request(DocumentType::PrivacyPolicy).unwrap();

        let again = state.request(DocumentType::TermsOfService).unwrap();
        assert_ne!(first, again);
        assert!(!state.is_current(first));
        assert!(state.is_current(again));
    }

    #[test]
    fn failed_view_has_empty_meta() {
        let view = ViewState::Failed(LoadError::Query("boom".to_string()));
        assert!(view.meta().segments().is_empty());
    }

    #[tokio::test]
    async fn one_fetch_per_mount_for_each_type() {
        for doc_type in [DocumentType::TermsOfService, DocumentType::PrivacyPolicy] {
            let store = MockStore::with_row("text", Some("1"), None);
            let mut state = PageState::default();

            // a few re-renders with the same type
            let mut tickets = vec![];
            for _ in 0..3 {
                if let Some(ticket) = state.request(doc_type) {
                    tickets.push(ticket);
                }
            }
            assert_eq!(tickets.len(), 1);

            let outcome = load_document(&store, tickets[0].doc_type).await;
            assert!(state.resolve(tickets[0], outcome));

            assert_eq!(store.fetches(), 1);
            assert!(matches!(state.view(), ViewState::Loaded(_)));
        }
    }

    #[tokio::test]
    async fn zero_rows_end_in_error_state() {
        let store = MockStore::new(Ok(None));
        let mut state = PageState::default();
        let ticket = state.request(DocumentType::PrivacyPolicy).unwrap();

        let outcome = load_document(&store, ticket.doc_type).await;
        state.resolve(ticket, outcome);

        match state.view() {
            ViewState::Failed(e) => {
                assert_eq!(e.to_string(), "No active document found in database.")
            }
            other => panic!("expected error state, got {other:?}"),
        }
    }
}
