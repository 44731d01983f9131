#![allow(non_snake_case)]

use crate::common::DocumentType;
use crate::components::LegalPageView;
use crate::legal::{load_document, PageState};
use crate::store::StoreHandle;

use dioxus::prelude::*;

/// Legal page that loads its document from the store in the context.
///
/// One fetch per mount and per change of `doc_type`. A fetch still running for the
/// previous type is cancelled, and its result would be dropped anyway.
#[component]
pub fn LegalPage(doc_type: DocumentType, title: String) -> Element {
    let store = use_context::<StoreHandle>();
    let mut page = use_signal(PageState::default);
    let mut in_flight = use_signal(|| None::<Task>);

    use_effect(use_reactive((&doc_type,), move |(doc_type,)| {
        let Some(ticket) = page.write().request(doc_type) else {
            return;
        };

        if let Some(task) = in_flight.take() {
            tracing::debug!("cancelling fetch superseded by {doc_type}");
            task.cancel();
        }

        let store = store.clone();
        let task = spawn(async move {
            let outcome = load_document(store.store(), ticket.doc_type).await;
            if page.write().resolve(ticket, outcome) {
                in_flight.set(None);
            }
        });
        in_flight.set(Some(task));
    }));

    let view = page.read().view().clone();

    rsx! {
        LegalPageView { title: title, view: view }
    }
}
