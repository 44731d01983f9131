#![allow(non_snake_case)]

use crate::common;
use crate::store;

use common::DocumentType;
use common::CONFIG;
use dioxus::prelude::*;
use store::RestStore;
use store::StoreHandle;

mod console;
mod legal_page;

pub use console::init_logging;
pub use legal_page::LegalPage;

pub fn run_app() {
    init_logging();
    // Loading the config up front is what reports missing store credentials.
    tracing::info!("document table: {}", CONFIG.documents_table);
    launch(App);
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/terms")]
    Terms {},
    #[route("/privacy")]
    Privacy {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn App() -> Element {
    use_context_provider(|| StoreHandle::new(RestStore::from_config(&CONFIG)));

    rsx!(Router::<Route> {})
}

#[component]
fn Terms() -> Element {
    let doc_type = DocumentType::TermsOfService;

    rsx! {
        LegalPage { doc_type: doc_type, title: doc_type.title().to_string() }
    }
}

#[component]
fn Privacy() -> Element {
    let doc_type = DocumentType::PrivacyPolicy;

    rsx! {
        LegalPage { doc_type: doc_type, title: doc_type.title().to_string() }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("no page at /{}", segments.join("/"));

    rsx! {
        div {
            padding: "20px",
            p { "This page doesn't exist." }
            ul {
                li { Link { to: Route::Terms {}, "Terms of Service" } }
                li { Link { to: Route::Privacy {}, "Privacy Policy" } }
            }
        }
    }
}
