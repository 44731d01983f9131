//! Server-rendered legal pages, for clients that can't run the wasm bundle.

use axum::{extract::Extension, response::Html, routing::get, Router};
use dioxus::prelude::*;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::common::{DocumentType, CONFIG};
use crate::components::LegalPageView;
use crate::legal::{load_document, ViewState};
use crate::store::{DocumentStore, RestStore};

#[derive(Clone)]
struct State {
    store: Arc<dyn DocumentStore>,
}

/// Loads one document and renders the complete HTML page for it.
pub async fn render_page(store: &dyn DocumentStore, doc_type: DocumentType) -> String {
    let view: ViewState = load_document(store, doc_type).await.into();
    let title = doc_type.title();

    let body = dioxus_ssr::render_element(rsx! {
        LegalPageView { title: title.to_string(), view: view }
    });

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

async fn terms_handler(Extension(state): Extension<State>) -> Html<String> {
    Html(render_page(state.store.as_ref(), DocumentType::TermsOfService).await)
}

async fn privacy_handler(Extension(state): Extension<State>) -> Html<String> {
    Html(render_page(state.store.as_ref(), DocumentType::PrivacyPolicy).await)
}

pub fn router(store: Arc<dyn DocumentStore>) -> Router {
    Router::new()
        .route(DocumentType::TermsOfService.route(), get(terms_handler))
        .route(DocumentType::PrivacyPolicy.route(), get(privacy_handler))
        .layer(Extension(State { store }))
}

pub async fn run() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legal_pages=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    let tracing_layer = TraceLayer::new_for_http();

    let addr: SocketAddr = match CONFIG.bind_address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("invalid bind address {:?}: {e}", CONFIG.bind_address);
            return;
        }
    };

    let store = Arc::new(RestStore::from_config(&CONFIG));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(store).layer(cors).layer(tracing_layer);

    tracing::info!("serving legal pages on {addr}");
    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server stopped: {e}");
    }
}
