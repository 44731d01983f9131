#![allow(non_snake_case)]

use crate::common;
use crate::legal;

use common::current_year;
use common::COMPANY_NAME;
use common::CONTACT_EMAIL;
use dioxus::prelude::*;
use legal::render_markdown;
use legal::ViewState;

pub const STYLES: &str = include_str!("../styles.css");

/// The whole legal page for a given view state. Holds no state of its own, so the
/// browser app and the server render the same markup.
#[component]
pub fn LegalPageView(title: String, view: ViewState) -> Element {
    if view.is_loading() {
        return rsx! {
            style { {STYLES} }
            div {
                class: "legal-loading",
                div { class: "legal-spinner" }
            }
        };
    }

    let segments = view.meta().segments();

    rsx! {
        style { {STYLES} }
        div {
            class: "legal-page",
            div {
                class: "legal-card",
                div {
                    class: "legal-header",
                    h1 { "{title}" }
                    div {
                        class: "legal-meta",
                        for segment in segments {
                            span { "{segment}" }
                        }
                    }
                }
                div {
                    class: "legal-body",
                    { body(&view) }
                    { contact_footer() }
                }
                { copyright() }
            }
        }
    }
}

fn body(view: &ViewState) -> Element {
    match view {
        ViewState::Loaded(doc) => rsx! {
            DocumentBody { content: doc.content.clone() }
        },
        ViewState::Failed(e) => rsx! {
            ErrorPanel { message: e.to_string() }
        },
        ViewState::Loading => None,
    }
}

#[component]
pub fn DocumentBody(content: String) -> Element {
    let html = render_markdown(&content);

    rsx! {
        div {
            class: "legal-document",
            dangerous_inner_html: "{html}",
        }
    }
}

#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        div {
            class: "legal-error",
            p { class: "legal-error-title", "Error loading content:" }
            pre { "{message}" }
            p {
                class: "legal-error-hint",
                "Please check your internet connection or try again later."
            }
        }
    }
}

fn contact_footer() -> Element {
    let mailto = format!("mailto:{CONTACT_EMAIL}");

    rsx! {
        div {
            class: "legal-contact",
            h3 { "Contact Us" }
            p { "If you have any questions about this document, please contact us at:" }
            a { href: "{mailto}", "{CONTACT_EMAIL}" }
        }
    }
}

fn copyright() -> Element {
    let notice = format!(
        "\u{a9} {} {COMPANY_NAME}. All rights reserved.",
        current_year()
    );

    rsx! {
        div { class: "legal-copyright", "{notice}" }
    }
}
