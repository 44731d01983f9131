//! Fetching, state and rendering of the legal pages.

mod loader;
mod render;
mod state;

pub use loader::load_document;
pub use render::{render_markdown, resolve_link, EMPTY_PLACEHOLDER, INTERNAL_ROUTES};
pub use state::{LoadTicket, PageState, ViewState};
