pub mod common;
pub mod components;
pub mod legal;
pub mod store;

#[cfg(not(feature = "server"))]
mod frontend;
#[cfg(feature = "server")]
pub mod server;

#[cfg(not(feature = "server"))]
pub use frontend::{run_app, Route};
