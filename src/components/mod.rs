pub mod legal_page;

pub use legal_page::*;
