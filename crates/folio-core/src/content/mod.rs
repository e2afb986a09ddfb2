pub mod models;
pub mod source;

pub use models::*;
pub use source::{ContentSource, EmbeddedContentSource, FileContentSource, DEMO_CONTENT};
