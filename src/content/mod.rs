pub mod extractor;

pub use extractor::{derive_excerpt, slugify, strip_html, to_plain_text};
