//! Pure queries over article collections already loaded from storage.

pub mod ranking;
pub mod search;
pub mod tags;

pub use ranking::{breaking, headline, latest, popular, related, trending};
pub use search::{search, SearchQuery};
pub use tags::{tag_cloud, TagWeight};
