pub mod collection;
pub mod file_store;
pub mod service;
pub mod traits;

pub use file_store::FileStore;
pub use service::{DashboardStats, StorageService, SESSION_MARKER};
pub use traits::{KeyValueStore, MemoryStore, StoreStats};

/// Keys under which each collection is persisted.
pub mod keys {
    pub const ARTICLES: &str = "newsportal_articles";
    pub const CATEGORIES: &str = "newsportal_categories";
    pub const ADMIN_SESSION: &str = "newsportal_admin_session";

    pub const COMMENTS: &str = "article_comments";
    pub const LIKED_COMMENTS: &str = "liked_comments";
    pub const BOOKMARKS: &str = "bookmarked_articles";
    pub const NEWSLETTER_SUBSCRIBERS: &str = "newsletter_subscribers";
    pub const SEARCH_HISTORY: &str = "search_history";
}
