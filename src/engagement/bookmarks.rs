use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::news::Article;
use crate::storage::collection::{read_collection, write_collection};
use crate::storage::{keys, KeyValueStore, StorageService};

/// Reader bookmarks: an ordered list of article ids.
#[derive(Clone)]
pub struct Bookmarks {
    store: Arc<dyn KeyValueStore>,
}

impl Bookmarks {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<String>> {
        read_collection(self.store.as_ref(), keys::BOOKMARKS)
    }

    pub fn is_bookmarked(&self, article_id: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|id| id == article_id))
    }

    /// Add or remove a bookmark. Returns whether the article is bookmarked
    /// afterwards.
    pub fn toggle(&self, article_id: &str) -> Result<bool> {
        let mut ids = self.list()?;
        let bookmarked = if ids.iter().any(|id| id == article_id) {
            ids.retain(|id| id != article_id);
            false
        } else {
            ids.push(article_id.to_string());
            true
        };

        write_collection(self.store.as_ref(), keys::BOOKMARKS, &ids)?;
        debug!("Bookmark for {} is now {}", article_id, bookmarked);
        Ok(bookmarked)
    }

    /// Bookmarked articles in bookmark order. Ids whose article no longer
    /// exists are skipped.
    pub fn articles(&self, service: &StorageService) -> Result<Vec<Article>> {
        let articles = service.get_articles()?;
        Ok(self
            .list()?
            .iter()
            .filter_map(|id| articles.iter().find(|article| &article.id == id).cloned())
            .collect())
    }
}
