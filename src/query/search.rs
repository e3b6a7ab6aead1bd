use crate::config::SearchSettings;
use crate::news::{category_matches, Article};

/// Free-text search over title, excerpt, content and tags.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    /// `None` searches every category.
    pub category: Option<String>,
    pub limit: usize,
    pub min_query_len: usize,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let defaults = SearchSettings::default();
        Self {
            text: text.into(),
            category: None,
            limit: defaults.preview_limit,
            min_query_len: defaults.min_query_len,
        }
    }

    pub fn with_settings(text: impl Into<String>, settings: &SearchSettings) -> Self {
        Self {
            limit: settings.preview_limit,
            min_query_len: settings.min_query_len,
            ..Self::new(text)
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Whether the query is long enough to run.
    pub fn is_runnable(&self) -> bool {
        self.text.trim().chars().count() >= self.min_query_len
    }

    pub fn matches(&self, article: &Article) -> bool {
        let needle = self.text.trim().to_lowercase();
        let matches_text = article.title.to_lowercase().contains(&needle)
            || article.excerpt.to_lowercase().contains(&needle)
            || article.content.to_lowercase().contains(&needle)
            || article
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle));

        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| category_matches(&article.category, category));

        matches_text && matches_category
    }
}

/// Matching articles in storage order, capped at `query.limit`.
pub fn search(articles: &[Article], query: &SearchQuery) -> Vec<Article> {
    if !query.is_runnable() {
        return Vec::new();
    }

    articles
        .iter()
        .filter(|article| query.matches(article))
        .take(query.limit)
        .cloned()
        .collect()
}
