use std::sync::Arc;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::auth::{Authenticator, Blake3Credentials};
use crate::content;
use crate::error::{Error, Result};
use crate::news::{seed, Article, ArticlePatch, Category, NewArticle};
use crate::storage::collection::{read_collection, write_collection};
use crate::storage::keys;
use crate::storage::traits::{KeyValueStore, MemoryStore};

/// Value of the session key while an admin is logged in.
pub const SESSION_MARKER: &str = "true";

/// Typed access to articles, categories and the admin session flag.
///
/// Every read goes to the store; nothing is cached between calls, and every
/// returned value is an owned copy.
#[derive(Clone)]
pub struct StorageService {
    store: Arc<dyn KeyValueStore>,
    auth: Arc<dyn Authenticator>,
}

/// Counters shown on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_articles: usize,
    pub featured_articles: usize,
    pub total_categories: usize,
}

impl StorageService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_authenticator(store, Arc::new(Blake3Credentials::default()))
    }

    pub fn with_authenticator(store: Arc<dyn KeyValueStore>, auth: Arc<dyn Authenticator>) -> Self {
        Self { store, auth }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    // Articles

    pub fn get_articles(&self) -> Result<Vec<Article>> {
        read_collection(self.store.as_ref(), keys::ARTICLES)
    }

    pub fn save_articles(&self, articles: &[Article]) -> Result<()> {
        write_collection(self.store.as_ref(), keys::ARTICLES, articles)
    }

    /// Put `article` at the front of the collection.
    pub fn add_article(&self, article: Article) -> Result<()> {
        let mut articles = self.get_articles()?;
        debug!("Adding article {}", article.id);
        articles.insert(0, article);
        self.save_articles(&articles)
    }

    /// Merge `patch` into the first article with `id`. Returns `false` and
    /// writes nothing when no article matches.
    pub fn update_article(&self, id: &str, patch: ArticlePatch) -> Result<bool> {
        let patch = patch.validate()?;
        let mut articles = self.get_articles()?;

        match articles.iter_mut().find(|article| article.id == id) {
            Some(article) => {
                article.apply(patch);
                self.save_articles(&articles)?;
                debug!("Updated article {}", id);
                Ok(true)
            }
            None => {
                debug!("Update skipped, no article {}", id);
                Ok(false)
            }
        }
    }

    /// Remove every article with `id`. Returns how many were removed.
    pub fn delete_article(&self, id: &str) -> Result<usize> {
        let mut articles = self.get_articles()?;
        let before = articles.len();
        articles.retain(|article| article.id != id);
        let removed = before - articles.len();

        if removed > 0 {
            self.save_articles(&articles)?;
            debug!("Deleted {} article(s) with id {}", removed, id);
        }
        Ok(removed)
    }

    pub fn get_article_by_id(&self, id: &str) -> Result<Option<Article>> {
        Ok(self.get_articles()?.into_iter().find(|article| article.id == id))
    }

    pub fn get_articles_by_category(&self, category: &str) -> Result<Vec<Article>> {
        Ok(self
            .get_articles()?
            .into_iter()
            .filter(|article| article.in_category(category))
            .collect())
    }

    pub fn get_featured_articles(&self) -> Result<Vec<Article>> {
        Ok(self
            .get_articles()?
            .into_iter()
            .filter(|article| article.featured)
            .collect())
    }

    /// Build an article from an editor submission and add it.
    ///
    /// The id is the current time in milliseconds, so two submissions within
    /// the same millisecond collide.
    pub fn create_article(&self, submission: NewArticle) -> Result<Article> {
        submission.validate()?;
        let now = Utc::now();
        let article = Article::from_submission(now.timestamp_millis().to_string(), submission, now);

        self.add_article(article.clone())?;
        info!("Created article {} ({})", article.id, article.title);
        Ok(article)
    }

    /// Replace an article's editable fields from a resubmission and
    /// republish it now.
    pub fn edit_article(&self, id: &str, submission: NewArticle) -> Result<bool> {
        self.update_article(id, ArticlePatch::from_submission(submission, Utc::now()))
    }

    // Categories

    pub fn get_categories(&self) -> Result<Vec<Category>> {
        read_collection(self.store.as_ref(), keys::CATEGORIES)
    }

    pub fn save_categories(&self, categories: &[Category]) -> Result<()> {
        write_collection(self.store.as_ref(), keys::CATEGORIES, categories)
    }

    pub fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        Ok(self
            .get_categories()?
            .into_iter()
            .find(|category| category.slug == slug))
    }

    /// Append a category with a slug derived from `name`.
    pub fn add_category(&self, name: &str, description: &str) -> Result<Category> {
        let name = name.trim();
        let slug = content::slugify(name);
        if slug.is_empty() {
            return Err(Error::Invalid(format!("Category name '{}' has no usable characters", name)));
        }

        let mut categories = self.get_categories()?;
        if categories.iter().any(|category| category.slug == slug) {
            return Err(Error::AlreadyExists(format!("Category '{}' already exists", slug)));
        }

        let category = Category {
            id: Utc::now().timestamp_millis().to_string(),
            name: name.to_string(),
            slug,
            description: description.trim().to_string(),
        };
        categories.push(category.clone());
        self.save_categories(&categories)?;
        info!("Added category {}", category.slug);
        Ok(category)
    }

    // Authentication

    pub fn is_admin_logged_in(&self) -> Result<bool> {
        Ok(self.store.read(keys::ADMIN_SESSION)?.as_deref() == Some(SESSION_MARKER))
    }

    /// Start an admin session if the credentials verify. A failed attempt
    /// leaves any existing session alone.
    pub fn login_admin(&self, username: &str, password: &str) -> Result<bool> {
        if self.auth.verify(username, password) {
            self.store.write(keys::ADMIN_SESSION, SESSION_MARKER)?;
            info!("Admin session started for {}", username);
            Ok(true)
        } else {
            warn!("Rejected admin login for {}", username);
            Ok(false)
        }
    }

    pub fn logout_admin(&self) -> Result<()> {
        self.store.remove(keys::ADMIN_SESSION)?;
        info!("Admin session ended");
        Ok(())
    }

    /// Fail with `PermissionDenied` unless an admin session is active.
    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin_logged_in()? {
            Ok(())
        } else {
            Err(Error::PermissionDenied(
                "admin login required (run `newsportal login`)".to_string(),
            ))
        }
    }

    // Bootstrap

    /// Seed sample articles and categories when there are no articles yet.
    /// Returns whether anything was written.
    pub fn initialize_dummy_data(&self) -> Result<bool> {
        if !self.get_articles()?.is_empty() {
            debug!("Articles present, skipping sample data");
            return Ok(false);
        }

        let articles = seed::sample_articles(Utc::now());
        let categories = seed::sample_categories();
        self.save_articles(&articles)?;
        self.save_categories(&categories)?;
        info!(
            "Seeded {} articles and {} categories",
            articles.len(),
            categories.len()
        );
        Ok(true)
    }

    pub fn dashboard_stats(&self) -> Result<DashboardStats> {
        let articles = self.get_articles()?;
        Ok(DashboardStats {
            total_articles: articles.len(),
            featured_articles: articles.iter().filter(|article| article.featured).count(),
            total_categories: self.get_categories()?.len(),
        })
    }
}
