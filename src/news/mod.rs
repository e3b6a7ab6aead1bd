pub mod seed;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Image used when an editor submits an article without one.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1586339949916-3e9457bef6d3?w=800&h=400&fit=crop";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    /// HTML body.
    pub content: String,
    pub excerpt: String,
    /// Category name as free text; not a reference to `Category::id`.
    pub category: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub image_url: String,
    pub featured: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
}

/// Fields an editor submits for an article. Identity and publication time
/// are assigned by the storage layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub image_url: Option<String>,
    pub featured: bool,
    pub tags: Vec<String>,
}

/// Typed partial update for an article. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl Article {
    pub fn from_submission(id: String, submission: NewArticle, published_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: submission.title,
            content: submission.content,
            excerpt: submission.excerpt,
            category: submission.category,
            author: submission.author,
            published_at,
            image_url: submission
                .image_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            featured: submission.featured,
            tags: normalize_tag_list(submission.tags),
        }
    }

    /// Merges a patch into this article. The patch must already be validated.
    pub fn apply(&mut self, patch: ArticlePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(published_at) = patch.published_at {
            self.published_at = published_at;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }

    pub fn in_category(&self, name: &str) -> bool {
        category_matches(&self.category, name)
    }
}

impl NewArticle {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Invalid("Article title cannot be empty".to_string()));
        }

        if let Some(image_url) = self.image_url.as_deref().filter(|url| !url.trim().is_empty()) {
            url::Url::parse(image_url)
                .map_err(|e| Error::Invalid(format!("Invalid image URL '{}': {}", image_url, e)))?;
        }

        Ok(())
    }
}

impl ArticlePatch {
    pub fn featured(featured: bool) -> Self {
        Self {
            featured: Some(featured),
            ..Default::default()
        }
    }

    /// Full replacement built from an editor resubmission.
    pub fn from_submission(submission: NewArticle, published_at: DateTime<Utc>) -> Self {
        Self {
            title: Some(submission.title),
            content: Some(submission.content),
            excerpt: Some(submission.excerpt),
            category: Some(submission.category),
            author: Some(submission.author),
            published_at: Some(published_at),
            image_url: Some(
                submission
                    .image_url
                    .filter(|url| !url.trim().is_empty())
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            ),
            featured: Some(submission.featured),
            tags: Some(submission.tags),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks field values and normalizes tags. Returns the patch ready to merge.
    pub fn validate(mut self) -> Result<Self> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(Error::Invalid("Article title cannot be empty".to_string()));
            }
        }

        if let Some(image_url) = &self.image_url {
            url::Url::parse(image_url)
                .map_err(|e| Error::Invalid(format!("Invalid image URL '{}': {}", image_url, e)))?;
        }

        self.tags = self.tags.map(normalize_tag_list);
        Ok(self)
    }
}

/// Category names compare case-insensitively everywhere in the crate.
pub fn category_matches(article_category: &str, name: &str) -> bool {
    article_category.to_lowercase() == name.to_lowercase()
}

/// Trims tags and drops blank ones. Casing and duplicates are kept.
pub fn normalize_tag_list(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Splits an editor's comma-separated tag field.
pub fn parse_tag_field(field: &str) -> Vec<String> {
    normalize_tag_list(field.split(',').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_article() -> Article {
        Article {
            id: "1".to_string(),
            title: "Original".to_string(),
            content: "<p>Body</p>".to_string(),
            excerpt: "Body".to_string(),
            category: "Technology".to_string(),
            author: "Someone".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 3, 16, 10, 0, 0).unwrap(),
            image_url: "https://example.com/a.jpg".to_string(),
            featured: false,
            tags: vec!["tech".to_string()],
        }
    }

    #[test]
    fn test_article_serializes_camel_case() {
        let json = serde_json::to_value(sample_article()).unwrap();
        assert!(json.get("publishedAt").is_some());
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("published_at").is_none());
    }

    #[test]
    fn test_article_reads_browser_timestamps() {
        let json = r#"{"id":"9","title":"t","content":"c","excerpt":"e","category":"Health",
            "author":"a","publishedAt":"2024-03-16T10:00:00.000Z","imageUrl":"https://x.y/z.png",
            "featured":true,"tags":[]}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.published_at, Utc.with_ymd_and_hms(2024, 3, 16, 10, 0, 0).unwrap());
        assert!(article.featured);
    }

    #[test]
    fn test_apply_only_touches_patched_fields() {
        let mut article = sample_article();
        let before = article.clone();
        article.apply(ArticlePatch::featured(true));

        assert!(article.featured);
        assert_eq!(article.title, before.title);
        assert_eq!(article.tags, before.tags);
        assert_eq!(article.published_at, before.published_at);
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let patch = ArticlePatch {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(patch.validate(), Err(Error::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_relative_image_url() {
        let patch = ArticlePatch {
            image_url: Some("images/cover.png".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_validate_normalizes_tags() {
        let patch = ArticlePatch {
            tags: Some(vec![" AI ".to_string(), "".to_string(), "ai".to_string()]),
            ..Default::default()
        };
        let patch = patch.validate().unwrap();
        assert_eq!(patch.tags, Some(vec!["AI".to_string(), "ai".to_string()]));
    }

    #[test]
    fn test_submission_falls_back_to_placeholder_image() {
        let submission = NewArticle {
            title: "New".to_string(),
            image_url: Some("  ".to_string()),
            ..Default::default()
        };
        let article = Article::from_submission("42".to_string(), submission, Utc::now());
        assert_eq!(article.image_url, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_parse_tag_field() {
        assert_eq!(
            parse_tag_field("economy, AI , ,innovation"),
            vec!["economy", "AI", "innovation"]
        );
    }

    #[test]
    fn test_category_matching_ignores_case() {
        assert!(category_matches("Technology", "technology"));
        assert!(!category_matches("Technology", "Tech"));
    }
}
