//! Shared fixtures for the integration tests.
//! Articles are built relative to a fixed clock so ordering is predictable.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use newsportal::{Article, NewArticle};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 16, 12, 0, 0).unwrap()
}

pub fn article(id: &str, category: &str, featured: bool, tags: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {}", id),
        content: format!("<p>Body of article {} about {}.</p>", id, category.to_lowercase()),
        excerpt: format!("Excerpt {}", id),
        category: category.to_string(),
        author: "Test Author".to_string(),
        published_at: fixed_now() - Duration::hours(id.len() as i64),
        image_url: "https://example.com/image.jpg".to_string(),
        featured,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// Eight articles across three categories, every other one featured.
pub fn article_set() -> Vec<Article> {
    vec![
        article("a1", "Technology", true, &["AI", "chips"]),
        article("a2", "Health", false, &["medicine"]),
        article("a3", "technology", true, &["ai", "cloud"]),
        article("a4", "Sports", false, &["football"]),
        article("a5", "Technology", true, &["cloud"]),
        article("a6", "Health", false, &["ai", "research"]),
        article("a7", "Sports", true, &["olympics"]),
        article("a8", "Technology", false, &[]),
    ]
}

pub fn submission(title: &str, category: &str) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        content: "<p>Fresh reporting from the newsroom.</p>".to_string(),
        excerpt: "Fresh reporting".to_string(),
        category: category.to_string(),
        author: "Desk Editor".to_string(),
        image_url: None,
        featured: false,
        tags: vec!["  breaking ".to_string(), "".to_string(), "news".to_string()],
    }
}

pub const MALFORMED_ARTICLES: &str = r#"[{"id": "1", "title": "Half an article""#;
