//! Front-page sections.
//!
//! There is no popularity metric; every ranking is a positional slice of the
//! collection in storage order (newest first, since new articles are
//! prepended).

use crate::news::{category_matches, Article};

pub const LATEST_COUNT: usize = 6;
pub const POPULAR_COUNT: usize = 3;
pub const TRENDING_START: usize = 2;
pub const TRENDING_END: usize = 5;
pub const BREAKING_COUNT: usize = 3;
pub const HEADLINE_COUNT: usize = 2;
pub const RELATED_COUNT: usize = 3;

fn window(articles: &[Article], start: usize, end: usize) -> Vec<Article> {
    let end = end.min(articles.len());
    let start = start.min(end);
    articles[start..end].to_vec()
}

pub fn latest(articles: &[Article]) -> Vec<Article> {
    window(articles, 0, LATEST_COUNT)
}

pub fn popular(articles: &[Article]) -> Vec<Article> {
    window(articles, 0, POPULAR_COUNT)
}

pub fn trending(articles: &[Article]) -> Vec<Article> {
    window(articles, TRENDING_START, TRENDING_END)
}

/// Featured articles for the breaking-news ticker.
pub fn breaking(articles: &[Article]) -> Vec<Article> {
    articles
        .iter()
        .filter(|article| article.featured)
        .take(BREAKING_COUNT)
        .cloned()
        .collect()
}

/// Featured articles for the front-page hero.
pub fn headline(articles: &[Article]) -> Vec<Article> {
    articles
        .iter()
        .filter(|article| article.featured)
        .take(HEADLINE_COUNT)
        .cloned()
        .collect()
}

/// Other articles in the same category as `current`.
pub fn related(articles: &[Article], current: &Article) -> Vec<Article> {
    articles
        .iter()
        .filter(|article| category_matches(&article.category, &current.category))
        .filter(|article| article.id != current.id)
        .take(RELATED_COUNT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn numbered(count: usize) -> Vec<Article> {
        (0..count)
            .map(|i| Article {
                id: i.to_string(),
                title: format!("Article {}", i),
                content: String::new(),
                excerpt: String::new(),
                category: if i % 2 == 0 { "Even" } else { "Odd" }.to_string(),
                author: "a".to_string(),
                published_at: Utc::now(),
                image_url: String::new(),
                featured: i % 3 == 0,
                tags: Vec::new(),
            })
            .collect()
    }

    fn ids(articles: &[Article]) -> Vec<String> {
        articles.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_positional_sections() {
        let articles = numbered(10);
        assert_eq!(ids(&latest(&articles)), vec!["0", "1", "2", "3", "4", "5"]);
        assert_eq!(ids(&popular(&articles)), vec!["0", "1", "2"]);
        assert_eq!(ids(&trending(&articles)), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_sections_on_short_lists() {
        let articles = numbered(3);
        assert_eq!(ids(&trending(&articles)), vec!["2"]);
        assert!(trending(&numbered(1)).is_empty());
        assert!(latest(&[]).is_empty());
    }

    #[test]
    fn test_featured_sections() {
        let articles = numbered(12);
        assert_eq!(ids(&breaking(&articles)), vec!["0", "3", "6"]);
        assert_eq!(ids(&headline(&articles)), vec!["0", "3"]);
    }

    #[test]
    fn test_related_excludes_current_and_caps() {
        let articles = numbered(12);
        let current = articles[4].clone();
        assert_eq!(ids(&related(&articles, &current)), vec!["0", "2", "6"]);
    }
}
