use newsportal::query::{self, SearchQuery};
use newsportal::Article;
use proptest::prelude::*;

mod test_data;
use test_data::*;

fn tagged(id: usize, tags: Vec<String>) -> Article {
    let mut article = article(&format!("p{}", id), "Technology", id % 2 == 0, &[]);
    article.tags = tags;
    article
}

fn tag_lists() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(vec!["AI", "ai", " Ai ", "cloud", "Cloud", "", "rust"]), 0..5)
            .prop_map(|tags| tags.into_iter().map(str::to_string).collect()),
        0..12,
    )
}

proptest! {
    #[test]
    fn tag_weights_stay_in_range(lists in tag_lists(), limit in 1usize..20) {
        let articles: Vec<Article> = lists.into_iter().enumerate().map(|(i, tags)| tagged(i, tags)).collect();
        let cloud = query::tag_cloud(&articles, limit);

        prop_assert!(cloud.len() <= limit);
        for entry in &cloud {
            prop_assert!(entry.weight >= 1.0 && entry.weight <= 4.0);
            prop_assert!(entry.count > 0);
            prop_assert_eq!(entry.tag.clone(), entry.tag.trim().to_lowercase());
        }
        for pair in cloud.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        if let Some(top) = cloud.first() {
            prop_assert!((top.weight - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn tag_counts_are_case_insensitive(lists in tag_lists()) {
        let articles: Vec<Article> = lists.iter().cloned().enumerate().map(|(i, tags)| tagged(i, tags)).collect();
        let expected = lists
            .iter()
            .flatten()
            .filter(|tag| tag.trim().eq_ignore_ascii_case("ai"))
            .count();

        let cloud = query::tag_cloud(&articles, usize::MAX);
        let ai = cloud.iter().find(|entry| entry.tag == "ai").map(|entry| entry.count).unwrap_or(0);
        prop_assert_eq!(ai, expected);
    }

    #[test]
    fn search_results_are_an_ordered_matching_subset(text in "[a-z ]{0,8}", limit in 1usize..10) {
        let articles = article_set();
        let search_query = SearchQuery::new(text.clone()).limit(limit);
        let results = query::search(&articles, &search_query);

        prop_assert!(results.len() <= limit);
        if !search_query.is_runnable() {
            prop_assert!(results.is_empty());
        }
        let mut cursor = articles.iter();
        for result in &results {
            prop_assert!(search_query.matches(result));
            prop_assert!(cursor.any(|article| article.id == result.id));
        }
    }

    #[test]
    fn ranking_sections_are_bounded_slices(count in 0usize..12) {
        let articles: Vec<Article> = (0..count).map(|i| tagged(i, vec![])).collect();

        prop_assert_eq!(query::latest(&articles).len(), count.min(6));
        prop_assert_eq!(query::popular(&articles).len(), count.min(3));
        prop_assert_eq!(query::trending(&articles).len(), count.clamp(2, 5) - 2);
        prop_assert!(query::breaking(&articles).iter().all(|article| article.featured));
        prop_assert!(query::headline(&articles).len() <= 2);
    }
}

#[test]
fn mixed_case_tags_merge_into_one_entry() {
    let articles = vec![
        tagged(1, vec!["AI".to_string(), "ai".to_string()]),
        tagged(2, vec!["ai".to_string()]),
    ];
    let cloud = query::tag_cloud(&articles, 15);
    assert_eq!(cloud.len(), 1);
    assert_eq!(cloud[0].tag, "ai");
    assert_eq!(cloud[0].name, "Ai");
    assert_eq!(cloud[0].count, 3);
}

#[test]
fn related_excludes_current_and_matches_category() {
    let articles = article_set();
    let current = &articles[0];
    let related = query::related(&articles, current);

    assert!(related.len() <= 3);
    assert!(related.iter().all(|article| article.id != current.id));
    assert!(related.iter().all(|article| article.in_category(&current.category)));
}
