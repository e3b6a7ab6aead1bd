use std::collections::HashMap;

use crate::news::Article;

/// One entry of the tag cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct TagWeight {
    /// Normalized (trimmed, lowercase) tag.
    pub tag: String,
    /// Display form: normalized tag with its first character uppercased.
    pub name: String,
    pub count: usize,
    /// Relative size in `[1.0, 4.0]`, scaled against the most used tag.
    pub weight: f64,
}

/// Count tags across `articles` and rank them by frequency.
///
/// Tags are compared after trimming and lowercasing, so `"AI"` and `" ai"`
/// are the same tag. Ties keep the order in which tags were first seen.
pub fn tag_cloud(articles: &[Article], limit: usize) -> Vec<TagWeight> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for tag in articles.iter().flat_map(|article| article.tags.iter()) {
        let normalized = tag.trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        match index.get(&normalized) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(normalized.clone(), order.len());
                order.push((normalized, 1));
            }
        }
    }

    let max_count = order.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let mut cloud: Vec<TagWeight> = order
        .into_iter()
        .map(|(tag, count)| TagWeight {
            name: display_name(&tag),
            weight: weight_for(count, max_count),
            tag,
            count,
        })
        .collect();

    // stable: ties stay in first-seen order
    cloud.sort_by(|a, b| b.count.cmp(&a.count));
    cloud.truncate(limit);
    cloud
}

fn weight_for(count: usize, max_count: usize) -> f64 {
    if max_count == 0 {
        return 1.0;
    }
    (count as f64 / max_count as f64 * 3.0 + 1.0).clamp(1.0, 4.0)
}

fn display_name(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
