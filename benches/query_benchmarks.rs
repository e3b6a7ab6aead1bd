use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use newsportal::query::{self, SearchQuery};
use newsportal::storage::collection::{read_collection, write_collection};
use newsportal::{Article, MemoryStore};

const CATEGORIES: [&str; 5] = ["Technology", "Health", "Sports", "Business", "Environment"];
const TAGS: [&str; 8] = ["ai", "climate", "markets", "football", "research", "policy", "cloud", "film"];

fn generate_articles(count: usize) -> Vec<Article> {
    let now = Utc::now();
    (0..count)
        .map(|i| Article {
            id: i.to_string(),
            title: format!("Story {} on {}", i, TAGS[i % TAGS.len()]),
            content: format!(
                "<p>Paragraph one of story {}.</p><p>More detail about {} and {}.</p>",
                i,
                TAGS[i % TAGS.len()],
                TAGS[(i + 3) % TAGS.len()]
            ),
            excerpt: format!("Summary of story {}", i),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            author: "Bench Desk".to_string(),
            published_at: now - Duration::minutes(i as i64),
            image_url: newsportal::news::PLACEHOLDER_IMAGE_URL.to_string(),
            featured: i % 4 == 0,
            tags: vec![
                TAGS[i % TAGS.len()].to_string(),
                TAGS[(i + 1) % TAGS.len()].to_uppercase(),
            ],
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1_000, 10_000] {
        let articles = generate_articles(size);
        let search_query = SearchQuery::new("climate");
        let scoped = SearchQuery::new("research").in_category("health").limit(50);

        group.bench_with_input(BenchmarkId::new("preview", size), &articles, |b, articles| {
            b.iter(|| black_box(query::search(articles, &search_query)));
        });
        group.bench_with_input(BenchmarkId::new("category_scoped", size), &articles, |b, articles| {
            b.iter(|| black_box(query::search(articles, &scoped)));
        });
    }

    group.finish();
}

fn bench_tag_cloud(c: &mut Criterion) {
    let mut group = c.benchmark_group("tag_cloud");

    for size in [100, 1_000, 10_000] {
        let articles = generate_articles(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &articles, |b, articles| {
            b.iter(|| black_box(query::tag_cloud(articles, 15)));
        });
    }

    group.finish();
}

fn bench_collection_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_rewrite");

    for size in [100, 1_000] {
        let store = MemoryStore::new();
        write_collection(&store, "articles", &generate_articles(size)).unwrap();

        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut articles: Vec<Article> = read_collection(&store, "articles").unwrap();
                articles[0].featured = !articles[0].featured;
                write_collection(&store, "articles", &articles).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_tag_cloud, bench_collection_rewrite);
criterion_main!(benches);
