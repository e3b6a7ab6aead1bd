use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::Blake3Credentials;
use crate::cli::Cli;
use crate::config::Config;
use crate::content;
use crate::engagement::{Bookmarks, CommentBoard, Newsletter, SearchHistory};
use crate::error::{Error, Result};
use crate::news::{parse_tag_field, Article, ArticlePatch, NewArticle};
use crate::query::{self, SearchQuery};
use crate::storage::{FileStore, KeyValueStore, MemoryStore, StorageService};

const EXCERPT_CHARS: usize = 160;

/// Everything a command needs, wired to one store.
pub struct Context {
    pub config: Config,
    pub service: StorageService,
    pub comments: CommentBoard,
    pub bookmarks: Bookmarks,
    pub newsletter: Newsletter,
    pub history: SearchHistory,
}

impl Context {
    /// Build the context on a file store in the configured data directory,
    /// or on a seeded in-memory store when `memory` is set.
    pub fn build(config: Config, memory: bool) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = if memory {
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(FileStore::new(config.resolved_data_dir()?)?)
        };
        debug!("Using store at {}", store.describe());

        let auth = Arc::new(Blake3Credentials::from_settings(&config.admin)?);
        let service = StorageService::with_authenticator(store.clone(), auth);
        if memory {
            service.initialize_dummy_data()?;
        }

        Ok(Self {
            comments: CommentBoard::new(store.clone()),
            bookmarks: Bookmarks::new(store.clone()),
            newsletter: Newsletter::new(
                store.clone(),
                Duration::from_millis(config.newsletter.delay_ms),
            ),
            history: SearchHistory::new(store),
            service,
            config,
        })
    }
}

/// Fields collected by `add`.
pub struct ArticleForm {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category: String,
    pub author: String,
    pub image_url: Option<String>,
    pub featured: bool,
    pub tags: String,
}

/// Fields collected by `edit`; absent ones are left unchanged.
#[derive(Default)]
pub struct EditForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub tags: Option<String>,
    pub republish: bool,
}

impl EditForm {
    pub fn into_patch(self, now: DateTime<Utc>) -> ArticlePatch {
        ArticlePatch {
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            category: self.category,
            author: self.author,
            published_at: self.republish.then_some(now),
            image_url: self.image_url,
            featured: self.featured,
            tags: self.tags.as_deref().map(parse_tag_field),
        }
    }
}

/// Install the tracing subscriber. Output goes to stderr, or to the
/// configured log file; the returned guard must outlive the command.
pub fn init_logging(debug: bool, verbose: bool, config: &Config) -> Result<Option<WorkerGuard>> {
    let logging = &config.logging;
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_new(&logging.level)
            .map_err(|e| Error::Config(format!("Invalid log level '{}': {}", logging.level, e)))?
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(debug)
        .with_line_number(debug);

    let (result, guard) = if logging.log_to_file {
        let mut path = PathBuf::from(&logging.log_file);
        if path.is_relative() {
            path = config.resolved_data_dir()?.join(path);
        }
        let dir = path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_name = path
            .file_name()
            .ok_or_else(|| Error::Config(format!("Invalid log file path: {}", path.display())))?
            .to_owned();
        std::fs::create_dir_all(&dir)?;

        let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
        let builder = builder.with_ansi(false).with_writer(writer);
        let result = if logging.json_format {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        (result, Some(guard))
    } else {
        let builder = builder.with_writer(io::stderr);
        let result = if logging.json_format {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        (result, None)
    };

    result.map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))?;
    debug!("Logging initialized");
    Ok(guard)
}

/// Generate shell completions
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "newsportal", &mut io::stdout());
}

// Reading

pub fn init(ctx: &Context) -> Result<()> {
    info!("Initializing news portal data at {}", ctx.service.store().describe());

    if ctx.service.initialize_dummy_data()? {
        let stats = ctx.service.dashboard_stats()?;
        println!("✅ Sample data created!");
        println!("   Articles: {}", stats.total_articles);
        println!("   Categories: {}", stats.total_categories);
    } else {
        println!("ℹ️  Articles already present, nothing to seed.");
    }
    println!("   Storage: {}", ctx.service.store().describe());
    Ok(())
}

pub fn list_articles(
    ctx: &Context,
    category: Option<String>,
    featured: bool,
    limit: Option<usize>,
) -> Result<()> {
    let mut articles = match category.as_deref() {
        Some(name) => ctx.service.get_articles_by_category(name)?,
        None => ctx.service.get_articles()?,
    };
    if featured {
        articles.retain(|article| article.featured);
    }
    if let Some(limit) = limit {
        articles.truncate(limit);
    }

    if articles.is_empty() {
        println!("📋 No articles found.");
        println!("   Seed sample data with: newsportal init");
        return Ok(());
    }

    println!("📋 Articles ({}):", articles.len());
    println!("==================");
    for article in &articles {
        print_article_line(article);
    }
    Ok(())
}

pub fn show_article(ctx: &Context, id: &str, width: usize) -> Result<()> {
    let article = ctx
        .service
        .get_article_by_id(id)?
        .ok_or_else(|| Error::NotFound(format!("Article '{}'", id)))?;

    println!("📰 {}", article.title);
    println!("   {} | {} | {}", article.category, article.author, time_ago(article.published_at));
    if !article.tags.is_empty() {
        println!("   Tags: {}", article.tags.join(", "));
    }
    if ctx.bookmarks.is_bookmarked(&article.id)? {
        println!("   🔖 Bookmarked");
    }
    println!();
    println!("{}", content::to_plain_text(&article.content, width));

    let related = query::related(&ctx.service.get_articles()?, &article);
    if !related.is_empty() {
        println!("Related articles:");
        for other in &related {
            print_article_line(other);
        }
    }
    Ok(())
}

pub fn list_categories(ctx: &Context) -> Result<()> {
    let categories = ctx.service.get_categories()?;
    if categories.is_empty() {
        println!("📂 No categories yet.");
        return Ok(());
    }

    let articles = ctx.service.get_articles()?;
    println!("📂 Categories:");
    for category in &categories {
        let count = articles.iter().filter(|article| article.in_category(&category.name)).count();
        println!("\n   {} ({}) - {} articles", category.name, category.slug, count);
        if !category.description.is_empty() {
            println!("   {}", category.description);
        }
    }
    Ok(())
}

pub fn category_page(ctx: &Context, slug: &str) -> Result<()> {
    let category = ctx
        .service
        .get_category_by_slug(slug)?
        .ok_or_else(|| Error::NotFound(format!("Category '{}'", slug)))?;
    let articles = ctx.service.get_articles_by_category(&category.name)?;

    println!("📂 {}", category.name);
    if !category.description.is_empty() {
        println!("   {}", category.description);
    }
    println!();
    if articles.is_empty() {
        println!("   No articles in this category yet.");
    }
    for article in &articles {
        print_article_line(article);
    }
    Ok(())
}

pub fn search(ctx: &Context, text: &str, category: Option<String>, limit: Option<usize>) -> Result<()> {
    let mut search_query = SearchQuery::with_settings(text, &ctx.config.search);
    if let Some(category) = category {
        search_query = search_query.in_category(category);
    }
    if let Some(limit) = limit {
        search_query = search_query.limit(limit);
    }

    if !search_query.is_runnable() {
        return Err(Error::Invalid(format!(
            "Search text must be at least {} characters",
            search_query.min_query_len
        )));
    }

    let results = query::search(&ctx.service.get_articles()?, &search_query);
    ctx.history.record(text.trim())?;
    info!("Search '{}' matched {} articles", text, results.len());

    if results.is_empty() {
        println!("🔍 No results for \"{}\"", text.trim());
        return Ok(());
    }
    println!("🔍 Results for \"{}\":", text.trim());
    for article in &results {
        print_article_line(article);
    }
    Ok(())
}

pub fn history(ctx: &Context, clear: bool) -> Result<()> {
    if clear {
        ctx.history.clear()?;
        println!("✅ Search history cleared.");
        return Ok(());
    }

    let entries = ctx.history.entries()?;
    if entries.is_empty() {
        println!("🕘 No recent searches.");
    } else {
        println!("🕘 Recent searches:");
        for entry in &entries {
            println!("   {}", entry);
        }
    }
    Ok(())
}

pub fn tags(ctx: &Context, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(ctx.config.tags.max_tags);
    let cloud = query::tag_cloud(&ctx.service.get_articles()?, limit);
    if cloud.is_empty() {
        println!("🏷️  No tags yet.");
        return Ok(());
    }

    println!("🏷️  Popular tags:");
    for entry in &cloud {
        println!("   {:<20} {:>3}  {:.1}", entry.name, entry.count, entry.weight);
    }
    Ok(())
}

pub fn home(ctx: &Context) -> Result<()> {
    ctx.service.initialize_dummy_data()?;
    let articles = ctx.service.get_articles()?;

    let sections = [
        ("⚡ Breaking", query::breaking(&articles)),
        ("📰 Headlines", query::headline(&articles)),
        ("🆕 Latest", query::latest(&articles)),
        ("📈 Trending", query::trending(&articles)),
        ("⭐ Popular", query::popular(&articles)),
    ];
    for (title, section) in sections.iter() {
        if section.is_empty() {
            continue;
        }
        println!("\n{}", title);
        for article in section {
            print_article_line(article);
        }
    }
    Ok(())
}

// Admin session

pub fn login(ctx: &Context, username: &str, password: &str) -> Result<()> {
    if ctx.service.login_admin(username, password)? {
        println!("✅ Logged in as {}", username);
        Ok(())
    } else {
        Err(Error::PermissionDenied("invalid username or password".to_string()))
    }
}

pub fn logout(ctx: &Context) -> Result<()> {
    ctx.service.logout_admin()?;
    println!("✅ Logged out.");
    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    if ctx.service.is_admin_logged_in()? {
        println!("🔑 Admin session active.");
    } else {
        println!("🔒 Not logged in.");
    }
    Ok(())
}

// Admin

pub fn add_article(ctx: &Context, form: ArticleForm) -> Result<()> {
    ctx.service.require_admin()?;

    let excerpt = form
        .excerpt
        .filter(|excerpt| !excerpt.trim().is_empty())
        .unwrap_or_else(|| content::derive_excerpt(&form.content, EXCERPT_CHARS));
    let article = ctx.service.create_article(NewArticle {
        title: form.title,
        content: form.content,
        excerpt,
        category: form.category,
        author: form.author,
        image_url: form.image_url,
        featured: form.featured,
        tags: parse_tag_field(&form.tags),
    })?;

    println!("✅ Article published!");
    println!("   ID: {}", article.id);
    println!("   Title: {}", article.title);
    Ok(())
}

pub fn edit_article(ctx: &Context, id: &str, form: EditForm) -> Result<()> {
    ctx.service.require_admin()?;

    let patch = form.into_patch(Utc::now());
    if patch.is_empty() {
        return Err(Error::Invalid("Nothing to change; pass at least one field".to_string()));
    }

    if ctx.service.update_article(id, patch)? {
        println!("✅ Article '{}' updated.", id);
        Ok(())
    } else {
        Err(Error::NotFound(format!("Article '{}'", id)))
    }
}

pub fn delete_article(ctx: &Context, id: &str) -> Result<()> {
    ctx.service.require_admin()?;

    match ctx.service.delete_article(id)? {
        0 => Err(Error::NotFound(format!("Article '{}'", id))),
        _ => {
            println!("✅ Article '{}' deleted.", id);
            Ok(())
        }
    }
}

pub fn feature_article(ctx: &Context, id: &str, featured: bool) -> Result<()> {
    ctx.service.require_admin()?;

    if !ctx.service.update_article(id, ArticlePatch::featured(featured))? {
        return Err(Error::NotFound(format!("Article '{}'", id)));
    }
    if featured {
        println!("⭐ Article '{}' is now featured.", id);
    } else {
        println!("✅ Article '{}' is no longer featured.", id);
    }
    Ok(())
}

pub fn stats(ctx: &Context) -> Result<()> {
    ctx.service.require_admin()?;

    let stats = ctx.service.dashboard_stats()?;
    println!("📊 Dashboard");
    println!("   Total articles: {}", stats.total_articles);
    println!("   Featured articles: {}", stats.featured_articles);
    println!("   Categories: {}", stats.total_categories);
    println!("   Newsletter subscribers: {}", ctx.newsletter.subscribers()?.len());
    println!("   Comments: {}", ctx.comments.all()?.len());
    Ok(())
}

pub fn add_category(ctx: &Context, name: &str, description: &str) -> Result<()> {
    ctx.service.require_admin()?;

    let category = ctx.service.add_category(name, description)?;
    println!("✅ Category '{}' added (slug: {}).", category.name, category.slug);
    Ok(())
}

// Engagement

fn require_article(ctx: &Context, article_id: &str) -> Result<Article> {
    ctx.service
        .get_article_by_id(article_id)?
        .ok_or_else(|| Error::NotFound(format!("Article '{}'", article_id)))
}

pub fn comment(ctx: &Context, article_id: &str, name: &str, email: &str, text: &str) -> Result<()> {
    require_article(ctx, article_id)?;
    let comment = ctx.comments.add_comment(article_id, name, email, text)?;
    println!("💬 Comment posted (id: {}).", comment.id);
    Ok(())
}

pub fn reply(ctx: &Context, article_id: &str, parent_id: &str, text: &str) -> Result<()> {
    require_article(ctx, article_id)?;
    let reply = ctx.comments.add_reply(article_id, parent_id, text)?;
    println!("💬 Reply posted (id: {}).", reply.id);
    Ok(())
}

pub fn like(ctx: &Context, comment_id: &str) -> Result<()> {
    if ctx.comments.toggle_like(comment_id)? {
        println!("👍 Liked comment {}.", comment_id);
    } else {
        println!("Like removed from comment {}.", comment_id);
    }
    Ok(())
}

pub fn comments(ctx: &Context, article_id: &str) -> Result<()> {
    let article = require_article(ctx, article_id)?;
    let threads = ctx.comments.threads(article_id)?;
    let liked = ctx.comments.liked()?;

    println!("💬 Comments on \"{}\" ({}):", article.title, threads.len());
    for thread in &threads {
        let mark = if liked.contains(&thread.comment.id) { " (liked)" } else { "" };
        println!(
            "\n   {} · {} · 👍 {}{}",
            thread.comment.name,
            time_ago(thread.comment.created_at),
            thread.comment.likes,
            mark
        );
        println!("   {}", thread.comment.content);
        println!("   id: {}", thread.comment.id);
        for reply in &thread.replies {
            println!("      ↳ {} · {}: {}", reply.name, time_ago(reply.created_at), reply.content);
        }
    }
    Ok(())
}

pub fn bookmark(ctx: &Context, article_id: &str) -> Result<()> {
    let article = require_article(ctx, article_id)?;
    if ctx.bookmarks.toggle(article_id)? {
        println!("🔖 Bookmarked \"{}\".", article.title);
    } else {
        println!("Removed bookmark for \"{}\".", article.title);
    }
    Ok(())
}

pub fn bookmarks(ctx: &Context) -> Result<()> {
    let articles = ctx.bookmarks.articles(&ctx.service)?;
    if articles.is_empty() {
        println!("🔖 No bookmarks yet.");
        return Ok(());
    }
    println!("🔖 Bookmarked articles:");
    for article in &articles {
        print_article_line(article);
    }
    Ok(())
}

pub fn subscribe(ctx: &Context, email: &str) -> Result<()> {
    ctx.newsletter.subscribe(email)?;
    println!("✅ Subscribed {} to the newsletter.", email.trim());
    Ok(())
}

pub fn status(ctx: &Context) -> Result<()> {
    let store = ctx.service.store();
    let stats = store.stats()?;

    println!("📊 News Portal Status");
    println!("=====================");
    println!("   Storage: {}", store.describe());
    println!("   Keys: {}", stats.total_keys);
    println!("   Size: {} bytes", stats.total_bytes);
    for key in store.keys()? {
        println!("     - {}", key);
    }
    println!("   Articles: {}", ctx.service.get_articles()?.len());
    println!("   Categories: {}", ctx.service.get_categories()?.len());
    println!(
        "   Admin session: {}",
        if ctx.service.is_admin_logged_in()? { "active" } else { "none" }
    );
    Ok(())
}

fn print_article_line(article: &Article) {
    let star = if article.featured { "⭐ " } else { "" };
    println!("   [{}] {}{}", article.id, star, article.title);
    println!("       {} · {} · {}", article.category, article.author, time_ago(article.published_at));
}

/// Coarse relative time, e.g. "3 hours ago".
pub fn time_ago(at: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(at);
    let (value, unit) = if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    } else if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };
    format!("{} {}{} ago", value, unit, if value == 1 { "" } else { "s" })
}
