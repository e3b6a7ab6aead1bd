pub mod commands;

use clap::{Parser, Subcommand};
use crate::config::Config;
use crate::error::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "newsportal")]
#[command(about = "Browse, search and manage a local news portal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (overrides the configuration file)
    #[arg(long, global = true, env = "NEWSPORTAL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep all data in memory for this run, starting from the sample data
    #[arg(long, global = true)]
    pub memory: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed sample articles and categories if there are none
    Init,

    /// List articles
    Articles {
        /// Only articles in this category (case-insensitive)
        #[arg(long)]
        category: Option<String>,

        /// Only featured articles
        #[arg(short, long)]
        featured: bool,

        /// Maximum number of articles to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one article with related reading
    Show {
        /// Article id
        id: String,

        /// Wrap width for the article body
        #[arg(long, default_value_t = 80)]
        width: usize,
    },

    /// List categories
    Categories,

    /// List articles in the category with this slug
    Category {
        /// Category slug, e.g. `technology`
        slug: String,
    },

    /// Search titles, excerpts, bodies and tags
    Search {
        /// Search text (at least two characters)
        query: String,

        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show or clear recent searches
    History {
        #[arg(long)]
        clear: bool,
    },

    /// Show the most used tags
    Tags {
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Front page: headlines, latest, trending and popular articles
    Home,

    /// Start an admin session
    Login {
        username: String,
        password: String,
    },

    /// End the admin session
    Logout,

    /// Show whether an admin session is active
    Whoami,

    /// Publish a new article (admin)
    Add {
        #[arg(long)]
        title: String,

        /// HTML body
        #[arg(long)]
        content: String,

        /// Summary; derived from the body when omitted
        #[arg(long)]
        excerpt: Option<String>,

        #[arg(long)]
        category: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        image_url: Option<String>,

        #[arg(long)]
        featured: bool,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
    },

    /// Change fields of an existing article (admin)
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        excerpt: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        image_url: Option<String>,

        #[arg(long)]
        featured: Option<bool>,

        /// Comma-separated tags, replacing the current ones
        #[arg(long)]
        tags: Option<String>,

        /// Set the publication time to now
        #[arg(long)]
        republish: bool,
    },

    /// Delete an article (admin)
    Delete {
        id: String,
    },

    /// Mark an article as featured (admin)
    Feature {
        id: String,

        /// Remove the featured mark instead
        #[arg(long)]
        off: bool,
    },

    /// Dashboard counters (admin)
    Stats,

    /// Add a category (admin)
    AddCategory {
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Comment on an article
    Comment {
        article_id: String,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        content: String,
    },

    /// Reply to a comment
    Reply {
        article_id: String,
        parent_id: String,
        content: String,
    },

    /// Like or unlike a comment
    Like {
        comment_id: String,
    },

    /// Show the comment threads of an article
    Comments {
        article_id: String,
    },

    /// Bookmark or un-bookmark an article
    Bookmark {
        article_id: String,
    },

    /// List bookmarked articles
    Bookmarks,

    /// Subscribe an email address to the newsletter
    Subscribe {
        email: String,
    },

    /// Show storage location and contents
    Status,

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if let Commands::Completions { shell } = self.command {
            commands::generate_completions(shell);
            return Ok(());
        }

        let mut config = match &self.config {
            Some(path) => Config::load_with_env(path)?,
            None => Config::load_or_default(Config::default_config_file()?)?,
        };
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }

        let _log_guard = commands::init_logging(self.debug, self.verbose, &config)?;
        let ctx = commands::Context::build(config, self.memory)?;

        match self.command {
            Commands::Init => commands::init(&ctx),
            Commands::Articles { category, featured, limit } => {
                commands::list_articles(&ctx, category, featured, limit)
            }
            Commands::Show { id, width } => commands::show_article(&ctx, &id, width),
            Commands::Categories => commands::list_categories(&ctx),
            Commands::Category { slug } => commands::category_page(&ctx, &slug),
            Commands::Search { query, category, limit } => {
                commands::search(&ctx, &query, category, limit)
            }
            Commands::History { clear } => commands::history(&ctx, clear),
            Commands::Tags { limit } => commands::tags(&ctx, limit),
            Commands::Home => commands::home(&ctx),
            Commands::Login { username, password } => commands::login(&ctx, &username, &password),
            Commands::Logout => commands::logout(&ctx),
            Commands::Whoami => commands::whoami(&ctx),
            Commands::Add { title, content, excerpt, category, author, image_url, featured, tags } => {
                commands::add_article(
                    &ctx,
                    commands::ArticleForm { title, content, excerpt, category, author, image_url, featured, tags },
                )
            }
            Commands::Edit {
                id, title, content, excerpt, category, author, image_url, featured, tags, republish,
            } => commands::edit_article(
                &ctx,
                &id,
                commands::EditForm {
                    title, content, excerpt, category, author, image_url, featured, tags, republish,
                },
            ),
            Commands::Delete { id } => commands::delete_article(&ctx, &id),
            Commands::Feature { id, off } => commands::feature_article(&ctx, &id, !off),
            Commands::Stats => commands::stats(&ctx),
            Commands::AddCategory { name, description } => {
                commands::add_category(&ctx, &name, &description)
            }
            Commands::Comment { article_id, name, email, content } => {
                commands::comment(&ctx, &article_id, &name, &email, &content)
            }
            Commands::Reply { article_id, parent_id, content } => {
                commands::reply(&ctx, &article_id, &parent_id, &content)
            }
            Commands::Like { comment_id } => commands::like(&ctx, &comment_id),
            Commands::Comments { article_id } => commands::comments(&ctx, &article_id),
            Commands::Bookmark { article_id } => commands::bookmark(&ctx, &article_id),
            Commands::Bookmarks => commands::bookmarks(&ctx),
            Commands::Subscribe { email } => commands::subscribe(&ctx, &email),
            Commands::Status => commands::status(&ctx),
            Commands::Completions { .. } => Ok(()),
        }
    }
}
