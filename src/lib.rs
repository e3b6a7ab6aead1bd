pub mod auth;
pub mod cli;
pub mod config;
pub mod content;
pub mod engagement;
pub mod error;
pub mod news;
pub mod query;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use news::{Article, ArticlePatch, Category, NewArticle};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageService};
