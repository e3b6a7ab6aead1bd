//! Reader-side collections: comments, bookmarks, newsletter signups and
//! search history. Each owns its own storage key.

pub mod bookmarks;
pub mod comments;
pub mod history;
pub mod newsletter;

pub use bookmarks::Bookmarks;
pub use comments::{Comment, CommentBoard, CommentThread};
pub use history::SearchHistory;
pub use newsletter::Newsletter;
