use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::collection::{read_collection, write_collection};
use crate::storage::{keys, KeyValueStore};

/// Author name used for replies.
pub const REPLY_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub article_id: String,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Always empty in storage; replies are linked through `parent_id`.
    #[serde(default)]
    pub replies: Vec<Comment>,
    pub likes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// A top-level comment with its direct replies.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comment: Comment,
    pub replies: Vec<Comment>,
}

/// Comments, replies and the reader's liked-comment list.
#[derive(Clone)]
pub struct CommentBoard {
    store: Arc<dyn KeyValueStore>,
}

impl CommentBoard {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn all(&self) -> Result<Vec<Comment>> {
        read_collection(self.store.as_ref(), keys::COMMENTS)
    }

    fn save(&self, comments: &[Comment]) -> Result<()> {
        write_collection(self.store.as_ref(), keys::COMMENTS, comments)
    }

    pub fn liked(&self) -> Result<Vec<String>> {
        read_collection(self.store.as_ref(), keys::LIKED_COMMENTS)
    }

    pub fn add_comment(&self, article_id: &str, name: &str, email: &str, content: &str) -> Result<Comment> {
        if name.trim().is_empty() || content.trim().is_empty() {
            return Err(Error::Invalid("Comment needs a name and some text".to_string()));
        }

        let comment = new_comment(article_id, name, email, content, None);
        self.append(comment)
    }

    /// Reply to `parent_id`. The parent is not checked for existence.
    pub fn add_reply(&self, article_id: &str, parent_id: &str, content: &str) -> Result<Comment> {
        if content.trim().is_empty() {
            return Err(Error::Invalid("Reply cannot be empty".to_string()));
        }

        let reply = new_comment(article_id, REPLY_AUTHOR, "", content, Some(parent_id.to_string()));
        self.append(reply)
    }

    fn append(&self, comment: Comment) -> Result<Comment> {
        let mut comments = self.all()?;
        comments.push(comment.clone());
        self.save(&comments)?;
        debug!("Added comment {} on article {}", comment.id, comment.article_id);
        Ok(comment)
    }

    /// Like or unlike a comment. Returns whether it is liked afterwards.
    /// An unknown comment id is `NotFound` and nothing is written.
    pub fn toggle_like(&self, comment_id: &str) -> Result<bool> {
        let mut comments = self.all()?;
        let comment = comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| Error::NotFound(format!("Comment '{}'", comment_id)))?;

        let mut liked = self.liked()?;
        let now_liked = !liked.iter().any(|id| id == comment_id);
        if now_liked {
            comment.likes = comment.likes.saturating_add(1);
            liked.push(comment_id.to_string());
        } else {
            comment.likes = comment.likes.saturating_sub(1);
            liked.retain(|id| id != comment_id);
        }

        // comment counts are written before the liked list
        self.save(&comments)?;
        write_collection(self.store.as_ref(), keys::LIKED_COMMENTS, &liked)?;
        Ok(now_liked)
    }

    pub fn top_level(&self, article_id: &str) -> Result<Vec<Comment>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|c| c.article_id == article_id && !c.is_reply())
            .collect())
    }

    pub fn replies(&self, comment_id: &str) -> Result<Vec<Comment>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|c| c.parent_id.as_deref() == Some(comment_id))
            .collect())
    }

    pub fn threads(&self, article_id: &str) -> Result<Vec<CommentThread>> {
        let comments = self.all()?;
        Ok(comments
            .iter()
            .filter(|c| c.article_id == article_id && !c.is_reply())
            .map(|top| CommentThread {
                comment: top.clone(),
                replies: comments
                    .iter()
                    .filter(|c| c.parent_id.as_deref() == Some(top.id.as_str()))
                    .cloned()
                    .collect(),
            })
            .collect())
    }
}

fn new_comment(article_id: &str, name: &str, email: &str, content: &str, parent_id: Option<String>) -> Comment {
    let now = Utc::now();
    Comment {
        id: now.timestamp_millis().to_string(),
        article_id: article_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        content: content.to_string(),
        created_at: now,
        replies: Vec::new(),
        likes: 0,
        parent_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn board() -> CommentBoard {
        CommentBoard::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_comment_requires_name_and_content() {
        let board = board();
        assert!(matches!(board.add_comment("1", " ", "", "hi"), Err(Error::Invalid(_))));
        assert!(board.add_comment("1", "Ana", "", "").is_err());
        assert!(board.add_reply("1", "p", "  ").is_err());
        assert!(board.all().unwrap().is_empty());
    }

    #[test]
    fn test_reply_uses_anonymous_author() {
        let board = board();
        let reply = board.add_reply("1", "parent", "Agreed").unwrap();
        assert_eq!(reply.name, REPLY_AUTHOR);
        assert_eq!(reply.email, "");
        assert_eq!(reply.parent_id.as_deref(), Some("parent"));
    }

    #[test]
    fn test_stored_layout_matches_browser_shape() {
        let store = MemoryStore::new();
        let board = CommentBoard::new(Arc::new(store.clone()));
        board.add_comment("7", "Ana", "ana@example.com", "Nice").unwrap();

        let raw = store.read(keys::COMMENTS).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value[0];
        assert_eq!(first["articleId"], "7");
        assert_eq!(first["likes"], 0);
        assert!(first["replies"].as_array().unwrap().is_empty());
        assert!(first.get("parentId").is_none());
    }

    #[test]
    fn test_like_toggle_never_goes_negative() {
        let store = MemoryStore::new();
        let board = CommentBoard::new(Arc::new(store.clone()));
        let comment = board.add_comment("1", "Ana", "", "Hello").unwrap();

        // a stale liked list can point at a comment with zero likes
        store
            .write(keys::LIKED_COMMENTS, &format!("[\"{}\"]", comment.id))
            .unwrap();
        assert!(!board.toggle_like(&comment.id).unwrap());
        assert_eq!(board.all().unwrap()[0].likes, 0);
    }

    #[test]
    fn test_like_toggle_is_reversible() {
        let board = board();
        let comment = board.add_comment("1", "Ana", "", "Hello").unwrap();

        assert!(board.toggle_like(&comment.id).unwrap());
        assert_eq!(board.all().unwrap()[0].likes, 1);
        assert_eq!(board.liked().unwrap(), vec![comment.id.clone()]);

        assert!(!board.toggle_like(&comment.id).unwrap());
        assert_eq!(board.all().unwrap()[0].likes, 0);
        assert!(board.liked().unwrap().is_empty());
    }

    #[test]
    fn test_threads_group_replies_under_parents() {
        let board = board();
        let parent = Comment {
            id: "c1".to_string(),
            ..new_comment("9", "Ana", "", "First", None)
        };
        let other = Comment {
            id: "c2".to_string(),
            ..new_comment("8", "Ben", "", "Elsewhere", None)
        };
        board.save(&[parent, other]).unwrap();
        board.add_reply("9", "c1", "Agreed").unwrap();

        assert_eq!(board.top_level("9").unwrap().len(), 1);
        assert_eq!(board.replies("c1").unwrap().len(), 1);

        let threads = board.threads("9").unwrap();
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].comment.id, "c1");
        assert_eq!(threads[0].replies[0].content, "Agreed");
    }

    #[test]
    fn test_like_unknown_comment_writes_nothing() {
        let store = MemoryStore::new();
        let board = CommentBoard::new(Arc::new(store.clone()));
        board.add_comment("1", "Ana", "", "Hello").unwrap();
        let before = store.read(keys::COMMENTS).unwrap();

        assert!(matches!(board.toggle_like("missing"), Err(Error::NotFound(_))));
        assert_eq!(store.read(keys::COMMENTS).unwrap(), before);
        assert!(store.read(keys::LIKED_COMMENTS).unwrap().is_none());
    }
}
