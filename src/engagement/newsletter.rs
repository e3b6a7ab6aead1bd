use std::sync::{Arc, OnceLock};
use std::time::Duration;
use parking_lot::{const_mutex, Mutex};
use regex::Regex;
use tracing::info;

use crate::error::{Error, Result};
use crate::storage::collection::{read_collection, write_collection};
use crate::storage::{keys, KeyValueStore};

// Serializes the post-delay check-and-append within the process.
static SIGNUP_LOCK: Mutex<()> = const_mutex(());

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Newsletter signups. There is no mail delivery; `subscribe` only waits a
/// fixed delay to stand in for a remote call.
#[derive(Clone)]
pub struct Newsletter {
    store: Arc<dyn KeyValueStore>,
    delay: Duration,
}

impl Newsletter {
    pub fn new(store: Arc<dyn KeyValueStore>, delay: Duration) -> Self {
        Self { store, delay }
    }

    pub fn subscribers(&self) -> Result<Vec<String>> {
        read_collection(self.store.as_ref(), keys::NEWSLETTER_SUBSCRIBERS)
    }

    pub fn subscribe(&self, email: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() || !email_pattern().is_match(email) {
            return Err(Error::Invalid(format!("'{}' is not a valid email address", email)));
        }

        if self.subscribers()?.iter().any(|existing| existing == email) {
            return Err(Error::AlreadyExists(format!("{} is already subscribed", email)));
        }

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let _guard = SIGNUP_LOCK.lock();
        // Re-read after the wait: another signup may have landed meanwhile.
        let mut subscribers = self.subscribers()?;
        if subscribers.iter().any(|existing| existing == email) {
            return Err(Error::AlreadyExists(format!("{} is already subscribed", email)));
        }
        subscribers.push(email.to_string());
        write_collection(self.store.as_ref(), keys::NEWSLETTER_SUBSCRIBERS, &subscribers)?;
        info!("Newsletter subscription added ({} total)", subscribers.len());
        Ok(())
    }
}
