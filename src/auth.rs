use crate::config::AdminSettings;
use crate::error::{Error, Result};

/// Checks an admin credential pair.
pub trait Authenticator: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single admin account whose password is kept as a BLAKE3 digest.
#[derive(Debug, Clone)]
pub struct Blake3Credentials {
    username: String,
    password_digest: blake3::Hash,
}

impl Blake3Credentials {
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            password_digest: blake3::hash(password.as_bytes()),
        }
    }

    pub fn from_digest_hex(username: impl Into<String>, digest_hex: &str) -> Result<Self> {
        let password_digest = blake3::Hash::from_hex(digest_hex)
            .map_err(|e| Error::Config(format!("Invalid admin password digest: {}", e)))?;
        Ok(Self {
            username: username.into(),
            password_digest,
        })
    }

    pub fn from_settings(settings: &AdminSettings) -> Result<Self> {
        Self::from_digest_hex(settings.username.clone(), &settings.password_blake3)
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Default for Blake3Credentials {
    fn default() -> Self {
        Self::new("admin", "admin123")
    }
}

impl Authenticator for Blake3Credentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        // blake3::Hash equality is constant-time
        username == self.username && blake3::hash(password.as_bytes()) == self.password_digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credentials() {
        let auth = Blake3Credentials::default();
        assert!(auth.verify("admin", "admin123"));
        assert!(!auth.verify("admin", "admin"));
        assert!(!auth.verify("Admin", "admin123"));
        assert!(!auth.verify("", ""));
    }

    #[test]
    fn test_from_settings_matches_default() {
        let auth = Blake3Credentials::from_settings(&AdminSettings::default()).unwrap();
        assert_eq!(auth.username(), "admin");
        assert!(auth.verify("admin", "admin123"));
    }

    #[test]
    fn test_custom_digest() {
        let digest = blake3::hash(b"s3cret").to_hex().to_string();
        let auth = Blake3Credentials::from_digest_hex("editor", &digest).unwrap();
        assert!(auth.verify("editor", "s3cret"));
        assert!(!auth.verify("admin", "admin123"));
    }

    #[test]
    fn test_bad_digest_is_config_error() {
        assert!(matches!(
            Blake3Credentials::from_digest_hex("admin", "xyz"),
            Err(Error::Config(_))
        ));
    }
}
