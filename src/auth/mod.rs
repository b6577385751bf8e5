//! API key capture and storage.
//!
//! The key is looked up in the system keyring first, then in
//! `OPENAI_API_KEY`. When neither yields a key the TUI asks for one to be
//! pasted on its first screen.

use std::error::Error;
use std::fmt;

use keyring::Entry;
use tracing::{debug, warn};

mod ui;

pub use self::ui::{prompt_confirmation, prompt_masked_input, UiError};

const KEYRING_SERVICE: &str = "workbench";
const KEYRING_USER: &str = "openai";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Keyring,
    Environment,
    Pasted,
}

impl KeySource {
    pub fn describe(self) -> &'static str {
        match self {
            KeySource::Keyring => "system keyring",
            KeySource::Environment => API_KEY_ENV,
            KeySource::Pasted => "pasted for this session",
        }
    }
}

/// A keyring call that failed.
#[derive(Debug)]
pub enum KeyringError {
    /// No usable credential store (locked, or no secret service running).
    /// The environment variable still works.
    Unavailable(keyring::Error),
    Failed(keyring::Error),
}

impl KeyringError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, KeyringError::Unavailable(_))
    }

    fn cause(&self) -> &keyring::Error {
        match self {
            KeyringError::Unavailable(err) | KeyringError::Failed(err) => err,
        }
    }
}

impl From<keyring::Error> for KeyringError {
    fn from(err: keyring::Error) -> Self {
        match err {
            keyring::Error::PlatformFailure(_) | keyring::Error::NoStorageAccess(_) => {
                KeyringError::Unavailable(err)
            }
            other => KeyringError::Failed(other),
        }
    }
}

impl fmt::Display for KeyringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyringError::Unavailable(err) => write!(
                f,
                "system keyring is unavailable ({err}); set {API_KEY_ENV} instead"
            ),
            KeyringError::Failed(err) => write!(f, "keyring error: {err}"),
        }
    }
}

impl Error for KeyringError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    pub key: String,
    pub source: KeySource,
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("key", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Trim a pasted or stored key; blank input yields `None`.
pub fn clean_key(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub struct AuthManager {
    use_keyring: bool,
}

impl AuthManager {
    pub fn new() -> Self {
        Self::new_with_keyring(true)
    }

    /// Construct an AuthManager, optionally disabling keyring access (useful for tests)
    pub fn new_with_keyring(use_keyring: bool) -> Self {
        Self { use_keyring }
    }

    fn entry(&self) -> Result<Entry, KeyringError> {
        Ok(Entry::new(KEYRING_SERVICE, KEYRING_USER)?)
    }

    pub fn store_key(&self, key: &str) -> Result<(), KeyringError> {
        if !self.use_keyring {
            return Ok(());
        }
        self.entry()?.set_password(key)?;
        debug!("Stored API key in keyring");
        Ok(())
    }

    pub fn get_key(&self) -> Result<Option<String>, KeyringError> {
        if !self.use_keyring {
            return Ok(None);
        }
        match self.entry()?.get_password() {
            Ok(key) => Ok(clean_key(&key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Remove the stored key. Returns whether one was present.
    pub fn remove_key(&self) -> Result<bool, KeyringError> {
        if !self.use_keyring {
            return Ok(false);
        }
        match self.entry()?.delete_credential() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Resolve a key from the keyring, then from the given environment value.
    /// Keyring failures are logged and skipped.
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Option<ApiKey> {
        match self.get_key() {
            Ok(Some(key)) => {
                return Some(ApiKey {
                    key,
                    source: KeySource::Keyring,
                })
            }
            Ok(None) => {}
            Err(err) => {
                warn!(unavailable = err.is_unavailable(), error = %err, "Keyring lookup failed");
            }
        }

        env_value
            .as_deref()
            .and_then(clean_key)
            .map(|key| ApiKey {
                key,
                source: KeySource::Environment,
            })
    }

    pub fn interactive_auth(&self) -> Result<(), Box<dyn Error>> {
        println!("🔐 Workbench API key setup");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!();

        if matches!(self.get_key(), Ok(Some(_)))
            && !prompt_confirmation("An API key is already stored. Replace it?")?
        {
            println!("Keeping the existing key.");
            return Ok(());
        }

        let raw = prompt_masked_input("Paste your API key: ")?;
        let key = clean_key(&raw).ok_or_else(|| UiError::new("API key cannot be empty"))?;
        self.store_key(&key)?;
        println!("✅ API key stored in the system keyring");
        Ok(())
    }

    pub fn interactive_deauth(&self) -> Result<(), Box<dyn Error>> {
        if self.remove_key()? {
            println!("✅ Removed the stored API key");
        } else {
            println!("No stored API key found.");
        }
        Ok(())
    }
}

impl Default for AuthManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_store_is_unavailable_not_failed() {
        let err = KeyringError::from(keyring::Error::PlatformFailure("locked".into()));
        assert!(err.is_unavailable());
        assert!(err.to_string().contains(API_KEY_ENV));

        let err = KeyringError::from(keyring::Error::TooLong("user".to_string(), 255));
        assert!(!err.is_unavailable());
        assert!(err.to_string().starts_with("keyring error:"));
    }

    #[test]
    fn env_key_used_when_keyring_disabled() {
        let manager = AuthManager::new_with_keyring(false);
        let resolved = manager
            .resolve_api_key(Some("  sk-env  ".to_string()))
            .expect("key");
        assert_eq!(resolved.key, "sk-env");
        assert_eq!(resolved.source, KeySource::Environment);
    }

    #[test]
    fn blank_env_key_is_ignored() {
        let manager = AuthManager::new_with_keyring(false);
        assert!(manager.resolve_api_key(Some("   ".to_string())).is_none());
        assert!(manager.resolve_api_key(None).is_none());
    }

    #[test]
    fn disabled_keyring_stores_nothing() {
        let manager = AuthManager::new_with_keyring(false);
        manager.store_key("sk-test").expect("no-op store");
        assert_eq!(manager.get_key().expect("lookup"), None);
        assert!(!manager.remove_key().expect("no-op remove"));
    }

    #[test]
    fn debug_output_redacts_key() {
        let key = ApiKey {
            key: "sk-secret".to_string(),
            source: KeySource::Pasted,
        };
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("Pasted"));
    }
}
