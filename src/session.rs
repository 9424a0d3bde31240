//! Session State
//!
//! Holds the inputs of an interactive session (text, key) and the last
//! ciphertext, and checks that each operation has what it needs before it
//! runs.
//!
//! # Stages
//!
//! The stage is derived from what the session holds:
//!
//! ```text
//!            load_text            set_key
//! NoInput ─────────────► HasText ─────────► Ready ──encrypt──► Encrypted
//!    │                                        ▲
//!    └──set_key──► HasKey ────load_text───────┘
//!
//! (load_text / set_key from Encrypted drops the ciphertext: back to Ready)
//! ```

use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::fence::{self, FenceKey};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStage {
    /// Nothing supplied yet
    NoInput,
    /// Text loaded, no key
    HasText,
    /// Key entered, no text
    HasKey,
    /// Text and key present
    Ready,
    /// Text encrypted with the current key
    Encrypted,
}

impl SessionStage {
    /// Returns a human-readable description of this stage
    pub const fn description(self) -> &'static str {
        match self {
            Self::NoInput => "No text or key",
            Self::HasText => "Text loaded",
            Self::HasKey => "Key entered",
            Self::Ready => "Ready to encrypt",
            Self::Encrypted => "Encrypted",
        }
    }
}

impl fmt::Display for SessionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Operation requested before its inputs were supplied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No text loaded; select a file or URL first")]
    MissingText,

    #[error("No rail fence key entered; enter a key first")]
    MissingKey,

    #[error("Nothing to decrypt; run encryption first")]
    MissingCiphertext,
}

/// Inputs and results of one interactive session.
///
/// # Example
///
/// ```
/// use railfence::fence::FenceKey;
/// use railfence::session::{Session, SessionError, SessionStage};
///
/// let mut session = Session::new();
/// assert_eq!(session.decrypt(), Err(SessionError::MissingKey));
///
/// session.load_text("WEAREDISCOVERED");
/// session.set_key(FenceKey::new(3, 0).unwrap());
/// assert_eq!(session.stage(), SessionStage::Ready);
///
/// let ciphertext = session.encrypt().unwrap().to_string();
/// assert_eq!(session.decrypt().unwrap(), "WEAREDISCOVERED");
/// assert_ne!(ciphertext, "WEAREDISCOVERED");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    text: Option<String>,
    key: Option<FenceKey>,
    ciphertext: Option<String>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stage
    pub fn stage(&self) -> SessionStage {
        match (&self.text, &self.key, &self.ciphertext) {
            (Some(_), Some(_), Some(_)) => SessionStage::Encrypted,
            (Some(_), Some(_), None) => SessionStage::Ready,
            (Some(_), None, _) => SessionStage::HasText,
            (None, Some(_), _) => SessionStage::HasKey,
            (None, None, _) => SessionStage::NoInput,
        }
    }

    /// Loaded text, if any
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Entered key, if any
    pub fn key(&self) -> Option<FenceKey> {
        self.key
    }

    /// Ciphertext from the last encryption, if still current
    pub fn ciphertext(&self) -> Option<&str> {
        self.ciphertext.as_deref()
    }

    /// Replace the text. Any held ciphertext is dropped.
    pub fn load_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(chars = text.chars().count(), "session text loaded");
        self.text = Some(text);
        self.ciphertext = None;
    }

    /// Replace the key. Any held ciphertext is dropped.
    pub fn set_key(&mut self, key: FenceKey) {
        debug!(%key, "session key set");
        self.key = Some(key);
        self.ciphertext = None;
    }

    fn inputs(&self) -> Result<(&str, FenceKey), SessionError> {
        let text = self.text.as_deref().ok_or(SessionError::MissingText)?;
        let key = self.key.ok_or(SessionError::MissingKey)?;
        Ok((text, key))
    }

    /// Encrypt the loaded text with the entered key and keep the result.
    ///
    /// # Errors
    ///
    /// - `MissingText` if no text is loaded
    /// - `MissingKey` if no key is entered
    pub fn encrypt(&mut self) -> Result<&str, SessionError> {
        let (text, key) = self.inputs()?;
        let ciphertext = fence::encrypt(text, key);
        debug!(%key, "session text encrypted");
        Ok(self.ciphertext.insert(ciphertext).as_str())
    }

    /// Decrypt the held ciphertext with the entered key.
    ///
    /// # Errors
    ///
    /// - `MissingKey` if no key is entered
    /// - `MissingCiphertext` if nothing has been encrypted since the inputs
    ///   last changed
    pub fn decrypt(&self) -> Result<String, SessionError> {
        let key = self.key.ok_or(SessionError::MissingKey)?;
        let ciphertext = self
            .ciphertext
            .as_deref()
            .ok_or(SessionError::MissingCiphertext)?;
        Ok(fence::decrypt(ciphertext, key))
    }

    /// Draw the fence for the loaded text.
    ///
    /// # Errors
    ///
    /// - `MissingText` if no text is loaded
    /// - `MissingKey` if no key is entered
    pub fn render(&self) -> Result<String, SessionError> {
        let (text, key) = self.inputs()?;
        Ok(fence::render(text, key))
    }
}
