//! Identifier types for domain objects and history tokens

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Length of a [`Token`] in characters
pub const TOKEN_LEN: usize = 16;

/// A globally unique identifier backed by a UUID v4
///
/// This is the identity currency of the crate: entities carry one, history
/// entries may reference one, and [`Token`]s are derived from one.
///
/// # Examples
///
/// ```rust
/// use domain_kit::Uid;
///
/// let a = Uid::new();
/// let b = Uid::new();
/// assert_ne!(a, b);
/// assert_eq!(a.short().as_str().len(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uid(Uuid);

impl Uid {
    /// Create a new random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The canonical hyphenated string form
    pub fn value(&self) -> String {
        self.0.to_string()
    }

    /// Shorten to a fixed-length [`Token`]
    ///
    /// The token is the first [`TOKEN_LEN`] characters of the UUID's simple
    /// (non-hyphenated) form. Two distinct `Uid`s can in principle shorten to
    /// the same token; history resolves such collisions by minting a fresh
    /// one.
    pub fn short(&self) -> Token {
        let simple = self.0.simple().to_string();
        Token(simple[..TOKEN_LEN].to_string())
    }
}

impl Default for Uid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uid> for Uuid {
    fn from(id: Uid) -> Self {
        id.0
    }
}

impl From<&Uid> for Uuid {
    fn from(id: &Uid) -> Self {
        id.0
    }
}

/// A short fixed-length identifier addressing a history snapshot
///
/// Tokens are cheap to compare and convenient to hold onto across an
/// arbitrary number of intermediate snapshots ("the state before the risky
/// operation"), then hand back to `History::back_to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token(String);

impl Token {
    /// Mint a fresh random token
    pub fn new() -> Self {
        Uid::new().short()
    }

    /// Get the token text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Token {
    type Error = DomainError;

    fn try_from(s: &str) -> DomainResult<Self> {
        if s.len() != TOKEN_LEN || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::validation(format!(
                "token must be {TOKEN_LEN} alphanumeric characters, got {s:?}"
            )));
        }
        Ok(Token(s.to_string()))
    }
}
