//! Session-scoped API credential

use std::fmt;

/// An API credential supplied once per session.
///
/// The value lives only in memory for the lifetime of the session. `Debug`
/// and `Display` redact it so it cannot leak through logs or error messages,
/// and the type deliberately implements neither `Serialize` nor
/// `Deserialize` — nothing may write it to disk.
///
/// # Examples
///
/// ```
/// use glean_domain::Credential;
///
/// let key = Credential::new("sk-test-123");
/// assert_eq!(key.expose(), "sk-test-123");
/// assert_eq!(format!("{:?}", key), "Credential(***)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a secret string.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Access the underlying secret.
    ///
    /// Callers that need the raw value (e.g. to set a bearer header) must go
    /// through this method, which keeps accidental uses greppable.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the credential is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}
