//! Caller-owned session state

use crate::credential::Credential;
use crate::result::ExtractionResult;

/// Mutable per-session record of the credential and the last result.
///
/// The host owns one `SessionState` per user session and passes it by
/// mutable reference into the pipeline — there are no ambient globals. The
/// state starts empty, is overwritten only after a successful extraction,
/// and is torn down when the session ends (dropping it is the teardown).
///
/// # Examples
///
/// ```
/// use glean_domain::{Credential, SessionState};
///
/// let mut session = SessionState::new();
/// assert!(session.credential().is_none());
///
/// session.set_credential(Credential::new("sk-test"));
/// assert!(session.credential().is_some());
/// assert!(session.last_result().schema.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    credential: Option<Credential>,
    last_result: ExtractionResult,
}

impl SessionState {
    /// Create an empty session: no credential, empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the session credential, replacing any previous one.
    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    /// The session credential, if one has been supplied.
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// The most recent extraction result (empty/default before the first
    /// successful extraction).
    pub fn last_result(&self) -> &ExtractionResult {
        &self.last_result
    }

    /// Overwrite the cached result after a successful extraction.
    pub fn record(&mut self, result: ExtractionResult) {
        self.last_result = result;
    }

    /// Drop the cached result, keeping the credential.
    pub fn clear(&mut self) {
        self.last_result = ExtractionResult::default();
    }
}
