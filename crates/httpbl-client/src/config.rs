//! Client configuration types.

/// Thresholds for the accept/reject policy applied by
/// [`HttpblClient::is_ok`].
///
/// A threshold of `None` disables that check entirely. Comparisons are
/// strict: a listing passes the age check only when its age is *greater*
/// than the threshold (older activity is safer), and the threat check only
/// when its score is *less* than the threshold.
///
/// [`HttpblClient::is_ok`]: crate::HttpblClient::is_ok
#[derive(Debug, Clone, Copy)]
pub struct PolicyConfig {
    /// Minimum age (exclusive) a listing must have to be acceptable.
    pub ok_age: Option<u8>,

    /// Maximum threat score (exclusive) a listing may have to be
    /// acceptable.
    pub ok_threat: Option<u8>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            ok_age: Some(128),
            ok_threat: Some(128),
        }
    }
}

impl PolicyConfig {
    /// Create the default policy (both thresholds at 128).
    ///
    /// Threat scores are capped at 100 by the service, so the default
    /// effectively disables the threat check while keeping the age check
    /// meaningful.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ok_age: Some(128),
            ok_threat: Some(128),
        }
    }

    /// Set or disable the age threshold.
    #[must_use]
    pub const fn ok_age(mut self, threshold: Option<u8>) -> Self {
        self.ok_age = threshold;
        self
    }

    /// Set or disable the threat threshold.
    #[must_use]
    pub const fn ok_threat(mut self, threshold: Option<u8>) -> Self {
        self.ok_threat = threshold;
        self
    }
}
