use std::fmt;

/// Credential of the caller, threaded into every upstream call that needs it
#[derive(Clone, PartialEq, Eq)]
pub struct AuthContext {
    access_token: String,
}

impl AuthContext {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

// Keeps tokens out of logs and `?` spans.
impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("access_token", &"<redacted>")
            .finish()
    }
}
