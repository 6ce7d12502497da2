use parking_lot::RwLock;
use std::sync::Arc;

/// Session state shared by every outgoing request.
///
/// The bearer token is read when each request is built, so a token refreshed
/// after re-authentication applies to the next call without rebuilding the
/// client. Login and logout flows live outside this crate; they only call
/// [`RequestContext::set_token`] and [`RequestContext::clear_token`].
#[derive(Debug, Default)]
pub struct RequestContext {
    token: RwLock<Option<String>>,
}

impl RequestContext {
    pub fn new(token: Option<String>) -> Arc<Self> {
        Arc::new(Self {
            token: RwLock::new(token.filter(|t| !t.is_empty())),
        })
    }

    /// Replace the session token. An empty string clears it.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut slot = self.token.write();
        *slot = if token.is_empty() { None } else { Some(token) };
        tracing::debug!(present = slot.is_some(), "Session token updated");
    }

    pub fn clear_token(&self) {
        *self.token.write() = None;
        tracing::debug!("Session token cleared");
    }

    /// Current token, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// `Authorization` header value for the current token.
    pub fn bearer(&self) -> Option<String> {
        self.token.read().as_ref().map(|t| format!("Bearer {}", t))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_reflects_latest_token() {
        let ctx = RequestContext::new(None);
        assert_eq!(ctx.bearer(), None);

        ctx.set_token("abc");
        assert_eq!(ctx.bearer().as_deref(), Some("Bearer abc"));

        ctx.set_token("def");
        assert_eq!(ctx.bearer().as_deref(), Some("Bearer def"));

        ctx.clear_token();
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn empty_tokens_count_as_absent() {
        let ctx = RequestContext::new(Some(String::new()));
        assert!(!ctx.is_authenticated());
        ctx.set_token("");
        assert_eq!(ctx.token(), None);
    }
}
