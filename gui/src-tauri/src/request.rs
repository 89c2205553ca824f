//! Request staleness discipline
//!
//! In-flight fetches are never cancelled. Instead, every outgoing request
//! is tagged with the screen generation at issue time; any parameter
//! change bumps the generation, so a completion that arrives for a
//! superseded parameter tuple is discarded rather than overwriting newer
//! state.

/// Tag carried by one outgoing fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Per-screen generation counter
#[derive(Debug, Default)]
pub struct Generation(u64);

impl Generation {
    /// Invalidate all outstanding tokens
    pub fn bump(&mut self) {
        self.0 += 1;
    }

    /// Token for a fetch issued now
    pub fn token(&self) -> RequestToken {
        RequestToken(self.0)
    }

    /// Whether a completion carrying `token` is still current
    pub fn accepts(&self, token: RequestToken) -> bool {
        token.0 == self.0
    }
}
