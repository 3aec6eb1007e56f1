use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared switch deciding whether JSON string leaves keep their quote
/// characters when rendered.
///
/// Clones share the same flag. Adapters read it on every unwrap, so a change
/// made by the host is visible to renders already in progress. Last write
/// wins.
#[derive(Debug, Clone)]
pub struct QuotePolicy(Arc<AtomicBool>);

impl QuotePolicy {
    pub fn new(include_quotes: bool) -> Self {
        QuotePolicy(Arc::new(AtomicBool::new(include_quotes)))
    }

    pub fn include_quotes(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set_include_quotes(&self, include_quotes: bool) {
        self.0.store(include_quotes, Ordering::Relaxed);
    }
}

impl Default for QuotePolicy {
    /// Quotes are kept by default.
    fn default() -> Self {
        QuotePolicy::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_quotes() {
        assert!(QuotePolicy::default().include_quotes());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let policy = QuotePolicy::default();
        let handle = policy.clone();
        handle.set_include_quotes(false);
        assert!(!policy.include_quotes());
        policy.set_include_quotes(true);
        assert!(handle.include_quotes());
    }
}
