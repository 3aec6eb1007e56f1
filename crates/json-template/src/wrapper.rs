//! The wrapper dispatcher.

use crate::adapter::JsonNodeAdapter;
use crate::config::WrapperConfig;
use crate::quote::QuotePolicy;
use std::fmt;
use std::sync::Arc;
use template_model::{DefaultObjectWrapper, ModelError, ObjectWrapper, Raw, TemplateValue};

/// Object wrapper that adapts JSON objects and arrays and hands everything
/// else to a fallback wrapper.
///
/// Cloning is cheap; clones share the fallback and the quote policy. Every
/// adapter holds a clone so it can wrap the children it returns.
#[derive(Clone)]
pub struct JsonNodeWrapper {
    fallback: Arc<dyn ObjectWrapper + Send + Sync>,
    quotes: QuotePolicy,
}

impl JsonNodeWrapper {
    /// Wrapper over [`DefaultObjectWrapper`] with quotes kept.
    pub fn new() -> Self {
        Self::with_fallback(Arc::new(DefaultObjectWrapper))
    }

    pub fn with_fallback(fallback: Arc<dyn ObjectWrapper + Send + Sync>) -> Self {
        Self { fallback, quotes: QuotePolicy::default() }
    }

    pub fn from_config(config: &WrapperConfig) -> Self {
        Self::new().with_quote_policy(QuotePolicy::new(config.include_quotes_on_text_nodes))
    }

    /// Uses a policy handle owned elsewhere, e.g. by a settings panel.
    pub fn with_quote_policy(mut self, quotes: QuotePolicy) -> Self {
        self.quotes = quotes;
        self
    }

    pub fn quote_policy(&self) -> &QuotePolicy {
        &self.quotes
    }

    pub fn include_quotes(&self) -> bool {
        self.quotes.include_quotes()
    }

    pub fn set_include_quotes(&self, include_quotes: bool) {
        self.quotes.set_include_quotes(include_quotes);
    }
}

impl Default for JsonNodeWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JsonNodeWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonNodeWrapper")
            .field("include_quotes", &self.include_quotes())
            .finish_non_exhaustive()
    }
}

impl ObjectWrapper for JsonNodeWrapper {
    fn wrap<'a>(&self, raw: Raw<'a>) -> Result<TemplateValue<'a>, ModelError> {
        match raw {
            Raw::Json(node) if node.is_object() || node.is_array() => {
                let kind = if node.is_array() { "array" } else { "object" };
                tracing::trace!(kind, "adapting json node");
                Ok(TemplateValue::model(JsonNodeAdapter::new(
                    node,
                    self.clone(),
                    self.quotes.clone(),
                )))
            }
            other => self.fallback.wrap(other),
        }
    }
}
