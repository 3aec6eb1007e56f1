use serde::{Deserialize, Serialize};

/// Settings for a [`JsonNodeWrapper`](crate::JsonNodeWrapper).
///
/// ```
/// use json_template::WrapperConfig;
///
/// let config = WrapperConfig::from_json(r#"{"includeQuotesOnTextNodes": false}"#).unwrap();
/// assert!(!config.include_quotes_on_text_nodes);
/// assert_eq!(WrapperConfig::from_json("{}").unwrap(), WrapperConfig::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WrapperConfig {
    /// Keep the quote characters of JSON string leaves when rendering.
    pub include_quotes_on_text_nodes: bool,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self { include_quotes_on_text_nodes: true }
    }
}

impl WrapperConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
