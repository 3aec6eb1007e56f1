//! Logic behind the `json-template-probe` binary.
//!
//! The binary reads a JSON document from stdin, binds it as `root` and
//! prints whatever an access path such as `root.pairs.y` resolves to.

use crate::config::WrapperConfig;
use crate::root::data_model;
use crate::wrapper::JsonNodeWrapper;
use clap::Parser;
use serde_json::Value;
use template_model::{items, AccessPath, ModelError, PathError, TemplateValue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Path(#[from] PathError),
    #[error("{0}")]
    Model(#[from] ModelError),
}

/// Resolve an access path against a JSON document read from stdin.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "json-template-probe", version, about, long_about = None)]
pub struct ProbeArgs {
    /// Access path, e.g. `root.items[0]` or `root.pairs.y`
    pub path: String,

    /// Render string leaves without their JSON quotes
    #[arg(long, overrides_with = "quotes")]
    pub no_quotes: bool,

    /// Keep JSON quotes on string leaves (default)
    #[arg(long, overrides_with = "no_quotes")]
    pub quotes: bool,
}

impl ProbeArgs {
    pub fn config(&self) -> WrapperConfig {
        WrapperConfig { include_quotes_on_text_nodes: !self.no_quotes }
    }
}

/// Resolves `path` against the document in `json` and renders the result,
/// one line per element when the result is listable.
pub fn probe(json: &str, path: &str, config: &WrapperConfig) -> Result<Vec<String>, CliError> {
    let doc: Value = serde_json::from_str(json)?;
    let path = AccessPath::parse(path)?;
    let wrapper = JsonNodeWrapper::from_config(config);
    let scope = data_model(&wrapper, &doc)?;
    let value = path.resolve(&scope)?;
    tracing::debug!(kind = value.kind(), "resolved access path");
    render_lines(&value)
}

fn render_lines(value: &TemplateValue<'_>) -> Result<Vec<String>, CliError> {
    if value.as_model().is_none() {
        return Ok(vec![value.render()?]);
    }
    let lines = items(value)?
        .iter()
        .map(TemplateValue::render)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "title": "Board",
        "items": [1, "two", {"three": 3}],
        "tags": ["a", "b"],
        "pairs": [{"name": "x", "value": "foo"}, {"name": "y", "value": "bar"}]
    }"#;

    fn run(path: &str, quotes: bool) -> Result<Vec<String>, CliError> {
        probe(DOC, path, &WrapperConfig { include_quotes_on_text_nodes: quotes })
    }

    #[test]
    fn test_probe_scalars() {
        assert_eq!(run("root.title", true).unwrap(), vec!["\"Board\""]);
        assert_eq!(run("root.title", false).unwrap(), vec!["Board"]);
        assert_eq!(run("root.items[0]", true).unwrap(), vec!["1"]);
        assert_eq!(run("root.items?size", true).unwrap(), vec!["3"]);
        assert_eq!(run("root.pairs.y", false).unwrap(), vec!["bar"]);
        assert_eq!(run("root.items[2].three", true).unwrap(), vec!["3"]);
        assert_eq!(run("root.pairs?is_empty", true).unwrap(), vec!["false"]);
    }

    #[test]
    fn test_probe_lists() {
        assert_eq!(run("root.tags", true).unwrap(), vec!["\"a\"", "\"b\""]);
        assert_eq!(run("root.tags.iterator()", false).unwrap(), vec!["a", "b"]);
        assert!(run("root.tags.iterator()[0]", true).is_err());
        let err = run("root.items", true).unwrap_err();
        assert!(err.to_string().contains("cannot render as text"), "got: {err}");
        let err = run("root", true).unwrap_err();
        assert!(err.to_string().contains("not a sequence"), "got: {err}");
    }

    #[test]
    fn test_probe_errors() {
        assert!(matches!(probe("{", "root", &WrapperConfig::default()), Err(CliError::Json(_))));
        assert!(matches!(run("root.", true), Err(CliError::Path(_))));
        assert!(matches!(
            run("root.pairs.z", true),
            Err(CliError::Model(ModelError::UnknownKey { .. }))
        ));
    }

    #[test]
    fn test_parse_args() {
        let parse = |args: &[&str]| {
            ProbeArgs::try_parse_from(std::iter::once("json-template-probe").chain(args.iter().copied()))
        };
        let args = parse(&["--no-quotes", "root.a"]).unwrap();
        assert_eq!(args.path, "root.a");
        assert!(!args.config().include_quotes_on_text_nodes);
        assert!(parse(&["root.a"]).unwrap().config().include_quotes_on_text_nodes);
        // the last of the two flags wins
        let last = parse(&["--no-quotes", "--quotes", "root.a"]).unwrap();
        assert!(last.config().include_quotes_on_text_nodes);
        assert!(parse(&[]).is_err());
        assert!(parse(&["a", "b"]).is_err());
        assert!(parse(&["--bogus", "a"]).is_err());
    }
}
