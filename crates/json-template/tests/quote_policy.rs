//! The quote policy only ever changes how string leaves render.

use json_template::{data_model, JsonNodeWrapper, QuotePolicy, WrapperConfig};
use serde_json::{json, Value};
use template_model::{AccessPath, ModelError, ObjectWrapper, Raw, TemplateValue};

const PATHS: &[&str] = &[
    "root.title",
    "root.count",
    "root.ratio",
    "root.done",
    "root.tags[0]",
    "root.tags?size",
    "root.fields.owner",
    "root.fields?is_empty",
];

fn document() -> Value {
    json!({
        "title": "hi",
        "count": 3,
        "ratio": 0.5,
        "done": false,
        "tags": ["alpha", "beta"],
        "fields": [{"name": "owner", "value": "sam"}]
    })
}

fn render_all(wrapper: &JsonNodeWrapper, doc: &Value) -> Vec<String> {
    let scope = data_model(wrapper, doc).unwrap();
    PATHS
        .iter()
        .map(|p| AccessPath::parse(p).unwrap().resolve(&scope).unwrap().render().unwrap())
        .collect()
}

#[test]
fn test_string_node_rendering_follows_policy() {
    let doc = json!(["hi"]);
    for (include_quotes, expected) in [(true, "\"hi\""), (false, "hi")] {
        let wrapper = JsonNodeWrapper::from_config(&WrapperConfig {
            include_quotes_on_text_nodes: include_quotes,
        });
        let array = wrapper.wrap(Raw::Json(&doc)).unwrap();
        let first = array.as_model().unwrap().as_sequence().unwrap().get(0).unwrap();
        assert_eq!(first.render().unwrap(), expected);
        if !include_quotes {
            assert_eq!(first, TemplateValue::from("hi"));
        }
    }
}

#[test]
fn test_string_leaf_wrapped_directly_keeps_quotes() {
    // only adapter children are unwrapped; a bare leaf goes to the fallback
    let node = json!("hi");
    for include_quotes in [true, false] {
        let wrapper = JsonNodeWrapper::new();
        wrapper.set_include_quotes(include_quotes);
        let wrapped = wrapper.wrap(Raw::Json(&node)).unwrap();
        assert_eq!(wrapped, TemplateValue::Node(&node));
        assert_eq!(wrapped.render().unwrap(), "\"hi\"");
    }
}

#[test]
fn test_toggling_between_renders_changes_only_strings() {
    let doc = document();
    let wrapper = JsonNodeWrapper::new();
    let with_quotes = render_all(&wrapper, &doc);
    wrapper.set_include_quotes(false);
    let without_quotes = render_all(&wrapper, &doc);

    assert_eq!(
        with_quotes,
        vec!["\"hi\"", "3", "0.5", "false", "\"alpha\"", "2", "\"sam\"", "false"]
    );
    assert_eq!(
        without_quotes,
        vec!["hi", "3", "0.5", "false", "alpha", "2", "sam", "false"]
    );
}

#[test]
fn test_toggle_mid_render_is_observed() {
    let doc = document();
    let policy = QuotePolicy::default();
    let wrapper = JsonNodeWrapper::new().with_quote_policy(policy.clone());
    let scope = data_model(&wrapper, &doc).unwrap();

    // adapter for root.tags is created before the flag flips
    let tags = AccessPath::parse("root.tags").unwrap().resolve(&scope).unwrap();
    let tags = tags.as_model().unwrap().as_sequence().unwrap();
    assert_eq!(tags.get(0).unwrap().render().unwrap(), "\"alpha\"");
    policy.set_include_quotes(false);
    assert_eq!(tags.get(1).unwrap().render().unwrap(), "beta");
    assert!(!wrapper.include_quotes());
}

#[test]
fn test_policy_applies_to_projected_values_only_when_strings() {
    let doc = json!([{"name": "n", "value": 7}, {"name": "s", "value": "seven"}]);
    let wrapper = JsonNodeWrapper::new();
    wrapper.set_include_quotes(false);
    let array = wrapper.wrap(Raw::Json(&doc)).unwrap();
    let hash = array.as_model().unwrap().as_hash().unwrap();
    assert_eq!(hash.get("n").unwrap().render().unwrap(), "7");
    assert_eq!(hash.get("s").unwrap().render().unwrap(), "seven");
    assert_eq!(hash.get("t"), Err(ModelError::UnknownKey { key: "t".into() }));
}
