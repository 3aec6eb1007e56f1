//! The tree node adapter.
//!
//! A JSON tree has objects and arrays; a template engine wants sequences and
//! hashes. [`JsonNodeAdapter`] gives one node all of the capabilities the
//! engine might ask for and decides per operation what the node kind allows:
//!
//! | operation      | object            | array                          |
//! |----------------|-------------------|--------------------------------|
//! | `size`         | `NotASequence`    | element count                  |
//! | `indexed_get`  | `NotASequence`    | element, or `IndexOutOfRange`  |
//! | `named_get`    | field, or null    | `iterator`, name/value lookup  |
//! | `is_empty`     | no fields         | no elements                    |

use crate::iterator::IteratorMethod;
use crate::quote::QuotePolicy;
use crate::wrapper::JsonNodeWrapper;
use serde_json::{Map, Value};
use template_model::{
    AdapterModel, ModelError, ObjectWrapper, Raw, TemplateHash, TemplateModel, TemplateSequence,
    TemplateValue,
};

/// Key that exposes an [`IteratorMethod`] on array nodes. Kept for templates
/// that walked arrays with `items.iterator()` before arrays were sequences.
pub const ITERATOR_KEY: &str = "iterator";

static NULL: Value = Value::Null;

#[derive(Debug, Clone, Copy)]
enum Shape<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
    Leaf(&'static str),
}

impl<'a> Shape<'a> {
    fn of(node: &'a Value) -> Self {
        match node {
            Value::Object(map) => Shape::Object(map),
            Value::Array(arr) => Shape::Array(arr),
            Value::String(_) => Shape::Leaf("string"),
            Value::Number(_) => Shape::Leaf("number"),
            Value::Bool(_) => Shape::Leaf("boolean"),
            Value::Null => Shape::Leaf("null"),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Shape::Object(_) => "object",
            Shape::Array(_) => "array",
            Shape::Leaf(kind) => *kind,
        }
    }
}

/// Sequence, hash and adapter views over one JSON node.
///
/// The node kind is resolved once, at construction. Children are wrapped on
/// every access and never cached, so two adapters over the same node behave
/// identically.
#[derive(Debug, Clone)]
pub struct JsonNodeAdapter<'a> {
    node: &'a Value,
    shape: Shape<'a>,
    wrapper: JsonNodeWrapper,
}

impl<'a> JsonNodeAdapter<'a> {
    /// `wrapper` wraps the children this adapter hands out. `quotes` is read
    /// each time a string child is unwrapped, and replaces the wrapper's own
    /// policy so nested adapters read the same handle.
    pub fn new(node: &'a Value, wrapper: JsonNodeWrapper, quotes: QuotePolicy) -> Self {
        let wrapper = wrapper.with_quote_policy(quotes);
        Self { node, shape: Shape::of(node), wrapper }
    }

    pub fn node(&self) -> &'a Value {
        self.node
    }

    pub fn size(&self) -> Result<usize, ModelError> {
        match self.shape {
            Shape::Array(elements) => Ok(elements.len()),
            shape => Err(ModelError::NotASequence { kind: shape.kind() }),
        }
    }

    pub fn indexed_get(&self, index: usize) -> Result<TemplateValue<'a>, ModelError> {
        match self.shape {
            Shape::Array(elements) => {
                let child = elements
                    .get(index)
                    .ok_or(ModelError::IndexOutOfRange { index, size: elements.len() })?;
                self.wrap_child(child)
            }
            shape => Err(ModelError::NotASequence { kind: shape.kind() }),
        }
    }

    pub fn named_get(&self, key: &str) -> Result<TemplateValue<'a>, ModelError> {
        match self.shape {
            // Missing fields read as null so templates can probe optional data.
            Shape::Object(fields) => self.wrap_child(fields.get(key).unwrap_or(&NULL)),
            Shape::Array(elements) if key == ITERATOR_KEY => {
                Ok(TemplateValue::model(IteratorMethod::new(self.clone(), elements)))
            }
            Shape::Array(elements) => match find_name_value(elements, key) {
                Some(value) => self.wrap_child(value),
                None => Err(ModelError::UnknownKey { key: key.to_string() }),
            },
            Shape::Leaf(_) => Err(ModelError::UnknownKey { key: key.to_string() }),
        }
    }

    pub fn is_empty(&self) -> Result<bool, ModelError> {
        match self.shape {
            Shape::Object(fields) => Ok(fields.is_empty()),
            Shape::Array(elements) => Ok(elements.is_empty()),
            Shape::Leaf(kind) => Err(ModelError::AdapterFault(format!(
                "cannot compute the size of a {kind} node"
            ))),
        }
    }

    /// Wraps a child about to be handed to the engine. String leaves lose
    /// their JSON quoting when the policy says so.
    pub(crate) fn wrap_child(&self, child: &'a Value) -> Result<TemplateValue<'a>, ModelError> {
        match child {
            Value::String(text) if !self.wrapper.include_quotes() => {
                self.wrapper.wrap(Raw::Text(text))
            }
            _ => self.wrapper.wrap(Raw::Json(child)),
        }
    }
}

/// Looks `key` up in an array of `{"name": .., "value": ..}` objects.
///
/// Elements are scanned in order. The first element that is not such a pair
/// ends the scan: the array is not a name/value list, even if a later pair
/// would have matched. A pair found before that element is still returned.
/// Only string names can match.
pub fn find_name_value<'a>(elements: &'a [Value], key: &str) -> Option<&'a Value> {
    for (position, element) in elements.iter().enumerate() {
        let (name, value) = match element {
            Value::Object(pair) => match (pair.get("name"), pair.get("value")) {
                (Some(name), Some(value)) => (name, value),
                _ => {
                    tracing::debug!(position, key, "array is not a name/value list");
                    return None;
                }
            },
            _ => {
                tracing::debug!(position, key, "array is not a name/value list");
                return None;
            }
        };
        if name.as_str() == Some(key) {
            return Some(value);
        }
    }
    None
}

impl<'a> TemplateModel<'a> for JsonNodeAdapter<'a> {
    fn type_name(&self) -> &'static str {
        match self.shape {
            Shape::Object(_) => "json object",
            Shape::Array(_) => "json array",
            Shape::Leaf(_) => "json leaf",
        }
    }

    fn as_sequence(&self) -> Option<&dyn TemplateSequence<'a>> {
        Some(self)
    }

    fn as_hash(&self) -> Option<&dyn TemplateHash<'a>> {
        Some(self)
    }

    fn as_adapter(&self) -> Option<&dyn AdapterModel<'a>> {
        Some(self)
    }
}

impl<'a> TemplateSequence<'a> for JsonNodeAdapter<'a> {
    fn size(&self) -> Result<usize, ModelError> {
        JsonNodeAdapter::size(self)
    }

    fn get(&self, index: usize) -> Result<TemplateValue<'a>, ModelError> {
        self.indexed_get(index)
    }
}

impl<'a> TemplateHash<'a> for JsonNodeAdapter<'a> {
    fn get(&self, key: &str) -> Result<TemplateValue<'a>, ModelError> {
        self.named_get(key)
    }

    fn is_empty(&self) -> Result<bool, ModelError> {
        JsonNodeAdapter::is_empty(self)
    }
}

impl<'a> AdapterModel<'a> for JsonNodeAdapter<'a> {
    fn adapted_value(&self) -> &'a Value {
        self.node
    }
}
