//! Object wrapping: turning raw host values into [`TemplateValue`]s.

use crate::error::ModelError;
use crate::value::TemplateValue;
use serde_json::Value;
use std::borrow::Cow;

/// A raw host value on its way into the template engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Raw<'a> {
    /// A node of a parsed JSON tree.
    Json(&'a Value),
    /// Bare text that is not a JSON node.
    Text(&'a str),
}

impl<'a> From<&'a Value> for Raw<'a> {
    fn from(v: &'a Value) -> Self {
        Raw::Json(v)
    }
}

impl<'a> From<&'a str> for Raw<'a> {
    fn from(s: &'a str) -> Self {
        Raw::Text(s)
    }
}

/// Converts raw values into template values.
///
/// The engine calls this whenever it meets a value it cannot render
/// natively. Implementations that recognise only some values delegate the
/// rest to another wrapper.
pub trait ObjectWrapper {
    fn wrap<'a>(&self, raw: Raw<'a>) -> Result<TemplateValue<'a>, ModelError>;
}

/// The engine's own wrapping strategy.
///
/// It knows booleans, numbers and null natively. Every other JSON node stays
/// opaque and renders through its JSON text; it has no sequence or hash
/// capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultObjectWrapper;

impl ObjectWrapper for DefaultObjectWrapper {
    fn wrap<'a>(&self, raw: Raw<'a>) -> Result<TemplateValue<'a>, ModelError> {
        Ok(match raw {
            Raw::Text(s) => TemplateValue::Text(Cow::Borrowed(s)),
            Raw::Json(Value::Null) => TemplateValue::Null,
            Raw::Json(Value::Bool(b)) => TemplateValue::Boolean(*b),
            Raw::Json(Value::Number(n)) => TemplateValue::Number(n.clone()),
            Raw::Json(node) => TemplateValue::Node(node),
        })
    }
}
