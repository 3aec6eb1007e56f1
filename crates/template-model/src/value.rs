use crate::error::ModelError;
use crate::model::TemplateModel;
use serde_json::{Number, Value};
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

/// A value as the template engine sees it.
#[derive(Clone)]
pub enum TemplateValue<'a> {
    /// Null or missing.
    Null,
    Boolean(bool),
    Number(Number),
    /// Plain text. Renders without any decoration.
    Text(Cow<'a, str>),
    /// A JSON leaf the engine only knows through its JSON text, so a string
    /// node keeps its quote characters when rendered.
    Node(&'a Value),
    /// Anything exposing capabilities through [`TemplateModel`].
    Model(Rc<dyn TemplateModel<'a> + 'a>),
}

impl<'a> TemplateValue<'a> {
    pub fn model(model: impl TemplateModel<'a> + 'a) -> Self {
        TemplateValue::Model(Rc::new(model))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TemplateValue::Null)
    }

    pub fn as_model(&self) -> Option<&(dyn TemplateModel<'a> + 'a)> {
        match self {
            TemplateValue::Model(m) => Some(m.as_ref()),
            _ => None,
        }
    }

    /// Returns the raw JSON node behind this value, if there is one.
    pub fn adapted_value(&self) -> Option<&'a Value> {
        match self {
            TemplateValue::Node(v) => Some(v),
            TemplateValue::Model(m) => m.as_adapter().map(|a| a.adapted_value()),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TemplateValue::Null => "null",
            TemplateValue::Boolean(_) => "boolean",
            TemplateValue::Number(_) => "number",
            TemplateValue::Text(_) => "text",
            TemplateValue::Node(_) => "json node",
            TemplateValue::Model(m) => m.type_name(),
        }
    }

    /// Renders a scalar the way an interpolation such as `${x}` does.
    ///
    /// Nodes render as their compact JSON text, which is where the quote
    /// characters around a wrapped JSON string come from.
    pub fn render(&self) -> Result<String, ModelError> {
        match self {
            TemplateValue::Null => Err(ModelError::NullValue),
            TemplateValue::Boolean(b) => Ok(b.to_string()),
            TemplateValue::Number(n) => Ok(n.to_string()),
            TemplateValue::Text(s) => Ok(s.to_string()),
            TemplateValue::Node(v) => Ok(v.to_string()),
            TemplateValue::Model(m) => Err(ModelError::NotAScalar { kind: m.type_name() }),
        }
    }
}

impl fmt::Debug for TemplateValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateValue::Null => f.write_str("Null"),
            TemplateValue::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            TemplateValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            TemplateValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            TemplateValue::Node(v) => f.debug_tuple("Node").field(v).finish(),
            TemplateValue::Model(m) => match m.as_adapter() {
                Some(a) => f
                    .debug_tuple("Model")
                    .field(&m.type_name())
                    .field(a.adapted_value())
                    .finish(),
                None => f.debug_tuple("Model").field(&m.type_name()).finish(),
            },
        }
    }
}

impl PartialEq for TemplateValue<'_> {
    /// Two models are equal when they adapt the very same node with the same
    /// kind of model, or when they are the same allocation.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TemplateValue::Null, TemplateValue::Null) => true,
            (TemplateValue::Boolean(a), TemplateValue::Boolean(b)) => a == b,
            (TemplateValue::Number(a), TemplateValue::Number(b)) => a == b,
            (TemplateValue::Text(a), TemplateValue::Text(b)) => a == b,
            (TemplateValue::Node(a), TemplateValue::Node(b)) => a == b,
            (TemplateValue::Model(a), TemplateValue::Model(b)) => {
                match (a.as_adapter(), b.as_adapter()) {
                    (Some(x), Some(y)) => {
                        a.type_name() == b.type_name()
                            && std::ptr::eq(x.adapted_value(), y.adapted_value())
                    }
                    _ => Rc::ptr_eq(a, b),
                }
            }
            _ => false,
        }
    }
}

impl From<bool> for TemplateValue<'_> {
    fn from(b: bool) -> Self {
        TemplateValue::Boolean(b)
    }
}

impl From<usize> for TemplateValue<'_> {
    fn from(n: usize) -> Self {
        TemplateValue::Number(Number::from(n))
    }
}

impl From<String> for TemplateValue<'_> {
    fn from(s: String) -> Self {
        TemplateValue::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a str> for TemplateValue<'a> {
    fn from(s: &'a str) -> Self {
        TemplateValue::Text(Cow::Borrowed(s))
    }
}
