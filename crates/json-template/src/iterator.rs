//! The `iterator` pseudo-field of array nodes.

use crate::adapter::JsonNodeAdapter;
use serde_json::Value;
use template_model::{
    AdapterModel, ItemIter, ModelError, TemplateCollection, TemplateMethod, TemplateModel,
    TemplateValue,
};

/// Zero-argument method returned for `array.iterator`. Arguments are
/// ignored.
#[derive(Debug, Clone)]
pub struct IteratorMethod<'a> {
    owner: JsonNodeAdapter<'a>,
    elements: &'a [Value],
}

impl<'a> IteratorMethod<'a> {
    pub(crate) fn new(owner: JsonNodeAdapter<'a>, elements: &'a [Value]) -> Self {
        Self { owner, elements }
    }
}

impl<'a> TemplateModel<'a> for IteratorMethod<'a> {
    fn type_name(&self) -> &'static str {
        "method"
    }

    fn as_method(&self) -> Option<&dyn TemplateMethod<'a>> {
        Some(self)
    }
}

impl<'a> TemplateMethod<'a> for IteratorMethod<'a> {
    fn call(&self, args: &[TemplateValue<'a>]) -> Result<TemplateValue<'a>, ModelError> {
        tracing::debug!(elements = self.elements.len(), ignored_args = args.len(), "iterator()");
        Ok(TemplateValue::model(ElementIter {
            owner: self.owner.clone(),
            elements: self.elements,
        }))
    }
}

/// The elements of an array node, wrapped one at a time as they are
/// listed. Listing again starts from the first element.
#[derive(Debug, Clone)]
pub struct ElementIter<'a> {
    owner: JsonNodeAdapter<'a>,
    elements: &'a [Value],
}

impl<'a> TemplateModel<'a> for ElementIter<'a> {
    fn type_name(&self) -> &'static str {
        "iterator"
    }

    fn as_collection(&self) -> Option<&dyn TemplateCollection<'a>> {
        Some(self)
    }

    fn as_adapter(&self) -> Option<&dyn AdapterModel<'a>> {
        Some(self)
    }
}

impl<'a> TemplateCollection<'a> for ElementIter<'a> {
    fn iter(&self) -> ItemIter<'_, 'a> {
        Box::new(self.elements.iter().map(move |element| self.owner.wrap_child(element)))
    }
}

impl<'a> AdapterModel<'a> for ElementIter<'a> {
    fn adapted_value(&self) -> &'a Value {
        self.owner.node()
    }
}
