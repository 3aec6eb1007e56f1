//! Capability traits.
//!
//! A template engine never asks what concrete type a value has. It asks
//! whether the value can act as a sequence, a hash, a method, and so on, and
//! then calls only that capability. Models opt in by overriding the matching
//! query on [`TemplateModel`].

use crate::error::ModelError;
use crate::value::TemplateValue;
use serde_json::Value;

/// Iterator type handed out by [`TemplateCollection::iter`].
pub type ItemIter<'s, 'a> = Box<dyn Iterator<Item = Result<TemplateValue<'a>, ModelError>> + 's>;

/// A value exposing one or more capabilities to the engine.
pub trait TemplateModel<'a> {
    /// Short name used in diagnostics, e.g. `"json array"`.
    fn type_name(&self) -> &'static str;

    fn as_sequence(&self) -> Option<&dyn TemplateSequence<'a>> {
        None
    }

    fn as_hash(&self) -> Option<&dyn TemplateHash<'a>> {
        None
    }

    fn as_adapter(&self) -> Option<&dyn AdapterModel<'a>> {
        None
    }

    fn as_method(&self) -> Option<&dyn TemplateMethod<'a>> {
        None
    }

    fn as_collection(&self) -> Option<&dyn TemplateCollection<'a>> {
        None
    }
}

/// Indexed access: `items[0]`, `items?size`.
pub trait TemplateSequence<'a> {
    fn size(&self) -> Result<usize, ModelError>;

    fn get(&self, index: usize) -> Result<TemplateValue<'a>, ModelError>;
}

/// Named access: `user.name`, `user["name"]`.
pub trait TemplateHash<'a> {
    fn get(&self, key: &str) -> Result<TemplateValue<'a>, ModelError>;

    fn is_empty(&self) -> Result<bool, ModelError>;
}

/// Exposes the raw JSON node behind a model for interop.
pub trait AdapterModel<'a> {
    fn adapted_value(&self) -> &'a Value;
}

/// A callable value: `items.iterator()`.
pub trait TemplateMethod<'a> {
    fn call(&self, args: &[TemplateValue<'a>]) -> Result<TemplateValue<'a>, ModelError>;
}

/// Something that can be listed with `#list`.
///
/// Every call to [`iter`](TemplateCollection::iter) starts over from the
/// first element.
pub trait TemplateCollection<'a> {
    fn iter(&self) -> ItemIter<'_, 'a>;
}
