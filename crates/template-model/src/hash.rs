use crate::error::ModelError;
use crate::model::{TemplateHash, TemplateModel};
use crate::value::TemplateValue;
use std::collections::BTreeMap;

/// A hash of already wrapped values, used for top-level bindings.
///
/// Missing keys read as [`TemplateValue::Null`].
#[derive(Debug, Clone, Default)]
pub struct SimpleHash<'a> {
    entries: BTreeMap<String, TemplateValue<'a>>,
}

impl<'a> SimpleHash<'a> {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: TemplateValue<'a>) {
        self.entries.insert(key.into(), value);
    }

    pub fn with(mut self, key: impl Into<String>, value: TemplateValue<'a>) -> Self {
        self.insert(key, value);
        self
    }
}

impl<'a> TemplateModel<'a> for SimpleHash<'a> {
    fn type_name(&self) -> &'static str {
        "hash"
    }

    fn as_hash(&self) -> Option<&dyn TemplateHash<'a>> {
        Some(self)
    }
}

impl<'a> TemplateHash<'a> for SimpleHash<'a> {
    fn get(&self, key: &str) -> Result<TemplateValue<'a>, ModelError> {
        Ok(self.entries.get(key).cloned().unwrap_or(TemplateValue::Null))
    }

    fn is_empty(&self) -> Result<bool, ModelError> {
        Ok(self.entries.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_hash_lookup() {
        let hash = SimpleHash::new().with("greeting", TemplateValue::from("hello"));
        assert_eq!(TemplateHash::get(&hash, "greeting").unwrap(), TemplateValue::from("hello"));
        assert_eq!(TemplateHash::get(&hash, "missing").unwrap(), TemplateValue::Null);
        assert!(!TemplateHash::is_empty(&hash).unwrap());
    }

    #[test]
    fn test_insert_replaces_binding() {
        let mut hash = SimpleHash::new().with("root", TemplateValue::from("old"));
        hash.insert("root", TemplateValue::from(true));
        assert_eq!(TemplateHash::get(&hash, "root").unwrap(), TemplateValue::Boolean(true));
    }

    #[test]
    fn test_empty_hash() {
        let hash = SimpleHash::new();
        assert!(TemplateHash::is_empty(&hash).unwrap());
    }
}
