use crate::wrapper::JsonNodeWrapper;
use serde_json::Value;
use template_model::{ModelError, ObjectWrapper, Raw, SimpleHash, TemplateValue};

/// Name the document is bound to in the top-level scope.
pub const ROOT_BINDING: &str = "root";

/// Builds the top-level scope for a render: `{ root: <document> }`.
pub fn data_model<'a>(wrapper: &JsonNodeWrapper, root: &'a Value) -> Result<TemplateValue<'a>, ModelError> {
    let root = wrapper.wrap(Raw::Json(root))?;
    Ok(TemplateValue::model(SimpleHash::new().with(ROOT_BINDING, root)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_is_bound() {
        let doc = json!({"title": "t"});
        let scope = data_model(&JsonNodeWrapper::new(), &doc).unwrap();
        let hash = scope.as_model().unwrap().as_hash().unwrap();
        assert_eq!(hash.get(ROOT_BINDING).unwrap().kind(), "json object");
        assert_eq!(hash.get("other").unwrap(), TemplateValue::Null);
    }

    #[test]
    fn test_scalar_root() {
        let doc = json!(12);
        let scope = data_model(&JsonNodeWrapper::new(), &doc).unwrap();
        let hash = scope.as_model().unwrap().as_hash().unwrap();
        assert_eq!(hash.get(ROOT_BINDING).unwrap().render().unwrap(), "12");
    }
}
