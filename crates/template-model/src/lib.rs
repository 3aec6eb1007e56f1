//! Template object model.
//!
//! A template engine sees data through capabilities rather than concrete
//! types: a value may be indexable ([`TemplateSequence`]), support named
//! lookup ([`TemplateHash`]), be callable ([`TemplateMethod`]), be listable
//! ([`TemplateCollection`]) or expose the raw JSON node it adapts
//! ([`AdapterModel`]). Host values are turned into [`TemplateValue`]s by an
//! [`ObjectWrapper`]; [`DefaultObjectWrapper`] is the engine's fallback.
//!
//! # Example
//!
//! ```
//! use template_model::{AccessPath, DefaultObjectWrapper, ObjectWrapper, Raw, SimpleHash, TemplateValue};
//! use serde_json::json;
//!
//! let title = json!("Report");
//! let scope = TemplateValue::model(
//!     SimpleHash::new().with("title", DefaultObjectWrapper.wrap(Raw::Json(&title)).unwrap()),
//! );
//!
//! let value = AccessPath::parse("title").unwrap().resolve(&scope).unwrap();
//! // The default wrapper keeps JSON strings opaque, so they render as JSON text.
//! assert_eq!(value.render().unwrap(), "\"Report\"");
//! ```

pub mod access;
pub mod error;
pub mod hash;
pub mod model;
pub mod value;
pub mod wrapper;

pub use access::{items, AccessPath, PathError, Step};
pub use error::ModelError;
pub use hash::SimpleHash;
pub use model::{
    AdapterModel, ItemIter, TemplateCollection, TemplateHash, TemplateMethod, TemplateModel,
    TemplateSequence,
};
pub use value::TemplateValue;
pub use wrapper::{DefaultObjectWrapper, ObjectWrapper, Raw};
