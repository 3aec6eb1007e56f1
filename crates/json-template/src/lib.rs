//! serde_json trees as template data models.
//!
//! A parsed JSON document has objects and arrays, while a template engine
//! expects sequences, hashes and scalars. [`JsonNodeWrapper`] is the object
//! wrapper the engine consults whenever it meets a raw value: JSON objects
//! and arrays become [`JsonNodeAdapter`]s, everything else goes to the
//! engine's fallback wrapper. Adapters wrap the children they hand out
//! through the same wrapper, so nested data works at any depth.
//!
//! Arrays of `{"name": .., "value": ..}` objects can also be read like a
//! hash keyed by name, and every array answers to an `iterator` method for
//! older templates.
//!
//! # Example
//!
//! ```
//! use json_template::{data_model, JsonNodeWrapper};
//! use serde_json::json;
//! use template_model::AccessPath;
//!
//! let doc = json!({
//!     "items": [1, 2, 3],
//!     "valuePair": [
//!         {"name": "x", "value": "foo"},
//!         {"name": "y", "value": "bar"}
//!     ]
//! });
//!
//! let wrapper = JsonNodeWrapper::new();
//! let scope = data_model(&wrapper, &doc).unwrap();
//! let render = |path: &str| {
//!     AccessPath::parse(path).unwrap().resolve(&scope).unwrap().render().unwrap()
//! };
//!
//! assert_eq!(render("root.items[1]"), "2");
//! assert_eq!(render("root.valuePair.y"), "\"bar\"");
//!
//! // String leaves can drop their JSON quotes, even mid-render.
//! wrapper.set_include_quotes(false);
//! assert_eq!(render("root.valuePair.y"), "bar");
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod iterator;
pub mod quote;
pub mod root;
pub mod wrapper;

pub use adapter::{find_name_value, JsonNodeAdapter, ITERATOR_KEY};
pub use cli::{probe, CliError};
pub use config::WrapperConfig;
pub use iterator::{ElementIter, IteratorMethod};
pub use quote::QuotePolicy;
pub use root::{data_model, ROOT_BINDING};
pub use wrapper::JsonNodeWrapper;
