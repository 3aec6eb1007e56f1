use thiserror::Error;

/// Errors raised while a template engine drives the object model.
///
/// The first four variants are raised by data-model adapters; the rest are
/// raised by the engine side when a value lacks the capability template
/// syntax asks for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("not a sequence: {kind}")]
    NotASequence { kind: &'static str },

    #[error("index {index} is out of range for a sequence of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("{key} is not a known element of this array node")]
    UnknownKey { key: String },

    #[error("adapter fault: {0}")]
    AdapterFault(String),

    #[error("not a hash: {kind}")]
    NotAHash { kind: &'static str },

    #[error("not callable: {kind}")]
    NotCallable { kind: &'static str },

    #[error("value is null or missing")]
    NullValue,

    #[error("cannot render as text: {kind}")]
    NotAScalar { kind: &'static str },
}
