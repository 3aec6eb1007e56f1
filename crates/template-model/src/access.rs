//! Access paths: `root.items[0].name`, `root.pairs.y`, `root.items.iterator()`.
//!
//! This is not a template language. It is the smallest driver that asks a
//! value for its capabilities in the same order an interpolation would, which
//! makes it useful for probing a data model from the command line and in
//! tests.

use crate::error::ModelError;
use crate::value::TemplateValue;
use thiserror::Error;

/// One step of an access path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `.name` or `["name"]`
    Key(String),
    /// `[3]`
    Index(usize),
    /// `()`
    Call,
    /// `?size`
    Size,
    /// `?is_empty`
    IsEmpty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid access path at {position}: {message}")]
pub struct PathError {
    pub position: usize,
    pub message: String,
}

impl PathError {
    fn new(position: usize, message: impl Into<String>) -> Self {
        Self { position, message: message.into() }
    }
}

/// A parsed access path. The first step is always a [`Step::Key`] looked up
/// in the scope the path is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPath {
    pub steps: Vec<Step>,
}

impl AccessPath {
    pub fn parse(src: &str) -> Result<Self, PathError> {
        Parser { src, pos: 0 }.parse()
    }

    /// Resolves the path against `scope`, which must have the hash
    /// capability.
    pub fn resolve<'a>(&self, scope: &TemplateValue<'a>) -> Result<TemplateValue<'a>, ModelError> {
        let mut current = scope.clone();
        for step in &self.steps {
            current = apply(&current, step)?;
        }
        Ok(current)
    }
}

fn apply<'a>(value: &TemplateValue<'a>, step: &Step) -> Result<TemplateValue<'a>, ModelError> {
    if value.is_null() {
        return Err(ModelError::NullValue);
    }
    let kind = value.kind();
    let model = value.as_model();
    match step {
        Step::Key(key) => model
            .and_then(|m| m.as_hash())
            .ok_or(ModelError::NotAHash { kind })?
            .get(key),
        Step::Index(index) => model
            .and_then(|m| m.as_sequence())
            .ok_or(ModelError::NotASequence { kind })?
            .get(*index),
        Step::Call => model
            .and_then(|m| m.as_method())
            .ok_or(ModelError::NotCallable { kind })?
            .call(&[]),
        Step::Size => {
            let size = model
                .and_then(|m| m.as_sequence())
                .ok_or(ModelError::NotASequence { kind })?
                .size()?;
            Ok(TemplateValue::from(size))
        }
        Step::IsEmpty => {
            let empty = model
                .and_then(|m| m.as_hash())
                .ok_or(ModelError::NotAHash { kind })?
                .is_empty()?;
            Ok(TemplateValue::from(empty))
        }
    }
}

/// Lists the elements of a value, the way `#list` would.
///
/// Collections are preferred; values that are only sequences are walked by
/// index.
pub fn items<'a>(value: &TemplateValue<'a>) -> Result<Vec<TemplateValue<'a>>, ModelError> {
    let kind = value.kind();
    let model = value.as_model().ok_or(ModelError::NotASequence { kind })?;
    if let Some(collection) = model.as_collection() {
        return collection.iter().collect();
    }
    let seq = model.as_sequence().ok_or(ModelError::NotASequence { kind })?;
    (0..seq.size()?).map(|i| seq.get(i)).collect()
}

struct Parser<'s> {
    src: &'s str,
    pos: usize,
}

impl Parser<'_> {
    fn parse(mut self) -> Result<AccessPath, PathError> {
        let mut steps = vec![Step::Key(self.ident()?)];
        while let Some(c) = self.peek() {
            match c {
                '.' => {
                    self.pos += 1;
                    steps.push(Step::Key(self.ident()?));
                }
                '[' => {
                    self.pos += 1;
                    steps.push(self.bracket()?);
                }
                '(' => {
                    self.pos += 1;
                    self.expect(')')?;
                    steps.push(Step::Call);
                }
                '?' => {
                    self.pos += 1;
                    let start = self.pos;
                    match self.ident()?.as_str() {
                        "size" => steps.push(Step::Size),
                        "is_empty" => steps.push(Step::IsEmpty),
                        other => {
                            return Err(PathError::new(start, format!("unknown built-in ?{other}")))
                        }
                    }
                }
                other => return Err(PathError::new(self.pos, format!("unexpected '{other}'"))),
            }
        }
        Ok(AccessPath { steps })
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn expect(&mut self, want: char) -> Result<(), PathError> {
        match self.peek() {
            Some(c) if c == want => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(PathError::new(self.pos, format!("expected '{want}', found '{c}'"))),
            None => Err(PathError::new(self.pos, format!("expected '{want}'"))),
        }
    }

    fn ident(&mut self) -> Result<String, PathError> {
        let rest = &self.src[self.pos..];
        let len = rest
            .char_indices()
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '$'))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(PathError::new(self.pos, "expected a name"));
        }
        self.pos += len;
        Ok(rest[..len].to_string())
    }

    fn bracket(&mut self) -> Result<Step, PathError> {
        let step = match self.peek() {
            Some('"') => {
                self.pos += 1;
                let rest = &self.src[self.pos..];
                let end = rest
                    .find('"')
                    .ok_or_else(|| PathError::new(self.pos, "unterminated string"))?;
                let key = rest[..end].to_string();
                self.pos += end + 1;
                Step::Key(key)
            }
            Some(c) if c.is_ascii_digit() => {
                let rest = &self.src[self.pos..];
                let len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
                let index = rest[..len]
                    .parse()
                    .map_err(|_| PathError::new(self.pos, "index is too large"))?;
                self.pos += len;
                Step::Index(index)
            }
            _ => return Err(PathError::new(self.pos, "expected an index or a quoted key")),
        };
        self.expect(']')?;
        Ok(step)
    }
}
