//! Decoder contract - Decoder Registry interface
//!
//! A decoder turns one record payload into a structured field set, or fails
//! with an optional human-readable reason. The dispatcher never looks inside
//! the field set.

use serde::Serialize;

/// A single decoded value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Float(f64),
    Count(u64),
    /// Repeated sub-records (per-target groups, per-operation groups)
    Group(Vec<MetricFields>),
}

/// Ordered field set produced by a decoder
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricFields {
    fields: Vec<(&'static str, FieldValue)>,
}

impl MetricFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping wire order
    pub fn push(&mut self, name: &'static str, value: FieldValue) {
        self.fields.push((name, value));
    }

    /// Builder-style variant of [`push`](Self::push)
    pub fn with(mut self, name: &'static str, value: FieldValue) -> Self {
        self.push(name, value);
        self
    }

    /// First field with the given name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }
}

/// Decoder failure.
///
/// A missing reason tells the caller to fall back to the current system
/// error description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    reason: Option<String>,
}

impl DecodeFailure {
    /// Failure with a decoder-supplied reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    /// Failure that defers to errno
    pub fn without_reason() -> Self {
        Self { reason: None }
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

/// Result of one decode call
pub type DecodeOutcome = Result<MetricFields, DecodeFailure>;

/// Parse function for one `(name, version)` pair
///
/// Receives the record payload (the raw value with its version field removed).
pub trait Decoder: Send + Sync {
    fn decode(&self, payload: &str) -> DecodeOutcome;
}

impl<F> Decoder for F
where
    F: Fn(&str) -> DecodeOutcome + Send + Sync,
{
    fn decode(&self, payload: &str) -> DecodeOutcome {
        self(payload)
    }
}
