//! DecoderRegistry - fixed lookup table keyed by `(name, version)`

use std::collections::HashMap;
use std::fmt;

use contracts::{Decoder, MetricKey};

/// Maps `(metric name, integer version)` to a decoder
#[derive(Default)]
pub struct DecoderRegistry {
    decoders: HashMap<MetricKey, Box<dyn Decoder>>,
}

impl DecoderRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in LMT decoders
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, version, decode) in decoders::BUILTIN {
            registry.register(*name, *version, *decode);
        }
        registry
    }

    /// Register a decoder, returning the one it replaces
    pub fn register(
        &mut self,
        name: impl Into<String>,
        version: i64,
        decoder: impl Decoder + 'static,
    ) -> Option<Box<dyn Decoder>> {
        self.decoders
            .insert(MetricKey::new(name, version), Box::new(decoder))
    }

    pub fn get(&self, key: &MetricKey) -> Option<&dyn Decoder> {
        self.decoders.get(key).map(|decoder| decoder.as_ref())
    }

    pub fn contains(&self, key: &MetricKey) -> bool {
        self.decoders.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<&MetricKey> {
        let mut keys: Vec<_> = self.decoders.keys().collect();
        keys.sort();
        keys
    }
}

impl fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}
