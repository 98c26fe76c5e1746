//! FieldCursor - sequential reader over `;`-delimited payload fields

use contracts::{DecodeFailure, FieldValue, MetricFields};

/// Reads payload fields in order, producing named decode failures
#[derive(Debug, Clone)]
pub struct FieldCursor<'a> {
    fields: Vec<&'a str>,
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    /// Split a payload; one trailing `;` is allowed
    pub fn new(payload: &'a str) -> Self {
        let trimmed = payload.strip_suffix(';').unwrap_or(payload);
        let fields = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split(';').collect()
        };
        Self { fields, pos: 0 }
    }

    /// Fields not yet consumed
    pub fn remaining(&self) -> usize {
        self.fields.len() - self.pos
    }

    fn next_raw(&mut self, name: &str) -> Result<&'a str, DecodeFailure> {
        let raw = self
            .fields
            .get(self.pos)
            .ok_or_else(|| DecodeFailure::new(format!("missing field {name}")))?;
        self.pos += 1;
        Ok(raw.trim())
    }

    /// Non-empty text field
    pub fn text(&mut self, name: &str) -> Result<String, DecodeFailure> {
        let raw = self.next_raw(name)?;
        if raw.is_empty() {
            return Err(DecodeFailure::new(format!("empty field {name}")));
        }
        Ok(raw.to_string())
    }

    /// Finite floating-point field
    pub fn float(&mut self, name: &str) -> Result<f64, DecodeFailure> {
        let raw = self.next_raw(name)?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DecodeFailure::new(format!("invalid {name}: {raw:?}")))
    }

    /// Unsigned 64-bit counter field
    pub fn count(&mut self, name: &str) -> Result<u64, DecodeFailure> {
        let raw = self.next_raw(name)?;
        raw.parse::<u64>()
            .map_err(|_| DecodeFailure::new(format!("invalid {name}: {raw:?}")))
    }

    /// Read `text` into `fields` under the same name
    pub fn push_text(
        &mut self,
        fields: &mut MetricFields,
        name: &'static str,
    ) -> Result<(), DecodeFailure> {
        let value = self.text(name)?;
        fields.push(name, FieldValue::Text(value));
        Ok(())
    }

    pub fn push_float(
        &mut self,
        fields: &mut MetricFields,
        name: &'static str,
    ) -> Result<(), DecodeFailure> {
        let value = self.float(name)?;
        fields.push(name, FieldValue::Float(value));
        Ok(())
    }

    pub fn push_count(
        &mut self,
        fields: &mut MetricFields,
        name: &'static str,
    ) -> Result<(), DecodeFailure> {
        let value = self.count(name)?;
        fields.push(name, FieldValue::Count(value));
        Ok(())
    }

    /// Consume the rest of the payload as fixed-size groups
    ///
    /// A partial trailing group is a failure.
    pub fn groups<F>(
        &mut self,
        what: &str,
        size: usize,
        mut decode: F,
    ) -> Result<Vec<MetricFields>, DecodeFailure>
    where
        F: FnMut(&mut Self) -> Result<MetricFields, DecodeFailure>,
    {
        let mut groups = Vec::with_capacity(self.remaining() / size.max(1));
        while self.remaining() > 0 {
            if self.remaining() < size {
                return Err(DecodeFailure::new(format!(
                    "truncated {what} group: {} of {size} fields",
                    self.remaining()
                )));
            }
            groups.push(decode(self)?);
        }
        Ok(groups)
    }
}
