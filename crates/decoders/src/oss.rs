//! Legacy `lmt_oss` decoder

use contracts::{DecodeOutcome, MetricFields};

use crate::FieldCursor;

/// `oss_name;pct_cpu;pct_mem`
pub fn decode_oss_v1(payload: &str) -> DecodeOutcome {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = MetricFields::new();
    cursor.push_text(&mut fields, "oss_name")?;
    cursor.push_float(&mut fields, "pct_cpu")?;
    cursor.push_float(&mut fields, "pct_mem")?;
    Ok(fields)
}
