//! `lmt_router` decoder

use contracts::{DecodeOutcome, MetricFields};

use crate::FieldCursor;

/// `router_name;pct_cpu;pct_mem;bytes`
pub fn decode_router_v1(payload: &str) -> DecodeOutcome {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = MetricFields::new();
    cursor.push_text(&mut fields, "router_name")?;
    cursor.push_float(&mut fields, "pct_cpu")?;
    cursor.push_float(&mut fields, "pct_mem")?;
    cursor.push_count(&mut fields, "bytes")?;
    Ok(fields)
}
