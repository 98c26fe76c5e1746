//! `lmt_mdt` decoder

use contracts::{DecodeOutcome, FieldValue, MetricFields};

use crate::FieldCursor;

const MDT_TARGET_FIELDS: usize = 5;

/// `mds_name;pct_cpu;pct_mem` then one group per MDT:
/// `mdt_name;inodes_free;inodes_total;kbytes_free;kbytes_total`
pub fn decode_mdt_v1(payload: &str) -> DecodeOutcome {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = MetricFields::new();
    cursor.push_text(&mut fields, "mds_name")?;
    cursor.push_float(&mut fields, "pct_cpu")?;
    cursor.push_float(&mut fields, "pct_mem")?;

    let targets = cursor.groups("mdt", MDT_TARGET_FIELDS, |c| {
        let mut target = MetricFields::new();
        c.push_text(&mut target, "mdt_name")?;
        c.push_count(&mut target, "inodes_free")?;
        c.push_count(&mut target, "inodes_total")?;
        c.push_count(&mut target, "kbytes_free")?;
        c.push_count(&mut target, "kbytes_total")?;
        Ok(target)
    })?;
    fields.push("targets", FieldValue::Group(targets));
    Ok(fields)
}
